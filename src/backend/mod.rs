//! Backend Module
//!
//! This module contains all server-side code for the Binfolio application:
//! an Axum HTTP server whose only persistence is a single remote JSON
//! document fetched and overwritten in full on every mutation.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server configuration, application state, app assembly
//! - **`store`** - Document model, remote store client, RMW coordinator
//! - **`collections`** - Pure operations over record sequences
//! - **`auth`** - Admin gate and signup/login handlers
//! - **`projects`** / **`codes`** / **`users`** - Per-collection handlers
//! - **`stats`** - Admin statistics endpoint
//! - **`routes`** - Route configuration and router assembly
//! - **`middleware`** - Admin-gate middleware
//! - **`error`** - API error types and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Config, state, initialization
//! ├── store/          - Document model, client, coordinator
//! ├── collections/    - Pure collection operations
//! ├── auth/           - Admin gate, signup/login
//! ├── projects/       - Project CRUD handlers
//! ├── codes/          - Code snippet CRUD handlers
//! ├── users/          - User management handlers
//! ├── stats/          - Admin statistics
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Every request runs independently: access-gate decision, then a fresh
//! full-document load from the remote store, one collection operation, and
//! (for mutations) a full-document save. No document state is shared between
//! in-flight requests; the remote document itself is the only shared
//! resource and it is deliberately unprotected (last writer wins).

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Document model, remote store client, and RMW coordinator
pub mod store;

/// Pure operations over record sequences
pub mod collections;

/// Backend error types
pub mod error;

/// Admin gate and authentication handlers
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Project CRUD handlers
pub mod projects;

/// Code snippet CRUD handlers
pub mod codes;

/// User management handlers
pub mod users;

/// Admin statistics handlers
pub mod stats;

// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
pub use store::{Document, DocumentStore};
