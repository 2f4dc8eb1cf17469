//! Authentication Module
//!
//! This module handles the admin access gate and the credential-exchange
//! endpoints (signup, login). There are no tokens and no sessions: admin
//! access is a shared-secret header compared against the configured value,
//! and login simply returns the matching stored account.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── gate.rs         - Shared-secret admin gate
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Access Model
//!
//! - **Public**: project/code reads, `/signup`, `/login`. The login path is
//!   always reachable; the gate never sits in front of the credential
//!   exchange itself.
//! - **Admin**: every user-collection mutation, project/code
//!   mutations, and the statistics endpoint, all gated on the
//!   `x-admin-key` header.

/// Shared-secret admin gate
pub mod gate;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use gate::{Access, AdminGate, ADMIN_KEY_HEADER};
pub use handlers::types::{CredentialsRequest, UserResponse};
pub use handlers::{login, signup};
