//! Store Module
//!
//! Everything that touches the shared remote document: the in-memory record
//! model, the JSONBin-style store client, and the read-modify-write
//! coordinator that every endpoint funnels through.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs         - Module exports and documentation
//! ├── document.rs    - Document and record types
//! ├── client.rs      - Remote document store client (full GET / full PUT)
//! └── coordinator.rs - Load → mutate → save orchestration
//! ```
//!
//! # Persistence Contract
//!
//! The remote store has no partial-update capability. Every mutation is a
//! fresh full-document load, one collection operation, and a full-document
//! save. Two mutations that interleave their loads race; the second save
//! wins (see `coordinator` for the exact semantics and the test pinning
//! them).

/// Document and record types
pub mod document;

/// Remote document store client
pub mod client;

/// Read-modify-write coordination
pub mod coordinator;

// Re-export commonly used types
pub use client::{DocumentStore, JsonBinClient, StoreError};
pub use coordinator::Coordinator;
pub use document::{CodeSnippet, Document, Project, Role, User};
