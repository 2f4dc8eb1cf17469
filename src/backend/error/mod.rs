//! Backend Error Module
//!
//! This module defines the error taxonomy used by HTTP handlers and the
//! read-modify-write coordinator. Every error maps to exactly one HTTP
//! status code and a JSON `{"error": message}` body.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations (IntoResponse)
//! ```
//!
//! # Error Types
//!
//! - `ApiError` - Request-level errors (validation, lookup, access, store)
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, so handlers return it
//! directly and the boundary conversion is automatic. No error is retried
//! and none crashes the process.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
