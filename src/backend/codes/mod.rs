//! Codes Module
//!
//! CRUD handlers for the `codes` collection of shared snippets. Reads are
//! public. Whether creating a snippet requires the admin key is a
//! deployment policy (`CODES_REQUIRE_ADMIN`); update and delete always
//! require it.

/// Request/response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_code, delete_code, list_codes, update_code};
