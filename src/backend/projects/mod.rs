//! Projects Module
//!
//! CRUD handlers for the `projects` collection. Reads are public; all
//! mutations sit behind the admin gate. New projects are prepended so the
//! collection stays most-recent-first.

/// Request/response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_project, delete_project, list_projects, update_project};
