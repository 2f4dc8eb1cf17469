//! Users Module
//!
//! Admin-only management handlers for the `users` collection: listing,
//! patching username/role, and deletion. Signup and login live in `auth`;
//! everything here sits behind the admin gate. Accounts with the `admin`
//! role are protected from deletion.

/// Request/response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{delete_user, list_users, update_user};
