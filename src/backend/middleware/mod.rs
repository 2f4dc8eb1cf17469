//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently a single concern:
//! enforcing the admin gate on protected route groups.

pub mod auth;

pub use auth::admin_middleware;
