//! Authentication Handlers
//!
//! HTTP handlers for the credential-exchange endpoints. Both are public by
//! design; the admin gate never blocks the path that exchanges credentials.

/// Request/response types
pub mod types;

/// User registration handler
pub mod signup;

/// User authentication handler
pub mod login;

// Re-export handlers
pub use login::login;
pub use signup::signup;
