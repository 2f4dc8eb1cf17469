//! Server Module
//!
//! This module contains the pieces that turn configuration into a running
//! Axum application: the explicit configuration value, the shared
//! application state, and the app assembly function.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - AppConfig loaded from the environment at startup
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - App assembly (client → coordinator → router)
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration** - `AppConfig::from_env` reads the bin id, master
//!    key, admin secret, and policy flags; missing required values fail
//!    startup.
//! 2. **State creation** - the store client, coordinator, and gate are
//!    constructed once from the configuration and shared via `AppState`.
//! 3. **Router creation** - all routes and the gate middleware are wired.

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use init::create_app;
pub use state::AppState;
