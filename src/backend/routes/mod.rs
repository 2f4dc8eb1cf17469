//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation (API + static + fallback)
//! └── api_routes.rs - API endpoint registration (public and admin groups)
//! ```
//!
//! # Route Organization
//!
//! 1. **Public API routes** - collection reads, signup, login
//! 2. **Admin API routes** - mutations and statistics, behind the gate
//! 3. **Static assets** - the `public/` directory and the two HTML pages
//! 4. **Fallback** - 404 for everything else

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
