/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * API routes, static asset serving, and the fallback handler into a single
 * Axum router.
 *
 * # Route Order
 *
 * 1. API routes (public group, then gate-wrapped admin group)
 * 2. The two HTML page routes the deployment serves directly
 * 3. Static files under `/static`
 * 4. Fallback handler (404)
 */

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (coordinator, gate, policy flags)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // API routes
    let router = configure_api_routes(router, &app_state);

    // HTML pages and static assets
    let router = router
        .route_service(
            "/projects.html",
            ServeFile::new("public/projects.html"),
        )
        .route_service(
            "/admin-share-projects.html",
            ServeFile::new("public/admin-share-projects.html"),
        )
        .nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
