/**
 * Server Initialization
 *
 * This module assembles the Axum application from an `AppConfig`: store
 * client, coordinator, admin gate, shared state, and the router.
 *
 * # Initialization Process
 *
 * 1. Create the remote store client from the configured bin id and key
 * 2. Wrap it in the read-modify-write coordinator
 * 3. Create the admin gate from the configured secret
 * 4. Assemble `AppState` and the router
 *
 * No connection is opened here; the store is contacted lazily, one full
 * document round trip per request.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::gate::AdminGate;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::client::JsonBinClient;
use crate::backend::store::coordinator::Coordinator;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Explicit configuration loaded at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing binfolio backend server");

    // Step 1: Remote store client for the configured bin
    let client = JsonBinClient::new(&config.store_base_url, &config.bin_id, config.master_key);

    // Step 2: Every endpoint funnels through the coordinator
    let coordinator = Arc::new(Coordinator::new(client));

    // Step 3: Admin gate around the configured shared secret
    let gate = AdminGate::new(config.admin_key);

    let app_state = AppState {
        coordinator,
        gate,
        protect_code_posts: config.protect_code_posts,
    };

    tracing::info!(
        "Store client and gate initialized (codes POST admin-gated: {})",
        app_state.protect_code_posts
    );

    // Step 4: Router with all routes and middleware
    create_router(app_state)
}
