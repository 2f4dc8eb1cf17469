/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The read-modify-write coordinator over the remote store client
 * - The admin gate
 * - The snippet-creation policy flag
 *
 * # Thread Safety
 *
 * Note what is NOT here: no document, no collections, no caches. Every
 * request loads its own copy of the remote document through the
 * coordinator, so the state is cheap to clone and free of in-process
 * synchronization around document data.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::gate::AdminGate;
use crate::backend::store::client::JsonBinClient;
use crate::backend::store::coordinator::Coordinator;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-modify-write coordinator over the remote document store
    pub coordinator: Arc<Coordinator<JsonBinClient>>,

    /// Shared-secret admin gate
    pub gate: AdminGate,

    /// Whether `POST /codes` requires the admin key (deployment policy)
    pub protect_code_posts: bool,
}

/// Allow handlers to extract the coordinator directly
impl FromRef<AppState> for Arc<Coordinator<JsonBinClient>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.coordinator.clone()
    }
}

/// Allow handlers and middleware to extract the gate directly
impl FromRef<AppState> for AdminGate {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gate.clone()
    }
}
