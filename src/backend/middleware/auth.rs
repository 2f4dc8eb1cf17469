/**
 * Admin Gate Middleware
 *
 * Middleware for routes that require the shared admin secret. It reads the
 * `x-admin-key` header, asks the gate to classify it, and rejects with a
 * JSON 401 before the handler (and therefore before any store round trip)
 * when the gate denies.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::gate::{Access, ADMIN_KEY_HEADER};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Admin gate middleware
///
/// Applied with `axum::middleware::from_fn_with_state` as a `route_layer`
/// on the admin route groups, so unmatched paths still 404 rather than 401.
pub async fn admin_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header_value = request
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match state.gate.authorize(header_value) {
        Access::Authorized => Ok(next.run(request).await),
        Access::Denied => {
            tracing::warn!(
                "Admin gate denied {} {}",
                request.method(),
                request.uri().path()
            );
            Err(ApiError::unauthorized("Admin access required"))
        }
    }
}
