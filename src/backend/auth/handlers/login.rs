/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Load the shared document
 * 2. Find the account whose username and password both match exactly
 * 3. Return the account with the password stripped, or 401
 *
 * # Notes
 *
 * Credentials are compared verbatim against the stored values; unknown
 * username and wrong password return the same 401 so callers learn nothing
 * about which half failed. Login performs no mutation and is always
 * reachable regardless of the admin gate.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, CredentialsRequest};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - No account matches the presented credentials
/// * `500 Internal Server Error` - Remote store failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for username: {}", request.username);

    let user = state
        .coordinator
        .read(|doc| {
            doc.users
                .iter()
                .find(|user| {
                    user.username == request.username && user.password == request.password
                })
                .cloned()
        })
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for username: {}", request.username);
            ApiError::unauthorized("Invalid username or password")
        })?;

    tracing::info!("User logged in: {} ({})", user.username, user.id);

    Ok(Json(AuthResponse {
        success: true,
        user: user.into(),
    }))
}
