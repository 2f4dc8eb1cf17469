/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate that username and password are non-empty
 * 2. Load the shared document and check username uniqueness
 * 3. Append the new account (signup order is preserved)
 * 4. Save the document and return the created account
 *
 * # Notes
 *
 * The password is stored exactly as received; this deployment performs no
 * hashing. Responses never include the stored password.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, CredentialsRequest};
use crate::backend::collections::{exists_username, insert_back};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::store::document::{Role, User};

/// Sign up handler
///
/// Creates a new `user`-role account. Signup is public and always reachable
/// regardless of the admin gate.
///
/// # Errors
///
/// * `400 Bad Request` - Empty username or password, or username taken
/// * `500 Internal Server Error` - Remote store failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let username = request.username.trim().to_string();
    tracing::info!("Signup request for username: {}", username);

    if username.is_empty() || request.password.is_empty() {
        tracing::warn!("Signup rejected: missing username or password");
        return Err(ApiError::validation("Username and password are required"));
    }

    let user = state
        .coordinator
        .mutate(move |doc| {
            if exists_username(&doc.users, &username, None) {
                tracing::warn!("Signup rejected: username already exists: {}", username);
                return Err(ApiError::conflict("Username already exists"));
            }

            let user = User::new(username, request.password, Role::User);
            insert_back(&mut doc.users, user.clone());
            Ok(user)
        })
        .await?;

    tracing::info!("User created: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            user: user.into(),
        }),
    ))
}
