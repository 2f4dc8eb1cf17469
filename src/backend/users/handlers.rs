/**
 * User Management Handlers
 *
 * Admin-only HTTP handlers for the `users` collection.
 *
 * # Endpoints
 *
 * - `GET    /users`      - list with search and optional paging, passwords stripped
 * - `PUT    /users/{id}` - username/role patch; renames re-check uniqueness
 * - `DELETE /users/{id}` - removal; accounts with the `admin` role are protected
 */

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::collections::{
    delete_by_id, exists_username, filter_substring, find_by_id, paginate, update_by_id,
    ListQuery,
};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::store::document::Role;
use crate::backend::users::types::{
    UserActionResponse, UserDeleteResponse, UserListResponse, UserPatch,
};

/// List accounts (admin), passwords stripped
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let filtered = state
        .coordinator
        .read(|doc| filter_substring(&doc.users, query.needle()))
        .await?;

    if query.is_paged() {
        let (page, limit) = query.page_params();
        let page = paginate(&filtered, page, limit);
        Ok(Json(UserListResponse {
            users: page.items.iter().map(UserResponse::from).collect(),
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        })
        .into_response())
    } else {
        let users: Vec<UserResponse> = filtered.iter().map(UserResponse::from).collect();
        Ok(Json(users).into_response())
    }
}

/// Patch an account's username and/or role (admin)
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<UserActionResponse>, ApiError> {
    tracing::info!("Updating user: {}", id);

    let new_username = match patch.username.as_deref().map(str::trim) {
        Some("") => return Err(ApiError::validation("Username must not be empty")),
        other => other.map(str::to_string),
    };

    let user = state
        .coordinator
        .mutate(move |doc| {
            if find_by_id(&doc.users, &id).is_none() {
                return Err(ApiError::not_found(format!("User {id} not found")));
            }

            if let Some(username) = &new_username {
                if exists_username(&doc.users, username, Some(&id)) {
                    tracing::warn!("Rename rejected, username already exists: {}", username);
                    return Err(ApiError::conflict("Username already exists"));
                }
            }

            update_by_id(&mut doc.users, &id, |user| {
                if let Some(username) = new_username {
                    user.username = username;
                }
                if let Some(role) = patch.role {
                    user.role = role;
                }
            })
            .ok_or_else(|| ApiError::not_found(format!("User {id} not found")))
        })
        .await?;

    Ok(Json(UserActionResponse {
        success: true,
        user: UserResponse::from(&user),
    }))
}

/// Delete an account (admin); admin-role accounts are protected
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserDeleteResponse>, ApiError> {
    tracing::info!("Deleting user: {}", id);

    state
        .coordinator
        .mutate(move |doc| {
            let user = find_by_id(&doc.users, &id)
                .ok_or_else(|| ApiError::not_found(format!("User {id} not found")))?;

            if user.role == Role::Admin {
                tracing::warn!("Refusing to delete admin user: {}", user.username);
                return Err(ApiError::forbidden("Cannot delete an admin user"));
            }

            delete_by_id(&mut doc.users, &id)
                .ok_or_else(|| ApiError::not_found(format!("User {id} not found")))?;
            Ok(())
        })
        .await?;

    Ok(Json(UserDeleteResponse {
        success: true,
        message: "User deleted".to_string(),
    }))
}
