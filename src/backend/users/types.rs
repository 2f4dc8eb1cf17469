/**
 * User Management Types
 *
 * Request and response types for the admin user-management endpoints. All
 * responses use the password-stripped `UserResponse` from the auth module.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::store::document::Role;

/// Patch for an existing account; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UserPatch {
    /// New username; must stay unique across all accounts
    pub username: Option<String>,
    /// New role
    pub role: Option<Role>,
}

/// Response for user update
#[derive(Debug, Serialize)]
pub struct UserActionResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// Response for user delete
#[derive(Debug, Serialize)]
pub struct UserDeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Paged list envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}
