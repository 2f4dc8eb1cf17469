/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup and login handlers, plus
 * the password-stripped user representation every user-returning endpoint
 * uses.
 */

use serde::{Deserialize, Serialize};

use crate::backend::store::document::{Role, User};

/// Credentials for signup and login
#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialsRequest {
    /// Unique username
    pub username: String,
    /// Opaque password, compared verbatim
    pub password: String,
}

/// User representation with the password stripped
///
/// Every endpoint that returns a user returns this shape; the stored
/// `password` field never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user id
    pub id: String,
    /// Username
    pub username: String,
    /// Account role
    pub role: Role,
    /// Signup timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Response for signup and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Always `true`; failures surface as error responses instead
    pub success: bool,
    /// The stored account, password stripped
    pub user: UserResponse,
}
