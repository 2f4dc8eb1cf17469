/**
 * Project Handler Types
 *
 * Request and response types for the project CRUD endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;
use crate::backend::store::document::Project;

/// Payload for creating or replacing a project
///
/// The same shape serves POST and PUT; `title` and `description` are
/// required either way.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    /// Project title
    pub title: String,
    /// Project description; the legacy `desc` key is accepted
    #[serde(alias = "desc")]
    pub description: String,
    /// Preview image URL
    pub image_url: Option<String>,
    /// Deployed site URL
    pub live_url: Option<String>,
    /// Repository URL
    pub github_url: Option<String>,
    /// Free-form tag list
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectPayload {
    /// Reject empty required fields before any store round trip
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(ApiError::validation("Title and description are required"));
        }
        Ok(())
    }
}

/// Response for project create and update
#[derive(Debug, Serialize)]
pub struct ProjectActionResponse {
    /// Always `true`; failures surface as error responses instead
    pub success: bool,
    /// The created or updated project
    pub project: Project,
}

/// Response for project delete
#[derive(Debug, Serialize)]
pub struct ProjectDeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Paged list envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}
