/**
 * Code Snippet Handler Types
 *
 * Request and response types for the code snippet endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;
use crate::backend::store::document::CodeSnippet;

/// Payload for creating or replacing a snippet
#[derive(Debug, Deserialize)]
pub struct CodePayload {
    /// Snippet title
    pub title: String,
    /// Snippet body
    pub code: String,
}

impl CodePayload {
    /// Reject empty required fields before any store round trip
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() || self.code.trim().is_empty() {
            return Err(ApiError::validation("Title and code are required"));
        }
        Ok(())
    }
}

/// Response for snippet creation
///
/// Creation returns the whole mutated collection; that is the contract the
/// original frontend depends on to refresh its list in one round trip.
#[derive(Debug, Serialize)]
pub struct CodesCollectionResponse {
    pub success: bool,
    pub codes: Vec<CodeSnippet>,
}

/// Response for snippet update
#[derive(Debug, Serialize)]
pub struct CodeActionResponse {
    pub success: bool,
    pub code: CodeSnippet,
}

/// Response for snippet delete
#[derive(Debug, Serialize)]
pub struct CodeDeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Paged list envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeListResponse {
    pub codes: Vec<CodeSnippet>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_fields() {
        let payload = CodePayload {
            title: String::new(),
            code: "fn main() {}".to_string(),
        };
        assert!(payload.validate().is_err());

        let payload = CodePayload {
            title: "hello".to_string(),
            code: "   ".to_string(),
        };
        assert!(payload.validate().is_err());
    }
}
