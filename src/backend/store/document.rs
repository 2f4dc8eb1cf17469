/**
 * Document and Record Types
 *
 * The in-memory representation of the remote JSON document: one `Document`
 * holding three ordered collections. The document is the sole owner of all
 * records; there are no cross-collection references.
 *
 * # Wire Format
 *
 * Field names serialize in camelCase to match the document produced by
 * earlier deployments (`imageUrl`, `createdAt`, ...). A collection missing
 * from a stored revision deserializes to an empty sequence, and the legacy
 * `desc` key is accepted for project descriptions.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::collections::{Record, Searchable};

/// Generate a record id: the current time in milliseconds as a decimal string
///
/// Ids are unique in practice because record creation is rare relative to
/// millisecond resolution; they also sort in creation order.
pub fn next_record_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// The single unit of persistence
///
/// Always read and written in full; the remote store does not support
/// partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Portfolio projects, most-recent-first
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Shared code snippets, most-recent-first
    #[serde(default)]
    pub codes: Vec<CodeSnippet>,
    /// User accounts, in signup order
    #[serde(default)]
    pub users: Vec<User>,
}

/// A portfolio project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique id, assigned at creation
    pub id: String,
    /// Project title (non-empty)
    pub title: String,
    /// Project description (non-empty); older revisions stored this as `desc`
    #[serde(alias = "desc")]
    pub description: String,
    /// Preview image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Deployed site URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Free-form tag list, may be empty
    #[serde(default)]
    pub tags: Vec<String>,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Set on every modification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Build a new project with a fresh id and creation timestamp
    pub fn new(
        title: String,
        description: String,
        image_url: Option<String>,
        live_url: Option<String>,
        github_url: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: next_record_id(),
            title,
            description,
            image_url,
            live_url,
            github_url,
            tags,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// A shared code snippet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    /// Unique id, assigned at creation
    pub id: String,
    /// Snippet title (non-empty)
    pub title: String,
    /// Snippet body (non-empty)
    pub code: String,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Set on every modification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CodeSnippet {
    /// Build a new snippet with a fresh id and creation timestamp
    pub fn new(title: String, code: String) -> Self {
        Self {
            id: next_record_id(),
            title,
            code,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Account role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account
    #[default]
    User,
    /// Protected administrator account; cannot be deleted
    Admin,
}

/// A user account
///
/// The password is an opaque string stored exactly as received; there is no
/// hashing in this system, by design of the deployment it replaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique id, assigned at signup
    pub id: String,
    /// Unique username
    pub username: String,
    /// Opaque credential, compared verbatim at login
    pub password: String,
    /// Account role, `user` unless the stored document says otherwise
    #[serde(default)]
    pub role: Role,
    /// Set once at signup
    pub created_at: DateTime<Utc>,
    /// Set on every modification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a new account with a fresh id and creation timestamp
    pub fn new(username: String, password: String, role: Role) -> Self {
        Self {
            id: next_record_id(),
            username,
            password,
            role,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Record for CodeSnippet {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Searchable for Project {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Searchable for CodeSnippet {
    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.code.as_str()]
    }
}

impl Searchable for User {
    fn search_text(&self) -> Vec<&str> {
        vec![self.username.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_defaults_missing_collections() {
        // Older revisions of the stored document only carried projects/codes
        let doc: Document =
            serde_json::from_str(r#"{"projects": [], "codes": []}"#).expect("deserialize");
        assert!(doc.users.is_empty());

        let doc: Document = serde_json::from_str("{}").expect("deserialize");
        assert!(doc.projects.is_empty() && doc.codes.is_empty() && doc.users.is_empty());
    }

    #[test]
    fn test_project_wire_names_are_camel_case() {
        let project = Project::new(
            "Site".to_string(),
            "My site".to_string(),
            Some("https://img".to_string()),
            None,
            None,
            vec![],
        );
        let value = serde_json::to_value(&project).expect("serialize");

        assert!(value.get("imageUrl").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("image_url").is_none());
        // Absent optionals stay off the wire
        assert!(value.get("liveUrl").is_none());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn test_project_accepts_legacy_desc_key() {
        let json = r#"{
            "id": "1700000000000",
            "title": "Old",
            "desc": "stored by a previous revision",
            "createdAt": "2023-11-14T22:13:20Z"
        }"#;
        let project: Project = serde_json::from_str(json).expect("deserialize");
        assert_eq!(project.description, "stored by a previous revision");
    }

    #[test]
    fn test_user_role_defaults_to_user() {
        let json = r#"{
            "id": "1",
            "username": "alice",
            "password": "pw",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).expect("deserialize");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    }

    #[test]
    fn test_next_record_id_is_decimal_millis() {
        let id = next_record_id();
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert!(id.len() >= 13);
    }
}
