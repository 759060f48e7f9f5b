//! Project documents from the `projects` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DocId, Timestamp};

/// A project document. Belongs to exactly one user via `userId` (string
/// form of the owner's id).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: DocId,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// API-facing project shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        ProjectResponse {
            id: project.id.to_string(),
            user_id: project.user_id,
            name: project.name,
            description: project.description,
            created_at: project.created_at.to_chrono(),
            updated_at: project.updated_at.map(|t| t.to_chrono()),
        }
    }
}
