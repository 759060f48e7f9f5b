//! Repository for the `projects` collection.

use bson::{doc, Bson};
use futures::TryStreamExt;

use hyperadmin_core::models::Project;

use super::{clamp_limit, clamp_offset};
use crate::Store;

/// Read operations over projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List projects, most recently created first.
    pub async fn list(
        store: &Store,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Project>, mongodb::error::Error> {
        store
            .projects()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .limit(clamp_limit(limit))
            .skip(clamp_offset(offset))
            .await?
            .try_collect()
            .await
    }

    /// All projects owned by a user (string-form id), newest first.
    pub async fn list_for_user(
        store: &Store,
        user_id: &str,
    ) -> Result<Vec<Project>, mongodb::error::Error> {
        store
            .projects()
            .find(doc! { "userId": user_id })
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await
    }

    /// Number of projects owned by a user.
    pub async fn count_for_user(
        store: &Store,
        user_id: &str,
    ) -> Result<u64, mongodb::error::Error> {
        store
            .projects()
            .count_documents(doc! { "userId": user_id })
            .await
    }

    /// Distinct project ids owned by a user, in string form.
    ///
    /// Used by the roster listing to count workflows without fetching the
    /// project documents themselves.
    pub async fn distinct_ids_for_user(
        store: &Store,
        user_id: &str,
    ) -> Result<Vec<String>, mongodb::error::Error> {
        let ids = store
            .projects()
            .distinct("_id", doc! { "userId": user_id })
            .await?;
        Ok(ids.iter().map(id_string).collect())
    }
}

/// String form of a distinct `_id` value, matching how foreign keys are
/// stored.
fn id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
