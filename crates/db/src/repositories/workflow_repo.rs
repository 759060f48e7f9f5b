//! Repository for the `workflows` collection.

use bson::doc;
use futures::TryStreamExt;

use hyperadmin_core::models::Workflow;
use hyperadmin_core::types::DocId;

use super::{clamp_limit, clamp_offset};
use crate::Store;

/// Read operations over workflows.
pub struct WorkflowRepo;

impl WorkflowRepo {
    /// List workflows, most recently created first.
    pub async fn list(
        store: &Store,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Workflow>, mongodb::error::Error> {
        store
            .workflows()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .limit(clamp_limit(limit))
            .skip(clamp_offset(offset))
            .await?
            .try_collect()
            .await
    }

    /// Look up a workflow under either id encoding (canonical first, raw
    /// string second).
    pub async fn find_by_id(
        store: &Store,
        id: &str,
    ) -> Result<Option<Workflow>, mongodb::error::Error> {
        let workflows = store.workflows();
        if let Some(oid) = DocId::parse(id).as_object_id() {
            if let Some(workflow) = workflows.find_one(doc! { "_id": oid }).await? {
                return Ok(Some(workflow));
            }
        }
        workflows.find_one(doc! { "_id": id }).await
    }

    /// All workflows belonging to any of the given projects, newest first.
    ///
    /// An empty id set matches nothing and is not an error.
    pub async fn list_for_projects(
        store: &Store,
        project_ids: &[String],
    ) -> Result<Vec<Workflow>, mongodb::error::Error> {
        store
            .workflows()
            .find(doc! { "projectId": { "$in": project_ids } })
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await
    }

    /// Number of workflows across the given projects.
    pub async fn count_for_projects(
        store: &Store,
        project_ids: &[String],
    ) -> Result<u64, mongodb::error::Error> {
        store
            .workflows()
            .count_documents(doc! { "projectId": { "$in": project_ids } })
            .await
    }
}
