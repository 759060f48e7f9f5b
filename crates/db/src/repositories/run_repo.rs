//! Repository for the `workflow_runs` collection.

use bson::doc;
use futures::TryStreamExt;

use hyperadmin_core::models::WorkflowRun;

use super::{clamp_limit, clamp_offset};
use crate::Store;

/// Cap on the run sample fetched for a single user's rollup. The
/// per-workflow execution counters are the authoritative totals; the
/// sample only feeds success/failure counts and the activity timestamp.
pub const USER_RUNS_CAP: i64 = 100;

/// Read operations over runs.
pub struct RunRepo;

impl RunRepo {
    /// List runs, most recently started first.
    pub async fn list(
        store: &Store,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<WorkflowRun>, mongodb::error::Error> {
        store
            .runs()
            .find(doc! {})
            .sort(doc! { "startedAt": -1 })
            .limit(clamp_limit(limit))
            .skip(clamp_offset(offset))
            .await?
            .try_collect()
            .await
    }

    /// The user's most recently started runs, capped at [`USER_RUNS_CAP`].
    pub async fn list_recent_for_user(
        store: &Store,
        user_id: &str,
    ) -> Result<Vec<WorkflowRun>, mongodb::error::Error> {
        store
            .runs()
            .find(doc! { "userId": user_id })
            .sort(doc! { "startedAt": -1 })
            .limit(USER_RUNS_CAP)
            .await?
            .try_collect()
            .await
    }

    /// Number of runs recorded for a user (uncapped).
    pub async fn count_for_user(
        store: &Store,
        user_id: &str,
    ) -> Result<u64, mongodb::error::Error> {
        store.runs().count_documents(doc! { "userId": user_id }).await
    }
}
