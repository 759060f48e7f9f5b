//! Repository for the `workflow_schedules` collection.

use bson::doc;
use futures::TryStreamExt;

use hyperadmin_core::models::WorkflowSchedule;

use super::{clamp_limit, clamp_offset};
use crate::Store;

/// Read operations over schedules.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// List schedules, soonest `nextRunAt` first.
    pub async fn list(
        store: &Store,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<WorkflowSchedule>, mongodb::error::Error> {
        store
            .schedules()
            .find(doc! {})
            .sort(doc! { "nextRunAt": 1 })
            .limit(clamp_limit(limit))
            .skip(clamp_offset(offset))
            .await?
            .try_collect()
            .await
    }

    /// All schedules belonging to a user, soonest `nextRunAt` first.
    ///
    /// Filtered by `userId` directly rather than through the workflow
    /// chain; schedules carry their owner's id.
    pub async fn list_for_user(
        store: &Store,
        user_id: &str,
    ) -> Result<Vec<WorkflowSchedule>, mongodb::error::Error> {
        store
            .schedules()
            .find(doc! { "userId": user_id })
            .sort(doc! { "nextRunAt": 1 })
            .await?
            .try_collect()
            .await
    }
}
