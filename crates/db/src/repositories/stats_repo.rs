//! Cross-collection statistics aggregation for the dashboard home view.

use bson::{doc, Bson, DateTime, Document};
use chrono::Utc;
use futures::TryStreamExt;

use hyperadmin_core::stats::{
    DatabaseStats, ProjectStats, RunStats, ScheduleStats, UserStats, WorkflowStats,
};

use crate::Store;

/// The "recently active" window for users and runs.
const ACTIVITY_WINDOW_HOURS: i64 = 24;

/// Computes [`DatabaseStats`] with a fresh scan of all five collections.
pub struct StatsRepo;

impl StatsRepo {
    /// Aggregate the full dashboard counter set.
    ///
    /// Re-queries every collection on each call; there is no cache. Any
    /// failed read fails the whole aggregation, since the home view has
    /// no partial rendering.
    pub async fn database_stats(store: &Store) -> Result<DatabaseStats, mongodb::error::Error> {
        let window_start = DateTime::from_chrono(
            Utc::now() - chrono::Duration::hours(ACTIVITY_WINDOW_HOURS),
        );
        let now = DateTime::now();

        // -- users ----------------------------------------------------------
        let users = store.users();
        let user_stats = UserStats {
            total: users.count_documents(doc! {}).await?,
            with_wallet: users
                .count_documents(doc! {
                    "walletAddress": { "$exists": true, "$ne": Bson::Null }
                })
                .await?,
            with_hyperliquid: users
                .count_documents(doc! { "hyperliquidAccount.exists": true })
                .await?,
            recently_active: users
                .count_documents(doc! { "updatedAt": { "$gte": window_start } })
                .await?,
        };

        // -- projects -------------------------------------------------------
        let with_workflows = store.workflows().distinct("projectId", doc! {}).await?;
        let project_stats = ProjectStats {
            total: store.projects().count_documents(doc! {}).await?,
            with_workflows: with_workflows.len() as u64,
            avg_workflows_per_project: Self::avg_workflows_per_project(store).await?,
        };

        // -- workflows ------------------------------------------------------
        let workflows = store.workflows();
        let total_workflows = workflows.count_documents(doc! {}).await?;
        let active_workflows = workflows.count_documents(doc! { "isActive": true }).await?;
        let workflow_stats = WorkflowStats {
            total: total_workflows,
            active: active_workflows,
            inactive: total_workflows.saturating_sub(active_workflows),
            avg_nodes_per_workflow: Self::avg_nodes_per_workflow(store).await?,
        };

        // -- schedules ------------------------------------------------------
        let schedules = store.schedules();
        let schedule_stats = ScheduleStats {
            total: schedules.count_documents(doc! {}).await?,
            active: schedules.count_documents(doc! { "isActive": true }).await?,
            running: schedules.count_documents(doc! { "running": true }).await?,
            overdue: schedules
                .count_documents(doc! {
                    "isActive": true,
                    "nextRunAt": { "$lt": now },
                    "running": { "$ne": true },
                })
                .await?,
        };

        // -- runs -----------------------------------------------------------
        let runs = store.runs();
        let run_stats = RunStats {
            total: runs.count_documents(doc! {}).await?,
            success: runs.count_documents(doc! { "status": "success" }).await?,
            error: runs.count_documents(doc! { "status": "error" }).await?,
            running: runs.count_documents(doc! { "status": "running" }).await?,
            last_24h: runs
                .count_documents(doc! { "startedAt": { "$gte": window_start } })
                .await?,
        };

        Ok(DatabaseStats {
            users: user_stats,
            projects: project_stats,
            workflows: workflow_stats,
            schedules: schedule_stats,
            runs: run_stats,
        })
    }

    /// Group workflows by project, count each group, average the counts.
    async fn avg_workflows_per_project(store: &Store) -> Result<f64, mongodb::error::Error> {
        let pipeline = vec![
            doc! { "$group": { "_id": "$projectId", "count": { "$sum": 1 } } },
            doc! { "$group": { "_id": Bson::Null, "avg": { "$avg": "$count" } } },
        ];
        let rows: Vec<Document> = store
            .workflows()
            .aggregate(pipeline)
            .await?
            .try_collect()
            .await?;
        Ok(first_avg(&rows))
    }

    /// Average node-list length across all workflows.
    async fn avg_nodes_per_workflow(store: &Store) -> Result<f64, mongodb::error::Error> {
        let pipeline = vec![
            doc! { "$project": { "nodeCount": { "$size": { "$ifNull": ["$nodes", []] } } } },
            doc! { "$group": { "_id": Bson::Null, "avg": { "$avg": "$nodeCount" } } },
        ];
        let rows: Vec<Document> = store
            .workflows()
            .aggregate(pipeline)
            .await?
            .try_collect()
            .await?;
        Ok(first_avg(&rows))
    }
}

/// The `avg` value from a two-stage group pipeline's single output row.
///
/// An empty parent set produces no rows at all; that is defined as 0, so
/// the ratio never divides by zero and never turns into NaN.
fn first_avg(rows: &[Document]) -> f64 {
    rows.first()
        .and_then(|row| as_f64(row.get("avg")))
        .unwrap_or(0.0)
}

fn as_f64(value: Option<&Bson>) -> Option<f64> {
    match value {
        Some(Bson::Double(v)) => Some(*v),
        Some(Bson::Int32(v)) => Some(f64::from(*v)),
        Some(Bson::Int64(v)) => Some(*v as f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pipeline_output_averages_to_zero() {
        assert_eq!(first_avg(&[]), 0.0);
    }

    #[test]
    fn missing_or_null_avg_is_zero() {
        assert_eq!(first_avg(&[doc! { "_id": Bson::Null }]), 0.0);
        assert_eq!(first_avg(&[doc! { "avg": Bson::Null }]), 0.0);
    }

    #[test]
    fn numeric_avg_variants_are_read() {
        assert_eq!(first_avg(&[doc! { "avg": 2.5 }]), 2.5);
        assert_eq!(first_avg(&[doc! { "avg": 3_i32 }]), 3.0);
        assert_eq!(first_avg(&[doc! { "avg": 4_i64 }]), 4.0);
    }
}
