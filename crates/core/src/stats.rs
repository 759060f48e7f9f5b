//! Cross-collection dashboard statistics.
//!
//! Value types only; the storage crate fills them in with one fresh scan
//! per request. Every averaged ratio is defined as 0 when the parent set
//! is empty, so an empty store renders as zeros rather than an error.

use serde::Serialize;

/// Summary counters for the dashboard home view, one block per collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseStats {
    pub users: UserStats,
    pub projects: ProjectStats,
    pub workflows: WorkflowStats,
    pub schedules: ScheduleStats,
    pub runs: RunStats,
}

/// Counters over the `users` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: u64,
    pub with_wallet: u64,
    pub with_hyperliquid: u64,
    /// Users touched within the last 24 hours.
    pub recently_active: u64,
}

/// Counters over the `projects` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: u64,
    /// Projects that own at least one workflow.
    pub with_workflows: u64,
    pub avg_workflows_per_project: f64,
}

/// Counters over the `workflows` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStats {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    pub avg_nodes_per_workflow: f64,
}

/// Counters over the `workflow_schedules` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    pub total: u64,
    pub active: u64,
    pub running: u64,
    /// Active, due in the past, and not currently being evaluated.
    pub overdue: u64,
}

/// Counters over the `workflow_runs` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    pub total: u64,
    pub success: u64,
    pub error: u64,
    pub running: u64,
    /// Runs started within the last 24 hours.
    #[serde(rename = "last24h")]
    pub last_24h: u64,
}
