//! Derived per-user rollup statistics.
//!
//! Pure folds over entities already fetched for one user; the repository
//! layer owns the fetch chain (projects, then workflows by project id,
//! then schedules/runs by user id).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::project::Project;
use crate::models::run::{RunStatus, WorkflowRun};
use crate::models::schedule::WorkflowSchedule;
use crate::models::user::User;
use crate::models::workflow::Workflow;
use crate::types::Timestamp;

/// Derived counters for one user's owned entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupStats {
    pub total_projects: u64,
    pub total_workflows: u64,
    pub active_workflows: u64,
    /// Sum of the per-workflow execution counters maintained by the
    /// executor. Independent of the fetched run sample, which is capped
    /// upstream; the two may diverge.
    pub total_executions: i64,
    pub successful_executions: u64,
    pub failed_executions: u64,
    pub active_schedules: u64,
    /// Latest touch across the user and everything they own. `None` when
    /// no contributing timestamp is present.
    pub last_activity: Option<Timestamp>,
}

/// API-facing rollup counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupStatsResponse {
    pub total_projects: u64,
    pub total_workflows: u64,
    pub active_workflows: u64,
    pub total_executions: i64,
    pub successful_executions: u64,
    pub failed_executions: u64,
    pub active_schedules: u64,
    /// Serialized as `null` when no activity was ever recorded.
    pub last_activity: Option<DateTime<Utc>>,
}

impl From<RollupStats> for RollupStatsResponse {
    fn from(stats: RollupStats) -> Self {
        RollupStatsResponse {
            total_projects: stats.total_projects,
            total_workflows: stats.total_workflows,
            active_workflows: stats.active_workflows,
            total_executions: stats.total_executions,
            successful_executions: stats.successful_executions,
            failed_executions: stats.failed_executions,
            active_schedules: stats.active_schedules,
            last_activity: stats.last_activity.map(|t| t.to_chrono()),
        }
    }
}

/// Fold a user's fetched entities into [`RollupStats`].
///
/// Success/failure counts come from the run sample alone; active schedules
/// count the activity flag alone, regardless of `nextRunAt`.
pub fn derive_stats(
    user: &User,
    projects: &[Project],
    workflows: &[Workflow],
    schedules: &[WorkflowSchedule],
    runs: &[WorkflowRun],
) -> RollupStats {
    let active_workflows = workflows.iter().filter(|w| w.is_active).count() as u64;
    let total_executions = workflows.iter().map(|w| w.total_executions).sum();
    let successful_executions = runs
        .iter()
        .filter(|r| r.status == RunStatus::Success)
        .count() as u64;
    let failed_executions = runs
        .iter()
        .filter(|r| r.status == RunStatus::Error)
        .count() as u64;
    let active_schedules = schedules.iter().filter(|s| s.is_active).count() as u64;

    // Absent timestamps simply do not contribute; an untouched account
    // yields None, never "now".
    let last_activity = user
        .updated_at
        .into_iter()
        .chain(projects.iter().filter_map(|p| p.updated_at))
        .chain(workflows.iter().filter_map(|w| w.updated_at))
        .chain(workflows.iter().filter_map(|w| w.last_executed_at))
        .chain(runs.iter().map(|r| r.started_at))
        .max();

    RollupStats {
        total_projects: projects.len() as u64,
        total_workflows: workflows.len() as u64,
        active_workflows,
        total_executions,
        successful_executions,
        failed_executions,
        active_schedules,
        last_activity,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::run::{RunMode, TriggerSource};
    use crate::types::DocId;

    fn ts(millis: i64) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    fn user(updated_at: Option<Timestamp>) -> User {
        User {
            id: DocId::Raw("user-1".to_string()),
            privy_id: "privy-1".to_string(),
            username: None,
            email: None,
            wallet_address: None,
            hyperliquid_account: None,
            created_at: ts(0),
            updated_at,
        }
    }

    fn project(updated_at: Option<Timestamp>) -> Project {
        Project {
            id: DocId::Raw("proj-1".to_string()),
            user_id: "user-1".to_string(),
            name: "p".to_string(),
            description: String::new(),
            created_at: ts(0),
            updated_at,
        }
    }

    fn workflow(
        is_active: bool,
        total_executions: i64,
        updated_at: Option<Timestamp>,
        last_executed_at: Option<Timestamp>,
    ) -> Workflow {
        Workflow {
            id: DocId::Raw("wf-1".to_string()),
            project_id: "proj-1".to_string(),
            name: None,
            description: None,
            nodes: vec![],
            edges: vec![],
            is_active,
            last_executed_at,
            last_execution_status: None,
            last_execution_error: None,
            total_executions,
            created_at: ts(0),
            updated_at,
        }
    }

    fn schedule(is_active: bool) -> WorkflowSchedule {
        WorkflowSchedule {
            id: DocId::Raw("sched-1".to_string()),
            workflow_id: "wf-1".to_string(),
            project_id: "proj-1".to_string(),
            user_id: "user-1".to_string(),
            cron_expression: "*/5 * * * *".to_string(),
            is_active,
            next_run_at: ts(0),
            running: None,
            running_since: None,
            last_evaluated_at: None,
            created_at: ts(0),
            updated_at: None,
        }
    }

    fn run(status: RunStatus, started_at: Timestamp) -> WorkflowRun {
        WorkflowRun {
            id: DocId::Raw("run-1".to_string()),
            workflow_id: "wf-1".to_string(),
            project_id: "proj-1".to_string(),
            user_id: "user-1".to_string(),
            mode: RunMode::Prod,
            trigger_source: TriggerSource::Cron,
            status,
            started_at,
            finished_at: None,
            error: None,
            logs: vec![],
            truncated: None,
        }
    }

    // -- Empty inputs -------------------------------------------------------

    #[test]
    fn zero_projects_yields_zero_counters() {
        let u = user(None);
        let stats = derive_stats(&u, &[], &[], &[], &[]);
        assert_eq!(stats.total_projects, 0);
        assert_eq!(stats.total_workflows, 0);
        assert_eq!(stats.active_workflows, 0);
        assert_eq!(stats.total_executions, 0);
        assert_eq!(stats.successful_executions, 0);
        assert_eq!(stats.failed_executions, 0);
        assert_eq!(stats.active_schedules, 0);
        assert_eq!(stats.last_activity, None);
    }

    // -- Counters -----------------------------------------------------------

    #[test]
    fn counts_active_and_inactive_workflows() {
        let u = user(None);
        let workflows = vec![
            workflow(true, 3, None, None),
            workflow(false, 4, None, None),
            workflow(true, 0, None, None),
        ];
        let stats = derive_stats(&u, &[project(None)], &workflows, &[], &[]);
        assert_eq!(stats.total_workflows, 3);
        assert_eq!(stats.active_workflows, 2);
        assert_eq!(stats.total_executions, 7);
    }

    #[test]
    fn execution_counter_and_run_sample_diverge() {
        // A capped sample: 2 successes + 1 failure on record, while the
        // workflow counter says 250 executions happened overall.
        let u = user(None);
        let workflows = vec![workflow(true, 250, None, None)];
        let runs = vec![
            run(RunStatus::Success, ts(1)),
            run(RunStatus::Success, ts(2)),
            run(RunStatus::Error, ts(3)),
            run(RunStatus::Running, ts(4)),
        ];
        let stats = derive_stats(&u, &[project(None)], &workflows, &[], &runs);
        assert_eq!(stats.total_executions, 250);
        assert_eq!(stats.successful_executions, 2);
        assert_eq!(stats.failed_executions, 1);
        assert_ne!(
            stats.total_executions,
            (stats.successful_executions + stats.failed_executions) as i64
        );
    }

    #[test]
    fn schedules_count_the_flag_only() {
        let u = user(None);
        let schedules = vec![schedule(true), schedule(false), schedule(true)];
        let stats = derive_stats(&u, &[], &[], &schedules, &[]);
        assert_eq!(stats.active_schedules, 2);
    }

    // -- Last activity ------------------------------------------------------

    #[test]
    fn last_activity_is_max_across_all_sources() {
        let u = user(Some(ts(100)));
        let projects = vec![project(Some(ts(500)))];
        let workflows = vec![workflow(true, 0, Some(ts(300)), Some(ts(900)))];
        let runs = vec![run(RunStatus::Success, ts(700))];
        let stats = derive_stats(&u, &projects, &workflows, &[], &runs);
        assert_eq!(stats.last_activity, Some(ts(900)));
    }

    #[test]
    fn last_activity_from_user_alone() {
        let u = user(Some(ts(42)));
        let projects = vec![project(None)];
        let workflows = vec![workflow(true, 0, None, None)];
        let stats = derive_stats(&u, &projects, &workflows, &[], &[]);
        assert_eq!(stats.last_activity, Some(ts(42)));
    }

    #[test]
    fn last_activity_absent_everywhere_is_none() {
        let u = user(None);
        let projects = vec![project(None)];
        let workflows = vec![workflow(false, 0, None, None)];
        let stats = derive_stats(&u, &projects, &workflows, &[], &[]);
        assert_eq!(stats.last_activity, None);
    }
}
