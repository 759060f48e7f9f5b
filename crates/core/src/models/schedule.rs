//! Schedule documents from the `workflow_schedules` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DocId, Timestamp};

/// A cron-driven trigger record for a workflow, evaluated by an external
/// scheduler. The `running` / `runningSince` markers are set by that
/// scheduler for the duration of an evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSchedule {
    #[serde(rename = "_id")]
    pub id: DocId,
    pub workflow_id: String,
    pub project_id: String,
    pub user_id: String,
    pub cron_expression: String,
    pub is_active: bool,
    pub next_run_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_since: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_evaluated_at: Option<Timestamp>,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// API-facing schedule shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: String,
    pub workflow_id: String,
    pub project_id: String,
    pub user_id: String,
    pub cron_expression: String,
    pub is_active: bool,
    pub next_run_at: DateTime<Utc>,
    pub running: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<WorkflowSchedule> for ScheduleResponse {
    fn from(schedule: WorkflowSchedule) -> Self {
        ScheduleResponse {
            id: schedule.id.to_string(),
            workflow_id: schedule.workflow_id,
            project_id: schedule.project_id,
            user_id: schedule.user_id,
            cron_expression: schedule.cron_expression,
            is_active: schedule.is_active,
            next_run_at: schedule.next_run_at.to_chrono(),
            running: schedule.running.unwrap_or(false),
            running_since: schedule.running_since.map(|t| t.to_chrono()),
            last_evaluated_at: schedule.last_evaluated_at.map(|t| t.to_chrono()),
            created_at: schedule.created_at.to_chrono(),
            updated_at: schedule.updated_at.map(|t| t.to_chrono()),
        }
    }
}
