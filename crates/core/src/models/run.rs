//! Run documents from the `workflow_runs` collection: one recorded
//! execution attempt per document, with an ordered log.

use bson::Bson;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DocId, Timestamp};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Execution mode for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Prod,
    Test,
}

/// What fired the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerSource {
    Cron,
    Click,
    Manual,
}

/// Run state. Also used for a workflow's `lastExecutionStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Success,
    Error,
}

/// Severity of a single log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One recorded execution attempt of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRun {
    #[serde(rename = "_id")]
    pub id: DocId,
    pub workflow_id: String,
    pub project_id: String,
    pub user_id: String,
    pub mode: RunMode,
    pub trigger_source: TriggerSource,
    pub status: RunStatus,
    pub started_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub logs: Vec<RunLogEntry>,
    /// Set by the executor when the log was cut off at its size cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

/// One ordered log line captured during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunLogEntry {
    pub ts: Timestamp,
    pub level: LogLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bson>,
}

// ---------------------------------------------------------------------------
// API-facing shape
// ---------------------------------------------------------------------------

/// API-facing run shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub id: String,
    pub workflow_id: String,
    pub project_id: String,
    pub user_id: String,
    pub mode: RunMode,
    pub trigger_source: TriggerSource,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub logs: Vec<RunLogResponse>,
    pub truncated: bool,
}

/// API-facing log line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunLogResponse {
    pub ts: DateTime<Utc>,
    pub level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    pub message: String,
}

impl From<WorkflowRun> for RunResponse {
    fn from(run: WorkflowRun) -> Self {
        RunResponse {
            id: run.id.to_string(),
            workflow_id: run.workflow_id,
            project_id: run.project_id,
            user_id: run.user_id,
            mode: run.mode,
            trigger_source: run.trigger_source,
            status: run.status,
            started_at: run.started_at.to_chrono(),
            finished_at: run.finished_at.map(|t| t.to_chrono()),
            error: run.error,
            logs: run.logs.into_iter().map(RunLogResponse::from).collect(),
            truncated: run.truncated.unwrap_or(false),
        }
    }
}

impl From<RunLogEntry> for RunLogResponse {
    fn from(entry: RunLogEntry) -> Self {
        RunLogResponse {
            ts: entry.ts.to_chrono(),
            level: entry.level,
            node_id: entry.node_id,
            node_type: entry.node_type,
            message: entry.message,
        }
    }
}
