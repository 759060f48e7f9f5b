//! Workflow documents: node/edge graphs authored in the platform editor.

use bson::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::node_config::NodeConfig;
use crate::models::run::RunStatus;
use crate::types::{DocId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A workflow document. Belongs to exactly one project via `projectId`.
///
/// `totalExecutions` is a running counter maintained by the upstream
/// executor; it is independent of the `workflow_runs` collection and the
/// two are allowed to diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(rename = "_id")]
    pub id: DocId,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default)]
    pub edges: Vec<WorkflowEdge>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_executed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_execution_status: Option<RunStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_execution_error: Option<String>,
    #[serde(default)]
    pub total_executions: i64,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Nodes and edges
// ---------------------------------------------------------------------------

/// One node on the workflow canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    /// Catalog type tag. Tags outside the catalog are carried as-is.
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

impl WorkflowNode {
    /// Typed view of this node's config payload (see [`NodeConfig`]).
    pub fn config(&self) -> NodeConfig {
        NodeConfig::from_parts(&self.node_type, self.data.config.as_ref())
    }
}

/// 2-D canvas position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Editor payload attached to a node: display label plus the per-type
/// config subdocument.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Document>,
}

/// A directed connection between two nodes, by node id.
///
/// Endpoint existence is NOT checked anywhere in this service; the editor
/// is trusted to keep the graph consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

// ---------------------------------------------------------------------------
// API-facing shape
// ---------------------------------------------------------------------------

/// Workflow summary for listings and the rollup view. Node and edge lists
/// are collapsed to counts; the graph endpoints carry the full structure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    pub id: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub node_count: usize,
    pub edge_count: usize,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_executed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_execution_status: Option<RunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_execution_error: Option<String>,
    pub total_executions: i64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Workflow> for WorkflowResponse {
    fn from(workflow: Workflow) -> Self {
        WorkflowResponse {
            id: workflow.id.to_string(),
            project_id: workflow.project_id,
            name: workflow.name,
            description: workflow.description,
            node_count: workflow.nodes.len(),
            edge_count: workflow.edges.len(),
            is_active: workflow.is_active,
            last_executed_at: workflow.last_executed_at.map(|t| t.to_chrono()),
            last_execution_status: workflow.last_execution_status,
            last_execution_error: workflow.last_execution_error,
            total_executions: workflow.total_executions,
            created_at: workflow.created_at.to_chrono(),
            updated_at: workflow.updated_at.map(|t| t.to_chrono()),
        }
    }
}
