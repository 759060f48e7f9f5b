//! Directed-graph projections of stored workflows.
//!
//! Structural maps only: positions and adjacency are carried through as
//! stored, labels resolve against the catalog, and nothing is validated.
//! An edge pointing at a node id that does not exist passes through
//! untouched; cycle detection is the renderer's problem, not ours.

use bson::Document;
use serde::Serialize;

use crate::catalog;
use crate::models::workflow::{Position, Workflow, WorkflowEdge, WorkflowNode};

// ---------------------------------------------------------------------------
// Styling defaults
// ---------------------------------------------------------------------------

/// Full-detail edge stroke color.
const DETAIL_EDGE_STROKE: &str = "#64748b";
/// Full-detail edge stroke width (px).
const DETAIL_EDGE_WIDTH: u32 = 2;

/// Preview edge stroke color.
const PREVIEW_EDGE_STROKE: &str = "#94a3b8";
/// Preview edge stroke width (px).
const PREVIEW_EDGE_WIDTH: u32 = 1;

/// Preview vertex box size (px).
const PREVIEW_NODE_SIZE: u32 = 40;
/// Preview vertex corner radius (px).
const PREVIEW_NODE_RADIUS: u32 = 8;

// ---------------------------------------------------------------------------
// Projected structures
// ---------------------------------------------------------------------------

/// Renderer-agnostic directed graph.
#[derive(Debug, Clone, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

/// A projected vertex.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    /// The stored catalog tag in the full view; `"default"` in the preview.
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    pub data: FlowNodeData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,
}

/// Vertex payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNodeData {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Document>,
}

/// Preview styling attached per vertex.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub border_radius: u32,
}

/// A projected arc.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    pub stroke: &'static str,
    pub stroke_width: u32,
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// Full-detail projection: catalog tags, effective labels, config payloads
/// and port selectors all carried through.
pub fn project_detail(workflow: &Workflow) -> FlowGraph {
    let nodes = workflow
        .nodes
        .iter()
        .map(|node| FlowNode {
            id: node.id.clone(),
            node_type: node.node_type.clone(),
            position: node.position,
            data: FlowNodeData {
                label: effective_label(node),
                summary: node.config().summary(),
                config: node.data.config.clone(),
            },
            style: None,
        })
        .collect();

    let edges = workflow
        .edges
        .iter()
        .map(|edge| project_edge(edge, DETAIL_EDGE_STROKE, DETAIL_EDGE_WIDTH, true))
        .collect();

    FlowGraph { nodes, edges }
}

/// Compact preview: fixed-size vertices labelled with the catalog icon and
/// colored per type; config payloads and port selectors are dropped.
pub fn project_preview(workflow: &Workflow) -> FlowGraph {
    let nodes = workflow
        .nodes
        .iter()
        .map(|node| FlowNode {
            id: node.id.clone(),
            node_type: "default".to_string(),
            position: node.position,
            data: FlowNodeData {
                label: catalog::icon(&node.node_type).to_string(),
                summary: None,
                config: None,
            },
            style: Some(NodeStyle {
                width: PREVIEW_NODE_SIZE,
                height: PREVIEW_NODE_SIZE,
                background: catalog::color(&node.node_type),
                border_radius: PREVIEW_NODE_RADIUS,
            }),
        })
        .collect();

    let edges = workflow
        .edges
        .iter()
        .map(|edge| project_edge(edge, PREVIEW_EDGE_STROKE, PREVIEW_EDGE_WIDTH, false))
        .collect();

    FlowGraph { nodes, edges }
}

/// Stored label if present, else the catalog default, else the raw tag.
fn effective_label(node: &WorkflowNode) -> String {
    if let Some(label) = &node.data.label {
        return label.clone();
    }
    match catalog::default_label(&node.node_type) {
        Some(label) => label.to_string(),
        None => node.node_type.clone(),
    }
}

fn project_edge(
    edge: &WorkflowEdge,
    stroke: &'static str,
    stroke_width: u32,
    with_handles: bool,
) -> FlowEdge {
    FlowEdge {
        id: edge.id.clone(),
        source: edge.source.clone(),
        target: edge.target.clone(),
        source_handle: with_handles.then(|| edge.source_handle.clone()).flatten(),
        target_handle: with_handles.then(|| edge.target_handle.clone()).flatten(),
        stroke,
        stroke_width,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
