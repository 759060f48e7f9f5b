//! Document models for the five platform collections.
//!
//! Every entity here is owned and written by the upstream workflow
//! platform; this service only reads them. Each module defines the raw
//! document struct plus the API-facing response shape (string ids, RFC 3339
//! timestamps).

pub mod node_config;
pub mod project;
pub mod run;
pub mod schedule;
pub mod user;
pub mod workflow;

pub use node_config::NodeConfig;
pub use project::Project;
pub use run::{RunStatus, WorkflowRun};
pub use schedule::WorkflowSchedule;
pub use user::User;
pub use workflow::{Workflow, WorkflowEdge, WorkflowNode};
