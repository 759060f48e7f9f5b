//! HTTP handlers, one module per route group.

pub mod auth;
pub mod projects;
pub mod runs;
pub mod schedules;
pub mod stats;
pub mod users;
pub mod workflows;
