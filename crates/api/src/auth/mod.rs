//! Shared-password session handling for the admin gate.

pub mod cookie;
