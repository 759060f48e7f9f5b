//! Storage collaborator for the admin dashboard.
//!
//! Read-only access to the five platform collections behind a narrow
//! [`Store`] handle. Each repository is a zero-sized struct with async
//! methods taking `&Store` as the first argument; this service performs no
//! writes to domain data.

mod store;

pub mod repositories;

pub use store::{collections, Store};
