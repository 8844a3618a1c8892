//! Core domain types and utilities for the copper-circular platform.
//!
//! This crate provides the strongly-typed identifiers shared by the
//! workflow editor, the agent crew runner, and the HTTP service.

pub mod id;

pub use id::{CrewRunId, ParseIdError, WorkflowId};
