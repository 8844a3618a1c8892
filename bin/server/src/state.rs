//! Shared application state for request handlers.

use crate::storage::{RunLog, WorkflowRepository};
use std::time::Duration;

/// State handed to every route handler. Cloning is cheap; the storage
/// handles share their tables.
#[derive(Clone)]
pub struct AppState {
    /// Workflow storage.
    pub workflows: WorkflowRepository,
    /// Per-workflow run history.
    pub runs: RunLog,
    /// Simulated delay per agent step.
    pub step_delay: Duration,
}
