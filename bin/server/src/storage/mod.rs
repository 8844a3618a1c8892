//! In-memory storage for workflows and run history.

pub mod run;
pub mod workflow;

pub use run::RunLog;
pub use workflow::{NewWorkflow, UpdateWorkflow, WorkflowRecord, WorkflowRepository};
