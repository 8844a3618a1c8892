//! Per-workflow crew run history.

use copper_circular_agents::CrewRun;
use copper_circular_core::WorkflowId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Run history keyed by workflow.
#[derive(Debug, Clone)]
pub struct RunLog {
    entries: Arc<RwLock<HashMap<WorkflowId, Vec<CrewRun>>>>,
}

impl RunLog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Appends a run to a workflow's history.
    pub async fn record(&self, workflow_id: WorkflowId, run: CrewRun) {
        let mut entries = self.entries.write().await;
        entries.entry(workflow_id).or_default().push(run);
    }

    /// Lists a workflow's runs in recording order.
    pub async fn list_for(&self, workflow_id: WorkflowId) -> Vec<CrewRun> {
        let entries = self.entries.read().await;
        entries.get(&workflow_id).cloned().unwrap_or_default()
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn runs_are_kept_per_workflow() {
        let log = RunLog::new();
        let first = WorkflowId::new(1);
        let second = WorkflowId::new(2);

        log.record(first, CrewRun::new()).await;
        log.record(first, CrewRun::new()).await;
        log.record(second, CrewRun::new()).await;

        assert_eq!(log.list_for(first).await.len(), 2);
        assert_eq!(log.list_for(second).await.len(), 1);
    }

    #[tokio::test]
    async fn unknown_workflow_has_no_runs() {
        let log = RunLog::new();
        assert!(log.list_for(WorkflowId::new(42)).await.is_empty());
    }
}
