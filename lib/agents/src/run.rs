//! Records of crew executions.

use crate::agent::AgentKind;
use chrono::{DateTime, Utc};
use copper_circular_core::CrewRunId;
use serde::{Deserialize, Serialize};

/// The outcome of one agent step within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    /// The agent that ran.
    pub agent: AgentKind,
    /// Whether the step produced output.
    pub success: bool,
    /// Agent output, or the failure reason.
    pub output: String,
    /// When the step finished.
    pub timestamp: DateTime<Utc>,
}

impl StepResult {
    /// Records a successful step.
    #[must_use]
    pub fn succeeded(agent: AgentKind, output: impl Into<String>) -> Self {
        Self {
            agent,
            success: true,
            output: output.into(),
            timestamp: Utc::now(),
        }
    }

    /// Records a failed step.
    #[must_use]
    pub fn failed(agent: AgentKind, reason: impl Into<String>) -> Self {
        Self {
            agent,
            success: false,
            output: reason.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A record of a single crew run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewRun {
    /// Unique identifier for this run.
    pub id: CrewRunId,
    /// When the run started executing.
    pub started_at: DateTime<Utc>,
    /// When the run finished, whether or not every step succeeded.
    pub finished_at: Option<DateTime<Utc>>,
    /// Step outcomes in execution order.
    pub steps: Vec<StepResult>,
}

impl CrewRun {
    /// Creates a new run starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: CrewRunId::new(),
            started_at: Utc::now(),
            finished_at: None,
            steps: Vec::new(),
        }
    }

    /// Appends a step outcome.
    pub fn record_step(&mut self, step: StepResult) {
        self.steps.push(step);
    }

    /// Marks the run as finished.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Whether every recorded step succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.success)
    }

    /// Returns the duration of the run, if it has finished.
    #[must_use]
    pub fn duration_ms(&self) -> Option<i64> {
        let end = self.finished_at?;
        Some((end - self.started_at).num_milliseconds())
    }
}

impl Default for CrewRun {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_lifecycle() {
        let mut run = CrewRun::new();
        assert!(run.finished_at.is_none());
        assert!(run.duration_ms().is_none());

        run.record_step(StepResult::succeeded(AgentKind::Strategy, "plan"));
        run.record_step(StepResult::succeeded(AgentKind::CopyGen, "copy"));
        run.finish();

        assert!(run.succeeded());
        assert_eq!(run.steps.len(), 2);
        assert!(run.duration_ms().is_some_and(|ms| ms >= 0));
    }

    #[test]
    fn failed_step_fails_the_run() {
        let mut run = CrewRun::new();
        run.record_step(StepResult::succeeded(AgentKind::Strategy, "plan"));
        run.record_step(StepResult::failed(AgentKind::Design, "no canvas"));
        run.finish();

        assert!(!run.succeeded());
        assert_eq!(run.steps[1].output, "no canvas");
    }

    #[test]
    fn run_serde_shape() {
        let mut run = CrewRun::new();
        run.record_step(StepResult::succeeded(AgentKind::Scheduler, "posted"));
        run.finish();

        let value = serde_json::to_value(&run).expect("serialize");
        assert_eq!(value["id"], run.id.as_ulid().to_string().as_str());
        assert!(value.get("startedAt").is_some());
        assert_eq!(value["steps"][0]["agent"], "scheduler");

        let parsed: CrewRun = serde_json::from_value(value).expect("deserialize");
        assert_eq!(parsed, run);
    }
}
