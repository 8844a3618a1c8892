//! Crew execution endpoints.

use super::workflow::parse_id;
use crate::error::WorkflowError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use copper_circular_agents::{
    AgentKind, CONNECTION_COUNT, CrewRun, MarketingCrew, SimulatedExecutor,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional overrides for a crew run. An absent body runs the default
/// crew: every agent active, every connection on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    pub connections: Option<[bool; CONNECTION_COUNT]>,
    pub active: Option<HashMap<AgentKind, bool>>,
}

/// Summary of a recorded run for history listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub id: String,
    pub succeeded: bool,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub duration_ms: Option<i64>,
    pub steps: usize,
}

impl RunSummary {
    fn from_run(run: &CrewRun) -> Self {
        Self {
            id: run.id.to_string(),
            succeeded: run.succeeded(),
            started_at: run.started_at.to_rfc3339(),
            finished_at: run.finished_at.map(|dt| dt.to_rfc3339()),
            duration_ms: run.duration_ms(),
            steps: run.steps.len(),
        }
    }
}

pub async fn execute(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<RunRequest>>,
) -> Result<Json<CrewRun>, WorkflowError> {
    let id = parse_id(&id)?;
    state
        .workflows
        .find_by_id(id)
        .await
        .ok_or_else(|| WorkflowError::NotFound { id: id.to_string() })?;

    let request = body.map(|Json(request)| request).unwrap_or_default();
    let mut crew = MarketingCrew::new();
    if let Some(connections) = request.connections {
        crew.set_connections(connections);
    }
    if let Some(active) = request.active {
        for (kind, on) in active {
            crew.set_active(kind, on);
        }
    }

    let executor = SimulatedExecutor::new(state.step_delay);
    let run = crew.run(&executor).await;
    state.runs.record(id, run.clone()).await;
    Ok(Json(run))
}

pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RunSummary>>, WorkflowError> {
    let id = parse_id(&id)?;
    state
        .workflows
        .find_by_id(id)
        .await
        .ok_or_else(|| WorkflowError::NotFound { id: id.to_string() })?;

    let runs = state.runs.list_for(id).await;
    Ok(Json(runs.iter().map(RunSummary::from_run).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{NewWorkflow, RunLog, WorkflowRepository};
    use copper_circular_editor::WorkflowData;
    use std::time::Duration;

    async fn seeded_state() -> (AppState, String) {
        let state = AppState {
            workflows: WorkflowRepository::new(),
            runs: RunLog::new(),
            step_delay: Duration::ZERO,
        };
        let created = state
            .workflows
            .create(NewWorkflow {
                name: "Campaign".to_string(),
                description: None,
                data: WorkflowData::default(),
            })
            .await;
        (state, created.id.to_string())
    }

    #[tokio::test]
    async fn execute_runs_the_full_crew_by_default() {
        let (state, id) = seeded_state().await;

        let Json(run) = execute(State(state.clone()), Path(id.clone()), None)
            .await
            .expect("execute");
        assert!(run.succeeded());
        assert_eq!(run.steps.len(), AgentKind::ALL.len());

        let Json(summaries) = history(State(state), Path(id)).await.expect("history");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, run.id.to_string());
        assert_eq!(summaries[0].steps, AgentKind::ALL.len());
        assert!(summaries[0].succeeded);
    }

    #[tokio::test]
    async fn execute_honors_overrides() {
        let (state, id) = seeded_state().await;
        let request = RunRequest {
            connections: None,
            active: Some(HashMap::from([
                (AgentKind::Design, false),
                (AgentKind::VideoGen, false),
                (AgentKind::Approval, false),
                (AgentKind::Scheduler, false),
            ])),
        };

        let Json(run) = execute(State(state), Path(id), Some(Json(request)))
            .await
            .expect("execute");
        let agents: Vec<AgentKind> = run.steps.iter().map(|s| s.agent).collect();
        assert_eq!(agents, vec![AgentKind::Strategy, AgentKind::CopyGen]);
    }

    #[tokio::test]
    async fn execute_unknown_workflow_is_not_found() {
        let (state, _) = seeded_state().await;
        let err = execute(State(state), Path("999".to_string()), None)
            .await
            .expect_err("unknown workflow");
        assert!(matches!(err, WorkflowError::NotFound { .. }));
    }

    #[tokio::test]
    async fn run_summary_serde_shape() {
        let mut run = CrewRun::new();
        run.record_step(copper_circular_agents::StepResult::succeeded(
            AgentKind::Strategy,
            "plan",
        ));
        run.finish();

        let summary = RunSummary::from_run(&run);
        let value = serde_json::to_value(&summary).expect("serialize");
        assert!(value.get("startedAt").is_some());
        assert!(value.get("durationMs").is_some());
        assert_eq!(value["steps"], serde_json::json!(1));
    }
}
