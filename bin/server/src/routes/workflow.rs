//! Workflow CRUD endpoints.

use crate::error::WorkflowError;
use crate::state::AppState;
use crate::storage::{NewWorkflow, UpdateWorkflow, WorkflowRecord};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use copper_circular_core::WorkflowId;
use std::str::FromStr;

pub(crate) fn parse_id(id: &str) -> Result<WorkflowId, WorkflowError> {
    WorkflowId::from_str(id).map_err(|e| WorkflowError::InvalidId {
        id: id.to_string(),
        reason: e.reason,
    })
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<WorkflowRecord>> {
    Json(state.workflows.list().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewWorkflow>,
) -> (StatusCode, Json<WorkflowRecord>) {
    let record = state.workflows.create(new).await;
    (StatusCode::CREATED, Json(record))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkflowRecord>, WorkflowError> {
    let id = parse_id(&id)?;
    let record = state
        .workflows
        .find_by_id(id)
        .await
        .ok_or_else(|| WorkflowError::NotFound { id: id.to_string() })?;
    Ok(Json(record))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateWorkflow>,
) -> Result<Json<WorkflowRecord>, WorkflowError> {
    let id = parse_id(&id)?;
    let record = state
        .workflows
        .update(id, changes)
        .await
        .ok_or_else(|| WorkflowError::NotFound { id: id.to_string() })?;
    Ok(Json(record))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, WorkflowError> {
    let id = parse_id(&id)?;
    if state.workflows.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(WorkflowError::NotFound { id: id.to_string() })
    }
}
