//! HTTP routes for the REST API.

pub mod run;
pub mod workflow;

use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/workflows",
            get(workflow::list).post(workflow::create),
        )
        .route(
            "/api/workflows/{id}",
            get(workflow::show)
                .put(workflow::update)
                .delete(workflow::destroy),
        )
        .route("/api/workflows/{id}/run", post(run::execute))
        .route("/api/workflows/{id}/runs", get(run::history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
