mod config;
mod error;
mod routes;
mod state;
mod storage;

use crate::config::ServerConfig;
use crate::state::AppState;
use crate::storage::{RunLog, WorkflowRepository};
use std::time::Duration;

#[tokio::main]
async fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let state = AppState {
        workflows: WorkflowRepository::seeded().await,
        runs: RunLog::new(),
        step_delay: Duration::from_millis(config.agents.step_delay_ms),
    };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .await
        .expect("server error");
}
