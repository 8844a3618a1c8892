//! The marketing crew and its sequential runner.

use crate::agent::{AgentConfig, AgentDefinition, AgentKind, marketing_agents};
use crate::executor::AgentExecutor;
use crate::run::{CrewRun, StepResult};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Number of connection toggles between adjacent roster slots.
pub const CONNECTION_COUNT: usize = AgentKind::ALL.len() - 1;

/// The six-agent marketing crew with per-agent configuration and the
/// connection toggles that gate handoffs between pipeline slots.
#[derive(Debug, Clone)]
pub struct MarketingCrew {
    definitions: Vec<AgentDefinition>,
    configs: HashMap<AgentKind, AgentConfig>,
    connections: [bool; CONNECTION_COUNT],
}

impl MarketingCrew {
    /// Creates a crew with every agent active and every connection on.
    #[must_use]
    pub fn new() -> Self {
        let definitions = marketing_agents();
        let configs = definitions
            .iter()
            .map(|d| (d.kind, d.default_config.clone()))
            .collect();
        Self {
            definitions,
            configs,
            connections: [true; CONNECTION_COUNT],
        }
    }

    #[must_use]
    pub fn definitions(&self) -> &[AgentDefinition] {
        &self.definitions
    }

    #[must_use]
    pub fn connections(&self) -> [bool; CONNECTION_COUNT] {
        self.connections
    }

    /// The configuration for one agent.
    #[must_use]
    pub fn config(&self, kind: AgentKind) -> Option<&AgentConfig> {
        self.configs.get(&kind)
    }

    /// Replaces an agent's configuration.
    pub fn set_config(&mut self, kind: AgentKind, config: AgentConfig) {
        self.configs.insert(kind, config);
    }

    /// Activates or deactivates an agent.
    pub fn set_active(&mut self, kind: AgentKind, active: bool) {
        if let Some(config) = self.configs.get_mut(&kind) {
            config.active = active;
        }
    }

    #[must_use]
    pub fn is_active(&self, kind: AgentKind) -> bool {
        self.configs.get(&kind).is_some_and(|c| c.active)
    }

    /// Flips one connection toggle. Out-of-range indexes are ignored.
    pub fn toggle_connection(&mut self, index: usize) {
        if let Some(slot) = self.connections.get_mut(index) {
            *slot = !*slot;
        }
    }

    /// Sets one connection toggle. Out-of-range indexes are ignored.
    pub fn set_connection(&mut self, index: usize, on: bool) {
        if let Some(slot) = self.connections.get_mut(index) {
            *slot = on;
        }
    }

    /// Replaces all connection toggles at once.
    pub fn set_connections(&mut self, connections: [bool; CONNECTION_COUNT]) {
        self.connections = connections;
    }

    /// Computes which agents will run, in order.
    ///
    /// Active agents are considered in roster order. The first active
    /// agent always runs. Each later active agent runs only when the
    /// connection at the previous active agent's roster index is on,
    /// whether or not that previous agent made it onto the path.
    #[must_use]
    pub fn execution_path(&self) -> Vec<AgentKind> {
        let active: Vec<AgentKind> = self
            .definitions
            .iter()
            .map(|d| d.kind)
            .filter(|kind| self.is_active(*kind))
            .collect();

        let mut path = Vec::new();
        for (position, kind) in active.iter().enumerate() {
            if position == 0 {
                path.push(*kind);
                continue;
            }
            let previous = active[position - 1];
            let connected = self
                .connections
                .get(previous.roster_index())
                .copied()
                .unwrap_or(false);
            if connected {
                path.push(*kind);
            }
        }
        path
    }

    /// Runs the crew sequentially through the given executor.
    ///
    /// Each path agent contributes one `StepResult`. A failing step is
    /// recorded and aborts the remainder of the run.
    pub async fn run(&self, executor: &dyn AgentExecutor) -> CrewRun {
        let path = self.execution_path();
        let mut run = CrewRun::new();
        info!(run_id = %run.id, steps = path.len(), "starting crew run");

        for kind in path {
            let Some(definition) = self.definitions.iter().find(|d| d.kind == kind) else {
                continue;
            };
            let config = self.configs.get(&kind).unwrap_or(&definition.default_config);

            match executor.run_agent(definition, config).await {
                Ok(output) => {
                    debug!(agent = %kind, "agent step completed");
                    run.record_step(StepResult::succeeded(kind, output));
                }
                Err(err) => {
                    warn!(agent = %kind, error = %err, "agent step failed");
                    run.record_step(StepResult::failed(kind, err.to_string()));
                    break;
                }
            }
        }

        run.finish();
        info!(run_id = %run.id, succeeded = run.succeeded(), "crew run finished");
        run
    }
}

impl Default for MarketingCrew {
    fn default() -> Self {
        Self::new()
    }
}
