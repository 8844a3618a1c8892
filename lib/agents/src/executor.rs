//! Agent execution abstraction.
//!
//! Provides a unified interface for running agents, with a simulated
//! implementation standing in for real provider backends.

use crate::agent::{AgentConfig, AgentDefinition};
use crate::error::AgentError;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for agent execution backends.
#[async_trait]
pub trait AgentExecutor: Send + Sync {
    /// Runs a single agent and returns its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent is not configured to run or fails
    /// to produce output.
    async fn run_agent(
        &self,
        definition: &AgentDefinition,
        config: &AgentConfig,
    ) -> Result<String, AgentError>;
}

/// An executor that produces placeholder output after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedExecutor {
    step_delay: Duration,
}

impl SimulatedExecutor {
    /// Creates a simulated executor pausing `step_delay` per agent.
    #[must_use]
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    /// Creates a simulated executor with no delay.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl AgentExecutor for SimulatedExecutor {
    async fn run_agent(
        &self,
        definition: &AgentDefinition,
        config: &AgentConfig,
    ) -> Result<String, AgentError> {
        if !config.active {
            return Err(AgentError::Inactive {
                agent: definition.kind,
            });
        }
        if !self.step_delay.is_zero() {
            tokio::time::sleep(self.step_delay).await;
        }
        Ok(format!("Sample output from {} agent", definition.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::marketing_agents;

    #[tokio::test]
    async fn simulated_executor_produces_sample_output() {
        let executor = SimulatedExecutor::instant();
        let agents = marketing_agents();
        let design = &agents[2];

        let output = executor
            .run_agent(design, &design.default_config)
            .await
            .expect("run agent");
        assert_eq!(output, "Sample output from design agent");
    }

    #[tokio::test]
    async fn inactive_agent_is_refused() {
        let executor = SimulatedExecutor::instant();
        let agents = marketing_agents();
        let strategy = &agents[0];
        let mut config = strategy.default_config.clone();
        config.active = false;

        let err = executor
            .run_agent(strategy, &config)
            .await
            .expect_err("inactive agent");
        assert_eq!(
            err,
            AgentError::Inactive {
                agent: strategy.kind
            }
        );
    }
}
