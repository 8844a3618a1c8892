//! Error types for the agents crate.

use crate::agent::AgentKind;
use std::fmt;

/// Errors from running an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The agent produced no output.
    Failed { agent: AgentKind, reason: String },
    /// The agent is not configured to run.
    Inactive { agent: AgentKind },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { agent, reason } => {
                write!(f, "agent '{agent}' failed: {reason}")
            }
            Self::Inactive { agent } => {
                write!(f, "agent '{agent}' is inactive")
            }
        }
    }
}

impl std::error::Error for AgentError {}
