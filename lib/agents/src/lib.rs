//! Marketing agent crew for the copper-circular platform.
//!
//! This crate provides:
//!
//! - **Roster**: The six built-in marketing agents and their configurations
//! - **Crew**: Connection toggles and the sequential execution path
//! - **Executor**: A backend trait with a simulated implementation
//! - **Runs**: Timestamped records of crew executions

pub mod agent;
pub mod crew;
pub mod error;
pub mod executor;
pub mod run;

pub use agent::{AgentCategory, AgentConfig, AgentDefinition, AgentKind, marketing_agents};
pub use crew::{CONNECTION_COUNT, MarketingCrew};
pub use error::AgentError;
pub use executor::{AgentExecutor, SimulatedExecutor};
pub use run::{CrewRun, StepResult};
