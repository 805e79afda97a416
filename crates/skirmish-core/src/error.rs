//! Error type for the arena simulation.
//!
//! Missing components, stale back-references and repeated death
//! notifications are ordinary branches, not errors. Only input that cannot
//! be handled locally surfaces here.

use thiserror::Error;

use crate::events::AgentId;

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("malformed action for agent {agent:?}: expected {expected} fields, found {found}")]
    MalformedAction {
        agent: AgentId,
        expected: usize,
        found: usize,
    },

    #[error("invalid value {value} in action field {field} for agent {agent:?}")]
    InvalidActionValue {
        agent: AgentId,
        field: usize,
        value: f32,
    },

    #[error("action addressed to unknown agent {0:?}")]
    UnknownAgent(AgentId),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
