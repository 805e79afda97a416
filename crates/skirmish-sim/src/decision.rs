//! Decision boundary: reward drains in, actions out.
//!
//! The policy reads each agent's accumulated reward once per decision step
//! and answers with an action vector `[vertical, horizontal, turn, attack]`.
//! The first three are discrete branches in {0, 1, 2}; attack is 0 or 1.

use hecs::Entity;

use skirmish_core::components::{AgentRuntime, Fighter};
use skirmish_core::error::{Result, SkirmishError};
use skirmish_core::events::AgentId;
use skirmish_tactics::steering::branch_axis;

use crate::store::EntityStore;

/// Fields in an action vector.
pub const ACTION_FIELDS: usize = 4;

/// A raw action vector addressed to one agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentAction {
    pub agent: Entity,
    pub values: Vec<f32>,
}

impl AgentAction {
    pub fn new(agent: Entity, values: impl Into<Vec<f32>>) -> Self {
        Self {
            agent,
            values: values.into(),
        }
    }
}

/// A validated action with the branches mapped to {-1, 0, +1}.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    pub vertical: f32,
    pub horizontal: f32,
    pub turn: f32,
    pub attack: bool,
}

impl Action {
    /// Stand still, don't attack.
    pub fn idle() -> Self {
        Self {
            vertical: 0.0,
            horizontal: 0.0,
            turn: 0.0,
            attack: false,
        }
    }

    pub fn parse(agent: AgentId, values: &[f32]) -> Result<Self> {
        if values.len() != ACTION_FIELDS {
            return Err(SkirmishError::MalformedAction {
                agent,
                expected: ACTION_FIELDS,
                found: values.len(),
            });
        }
        for (field, &value) in values.iter().enumerate().take(3) {
            if value != 0.0 && value != 1.0 && value != 2.0 {
                return Err(SkirmishError::InvalidActionValue { agent, field, value });
            }
        }
        let attack = values[3];
        if attack != 0.0 && attack != 1.0 {
            return Err(SkirmishError::InvalidActionValue {
                agent,
                field: 3,
                value: attack,
            });
        }
        Ok(Self {
            vertical: branch_axis(values[0]),
            horizontal: branch_axis(values[1]),
            turn: branch_axis(values[2]),
            attack: attack == 1.0,
        })
    }
}

/// What the policy sees for one agent at a decision step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRequest {
    pub agent: Entity,
    /// Reward accumulated since the previous drain.
    pub reward: f32,
    /// Gameplay liveness; dead agents still report reward but should not act.
    pub alive: bool,
}

/// Read an agent's reward ledger and zero it in one step.
pub fn drain_reward(store: &mut EntityStore, agent: Entity) -> Option<f32> {
    store.update::<AgentRuntime, _>(agent, |runtime| {
        std::mem::take(&mut runtime.accumulated_reward)
    })
}

/// Drain every listed agent, in order.
pub fn collect_requests(store: &mut EntityStore, agents: &[Entity]) -> Vec<DecisionRequest> {
    agents
        .iter()
        .filter_map(|&agent| {
            let reward = drain_reward(store, agent)?;
            let alive = store.get::<Fighter>(agent).is_some_and(|f| f.alive);
            Some(DecisionRequest {
                agent,
                reward,
                alive,
            })
        })
        .collect()
}
