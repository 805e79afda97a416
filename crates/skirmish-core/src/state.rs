//! Serializable views of an arena, for logging and determinism checks.

use serde::{Deserialize, Serialize};

use crate::enums::{AnimationState, ArenaPhase, EpisodeOutcome, FighterKind, Team};
use crate::events::AgentId;
use crate::types::SimTime;

/// Per-agent view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub kind: FighterKind,
    pub home_team: Team,
    /// Runtime team; `Dead` once the agent has been killed.
    pub team: Team,
    pub health: i32,
    pub alive: bool,
    pub state: AnimationState,
    /// Undrained reward.
    pub reward: f32,
    pub position: [f32; 3],
    pub yaw_degrees: f32,
}

/// Whole-arena view at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: ArenaPhase,
    pub alive_team_one: u32,
    pub alive_team_two: u32,
    pub agents: Vec<AgentSnapshot>,
    pub projectiles: u32,
    pub effects: u32,
}

/// Final reward of one agent for a finished episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReward {
    pub agent: AgentId,
    pub team: Team,
    /// Everything in the ledger at episode end, terminal reward included.
    pub reward: f32,
}

/// Result of a decided episode, handed to the decision boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub outcome: EpisodeOutcome,
    /// Tick on which the episode was decided.
    pub tick: u64,
    pub rewards: Vec<FinalReward>,
}

impl EpisodeSummary {
    pub fn reward_of(&self, agent: AgentId) -> Option<f32> {
        self.rewards
            .iter()
            .find(|r| r.agent == agent)
            .map(|r| r.reward)
    }
}
