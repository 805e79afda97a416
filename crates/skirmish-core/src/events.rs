//! Events emitted by the simulation for the presentation layer.
//!
//! The presentation side only reads these; nothing it does feeds back
//! into the core.

use serde::{Deserialize, Serialize};

use crate::enums::{AnimationState, EpisodeOutcome, Team};

/// Stable identifier for an agent in events and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u64);

impl From<hecs::Entity> for AgentId {
    fn from(entity: hecs::Entity) -> Self {
        AgentId(entity.to_bits().get())
    }
}

impl AgentId {
    /// The entity handle this id was made from, if the bits are valid.
    pub fn entity(self) -> Option<hecs::Entity> {
        hecs::Entity::from_bits(self.0)
    }
}

/// Arena events, drained by the caller after each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaEvent {
    /// Animation state change (idle, running, attacking, shooting).
    StateChanged { agent: AgentId, state: AnimationState },
    /// An agent crossed from alive to dead.
    Died { agent: AgentId, team: Team },
    /// A melee swing connected.
    MeleeHit {
        attacker: AgentId,
        target: AgentId,
        friendly: bool,
    },
    /// A melee swing found no target.
    MeleeMiss { attacker: AgentId },
    /// A ranged volley left the muzzle.
    VolleyFired { shooter: AgentId, projectiles: u32 },
    /// The episode was decided.
    EpisodeEnded { outcome: EpisodeOutcome },
}
