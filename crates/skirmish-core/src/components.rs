//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, not
//! components. `Transform` is defined in `types.rs` but is also used as a
//! component on every spatial entity.

use glam::Vec3;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::{AnimationState, FighterKind, Team};
use crate::types::Cooldown;

/// Health, team and reward ledger of an agent.
///
/// Written by the collision system, the melee resolver and the arena
/// coordinator; drained by the decision boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentRuntime {
    /// Current health. Only decreases except on a full episode reset,
    /// and may go negative on overkill.
    pub health: i32,
    /// Runtime team. Becomes `Team::Dead` once health drops to zero.
    pub team: Team,
    /// Reward accumulated since the last drain.
    pub accumulated_reward: f32,
}

impl AgentRuntime {
    pub fn new(health: i32, team: Team) -> Self {
        Self {
            health,
            team,
            accumulated_reward: 0.0,
        }
    }
}

/// Template id for a spawnable visual effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefabId(pub u32);

/// Projectile payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileRuntime {
    /// Agent that fired this projectile. A lookup handle only: the parent
    /// may be despawned while the projectile is still in flight.
    pub parent: Entity,
    pub damage: i32,
    /// Effect spawned where the projectile lands.
    pub impact_effect: PrefabId,
    /// Lifetime given to the impact effect (seconds).
    pub impact_effect_lifetime: f32,
}

/// Countdown to deferred destruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedLifetime {
    /// Seconds left. Non-increasing from tick to tick.
    pub remaining: f32,
}

/// Autonomous forward motion (projectiles).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveForward {
    /// Units per second along the entity's forward vector.
    pub speed: f32,
}

/// Velocity integrated each tick and damped over time. Melee impulses
/// are added here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub linear: Vec3,
}

/// Sphere used by the overlap detector and ray casts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
}

/// Gameplay-side state of an agent, separate from its runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub kind: FighterKind,
    /// Team the agent was spawned on. Never `Team::Dead`.
    pub team: Team,
    /// Gameplay-visible liveness, flipped once per episode at the death edge.
    pub alive: bool,
    pub state: AnimationState,
    /// Melee swing or ranged volley timer.
    pub attack: Cooldown,
    /// Aim-shaping detection timer (ranged fighters only).
    pub detection: Cooldown,
}

/// Marks a transient visual effect spawned by an impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactEffect {
    pub prefab: PrefabId,
}
