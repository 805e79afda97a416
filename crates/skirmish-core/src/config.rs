//! Arena configuration.
//!
//! Every field has a default, so a JSON file only needs the values it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::PrefabId;
use crate::constants::*;
use crate::enums::FighterKind;
use crate::error::Result;

/// Top-level configuration for one arena.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub arena: ArenaLayout,
    pub agent: AgentConfig,
    pub rewards: RewardConfig,
    pub melee: MeleeConfig,
    pub ranged: RangedConfig,
}

impl ArenaConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// How many agents each team fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum TeamSizePolicy {
    Fixed { team_one: u32, team_two: u32 },
    /// Uniform draw from `[min, max)`, applied to both teams alike.
    Randomized { min: u32, max: u32 },
}

impl Default for TeamSizePolicy {
    fn default() -> Self {
        TeamSizePolicy::Randomized {
            min: RANDOM_TEAM_MIN,
            max: RANDOM_TEAM_MAX,
        }
    }
}

/// Where each team's agents are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum SpawnLayout {
    /// Team One on the +Z half of the arena, Team Two on the -Z half.
    #[default]
    HalfPlane,
    /// Each team in its own wedge of a partial donut around the center.
    /// Angles in degrees, measured like yaw.
    Wedge {
        team_one: WedgeSpec,
        team_two: WedgeSpec,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeSpec {
    pub min_angle: f32,
    pub max_angle: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaLayout {
    /// Half-extent of the square arena.
    pub range: f32,
    /// Gap between the spawn regions and the arena center.
    pub pace: f32,
    pub spawn_height: f32,
    pub layout: SpawnLayout,
    pub team_sizes: TeamSizePolicy,
    /// Which strategy each team's agents run.
    pub team_one_kind: FighterKind,
    pub team_two_kind: FighterKind,
    /// Despawn and respawn every agent at each episode end (redrawing
    /// randomized team sizes) instead of resetting them in place.
    pub respawn_each_episode: bool,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            range: ARENA_RANGE,
            pace: ARENA_PACE,
            spawn_height: SPAWN_HEIGHT,
            layout: SpawnLayout::default(),
            team_sizes: TeamSizePolicy::default(),
            team_one_kind: FighterKind::Warrior,
            team_two_kind: FighterKind::Warrior,
            respawn_each_episode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub max_health: i32,
    pub move_speed: f32,
    /// Degrees per second.
    pub turn_speed: f32,
    pub collider_radius: f32,
    pub velocity_damping: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_health: AGENT_MAX_HEALTH,
            move_speed: AGENT_MOVE_SPEED,
            turn_speed: AGENT_TURN_SPEED,
            collider_radius: AGENT_COLLIDER_RADIUS,
            velocity_damping: AGENT_VELOCITY_DAMPING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Paid to the shooter when a projectile lands on an opponent.
    pub projectile_hit_bonus: f32,
    /// Projectile damage divided by this gives the reward penalty.
    pub damage_reward_scale: f32,
    /// Whether a friendly-fire victim also loses reward. Its health drops
    /// either way.
    pub friendly_fire_penalizes_victim: bool,
    pub melee_hit_bonus: f32,
    pub melee_miss_penalty: f32,
    pub aim_shaping_bonus: f32,
    /// When set, every decision step costs `1 / max_steps`.
    pub existential_max_steps: Option<u32>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            projectile_hit_bonus: PROJECTILE_HIT_BONUS,
            damage_reward_scale: DAMAGE_REWARD_SCALE,
            friendly_fire_penalizes_victim: true,
            melee_hit_bonus: MELEE_HIT_BONUS,
            melee_miss_penalty: MELEE_MISS_PENALTY,
            aim_shaping_bonus: AIM_SHAPING_BONUS,
            existential_max_steps: None,
        }
    }
}

impl RewardConfig {
    /// Reward penalty for taking `damage` from a projectile.
    pub fn damage_penalty(&self, damage: i32) -> f32 {
        damage as f32 / self.damage_reward_scale
    }

    pub fn existential_penalty(&self) -> f32 {
        match self.existential_max_steps {
            Some(steps) if steps > 0 => 1.0 / steps as f32,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeleeConfig {
    pub range: f32,
    pub damage: i32,
    pub cooldown_secs: f64,
    /// Velocity change applied to the target along the attacker's forward.
    pub impulse: f32,
    /// Symmetric ray pairs cast after the center ray.
    pub accuracy: u32,
    /// Total fan angle in degrees.
    pub angle: f32,
    pub reset_delay_fraction: f64,
}

impl Default for MeleeConfig {
    fn default() -> Self {
        Self {
            range: MELEE_RANGE,
            damage: MELEE_DAMAGE,
            cooldown_secs: MELEE_COOLDOWN_SECS,
            impulse: MELEE_IMPULSE,
            accuracy: DETECTION_ACCURACY,
            angle: DETECTION_ANGLE,
            reset_delay_fraction: MELEE_RESET_DELAY_FRACTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangedConfig {
    /// Detection range, also used as projectile speed.
    pub range: f32,
    pub damage: i32,
    pub spread: u32,
    pub spread_step: f32,
    pub cooldown_secs: f64,
    pub detection_accuracy: u32,
    pub detection_angle: f32,
    pub detection_cadence_secs: f64,
    pub projectile_lifetime: f32,
    pub projectile_radius: f32,
    pub impact_effect: PrefabId,
    pub impact_effect_lifetime: f32,
}

impl Default for RangedConfig {
    fn default() -> Self {
        Self {
            range: RANGED_RANGE,
            damage: RANGED_DAMAGE,
            spread: RANGED_SPREAD,
            spread_step: RANGED_SPREAD_STEP,
            cooldown_secs: RANGED_COOLDOWN_SECS,
            detection_accuracy: DETECTION_ACCURACY,
            detection_angle: DETECTION_ANGLE,
            detection_cadence_secs: RANGED_DETECTION_CADENCE_SECS,
            projectile_lifetime: PROJECTILE_LIFETIME_SECS,
            projectile_radius: PROJECTILE_RADIUS,
            impact_effect: PrefabId(0),
            impact_effect_lifetime: IMPACT_EFFECT_LIFETIME_SECS,
        }
    }
}
