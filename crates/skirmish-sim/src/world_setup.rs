//! Entity spawn factories.
//!
//! Creates agents, projectiles and impact effects with the component
//! bundles the systems expect.

use glam::{Quat, Vec3};
use hecs::Entity;

use skirmish_core::components::*;
use skirmish_core::config::{ArenaConfig, RangedConfig};
use skirmish_core::enums::{AnimationState, FighterKind, Team};
use skirmish_core::types::{Cooldown, Transform};

use crate::store::EntityStore;

/// Spawn one agent at `transform`, at full health and with an empty
/// reward ledger.
pub fn spawn_agent(
    store: &mut EntityStore,
    config: &ArenaConfig,
    kind: FighterKind,
    team: Team,
    transform: Transform,
) -> Entity {
    store.spawn((
        transform,
        Velocity::default(),
        Collider {
            radius: config.agent.collider_radius,
        },
        AgentRuntime::new(config.agent.max_health, team),
        fighter(config, kind, team),
    ))
}

/// Fresh gameplay state for an agent of `kind` on `team`.
pub fn fighter(config: &ArenaConfig, kind: FighterKind, team: Team) -> Fighter {
    let attack_period = match kind {
        FighterKind::Warrior => config.melee.cooldown_secs,
        FighterKind::Ranged => config.ranged.cooldown_secs,
    };
    Fighter {
        kind,
        team,
        alive: true,
        state: AnimationState::Idle,
        attack: Cooldown::new(attack_period),
        detection: Cooldown::new(config.ranged.detection_cadence_secs),
    }
}

/// Stage a projectile fired by `parent`. It flies along `rotation` at the
/// ranged speed and expires after the configured lifetime.
pub fn spawn_projectile(
    store: &mut EntityStore,
    ranged: &RangedConfig,
    parent: Entity,
    position: Vec3,
    rotation: Quat,
) {
    store.spawn_deferred((
        Transform::new(position, rotation),
        MoveForward {
            speed: ranged.range,
        },
        TimedLifetime {
            remaining: ranged.projectile_lifetime,
        },
        Collider {
            radius: ranged.projectile_radius,
        },
        ProjectileRuntime {
            parent,
            damage: ranged.damage,
            impact_effect: ranged.impact_effect,
            impact_effect_lifetime: ranged.impact_effect_lifetime,
        },
    ));
}

/// Stage the visual effect left where a projectile landed.
pub fn spawn_impact_effect(store: &mut EntityStore, position: Vec3, projectile: &ProjectileRuntime) {
    store.spawn_deferred((
        Transform::new(position, Quat::IDENTITY),
        ImpactEffect {
            prefab: projectile.impact_effect,
        },
        TimedLifetime {
            remaining: projectile.impact_effect_lifetime,
        },
    ));
}
