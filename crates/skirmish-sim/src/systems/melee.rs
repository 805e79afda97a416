//! Melee resolution, called synchronously from a warrior's action step.

use hecs::Entity;
use tracing::trace;

use skirmish_core::components::{AgentRuntime, Fighter, Velocity};
use skirmish_core::config::ArenaConfig;
use skirmish_core::enums::Team;
use skirmish_core::types::Transform;
use skirmish_tactics::fan::ray_fan_offsets;

use crate::physics::PhysicsWorld;
use crate::store::EntityStore;
use crate::systems::detection::scan_fan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleeOutcome {
    /// The swing connected. `opponent` is false for a teammate.
    Hit { target: Entity, opponent: bool },
    /// Nothing in the cone.
    Miss,
}

/// Swing if the attacker's cooldown has elapsed. Returns `None` when the
/// request is ignored (on cooldown, dead, or not a fighter). A swing
/// restarts the cooldown whether or not it lands.
pub fn try_attack<P: PhysicsWorld + ?Sized>(
    store: &mut EntityStore,
    physics: &P,
    config: &ArenaConfig,
    attacker: Entity,
    now: f64,
) -> Option<MeleeOutcome> {
    let started = store.update::<Fighter, _>(attacker, |fighter| {
        if !fighter.alive || !fighter.attack.is_ready(now) {
            return false;
        }
        fighter.attack.trigger(now);
        true
    })?;
    if !started {
        return None;
    }
    resolve(store, physics, config, attacker)
}

/// Detect a target in the attacker's cone and apply impulse, damage and
/// reward. No cooldown check.
pub fn resolve<P: PhysicsWorld + ?Sized>(
    store: &mut EntityStore,
    physics: &P,
    config: &ArenaConfig,
    attacker: Entity,
) -> Option<MeleeOutcome> {
    let transform = store.get::<Transform>(attacker)?;
    let attacker_team = store.get::<Fighter>(attacker)?.team;
    let melee = &config.melee;
    let rewards = &config.rewards;

    let offsets = ray_fan_offsets(melee.accuracy, melee.angle);
    let scan = scan_fan(physics, store, attacker, &transform, &offsets, melee.range, |e| {
        is_live_combatant(store, e)
    });

    let Some(hit) = scan.target else {
        store.update::<AgentRuntime, _>(attacker, |r| {
            r.accumulated_reward -= rewards.melee_miss_penalty;
        });
        trace!(?attacker, rays = scan.rays_cast, "melee miss");
        return Some(MeleeOutcome::Miss);
    };
    let target = hit.entity;

    let impulse = transform.forward() * melee.impulse;
    store.update::<Velocity, _>(target, |v| v.linear += impulse);

    let mut opponent = false;
    store.update::<AgentRuntime, _>(target, |r| {
        opponent = r.team != attacker_team;
        r.health -= melee.damage;
        r.accumulated_reward -= rewards.melee_hit_bonus;
        if r.health <= 0 {
            r.team = Team::Dead;
        }
    });
    let attacker_delta = if opponent {
        rewards.melee_hit_bonus
    } else {
        -rewards.melee_hit_bonus
    };
    store.update::<AgentRuntime, _>(attacker, |r| r.accumulated_reward += attacker_delta);

    trace!(?attacker, ?target, opponent, "melee hit");
    Some(MeleeOutcome::Hit { target, opponent })
}

/// Tagged with a team and still standing.
pub(crate) fn is_live_combatant(store: &EntityStore, entity: Entity) -> bool {
    let tagged = store
        .get::<AgentRuntime>(entity)
        .is_some_and(|r| r.team.is_combatant());
    let standing = store.get::<Fighter>(entity).map_or(true, |f| f.alive);
    tagged && standing
}
