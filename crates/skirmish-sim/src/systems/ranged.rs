//! Ranged fighter actions: spread volleys and aim shaping.

use glam::Vec3;
use hecs::Entity;

use skirmish_core::components::{AgentRuntime, Fighter};
use skirmish_core::config::ArenaConfig;
use skirmish_core::types::{yaw, Transform};
use skirmish_tactics::fan::ray_fan_offsets;
use skirmish_tactics::spread::spread_yaw_offsets;

use crate::physics::PhysicsWorld;
use crate::store::EntityStore;
use crate::systems::detection::scan_fan;
use crate::systems::melee::is_live_combatant;
use crate::world_setup;

/// Clearance between the shooter's collider and a fresh projectile.
const MUZZLE_GAP: f32 = 0.05;

/// Fire a volley if the shooter is off cooldown. Returns the number of
/// projectiles staged, or `None` if the request was ignored.
pub fn try_fire(
    store: &mut EntityStore,
    config: &ArenaConfig,
    shooter: Entity,
    now: f64,
) -> Option<u32> {
    let started = store.update::<Fighter, _>(shooter, |fighter| {
        if !fighter.alive || !fighter.attack.is_ready(now) {
            return false;
        }
        fighter.attack.trigger(now);
        true
    })?;
    if !started {
        return None;
    }
    fire_volley(store, config, shooter)
}

/// Stage one projectile per spread offset, spawned just ahead of the
/// shooter and parented to it.
pub fn fire_volley(store: &mut EntityStore, config: &ArenaConfig, shooter: Entity) -> Option<u32> {
    let transform = store.get::<Transform>(shooter)?;
    let ranged = &config.ranged;
    let muzzle = muzzle_position(&transform, config);

    let offsets = spread_yaw_offsets(ranged.spread, ranged.spread_step);
    for &offset in &offsets {
        let rotation = yaw(offset) * transform.rotation;
        world_setup::spawn_projectile(store, ranged, shooter, muzzle, rotation);
    }
    Some(offsets.len() as u32)
}

/// Every detection cadence, pay `+aim_shaping_bonus` if an opponent is in
/// the shooter's detection cone and `-aim_shaping_bonus` otherwise.
/// Returns whether an opponent was seen, or `None` if not due yet.
pub fn aim_shaping<P: PhysicsWorld + ?Sized>(
    store: &mut EntityStore,
    physics: &P,
    config: &ArenaConfig,
    shooter: Entity,
    now: f64,
) -> Option<bool> {
    let due = store.update::<Fighter, _>(shooter, |fighter| {
        if !fighter.detection.is_ready(now) {
            return false;
        }
        fighter.detection.trigger(now);
        true
    })?;
    if !due {
        return None;
    }

    let transform = store.get::<Transform>(shooter)?;
    let team = store.get::<Fighter>(shooter)?.team;
    let ranged = &config.ranged;
    let offsets = ray_fan_offsets(ranged.detection_accuracy, ranged.detection_angle);
    let scan = scan_fan(physics, store, shooter, &transform, &offsets, ranged.range, |e| {
        is_live_combatant(store, e)
            && store.get::<AgentRuntime>(e).is_some_and(|r| r.team != team)
    });

    let seen = scan.target.is_some();
    let bonus = config.rewards.aim_shaping_bonus;
    let delta = if seen { bonus } else { -bonus };
    store.update::<AgentRuntime, _>(shooter, |r| r.accumulated_reward += delta);
    Some(seen)
}

/// Where a shooter's projectiles start.
pub fn muzzle_position(transform: &Transform, config: &ArenaConfig) -> Vec3 {
    let clearance =
        config.agent.collider_radius + config.ranged.projectile_radius + MUZZLE_GAP;
    transform.position + transform.forward() * clearance
}
