//! Agent liveness: death edges and episode resets.
//!
//! An agent is dead once its health is at or below zero or its runtime
//! team is the `Dead` tombstone; either signal is enough. The
//! gameplay-visible `Fighter::alive` flag flips exactly once per episode,
//! at the edge, and that edge is what reaches the coordinator.

use glam::Vec3;
use hecs::Entity;
use rand::Rng;
use tracing::debug;

use skirmish_core::components::{AgentRuntime, Fighter, Velocity};
use skirmish_core::config::ArenaConfig;
use skirmish_core::enums::{AnimationState, FighterKind};
use skirmish_core::events::ArenaEvent;
use skirmish_core::types::Transform;
use skirmish_tactics::spawn::{spawn_position, spawn_yaw};

use crate::coordinator::ArenaCoordinator;
use crate::store::EntityStore;
use crate::systems::{agent, expiry};

/// Flip newly dead agents to not-alive and report each one to the
/// coordinator. Returns how many died this call.
pub fn detect_deaths(
    store: &mut EntityStore,
    coordinator: &mut ArenaCoordinator,
    events: &mut Vec<ArenaEvent>,
) -> u32 {
    let mut deaths = 0;
    for agent in coordinator.agents().to_vec() {
        let Some(runtime) = store.get::<AgentRuntime>(agent) else {
            continue;
        };
        let Some(fighter) = store.get::<Fighter>(agent) else {
            continue;
        };
        let dead = runtime.health <= 0 || !runtime.team.is_combatant();
        if !(dead && fighter.alive) {
            continue;
        }

        store.update::<Fighter, _>(agent, |f| f.alive = false);
        agent::set_state(store, agent, AnimationState::Dead, events);
        if coordinator.notify_death(agent, fighter.team) {
            deaths += 1;
            events.push(ArenaEvent::Died {
                agent: agent.into(),
                team: fighter.team,
            });
        }
        debug!(?agent, team = ?fighter.team, health = runtime.health, "agent died");
    }
    deaths
}

/// Put an agent back at full health on its home team at a fresh spawn
/// point, and purge projectiles it still has in flight. The reward ledger
/// is left alone; it is drained separately.
pub fn reset_agent<R: Rng>(
    store: &mut EntityStore,
    config: &ArenaConfig,
    rng: &mut R,
    center: Vec3,
    agent: Entity,
    now: f64,
) {
    let Some(fighter) = store.get::<Fighter>(agent) else {
        return;
    };
    let team = fighter.team;

    let position = spawn_position(rng, &config.arena, team, center);
    let heading = spawn_yaw(rng, fighter.kind, team);
    store.set(agent, Transform::from_yaw(position, heading));
    store.set(agent, Velocity::default());
    store.update::<AgentRuntime, _>(agent, |r| {
        r.health = config.agent.max_health;
        r.team = team;
    });
    store.update::<Fighter, _>(agent, |f| {
        f.alive = true;
        f.state = AnimationState::Idle;
    });
    arm_fighter(store, config, agent, now);
    expiry::force_expire_owned_by(store.world_mut(), agent);
}

/// Start an agent's attack timer for a new episode. Warriors wait a
/// fraction of their cooldown before the first swing; ranged fighters may
/// fire at once.
pub fn arm_fighter(store: &mut EntityStore, config: &ArenaConfig, agent: Entity, now: f64) {
    store.update::<Fighter, _>(agent, |f| match f.kind {
        FighterKind::Warrior => f.attack.hold(now, config.melee.reset_delay_fraction),
        FighterKind::Ranged => {
            f.attack.ready_at = now;
            f.detection.ready_at = now;
        }
    });
}
