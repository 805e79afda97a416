//! Projectile collision resolution.
//!
//! Consumes the tick's overlap pairs. Each pair is checked in both orders
//! so a projectile is recognized whichever side of the pair it is on.
//!
//! Agent data is staged: the first time a pass touches an agent its
//! runtime data is copied out of the world, every later event in the same
//! pass reads and writes that copy, and the copies are written back once
//! at the end. Two hits on one victim in a tick therefore compound instead
//! of overwriting each other. Impact effects and projectile despawns go to
//! the command buffer.

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec3;
use hecs::Entity;
use tracing::trace;

use skirmish_core::components::{AgentRuntime, ProjectileRuntime};
use skirmish_core::config::RewardConfig;
use skirmish_core::enums::Team;
use skirmish_core::types::Transform;

use crate::physics::CollisionEvent;
use crate::store::EntityStore;
use crate::world_setup;

/// What one collision pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub projectiles_consumed: u32,
    /// Projectile hits on a living agent, friendly or not.
    pub hits: u32,
    pub friendly_hits: u32,
    /// Victims whose health crossed to zero or below.
    pub kills: u32,
}

pub fn run(store: &mut EntityStore, events: &[CollisionEvent], rewards: &RewardConfig) -> CollisionStats {
    let mut pass = CollisionPass {
        rewards,
        staged: BTreeMap::new(),
        consumed: BTreeSet::new(),
        stats: CollisionStats::default(),
    };
    for event in events {
        pass.projectile_to_agent(store, event.a, event.b);
        pass.projectile_to_agent(store, event.b, event.a);
    }
    pass.commit(store)
}

struct CollisionPass<'a> {
    rewards: &'a RewardConfig,
    staged: BTreeMap<Entity, AgentRuntime>,
    /// Projectiles already spent this pass.
    consumed: BTreeSet<Entity>,
    stats: CollisionStats,
}

impl CollisionPass<'_> {
    /// Staged copy of an agent's runtime data, loading it on first use.
    fn agent(&mut self, store: &EntityStore, entity: Entity) -> Option<AgentRuntime> {
        if let Some(runtime) = self.staged.get(&entity) {
            return Some(*runtime);
        }
        let runtime = store.get::<AgentRuntime>(entity)?;
        self.staged.insert(entity, runtime);
        Some(runtime)
    }

    fn projectile_to_agent(&mut self, store: &mut EntityStore, first: Entity, second: Entity) {
        let Some(projectile) = store.get::<ProjectileRuntime>(first) else {
            return;
        };
        // A projectile lands once, even if it overlaps several agents or
        // was already expired this tick.
        if self.consumed.contains(&first) || store.is_pending_destroy(first) {
            return;
        }
        self.consumed.insert(first);
        self.stats.projectiles_consumed += 1;

        let position = store
            .get::<Transform>(first)
            .map_or(Vec3::ZERO, |t| t.position);
        world_setup::spawn_impact_effect(store, position, &projectile);
        store.destroy(first);

        let Some(victim) = self.agent(store, second) else {
            return;
        };
        if victim.health <= 0 {
            return;
        }
        let Some(parent) = self.agent(store, projectile.parent) else {
            trace!(?first, "projectile parent no longer exists; hit ignored");
            return;
        };

        let friendly = parent.team == victim.team;
        let penalty = self.rewards.damage_penalty(projectile.damage);
        let attacker_delta = if friendly {
            -penalty
        } else {
            self.rewards.projectile_hit_bonus
        };
        let victim_penalty = if friendly && !self.rewards.friendly_fire_penalizes_victim {
            0.0
        } else {
            penalty
        };

        self.stats.hits += 1;
        if friendly {
            self.stats.friendly_hits += 1;
        }

        if let Some(v) = self.staged.get_mut(&second) {
            v.accumulated_reward -= victim_penalty;
            v.health -= projectile.damage;
            if v.health <= 0 {
                v.team = Team::Dead;
                self.stats.kills += 1;
            }
        }
        // Applied after the victim update so a self-hit sees both changes.
        if let Some(p) = self.staged.get_mut(&projectile.parent) {
            p.accumulated_reward += attacker_delta;
        }

        trace!(?second, damage = projectile.damage, friendly, "projectile hit");
    }

    fn commit(self, store: &mut EntityStore) -> CollisionStats {
        for (entity, staged) in self.staged {
            store.update::<AgentRuntime, _>(entity, |runtime| *runtime = staged);
        }
        self.stats
    }
}
