//! Snapshot builder: reads the world and produces an `ArenaSnapshot`.

use skirmish_core::components::{AgentRuntime, Fighter, ImpactEffect, ProjectileRuntime};
use skirmish_core::state::{AgentSnapshot, ArenaSnapshot};
use skirmish_core::types::{SimTime, Transform};

use crate::coordinator::ArenaCoordinator;
use crate::store::EntityStore;

pub fn build_snapshot(store: &EntityStore, coordinator: &ArenaCoordinator, time: &SimTime) -> ArenaSnapshot {
    let agents = coordinator
        .agents()
        .iter()
        .filter_map(|&entity| {
            let runtime = store.get::<AgentRuntime>(entity)?;
            let fighter = store.get::<Fighter>(entity)?;
            let transform = store.get::<Transform>(entity)?;
            Some(AgentSnapshot {
                id: entity.into(),
                kind: fighter.kind,
                home_team: fighter.team,
                team: runtime.team,
                health: runtime.health,
                alive: fighter.alive,
                state: fighter.state,
                reward: runtime.accumulated_reward,
                position: transform.position.to_array(),
                yaw_degrees: transform.yaw_degrees(),
            })
        })
        .collect();

    let (alive_team_one, alive_team_two) = coordinator.alive_counts();
    ArenaSnapshot {
        time: *time,
        phase: coordinator.phase(),
        alive_team_one,
        alive_team_two,
        agents,
        projectiles: store.count::<ProjectileRuntime>() as u32,
        effects: store.count::<ImpactEffect>() as u32,
    }
}
