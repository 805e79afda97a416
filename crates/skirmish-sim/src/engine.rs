//! Arena engine: one arena's world, systems and episode loop.
//!
//! `ArenaEngine` owns the entity store, the physics backend, the arena
//! coordinator and a seeded RNG. Each call to [`ArenaEngine::tick`] takes
//! one batch of actions and runs every system once, in a fixed order.
//! Completely headless, so the same seed and the same actions reproduce
//! the same episode.

use std::collections::BTreeMap;

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use skirmish_core::config::ArenaConfig;
use skirmish_core::constants::DT;
use skirmish_core::error::{Result, SkirmishError};
use skirmish_core::events::{AgentId, ArenaEvent};
use skirmish_core::state::{ArenaSnapshot, EpisodeSummary};
use skirmish_core::types::SimTime;

use crate::coordinator::ArenaCoordinator;
use crate::decision::{self, Action, AgentAction, DecisionRequest};
use crate::match_stats::SharedMatchStats;
use crate::physics::{PhysicsWorld, SpherePhysics};
use crate::store::EntityStore;
use crate::systems;
use crate::systems::agent::StepContext;
use crate::systems::collision::CollisionStats;

/// Configuration for starting an arena engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Seconds per tick.
    pub dt: f32,
    /// World-space center of the arena.
    pub center: Vec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dt: DT,
            center: Vec3::ZERO,
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Tick number that was simulated.
    pub tick: u64,
    pub collisions: CollisionStats,
    /// Agents whose death edge fired this tick.
    pub deaths: u32,
    /// Set on the tick an episode is decided.
    pub episode: Option<EpisodeSummary>,
}

pub struct ArenaEngine<P: PhysicsWorld = SpherePhysics> {
    store: EntityStore,
    physics: P,
    coordinator: ArenaCoordinator,
    config: ArenaConfig,
    time: SimTime,
    dt: f32,
    rng: ChaCha8Rng,
    events: Vec<ArenaEvent>,
}

impl ArenaEngine<SpherePhysics> {
    /// Engine with the headless sphere physics backend.
    pub fn new(sim: SimConfig, config: ArenaConfig, stats: SharedMatchStats) -> Self {
        Self::with_physics(sim, config, stats, SpherePhysics)
    }
}

impl<P: PhysicsWorld> ArenaEngine<P> {
    pub fn with_physics(sim: SimConfig, config: ArenaConfig, stats: SharedMatchStats, physics: P) -> Self {
        Self {
            store: EntityStore::new(),
            physics,
            coordinator: ArenaCoordinator::new(sim.center, stats),
            config,
            time: SimTime::default(),
            dt: sim.dt,
            rng: ChaCha8Rng::seed_from_u64(sim.seed),
            events: Vec::new(),
        }
    }

    /// Replace every agent with a fresh roster and begin an episode.
    pub fn reset_arena(&mut self) {
        let now = self.time.elapsed_secs;
        self.coordinator
            .reset_arena(&mut self.store, &self.config, &mut self.rng, now);
    }

    /// Restore alive counts for a new episode without touching the agents.
    pub fn on_episode_begin(&mut self) {
        self.coordinator.on_episode_begin();
    }

    /// Drain every agent's reward ledger for a decision step.
    pub fn request_decisions(&mut self) -> Vec<DecisionRequest> {
        decision::collect_requests(&mut self.store, self.coordinator.agents())
    }

    /// Read and zero one agent's reward ledger.
    pub fn drain_reward(&mut self, agent: Entity) -> Result<f32> {
        decision::drain_reward(&mut self.store, agent)
            .ok_or(SkirmishError::UnknownAgent(AgentId::from(agent)))
    }

    /// Advance one tick.
    ///
    /// The whole batch is validated first; a malformed or unknown entry
    /// rejects the tick and leaves the world untouched. Agents without an
    /// action stand idle. Later entries for the same agent win.
    pub fn tick(&mut self, actions: &[AgentAction]) -> Result<TickReport> {
        let actions = self.validate(actions).inspect_err(|err| {
            warn!(tick = self.time.tick, %err, "action batch rejected");
        })?;

        let dt = self.dt;
        let now = self.time.elapsed_secs;
        let tick = self.time.tick;

        systems::movement::run(self.store.world_mut(), dt);
        systems::movement::integrate_velocity(
            self.store.world_mut(),
            dt,
            self.config.agent.velocity_damping,
        );
        systems::expiry::run(&mut self.store, dt);

        let pairs = self.physics.collision_events(self.store.world());
        let collisions = systems::collision::run(&mut self.store, &pairs, &self.config.rewards);

        let ctx = StepContext {
            physics: &self.physics,
            config: &self.config,
            now,
            dt,
        };
        for &agent in self.coordinator.agents() {
            let action = actions.get(&agent).copied().unwrap_or_else(Action::idle);
            systems::agent::step(&mut self.store, &ctx, agent, &action, &mut self.events);
        }

        let deaths =
            systems::lifecycle::detect_deaths(&mut self.store, &mut self.coordinator, &mut self.events);

        let episode = self.coordinator.check_episode_done(&mut self.store, tick);
        self.store.flush();

        // Volleys fired this tick are in the world now, so the reset below
        // force-expires them along with older ones.
        if let Some(summary) = &episode {
            self.events.push(ArenaEvent::EpisodeEnded {
                outcome: summary.outcome,
            });
            self.coordinator
                .begin_next_episode(&mut self.store, &self.config, &mut self.rng, now);
        }
        self.time.advance(dt);

        Ok(TickReport {
            tick,
            collisions,
            deaths,
            episode,
        })
    }

    fn validate(&self, actions: &[AgentAction]) -> Result<BTreeMap<Entity, Action>> {
        let mut parsed = BTreeMap::new();
        for entry in actions {
            let id = AgentId::from(entry.agent);
            if !self.coordinator.agents().contains(&entry.agent) {
                return Err(SkirmishError::UnknownAgent(id));
            }
            parsed.insert(entry.agent, Action::parse(id, &entry.values)?);
        }
        Ok(parsed)
    }

    /// Presentation events since the last call.
    pub fn take_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> ArenaSnapshot {
        systems::snapshot::build_snapshot(&self.store, &self.coordinator, &self.time)
    }

    pub fn agents(&self) -> &[Entity] {
        self.coordinator.agents()
    }

    pub fn coordinator(&self) -> &ArenaCoordinator {
        &self.coordinator
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        self.store.world()
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[cfg(test)]
    pub(crate) fn coordinator_mut(&mut self) -> &mut ArenaCoordinator {
        &mut self.coordinator
    }
}
