//! Arena coordinator: spawning, alive counts, win detection and terminal
//! reward for one arena.
//!
//! Phases cycle `Idle -> Populated -> Resetting -> Populated -> ...`.
//! There is no terminal phase; an arena lives for the whole training run.

use std::collections::BTreeSet;

use glam::Vec3;
use hecs::Entity;
use rand::Rng;
use tracing::{debug, info};

use skirmish_core::components::{AgentRuntime, Fighter};
use skirmish_core::config::{ArenaConfig, TeamSizePolicy};
use skirmish_core::constants::{TERMINAL_LOSS_REWARD, TERMINAL_WIN_REWARD};
use skirmish_core::enums::{ArenaPhase, EpisodeOutcome, Team};
use skirmish_core::state::{EpisodeSummary, FinalReward};
use skirmish_core::types::Transform;
use skirmish_tactics::spawn::{spawn_position, spawn_yaw};

use crate::decision::drain_reward;
use crate::match_stats::SharedMatchStats;
use crate::store::EntityStore;
use crate::systems::{expiry, lifecycle};
use crate::world_setup;

pub struct ArenaCoordinator {
    center: Vec3,
    phase: ArenaPhase,
    /// Team sizes resolved at the last arena reset.
    team_sizes: (u32, u32),
    alive_team_one: u32,
    alive_team_two: u32,
    /// Spawned agents in spawn order: Team One first, then Team Two.
    agents: Vec<Entity>,
    /// Agents already reported dead this episode.
    fallen: BTreeSet<Entity>,
    stats: SharedMatchStats,
}

impl ArenaCoordinator {
    pub fn new(center: Vec3, stats: SharedMatchStats) -> Self {
        Self {
            center,
            phase: ArenaPhase::Idle,
            team_sizes: (0, 0),
            alive_team_one: 0,
            alive_team_two: 0,
            agents: Vec::new(),
            fallen: BTreeSet::new(),
            stats,
        }
    }

    /// Draw the team sizes for an episode. A randomized policy draws one
    /// size from `[min, max)` and gives it to both teams.
    pub fn resolve_team_sizes<R: Rng>(policy: TeamSizePolicy, rng: &mut R) -> (u32, u32) {
        match policy {
            TeamSizePolicy::Fixed { team_one, team_two } => (team_one, team_two),
            TeamSizePolicy::Randomized { min, max } => {
                let n = if max > min { rng.gen_range(min..max) } else { min };
                (n, n)
            }
        }
    }

    /// Despawn every tracked agent and spawn a fresh roster, then begin an
    /// episode. Projectiles owned by the old agents are force-expired and
    /// go on the next expiry pass.
    ///
    /// Runs between ticks: the command buffer must already be flushed, so
    /// every volley the old agents fired is in the world.
    pub fn reset_arena<R: Rng>(
        &mut self,
        store: &mut EntityStore,
        config: &ArenaConfig,
        rng: &mut R,
        now: f64,
    ) {
        for &agent in &self.agents {
            expiry::force_expire_owned_by(store.world_mut(), agent);
            store.despawn(agent);
        }
        self.agents.clear();

        self.team_sizes = Self::resolve_team_sizes(config.arena.team_sizes, rng);
        let (team_one, team_two) = self.team_sizes;
        let roster = [
            (Team::TeamOne, config.arena.team_one_kind, team_one),
            (Team::TeamTwo, config.arena.team_two_kind, team_two),
        ];
        for (team, kind, count) in roster {
            for _ in 0..count {
                let position = spawn_position(rng, &config.arena, team, self.center);
                let heading = spawn_yaw(rng, kind, team);
                let agent = world_setup::spawn_agent(
                    store,
                    config,
                    kind,
                    team,
                    Transform::from_yaw(position, heading),
                );
                lifecycle::arm_fighter(store, config, agent, now);
                self.agents.push(agent);
            }
        }

        info!(team_one, team_two, center = ?self.center, "arena reset");
        self.on_episode_begin();
    }

    /// Reset the alive counts to the current team sizes and start a new
    /// episode.
    pub fn on_episode_begin(&mut self) {
        (self.alive_team_one, self.alive_team_two) = self.team_sizes;
        self.fallen.clear();
        self.phase = ArenaPhase::Populated;
    }

    /// Start the next episode after one was decided. Agents are reset in
    /// place unless the layout asks for a full respawn. Called after the
    /// tick-end flush, like [`Self::reset_arena`].
    pub fn begin_next_episode<R: Rng>(
        &mut self,
        store: &mut EntityStore,
        config: &ArenaConfig,
        rng: &mut R,
        now: f64,
    ) {
        if config.arena.respawn_each_episode {
            self.reset_arena(store, config, rng, now);
            return;
        }
        for &agent in &self.agents {
            lifecycle::reset_agent(store, config, rng, self.center, agent, now);
        }
        self.on_episode_begin();
    }

    /// Record that `agent` of `team` died. Returns `false` without touching
    /// the counts if the agent was already reported this episode.
    pub fn notify_death(&mut self, agent: Entity, team: Team) -> bool {
        if !self.fallen.insert(agent) {
            debug!(?agent, ?team, "duplicate death notification ignored");
            return false;
        }
        match team {
            Team::TeamOne => self.alive_team_one = self.alive_team_one.saturating_sub(1),
            Team::TeamTwo => self.alive_team_two = self.alive_team_two.saturating_sub(1),
            Team::Dead => {
                debug!(?agent, "death notification without a home team");
                return false;
            }
        }
        true
    }

    /// Outcome implied by the current alive counts, if the episode is over.
    pub fn episode_outcome(&self) -> Option<EpisodeOutcome> {
        match (self.alive_team_one, self.alive_team_two) {
            (0, 0) => Some(EpisodeOutcome::Draw),
            (0, _) => Some(EpisodeOutcome::Win(Team::TeamTwo)),
            (_, 0) => Some(EpisodeOutcome::Win(Team::TeamOne)),
            _ => None,
        }
    }

    /// End the episode if either team is wiped out.
    ///
    /// On a win every agent gets the terminal reward for its home team; a
    /// draw adds nothing. Every ledger is then drained into the summary.
    /// Fires at most once per episode.
    pub fn check_episode_done(&mut self, store: &mut EntityStore, tick: u64) -> Option<EpisodeSummary> {
        if self.phase != ArenaPhase::Populated {
            return None;
        }
        let outcome = self.episode_outcome()?;

        let mut rewards = Vec::with_capacity(self.agents.len());
        for &agent in &self.agents {
            let Some(team) = store.get::<Fighter>(agent).map(|f| f.team) else {
                continue;
            };
            if let Some(winner) = outcome.winner() {
                let terminal = if team == winner {
                    TERMINAL_WIN_REWARD
                } else {
                    TERMINAL_LOSS_REWARD
                };
                store.update::<AgentRuntime, _>(agent, |r| r.accumulated_reward += terminal);
            }
            if let Some(reward) = drain_reward(store, agent) {
                rewards.push(FinalReward {
                    agent: agent.into(),
                    team,
                    reward,
                });
            }
        }

        if outcome.winner().is_some() {
            self.stats.record(outcome);
        }
        self.phase = ArenaPhase::Resetting;
        info!(?outcome, tick, agents = rewards.len(), "episode ended");

        Some(EpisodeSummary {
            outcome,
            tick,
            rewards,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn phase(&self) -> ArenaPhase {
        self.phase
    }

    pub fn agents(&self) -> &[Entity] {
        &self.agents
    }

    pub fn team_sizes(&self) -> (u32, u32) {
        self.team_sizes
    }

    /// Alive counts as `(team_one, team_two)`.
    pub fn alive_counts(&self) -> (u32, u32) {
        (self.alive_team_one, self.alive_team_two)
    }

    pub fn stats(&self) -> &SharedMatchStats {
        &self.stats
    }

    /// Overwrite the alive counts directly.
    #[cfg(test)]
    pub(crate) fn set_alive_counts(&mut self, team_one: u32, team_two: u32) {
        self.alive_team_one = team_one;
        self.alive_team_two = team_two;
        self.phase = ArenaPhase::Populated;
    }
}
