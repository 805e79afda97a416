//! Training session: many arenas in one process, sharing match counters.

use glam::Vec3;

use skirmish_core::config::ArenaConfig;
use skirmish_core::constants::DT;

use crate::engine::{ArenaEngine, SimConfig};
use crate::match_stats::{MatchStats, SharedMatchStats};

/// Clear space left between neighbouring arenas (units).
const ARENA_GAP: f32 = 10.0;

pub struct TrainingSession {
    arenas: Vec<ArenaEngine>,
    stats: SharedMatchStats,
}

impl TrainingSession {
    /// `count` arenas laid out side by side along +X. Arena `i` is seeded
    /// with `seed + i`.
    pub fn new(count: usize, seed: u64, config: ArenaConfig) -> Self {
        let stats = SharedMatchStats::new();
        let spacing = config.arena.range * 2.0 + ARENA_GAP;
        let arenas = (0..count)
            .map(|i| {
                let sim = SimConfig {
                    seed: seed.wrapping_add(i as u64),
                    dt: DT,
                    center: Vec3::new(spacing * i as f32, 0.0, 0.0),
                };
                ArenaEngine::new(sim, config.clone(), stats.clone())
            })
            .collect();
        Self { arenas, stats }
    }

    /// Start a fresh episode in every arena.
    pub fn reset_all(&mut self) {
        for arena in &mut self.arenas {
            arena.reset_arena();
        }
    }

    pub fn arenas(&self) -> &[ArenaEngine] {
        &self.arenas
    }

    pub fn arenas_mut(&mut self) -> &mut [ArenaEngine] {
        &mut self.arenas
    }

    pub fn arena(&self, index: usize) -> Option<&ArenaEngine> {
        self.arenas.get(index)
    }

    pub fn arena_mut(&mut self, index: usize) -> Option<&mut ArenaEngine> {
        self.arenas.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.arenas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arenas.is_empty()
    }

    /// Copy of the shared win counters.
    pub fn stats(&self) -> MatchStats {
        self.stats.snapshot()
    }
}
