//! Win/loss counters aggregated across episodes.
//!
//! Used only for reporting. One [`SharedMatchStats`] is created per
//! training process and handed to every arena; tests create their own.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use skirmish_core::constants::MATCH_WINDOW;
use skirmish_core::enums::{EpisodeOutcome, Team};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub team_one_wins_total: u64,
    pub team_two_wins_total: u64,
    /// Wins in the current window.
    pub team_one_wins: u32,
    pub team_two_wins: u32,
    /// Decided episodes counted into the current window.
    pub window_episodes: u32,
}

impl MatchStats {
    /// Count an episode outcome. Draws are not counted. After
    /// `MATCH_WINDOW` decided episodes the window counters restart at zero.
    pub fn record(&mut self, outcome: EpisodeOutcome) {
        let winner = match outcome {
            EpisodeOutcome::Win(team) => team,
            EpisodeOutcome::Draw => return,
        };

        match winner {
            Team::TeamOne => {
                self.team_one_wins += 1;
                self.team_one_wins_total += 1;
            }
            Team::TeamTwo => {
                self.team_two_wins += 1;
                self.team_two_wins_total += 1;
            }
            Team::Dead => return,
        }

        self.window_episodes += 1;
        if self.window_episodes >= MATCH_WINDOW {
            self.team_one_wins = 0;
            self.team_two_wins = 0;
            self.window_episodes = 0;
        }
    }

    pub fn decided_total(&self) -> u64 {
        self.team_one_wins_total + self.team_two_wins_total
    }
}

/// Process-scoped handle to one set of match counters.
#[derive(Debug, Clone, Default)]
pub struct SharedMatchStats(Arc<Mutex<MatchStats>>);

impl SharedMatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: EpisodeOutcome) {
        self.lock().record(outcome);
    }

    /// Copy of the current counters.
    pub fn snapshot(&self) -> MatchStats {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, MatchStats> {
        // Counters stay usable even if a holder panicked mid-update.
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
