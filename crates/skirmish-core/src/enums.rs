//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Team membership of an agent.
///
/// `Dead` is a tombstone written into an agent's runtime data when its
/// health drops to zero. It never appears as a fighter's home team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    #[default]
    TeamOne,
    TeamTwo,
    Dead,
}

impl Team {
    /// The opposing team. `Dead` has no opponent.
    pub fn opponent(self) -> Option<Team> {
        match self {
            Team::TeamOne => Some(Team::TeamTwo),
            Team::TeamTwo => Some(Team::TeamOne),
            Team::Dead => None,
        }
    }

    /// Whether this value tags a living combatant.
    pub fn is_combatant(self) -> bool {
        matches!(self, Team::TeamOne | Team::TeamTwo)
    }
}

/// Which perform-action strategy an agent runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterKind {
    /// Melee fighter: cone ray detection, impulse and damage on the first hit.
    #[default]
    Warrior,
    /// Ranged fighter: fires a spread volley of projectiles.
    Ranged,
}

/// Animation state exposed to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
    Attacking,
    Shooting,
    Dead,
}

/// How an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    /// Exactly one team has survivors.
    Win(Team),
    /// Both teams were wiped out on the same frame.
    Draw,
}

impl EpisodeOutcome {
    pub fn winner(self) -> Option<Team> {
        match self {
            EpisodeOutcome::Win(team) => Some(team),
            EpisodeOutcome::Draw => None,
        }
    }
}

/// Lifecycle of an arena. Cyclic: there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaPhase {
    /// No agents spawned yet.
    #[default]
    Idle,
    /// Episode running.
    Populated,
    /// Episode decided, agents being reset.
    Resetting,
}
