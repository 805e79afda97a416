//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs the per-tick systems, resolves melee and
//! projectile combat, and coordinates episodes across arenas.

pub mod coordinator;
pub mod decision;
pub mod engine;
pub mod match_stats;
pub mod physics;
pub mod session;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use engine::{ArenaEngine, SimConfig, TickReport};
pub use match_stats::{MatchStats, SharedMatchStats};
pub use session::TrainingSession;
pub use skirmish_core as core;
