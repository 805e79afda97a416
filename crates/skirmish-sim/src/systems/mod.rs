//! ECS systems that operate on the arena world each tick.
//!
//! Systems are free functions over the entity store. They keep no state of
//! their own; structural changes go through the store's command buffer.

pub mod agent;
pub mod collision;
pub mod detection;
pub mod expiry;
pub mod lifecycle;
pub mod melee;
pub mod movement;
pub mod ranged;
pub mod snapshot;
