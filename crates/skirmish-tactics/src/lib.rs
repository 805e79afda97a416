//! Combat geometry for SKIRMISH.
//!
//! Ray-fan ordering for cone detection, spread-volley headings, spawn
//! placement and action steering. Pure functions on plain data with no
//! ECS dependency.

pub mod fan;
pub mod spawn;
pub mod spread;
pub mod steering;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
