//! Core types and definitions for the SKIRMISH arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, presentation events, snapshots and constants.
//! It runs no systems; the engine lives in `skirmish-sim`.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{Result, SkirmishError};

#[cfg(test)]
mod tests;
