// src/follower/mod.rs

mod components;
mod config;
mod gravity;
mod plugin;
mod scan;
mod space;
mod systems;
mod tracker;

// Re-export what agents and app wiring actually need:
pub use components::{FollowerState, ResolvedSurfaces, TrackPhase};
pub use config::{load_or_default, FollowerConfig, FollowerConfigError};
pub use plugin::{FollowerSet, GroundFollowerPlugin};
pub use tracker::{tick, TickResult};
