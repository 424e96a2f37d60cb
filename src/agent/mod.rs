// src/agent/mod.rs

// these sub-modules stay private
mod components;
mod plugin;
mod systems;

// re-export the one thing callers actually need:
pub use plugin::AgentPlugin;
