// src/agent/plugin.rs
use bevy::prelude::*;

use crate::agent::systems::{move_agents, spawn_agent};
use crate::follower::FollowerSet;

pub struct AgentPlugin;

impl Plugin for AgentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_agent)
            // Movement must land before the follower ticks, so the commit
            // resolves this frame's intended position.
            .add_systems(Update, move_agents.before(FollowerSet::Tick));
    }
}
