use bevy::prelude::*;

mod agent;
mod follower;
mod scene;
mod setup;

// re-export the bits we actually need in main
use agent::AgentPlugin;
use follower::GroundFollowerPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        // your domain plugins
        .add_plugins(GroundFollowerPlugin) // surface catalog + ground resolution
        .add_plugins(AgentPlugin)          // spawns & patrols the demo walker
        // camera, lights, demo geometry
        .add_systems(Startup, setup::setup)
        .run();
}
