// src/follower/plugin.rs
use bevy::prelude::*;

use crate::follower::systems::{bind_followers, tick_followers};
use crate::scene::systems::sync_surface_catalog;
use crate::scene::MeshSurfaceCatalog;

/// Update ordering: surfaces flatten into the catalog, (re)bindings resolve
/// against it, and only then do followers tick. External movement systems
/// should run `.before(FollowerSet::Tick)` so the committer sees the
/// frame's intended position.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FollowerSet {
    Sync,
    Bind,
    Tick,
}

pub struct GroundFollowerPlugin;

impl Plugin for GroundFollowerPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<MeshSurfaceCatalog>()
            .configure_sets(
                Update,
                (
                    FollowerSet::Sync,
                    FollowerSet::Bind.after(FollowerSet::Sync),
                    FollowerSet::Tick.after(FollowerSet::Bind),
                ),
            )
            .add_systems(
                Update,
                (
                    sync_surface_catalog.in_set(FollowerSet::Sync),
                    bind_followers.in_set(FollowerSet::Bind),
                    tick_followers.in_set(FollowerSet::Tick),
                ),
            );
    }
}
