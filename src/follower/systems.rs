// src/follower/systems.rs
//! ECS glue around the tracker: (re)binding and the per-frame tick.

use bevy::math::Affine3A;
use bevy::prelude::*;

use crate::follower::components::{FollowerState, ResolvedSurfaces};
use crate::follower::config::FollowerConfig;
use crate::follower::space::AgentFrame;
use crate::follower::tracker::{self, TickResult};
use crate::scene::{MeshSurfaceCatalog, SurfaceCatalog};

/// Resolves the geometry sets and origin anchor whenever a follower's
/// configuration is added or changed, and resets its state. Runs between
/// catalog sync and ticking, so a rebind never interleaves a tick.
pub fn bind_followers(
    catalog: Res<MeshSurfaceCatalog>,
    mut followers: Query<
        (Entity, &FollowerConfig, &mut ResolvedSurfaces, &mut FollowerState),
        Changed<FollowerConfig>,
    >,
    names: Query<&Name>,
    transforms: Query<&Transform>,
    children: Query<&Children>,
) {
    for (agent, cfg, mut surfaces, mut state) in followers.iter_mut() {
        let excluded = catalog.resolve(&cfg.exclude);
        let mut walkable = catalog.resolve(&cfg.walkable);
        // Excluded surfaces stay intersectable so they can be detected
        // (and then rejected) instead of being rayed straight through.
        walkable.extend(excluded.iter().copied());

        if walkable.is_empty() && !cfg.walkable.is_none() {
            warn!(
                "follower {agent}: walkable selector {:?} matched no surfaces; \
                 ground constraint is inert until rebound",
                cfg.walkable
            );
        }

        let (origin, origin_height) = match &cfg.origin {
            None => (None, 0.0),
            Some(name) => match find_descendant_named(agent, name, &names, &children) {
                Some(found) => {
                    let height = transforms.get(found).map(|t| t.translation.y).unwrap_or(0.0);
                    (Some(found), height)
                }
                None => {
                    warn!(
                        "follower {agent}: origin '{name}' not found in subtree, \
                         tracking the agent transform instead"
                    );
                    (None, 0.0)
                }
            },
        };

        *surfaces = ResolvedSurfaces { walkable, excluded, origin, origin_height };
        state.reset();
        debug!(
            "follower {agent} bound: {} walkable, {} excluded",
            surfaces.walkable.len(),
            surfaces.excluded.len()
        );
    }
}

/// Depth-first search of the agent's descendants for a `Name` match.
/// The agent itself is not a candidate; "origin = self" is spelled `None`.
fn find_descendant_named(
    root: Entity,
    name: &str,
    names: &Query<&Name>,
    children: &Query<&Children>,
) -> Option<Entity> {
    let kids = children.get(root).ok()?;
    for &child in kids {
        if names.get(child).is_ok_and(|n| n.as_str() == name) {
            return Some(child);
        }
        if let Some(found) = find_descendant_named(child, name, names, children) {
            return Some(found);
        }
    }
    None
}

/// The per-frame tick: feed each follower's coordinate context into the
/// tracker and apply whatever it committed.
pub fn tick_followers(
    time: Res<Time>,
    catalog: Res<MeshSurfaceCatalog>,
    globals: Query<&GlobalTransform>,
    mut followers: Query<(
        &FollowerConfig,
        &ResolvedSurfaces,
        &mut FollowerState,
        &mut Transform,
        Option<&ChildOf>,
    )>,
) {
    let dt = time.delta_secs();
    for (cfg, surfaces, mut state, mut transform, child_of) in followers.iter_mut() {
        if !cfg.enabled {
            continue;
        }
        let world_from_parent = child_of
            .and_then(|c| globals.get(c.parent()).ok())
            .map(GlobalTransform::affine)
            .unwrap_or(Affine3A::IDENTITY);
        let origin_world = surfaces
            .origin
            .and_then(|e| globals.get(e).ok())
            .map(GlobalTransform::translation);
        let frame = AgentFrame {
            world_from_parent,
            local_translation: transform.translation,
            origin_world,
            origin_height: surfaces.origin_height,
        };
        match tracker::tick(cfg, surfaces, &mut state, catalog.as_ref(), &frame, dt) {
            TickResult::Committed { local, .. } | TickResult::RolledBack { local } => {
                transform.translation = local;
            }
            TickResult::Idle | TickResult::NoSurface => {}
        }
    }
}
