// src/follower/tracker.rs
//! The per-frame ground resolution core: scan -> cast -> filter ->
//! integrate -> commit/rollback. Pure over the [`SurfaceCatalog`] seam so
//! the whole pipeline runs in tests without a scene graph.

use bevy::prelude::*;

use crate::follower::components::{FollowerState, ResolvedSurfaces, TrackPhase};
use crate::follower::config::FollowerConfig;
use crate::follower::gravity::Gravity;
use crate::follower::scan::plan_candidates;
use crate::follower::space::AgentFrame;
use crate::scene::{SurfaceCatalog, SurfaceHit};

/// What one tick decided. The caller applies `local` writes to the agent
/// transform; everything else already happened in `state`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickResult {
    /// Disabled, unconstrained (empty walkable set), or the stillness
    /// short-circuit: nothing sampled, nothing changed.
    Idle,
    /// A candidate was accepted and committed.
    Committed { local: Vec3, grounded: bool },
    /// Every candidate failed after a previous landing: revert to the last
    /// known-good position.
    RolledBack { local: Vec3 },
    /// Every candidate failed and there is no known-good position yet;
    /// the agent keeps its intended position.
    NoSurface,
}

/// Resolve ground for one agent for one frame.
///
/// Never panics, never fails the caller's frame: any internal miss
/// degrades to `NoSurface` / rollback semantics.
pub fn tick(
    cfg: &FollowerConfig,
    surfaces: &ResolvedSurfaces,
    state: &mut FollowerState,
    catalog: &impl SurfaceCatalog,
    frame: &AgentFrame,
    dt: f32,
) -> TickResult {
    if !cfg.enabled || surfaces.walkable.is_empty() {
        return TickResult::Idle;
    }

    let intended = frame.intended_world();

    // Stillness: grounded and not meaningfully away from the last commit
    // means no raycast at all this frame.
    if state.vertical_velocity == 0.0 {
        if let Some(last) = state.last_known {
            if (intended - last).length() <= cfg.rest_epsilon {
                return TickResult::Idle;
            }
        }
    }

    let origin = state.last_known.unwrap_or(intended);
    let accepted = scan(cfg, surfaces, catalog, origin, intended);

    let Some(hit) = accepted else {
        if state.has_ever_landed {
            // Unsupported space ahead; hold the line.
            let last = state.last_known.unwrap_or(intended);
            debug!("ground scan failed, rolling back to {last}");
            return TickResult::RolledBack { local: frame.absolute_local(last) };
        }
        return TickResult::NoSurface;
    };

    let gravity = Gravity {
        rate: cfg.gravity_rate,
        terminal: cfg.terminal_velocity,
        epsilon: cfg.rest_epsilon,
    };
    let resting_y = hit.point.y + cfg.agent_height;
    let step = gravity.step(state.vertical_velocity, intended.y, resting_y, dt);

    let phase = if step.grounded { TrackPhase::Grounded } else { TrackPhase::Falling };
    if phase != state.phase {
        debug!("{:?} -> {:?}", state.phase, phase);
        state.phase = phase;
    }
    state.vertical_velocity = step.velocity;

    let resolved = Vec3::new(hit.point.x, step.applied_y, hit.point.z);
    state.last_known = Some(resolved);
    state.has_ever_landed = true;

    TickResult::Committed {
        local: frame.committed_local(resolved),
        grounded: step.grounded,
    }
}

/// Try each scan candidate in table order; first non-excluded nearest hit
/// wins.
fn scan(
    cfg: &FollowerConfig,
    surfaces: &ResolvedSurfaces,
    catalog: &impl SurfaceCatalog,
    origin: Vec3,
    intended: Vec3,
) -> Option<SurfaceHit> {
    // Cast from above the candidate's feet, raised by the terminal
    // velocity so the ray still reaches ground mid-fall at full speed.
    let lift = cfg.terminal_velocity - cfg.agent_height;
    let max_distance = if cfg.max_fall_distance > 0.0 {
        cfg.max_fall_distance + cfg.terminal_velocity
    } else {
        f32::INFINITY
    };

    for candidate in plan_candidates(origin, intended) {
        let ray_origin = Vec3::new(candidate.x, candidate.y + lift, candidate.z);
        let hits = catalog.intersect_ray(ray_origin, Vec3::NEG_Y, max_distance, &surfaces.walkable);
        let Some(&nearest) = hits.first() else { continue };
        if surfaces.is_excluded(nearest.surface) {
            debug!("candidate {candidate} rejected: hit excluded surface");
            continue;
        }
        return Some(nearest);
    }
    None
}
