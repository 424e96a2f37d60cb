// src/follower/components.rs
use bevy::prelude::*;

use crate::scene::SurfaceHandle;

/// TRACKING sub-state, kept for logging; no logic branches on it beyond
/// emitting transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackPhase {
    #[default]
    Grounded,
    Falling,
}

/// Per-agent mutable state. Touched only inside the tick, reset exactly at
/// (re)binding. Explicit fields instead of captured closure state so every
/// piece is visible and testable.
#[derive(Component, Clone, Debug, Default)]
pub struct FollowerState {
    /// Last committed ground position (world, height offset included).
    /// `None` until the first successful resolution.
    pub last_known: Option<Vec3>,
    /// Carried across frames; in `[-terminal_velocity, 0]`, exactly 0 while
    /// grounded.
    pub vertical_velocity: f32,
    /// True once any valid surface has been found since the last binding.
    /// Gates rollback: no known-good position, no forced revert.
    pub has_ever_landed: bool,
    pub phase: TrackPhase,
}

impl FollowerState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Geometry sets resolved from the config's selectors at binding time.
/// Read-only during ticks.
#[derive(Component, Clone, Debug, Default)]
pub struct ResolvedSurfaces {
    /// Ray-intersectable ground candidates. Contains the excluded handles
    /// too, appended, so obstacles are still detectable (and rejectable).
    pub walkable: Vec<SurfaceHandle>,
    /// Membership-tested only, at the owning-entity level.
    pub excluded: Vec<SurfaceHandle>,
    /// Alternate horizontal-tracking anchor, if configured and found.
    pub origin: Option<Entity>,
    /// The origin transform's local height, captured at bind time.
    pub origin_height: f32,
}

impl ResolvedSurfaces {
    #[inline]
    pub fn is_excluded(&self, surface: SurfaceHandle) -> bool {
        self.excluded.contains(&surface)
    }
}
