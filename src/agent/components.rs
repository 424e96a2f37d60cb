// src/agent/components.rs
use bevy::prelude::*;

/// The demo's moving thing. Horizontal motion is driven by
/// [`crate::agent::systems::move_agents`]; vertical placement belongs to
/// the ground follower.
#[derive(Component)]
pub struct Agent {
    /// Horizontal speed in units per second.
    pub speed: f32,
}

/// A closed patrol loop in world XZ (Y is ignored by the mover).
#[derive(Component)]
pub struct Patrol {
    pub points: Vec<Vec2>,
    pub next: usize,
}

impl Patrol {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points, next: 0 }
    }

    pub fn target(&self) -> Option<Vec2> {
        self.points.get(self.next).copied()
    }

    pub fn advance(&mut self) {
        if !self.points.is_empty() {
            self.next = (self.next + 1) % self.points.len();
        }
    }
}
