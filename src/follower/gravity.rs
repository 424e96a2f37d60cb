// src/follower/gravity.rs
//! Vertical velocity/gravity integration over an accepted ground hit.
//!
//! The falling test looks ahead by `2 * velocity` below the resting height;
//! this smoothing heuristic is kept as observed behavior, with the
//! constants exposed as tunables on [`crate::follower::FollowerConfig`].

/// Tunables for the integrator, copied out of the follower config.
#[derive(Clone, Copy, Debug)]
pub struct Gravity {
    /// Downward acceleration per second (negative).
    pub rate: f32,
    /// Max magnitude of downward velocity (positive).
    pub terminal: f32,
    /// Resting threshold in scene units.
    pub epsilon: f32,
}

/// One integration step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalStep {
    /// Velocity after this step. 0 exactly when grounded.
    pub velocity: f32,
    /// The Y to actually apply this frame.
    pub applied_y: f32,
    pub grounded: bool,
}

impl Gravity {
    /// Integrate one frame against resting height `resting_y`
    /// (hit point + agent height), given the intended vertical `intended_y`
    /// and the velocity carried in from the previous frame.
    ///
    /// Airborne: velocity accumulates toward `-terminal` and the applied Y
    /// descends from `intended_y` rather than snapping to the ground.
    /// At or below resting height: velocity resets to exactly 0.
    pub fn step(&self, velocity: f32, intended_y: f32, resting_y: f32, dt: f32) -> VerticalStep {
        if intended_y - (resting_y - 2.0 * velocity) > self.epsilon {
            let velocity = (velocity + self.rate * dt).max(-self.terminal);
            VerticalStep {
                velocity,
                applied_y: intended_y + velocity,
                grounded: false,
            }
        } else {
            VerticalStep {
                velocity: 0.0,
                applied_y: resting_y,
                grounded: true,
            }
        }
    }
}
