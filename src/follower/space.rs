// src/follower/space.rs
//! The one place world <-> parent-local conversion happens.
//!
//! The follower samples and writes agent positions exactly through
//! [`AgentFrame`], so origin-height compensation and parent-space math are
//! not scattered across the tick.

use bevy::math::Affine3A;
use bevy::prelude::*;

/// Snapshot of the coordinate context for one agent, valid for one tick.
///
/// Preconditions: `world_from_parent` is the agent's parent global affine
/// (identity for root agents) and is invertible; `local_translation` is the
/// agent's current `Transform.translation`; `origin_world`, when set, is
/// the world translation of the configured origin transform and
/// `origin_height` its local height captured at bind time.
#[derive(Clone, Copy, Debug)]
pub struct AgentFrame {
    pub world_from_parent: Affine3A,
    pub local_translation: Vec3,
    pub origin_world: Option<Vec3>,
    pub origin_height: f32,
}

impl AgentFrame {
    pub fn rooted(local_translation: Vec3) -> Self {
        Self {
            world_from_parent: Affine3A::IDENTITY,
            local_translation,
            origin_world: None,
            origin_height: 0.0,
        }
    }

    #[inline]
    fn parent_from_world(&self) -> Affine3A {
        self.world_from_parent.inverse()
    }

    /// The intended world position this frame.
    ///
    /// With an origin configured, horizontal tracking anchors on the origin
    /// transform and its local height is subtracted back out, so the
    /// agent's own vertical motion stays independent of the rig's height.
    pub fn intended_world(&self) -> Vec3 {
        match self.origin_world {
            Some(origin) => origin - Vec3::Y * self.origin_height,
            None => self.world_from_parent.transform_point3(self.local_translation),
        }
    }

    /// Local translation that moves the agent from its intended position to
    /// `resolved_world`, as an increment on the current local translation.
    ///
    /// Postcondition: horizontal offsets other systems already applied this
    /// frame survive, because only the intended->resolved delta is added.
    pub fn committed_local(&self, resolved_world: Vec3) -> Vec3 {
        let parent_from_world = self.parent_from_world();
        let target = parent_from_world.transform_point3(resolved_world);
        let intended = parent_from_world.transform_point3(self.intended_world());
        self.local_translation + (target - intended)
    }

    /// Absolute conversion of a world point into agent-local space. Used by
    /// rollback, which overwrites rather than increments.
    pub fn absolute_local(&self, world: Vec3) -> Vec3 {
        self.parent_from_world().transform_point3(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn rooted_frame_is_world_space() {
        let frame = AgentFrame::rooted(Vec3::new(1.0, 2.0, 3.0));
        assert!(close(frame.intended_world(), Vec3::new(1.0, 2.0, 3.0)));
        assert!(close(frame.committed_local(Vec3::new(1.0, 0.5, 3.0)), Vec3::new(1.0, 0.5, 3.0)));
        assert!(close(frame.absolute_local(Vec3::splat(7.0)), Vec3::splat(7.0)));
    }

    #[test]
    fn translated_parent_round_trips() {
        let frame = AgentFrame {
            world_from_parent: Affine3A::from_translation(Vec3::new(10.0, 0.0, -5.0)),
            local_translation: Vec3::new(1.0, 2.0, 1.0),
            origin_world: None,
            origin_height: 0.0,
        };
        assert!(close(frame.intended_world(), Vec3::new(11.0, 2.0, -4.0)));
        // Drop the agent half a unit in world space.
        let local = frame.committed_local(Vec3::new(11.0, 1.5, -4.0));
        assert!(close(local, Vec3::new(1.0, 1.5, 1.0)));
    }

    #[test]
    fn rotated_parent_keeps_the_delta_in_world_terms() {
        let frame = AgentFrame {
            world_from_parent: Affine3A::from_rotation_y(std::f32::consts::FRAC_PI_2),
            local_translation: Vec3::new(2.0, 1.0, 0.0),
            origin_world: None,
            origin_height: 0.0,
        };
        let intended = frame.intended_world();
        let resolved = intended - Vec3::Y * 0.25;
        let local = frame.committed_local(resolved);
        // Re-projecting the written local through the parent lands exactly
        // on the resolved world point.
        assert!(close(frame.world_from_parent.transform_point3(local), resolved));
    }

    #[test]
    fn origin_compensation_anchors_horizontal_on_the_rig_head() {
        // Origin (a head transform 1.6 up inside the rig) sits at world
        // (4, 3.6, 0); the rig base therefore samples at (4, 2.0, 0).
        let frame = AgentFrame {
            world_from_parent: Affine3A::IDENTITY,
            local_translation: Vec3::new(3.0, 2.0, 0.0),
            origin_world: Some(Vec3::new(4.0, 3.6, 0.0)),
            origin_height: 1.6,
        };
        assert!(close(frame.intended_world(), Vec3::new(4.0, 2.0, 0.0)));
        // Resolving to exactly the sampled point means the head is already
        // above valid ground: the rig itself must not move.
        let local = frame.committed_local(Vec3::new(4.0, 2.0, 0.0));
        assert!(close(local, Vec3::new(3.0, 2.0, 0.0)));
        // Ground 0.4 lower: only the rig's Y follows.
        let local = frame.committed_local(Vec3::new(4.0, 1.6, 0.0));
        assert!(close(local, Vec3::new(3.0, 1.6, 0.0)));
    }
}
