// src/follower/scan.rs
//! Candidate scan table + planner.
//!
//! Order matters: the straight full-distance heading is always preferred,
//! then a half-distance check of the same heading (catches clipping along
//! the way), then progressively wider, shorter deflections. The first
//! candidate with a valid non-excluded hit wins, which buys limited local
//! obstacle avoidance without any path planning.

use bevy::prelude::*;

/// `(yaw degrees, fraction of intended displacement)`, fixed for the life
/// of the program.
pub const SCAN_TABLE: [(f32, f32); 8] = [
    (0.0, 1.0),
    (0.0, 0.5),
    (30.0, 0.75),
    (-30.0, 0.75),
    (60.0, 0.5),
    (-60.0, 0.5),
    (80.0, 0.25),
    (-80.0, 0.25),
];

/// The world points to test for frame movement `origin -> intended`,
/// in preference order.
pub fn plan_candidates(origin: Vec3, intended: Vec3) -> [Vec3; SCAN_TABLE.len()] {
    let displacement = intended - origin;
    SCAN_TABLE.map(|(angle_deg, frac)| {
        let rotated = Quat::from_rotation_y(angle_deg.to_radians()) * displacement;
        origin + rotated * frac
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn primary_candidate_is_the_intended_point() {
        let p0 = Vec3::new(1.0, 2.0, 3.0);
        let p1 = Vec3::new(4.0, 2.0, 7.0);
        let candidates = plan_candidates(p0, p1);
        assert!(close(candidates[0], p1));
    }

    #[test]
    fn second_candidate_is_the_halfway_clip_check() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(2.0, 0.0, 0.0);
        let candidates = plan_candidates(p0, p1);
        assert!(close(candidates[1], Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn deflections_rotate_about_the_vertical_axis() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(0.0, 0.0, -4.0); // forward in Bevy's -Z
        let candidates = plan_candidates(p0, p1);
        // 30 degrees left and right of the heading, at 0.75 of the distance.
        let left = candidates[2] - p0;
        let right = candidates[3] - p0;
        assert!((left.length() - 3.0).abs() < 1e-5);
        assert!((right.length() - 3.0).abs() < 1e-5);
        assert!(close(left + right, (left + right).project_onto(Vec3::NEG_Z)));
        // Mirror pair: same Z reach, opposite X.
        assert!((left.x + right.x).abs() < 1e-5);
        assert!(left.x != 0.0);
    }

    #[test]
    fn zero_displacement_collapses_to_the_origin() {
        let p = Vec3::new(5.0, 1.0, -2.0);
        for candidate in plan_candidates(p, p) {
            assert!(close(candidate, p));
        }
    }

    #[test]
    fn deflections_widen_while_reach_shrinks() {
        // Past the two straight-heading entries, each deflection is at
        // least as wide and reaches no further than the one before it.
        let mut last_frac = f32::INFINITY;
        let mut last_angle = 0.0f32;
        for (angle, frac) in SCAN_TABLE.iter().skip(2) {
            assert!(*frac <= last_frac);
            assert!(angle.abs() >= last_angle);
            last_frac = *frac;
            last_angle = angle.abs();
        }
    }
}
