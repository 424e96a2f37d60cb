// src/scene/raycast.rs
//! Ray/triangle intersection used by the surface catalog.

use bevy::prelude::*;

/// One world-space triangle. Winding does not matter; rays hit both faces.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }
}

/// Möller–Trumbore, double-sided. Returns the distance `t` along `dir`
/// (which must be normalized) to the hit point, or `None` on a miss.
pub fn ray_triangle(origin: Vec3, dir: Vec3, tri: &Triangle) -> Option<f32> {
    const DET_EPS: f32 = 1e-7;

    let ab = tri.b - tri.a;
    let ac = tri.c - tri.a;

    let p = dir.cross(ac);
    let det = ab.dot(p);
    if det.abs() < DET_EPS {
        // Ray parallel to the triangle plane.
        return None;
    }
    let inv_det = 1.0 / det;

    let s = origin - tri.a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(ab);
    let v = dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = ac.dot(q) * inv_det;
    if t < 0.0 {
        return None;
    }
    Some(t)
}

/// Nearest hit of a ray against a triangle list, within `max_distance`.
/// `max_distance = f32::INFINITY` means unbounded.
pub fn nearest_hit(
    origin: Vec3,
    dir: Vec3,
    max_distance: f32,
    tris: &[Triangle],
) -> Option<(f32, Vec3)> {
    let mut best: Option<f32> = None;
    for tri in tris {
        if let Some(t) = ray_triangle(origin, dir, tri) {
            if t <= max_distance && best.is_none_or(|b| t < b) {
                best = Some(t);
            }
        }
    }
    best.map(|t| (t, origin + dir * t))
}
