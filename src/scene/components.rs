// src/scene/components.rs
use bevy::prelude::*;

use crate::scene::raycast::Triangle;

/// Unique, human-readable name a selector can address this surface by.
#[derive(Component, Clone, Debug)]
pub struct SurfaceLabel(pub String);

/// Free-form tags for set-style selection ("walkable", "obstacle", ...).
#[derive(Component, Clone, Debug, Default)]
pub struct SurfaceTags(pub Vec<String>);

impl SurfaceTags {
    pub fn one(tag: impl Into<String>) -> Self {
        Self(vec![tag.into()])
    }
}

/// Local-space collision triangles for this entity. Descendant geometry is
/// folded into the nearest labeled ancestor's record by the sync system.
#[derive(Component, Clone, Debug)]
pub struct SurfaceGeometry(pub Vec<Triangle>);

// ---------- Local-space geometry constructors ----------

/// Two triangles spanning `min..max` in XZ at height `y`.
pub fn horizontal_quad(min: Vec2, max: Vec2, y: f32) -> Vec<Triangle> {
    let p00 = Vec3::new(min.x, y, min.y);
    let p10 = Vec3::new(max.x, y, min.y);
    let p01 = Vec3::new(min.x, y, max.y);
    let p11 = Vec3::new(max.x, y, max.y);
    vec![Triangle::new(p00, p10, p11), Triangle::new(p00, p11, p01)]
}

/// Axis-aligned box centered on the local origin (12 triangles).
pub fn cuboid(half: Vec3) -> Vec<Triangle> {
    let v = |sx: f32, sy: f32, sz: f32| Vec3::new(sx * half.x, sy * half.y, sz * half.z);
    // Corners: n = -1, p = +1 per axis.
    let nnn = v(-1.0, -1.0, -1.0);
    let nnp = v(-1.0, -1.0, 1.0);
    let npn = v(-1.0, 1.0, -1.0);
    let npp = v(-1.0, 1.0, 1.0);
    let pnn = v(1.0, -1.0, -1.0);
    let pnp = v(1.0, -1.0, 1.0);
    let ppn = v(1.0, 1.0, -1.0);
    let ppp = v(1.0, 1.0, 1.0);
    let quad = |a: Vec3, b: Vec3, c: Vec3, d: Vec3| [Triangle::new(a, b, c), Triangle::new(a, c, d)];
    let mut tris = Vec::with_capacity(12);
    tris.extend(quad(npn, ppn, ppp, npp)); // top
    tris.extend(quad(nnn, nnp, pnp, pnn)); // bottom
    tris.extend(quad(nnn, npn, npp, nnp)); // -X
    tris.extend(quad(pnn, pnp, ppp, ppn)); // +X
    tris.extend(quad(nnn, pnn, ppn, npn)); // -Z
    tris.extend(quad(nnp, npp, ppp, pnp)); // +Z
    tris
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::raycast::nearest_hit;

    #[test]
    fn quad_covers_its_extent() {
        let tris = horizontal_quad(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), 2.0);
        assert_eq!(tris.len(), 2);
        for (x, z) in [(-0.9, -0.9), (0.9, 0.9), (-0.9, 0.9), (0.0, 0.0)] {
            let hit = nearest_hit(Vec3::new(x, 5.0, z), Vec3::NEG_Y, f32::INFINITY, &tris);
            assert!(hit.is_some(), "expected hit at ({x}, {z})");
            assert_eq!(hit.unwrap().1.y, 2.0);
        }
        assert!(nearest_hit(Vec3::new(1.5, 5.0, 0.0), Vec3::NEG_Y, f32::INFINITY, &tris).is_none());
    }

    #[test]
    fn cuboid_top_face_sits_at_half_height() {
        let tris = cuboid(Vec3::new(1.0, 0.5, 1.0));
        assert_eq!(tris.len(), 12);
        let (t, p) = nearest_hit(Vec3::new(0.0, 4.0, 0.0), Vec3::NEG_Y, f32::INFINITY, &tris)
            .expect("should hit the top face");
        assert_eq!(t, 3.5);
        assert_eq!(p.y, 0.5);
    }
}
