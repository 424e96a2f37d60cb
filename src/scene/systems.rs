// src/scene/systems.rs
//! Flattens labeled scene entities into the [`MeshSurfaceCatalog`].

use bevy::prelude::*;

use crate::scene::catalog::MeshSurfaceCatalog;
use crate::scene::components::{SurfaceGeometry, SurfaceLabel, SurfaceTags};
use crate::scene::raycast::Triangle;

/// Rebuilds the catalog whenever a labeled surface (or any of its geometry
/// carriers) is added, moved, or edited. Descendant geometry is attributed
/// to the nearest labeled ancestor, so a hit on a child mesh reports the
/// labeled entity as owner, so exclusion membership works per scene entity.
pub fn sync_surface_catalog(
    mut catalog: ResMut<MeshSurfaceCatalog>,
    dirty: Query<
        (),
        (
            With<SurfaceGeometry>,
            Or<(Changed<GlobalTransform>, Changed<SurfaceGeometry>)>,
        ),
    >,
    new_owners: Query<(), Added<SurfaceLabel>>,
    owners: Query<(Entity, &SurfaceLabel, Option<&SurfaceTags>)>,
    geometry: Query<(&SurfaceGeometry, &GlobalTransform)>,
    children: Query<&Children>,
    labeled: Query<(), With<SurfaceLabel>>,
) {
    if dirty.is_empty() && new_owners.is_empty() {
        return;
    }

    catalog.clear();
    for (owner, label, tags) in owners.iter() {
        let mut tris = Vec::new();
        collect_world_triangles(owner, true, &geometry, &children, &labeled, &mut tris);
        let tags = tags.map(|t| t.0.clone()).unwrap_or_default();
        catalog.insert(owner, label.0.clone(), tags, tris);
    }
}

/// Depth-first gather of world-space triangles under `entity`. Descendants
/// that carry their own `SurfaceLabel` are separate owners and are skipped.
fn collect_world_triangles(
    entity: Entity,
    is_root: bool,
    geometry: &Query<(&SurfaceGeometry, &GlobalTransform)>,
    children: &Query<&Children>,
    labeled: &Query<(), With<SurfaceLabel>>,
    out: &mut Vec<Triangle>,
) {
    if !is_root && labeled.contains(entity) {
        return;
    }
    if let Ok((geo, global)) = geometry.get(entity) {
        out.extend(geo.0.iter().map(|tri| Triangle::new(
            global.transform_point(tri.a),
            global.transform_point(tri.b),
            global.transform_point(tri.c),
        )));
    }
    if let Ok(kids) = children.get(entity) {
        for &child in kids {
            collect_world_triangles(child, false, geometry, children, labeled, out);
        }
    }
}
