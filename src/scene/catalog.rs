// src/scene/catalog.rs
//! The surface-catalog capability: selector resolution + ray intersection.
//!
//! The follower core only ever talks to [`SurfaceCatalog`]; the concrete
//! [`MeshSurfaceCatalog`] resource is one implementation, rebuilt by the
//! sync system from registered scene entities. Tests hand-build catalogs.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::scene::raycast::{nearest_hit, Triangle};
use crate::scene::selector::SurfaceSelector;

// ---------- Handles & hits ----------

/// Opaque reference to one registered surface. Identity is the
/// *surface-owning entity*: child geometry folded into a registration hits
/// as its owner, which is what exclusion membership compares against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub Entity);

/// One ray intersection, nearest-point-first when returned in a list.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceHit {
    pub surface: SurfaceHandle,
    /// World-space hit point.
    pub point: Vec3,
    /// Distance along the (normalized) ray direction.
    pub distance: f32,
}

// ---------- The injected capability ----------

/// What the follower needs from the host scene: resolve a declarative
/// selector into surface handles, and cast a ray against a handle set.
pub trait SurfaceCatalog {
    /// Matching handles in registration order. May be empty.
    fn resolve(&self, selector: &SurfaceSelector) -> Vec<SurfaceHandle>;

    /// All hits of the ray against `set`, ordered near to far.
    /// `max_distance = f32::INFINITY` means unbounded. Handles the catalog
    /// does not know (stale sets) are skipped, not an error.
    fn intersect_ray(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
        set: &[SurfaceHandle],
    ) -> Vec<SurfaceHit>;
}

// ---------- Mesh-backed implementation ----------

/// One registered surface: world-space triangles (own + descendants),
/// attributed to the owning entity.
#[derive(Clone, Debug)]
pub struct SurfaceRecord {
    pub owner: Entity,
    pub label: String,
    pub tags: Vec<String>,
    pub triangles: Vec<Triangle>,
}

/// Flat registry of intersectable surfaces, bucketed by owner.
#[derive(Resource, Default)]
pub struct MeshSurfaceCatalog {
    records: Vec<SurfaceRecord>,
    by_owner: HashMap<Entity, usize>,
}

impl MeshSurfaceCatalog {
    /// Register (or replace) the surface owned by `owner`.
    pub fn insert(
        &mut self,
        owner: Entity,
        label: impl Into<String>,
        tags: Vec<String>,
        triangles: Vec<Triangle>,
    ) {
        let record = SurfaceRecord { owner, label: label.into(), tags, triangles };
        match self.by_owner.get(&owner) {
            Some(&i) => self.records[i] = record,
            None => {
                self.by_owner.insert(owner, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.by_owner.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, handle: SurfaceHandle) -> Option<&SurfaceRecord> {
        self.by_owner.get(&handle.0).map(|&i| &self.records[i])
    }

    fn matches(record: &SurfaceRecord, selector: &SurfaceSelector) -> bool {
        match selector {
            SurfaceSelector::None => false,
            SurfaceSelector::Label(l) => record.label == *l,
            SurfaceSelector::Tag(t) => record.tags.iter().any(|tag| tag == t),
            SurfaceSelector::Any(subs) => subs.iter().any(|s| Self::matches(record, s)),
        }
    }
}

impl SurfaceCatalog for MeshSurfaceCatalog {
    fn resolve(&self, selector: &SurfaceSelector) -> Vec<SurfaceHandle> {
        self.records
            .iter()
            .filter(|r| Self::matches(r, selector))
            .map(|r| SurfaceHandle(r.owner))
            .collect()
    }

    fn intersect_ray(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
        set: &[SurfaceHandle],
    ) -> Vec<SurfaceHit> {
        let mut hits = Vec::new();
        let mut tested: Vec<Entity> = Vec::with_capacity(set.len());
        for &handle in set {
            // Duplicate handles are permitted in resolved sets; test once.
            if tested.contains(&handle.0) {
                continue;
            }
            tested.push(handle.0);
            let Some(record) = self.record(handle) else { continue };
            if let Some((t, point)) = nearest_hit(origin, dir, max_distance, &record.triangles) {
                hits.push(SurfaceHit { surface: handle, point, distance: t });
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
