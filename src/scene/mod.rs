// src/scene/mod.rs

pub mod catalog;
pub mod components;
pub mod raycast;
pub mod selector;
pub mod systems;

// Re-export the surface API the rest of the crate actually uses:
pub use catalog::{MeshSurfaceCatalog, SurfaceCatalog, SurfaceHandle, SurfaceHit};
pub use components::{SurfaceGeometry, SurfaceLabel, SurfaceTags};
pub use selector::SurfaceSelector;
