// src/setup.rs
//! Demo scene: a plaza, a raised terrace, and seeded boulder obstacles.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::scene::components::{cuboid, horizontal_quad};
use crate::scene::{SurfaceGeometry, SurfaceLabel, SurfaceTags};

pub const WORLD_SEED: u64 = 0xC0FF_EE00;

/// Patrol corners from `agent::spawn_agent`; boulders keep clear of these
/// so the walker can always arrive somewhere.
const KEEPOUT: [Vec2; 4] = [
    Vec2::new(8.0, -8.0),
    Vec2::new(8.0, 8.0),
    Vec2::new(-8.0, 8.0),
    Vec2::new(-8.0, -8.0),
];
const KEEPOUT_RADIUS: f32 = 2.5;

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // 1) Light
    commands.spawn((
        PointLight {
            intensity: 3_000_000.0,
            range: 80.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 14.0, 6.0),
    ));

    // 2) Camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-18.0, 16.0, 18.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // 3) The plaza: walkable ground across x,z in [-12, 12]
    let plaza_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.4, 0.3),
        perceptual_roughness: 0.95,
        ..default()
    });
    commands
        .spawn((
            SurfaceLabel("plaza".into()),
            SurfaceTags::one("walkable"),
            SurfaceGeometry(horizontal_quad(Vec2::splat(-12.0), Vec2::splat(12.0), 0.0)),
            Transform::default(),
            Visibility::default(),
            Name::new("Plaza"),
        ))
        .with_children(|parent| {
            // Visual slab, top face flush with the collision quad.
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(24.0, 0.2, 24.0))),
                MeshMaterial3d(plaza_mat),
                Transform::from_xyz(0.0, -0.1, 0.0),
            ));
        });

    // 4) A raised terrace across the east patrol leg. Walking on snaps the
    //    agent up; walking off is a smoothed gravity descent.
    let terrace_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.45, 0.35),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands
        .spawn((
            SurfaceLabel("terrace".into()),
            SurfaceTags::one("walkable"),
            SurfaceGeometry(horizontal_quad(Vec2::new(-3.0, -2.5), Vec2::new(3.0, 2.5), 0.0)),
            Transform::from_xyz(8.0, 1.2, 0.0),
            Visibility::default(),
            Name::new("Terrace"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(6.0, 1.2, 5.0))),
                MeshMaterial3d(terrace_mat),
                Transform::from_xyz(0.0, -0.6, 0.0),
            ));
        });

    // 5) Boulders: jittered grid over the plaza, stable per seed. These are
    //    excluded surfaces; the follower detects and deflects around them.
    let boulder_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.42, 0.4),
        ..default()
    });
    let mut rng = ChaCha8Rng::seed_from_u64(WORLD_SEED);
    let cell = 4.0;
    let mut index = 0u32;
    for j in 0..5 {
        for i in 0..5 {
            if rng.random::<f32>() > 0.4 {
                continue;
            }
            let x = -10.0 + (i as f32 + 0.5) * cell + (rng.random::<f32>() - 0.5) * cell * 0.6;
            let z = -10.0 + (j as f32 + 0.5) * cell + (rng.random::<f32>() - 0.5) * cell * 0.6;
            if KEEPOUT.iter().any(|p| p.distance(Vec2::new(x, z)) < KEEPOUT_RADIUS) {
                continue;
            }
            let half = Vec3::new(
                rng.random_range(0.5..1.0),
                rng.random_range(0.4..0.8),
                rng.random_range(0.5..1.0),
            );
            let yaw = rng.random_range(0.0..std::f32::consts::TAU);
            commands
                .spawn((
                    SurfaceLabel(format!("boulder_{index}")),
                    SurfaceTags::one("obstacle"),
                    SurfaceGeometry(cuboid(half)),
                    Transform::from_xyz(x, half.y, z).with_rotation(Quat::from_rotation_y(yaw)),
                    Visibility::default(),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Mesh3d(meshes.add(Cuboid::from_size(half * 2.0))),
                        MeshMaterial3d(boulder_mat.clone()),
                        Transform::default(),
                    ));
                });
            index += 1;
        }
    }
    info!("demo scene ready: {index} boulders");
}
