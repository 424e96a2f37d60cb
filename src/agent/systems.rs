// src/agent/systems.rs

use bevy::prelude::*;

use crate::agent::components::{Agent, Patrol};
use crate::follower::{load_or_default, FollowerConfig, FollowerState, ResolvedSurfaces};

pub const CONFIG_PATH: &str = "assets/follower.ron";

/// Spawns the patrolling demo agent with its ground-follower components.
pub fn spawn_agent(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config: FollowerConfig = load_or_default(CONFIG_PATH);

    let mesh = meshes.add(Capsule3d::new(0.3, 1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(124, 144, 255),
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        // Start above the plaza; the follower settles it onto the surface.
        Transform::from_xyz(-8.0, 4.0, -8.0),
        Name::new("Agent"),
        Agent { speed: 3.0 },
        Patrol::new(vec![
            Vec2::new(8.0, -8.0),
            Vec2::new(8.0, 8.0),
            Vec2::new(-8.0, 8.0),
            Vec2::new(-8.0, -8.0),
        ]),
        config,
        FollowerState::default(),
        ResolvedSurfaces::default(),
    ));
}

/// Moves each agent toward its current patrol target, X/Z only. This is
/// the "external movement logic" the follower's incremental commit must
/// not clobber.
pub fn move_agents(
    time: Res<Time>,
    mut query: Query<(&Agent, &mut Patrol, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (agent, mut patrol, mut tf) in query.iter_mut() {
        let Some(goal) = patrol.target() else { continue };
        let current = Vec2::new(tf.translation.x, tf.translation.z);
        let to_goal = goal - current;
        let step = agent.speed * dt;

        if to_goal.length() <= step {
            tf.translation.x = goal.x;
            tf.translation.z = goal.y;
            patrol.advance();
        } else {
            let dir = to_goal.normalize_or_zero();
            tf.translation.x += dir.x * step;
            tf.translation.z += dir.y * step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patrol_loops_in_order() {
        let mut patrol = Patrol::new(vec![Vec2::X, Vec2::Y, Vec2::ONE]);
        assert_eq!(patrol.target(), Some(Vec2::X));
        patrol.advance();
        patrol.advance();
        assert_eq!(patrol.target(), Some(Vec2::ONE));
        patrol.advance();
        assert_eq!(patrol.target(), Some(Vec2::X));
    }

    #[test]
    fn empty_patrol_is_harmless() {
        let mut patrol = Patrol::new(Vec::new());
        assert_eq!(patrol.target(), None);
        patrol.advance();
        assert_eq!(patrol.target(), None);
    }
}
