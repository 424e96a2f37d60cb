// src/follower/config.rs
//! Declarative follower configuration + RON loader.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::scene::SurfaceSelector;

// ---------- Configuration (data form) ----------

/// Per-agent configuration, immutable between (re)bindings. Loadable from
/// `assets/follower.ron`; every field falls back to its default.
#[derive(Component, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowerConfig {
    /// Gate on tick execution. Disabling freezes stored state.
    pub enabled: bool,

    /// Surfaces eligible to be ground.
    pub walkable: SurfaceSelector,

    /// Surfaces that must never be accepted as ground.
    pub exclude: SurfaceSelector,

    /// Max distance to search for ground below the agent. 0 = unbounded.
    pub max_fall_distance: f32,

    /// Vertical offset the agent rests at above a hit point.
    pub agent_height: f32,

    /// `Name` of an alternate transform (within the agent's subtree) used
    /// as the horizontal-tracking anchor. `None` = the agent itself.
    pub origin: Option<String>,

    /// Downward acceleration per second while airborne (negative).
    pub gravity_rate: f32,

    /// Max magnitude of downward velocity the integrator will apply.
    pub terminal_velocity: f32,

    /// Resting / no-op threshold in scene units.
    pub rest_epsilon: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            walkable: SurfaceSelector::None,
            exclude: SurfaceSelector::None,
            max_fall_distance: 0.5,
            agent_height: 1.6,
            origin: None,
            gravity_rate: -1.0,
            terminal_velocity: 0.5,
            rest_epsilon: 0.01,
        }
    }
}

impl FollowerConfig {
    /// Validate field ranges. Errors here are configuration mistakes, never
    /// tick-time failures.
    pub fn validate(&self) -> Result<(), FollowerConfigError> {
        if self.max_fall_distance < 0.0 {
            return Err(FollowerConfigError::Range {
                field: "max_fall_distance",
                value: self.max_fall_distance,
                expected: ">= 0",
            });
        }
        if self.agent_height <= 0.0 {
            return Err(FollowerConfigError::Range {
                field: "agent_height",
                value: self.agent_height,
                expected: "> 0",
            });
        }
        if self.terminal_velocity <= 0.0 {
            return Err(FollowerConfigError::Range {
                field: "terminal_velocity",
                value: self.terminal_velocity,
                expected: "> 0",
            });
        }
        Ok(())
    }
}

// ---------- Loader ----------

#[derive(thiserror::Error, Debug)]
pub enum FollowerConfigError {
    #[error("I/O while reading follower config: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("'{field}' = {value} out of range (expected {expected})")]
    Range {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

/// Parse a config from RON bytes and validate it.
pub fn parse_config(bytes: &[u8]) -> Result<FollowerConfig, FollowerConfigError> {
    let cfg: FollowerConfig =
        ron::de::from_bytes(bytes).map_err(|e| FollowerConfigError::Ron(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, falling back to defaults (with a warning) when the file is
/// missing, unreadable, or malformed. Config trouble is never fatal.
pub fn load_or_default(path: impl AsRef<Path>) -> FollowerConfig {
    let path = path.as_ref();
    if !path.exists() {
        return FollowerConfig::default();
    }
    match std::fs::read(path).map_err(FollowerConfigError::from).and_then(|b| parse_config(&b)) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("follower config '{}' rejected, using defaults: {e}", path.display());
            FollowerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_table() {
        let cfg = FollowerConfig::default();
        assert!(cfg.enabled);
        assert_eq!(cfg.walkable, SurfaceSelector::None);
        assert_eq!(cfg.max_fall_distance, 0.5);
        assert_eq!(cfg.agent_height, 1.6);
        assert!(cfg.origin.is_none());
        assert_eq!(cfg.gravity_rate, -1.0);
        assert_eq!(cfg.terminal_velocity, 0.5);
        assert_eq!(cfg.rest_epsilon, 0.01);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_ron_fills_in_defaults() {
        let cfg = parse_config(
            br#"(walkable: Tag("walkable"), exclude: Label("boulders"), max_fall_distance: 2.0)"#,
        )
        .expect("should parse");
        assert_eq!(cfg.walkable, SurfaceSelector::tag("walkable"));
        assert_eq!(cfg.exclude, SurfaceSelector::label("boulders"));
        assert_eq!(cfg.max_fall_distance, 2.0);
        assert_eq!(cfg.agent_height, 1.6);
    }

    #[test]
    fn garbage_is_a_ron_error() {
        assert!(matches!(
            parse_config(b"not ron at all ("),
            Err(FollowerConfigError::Ron(_))
        ));
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        assert!(matches!(
            parse_config(br#"(agent_height: 0.0)"#),
            Err(FollowerConfigError::Range { field: "agent_height", .. })
        ));
        assert!(matches!(
            parse_config(br#"(max_fall_distance: -1.0)"#),
            Err(FollowerConfigError::Range { field: "max_fall_distance", .. })
        ));
    }
}
