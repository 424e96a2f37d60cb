// src/scene/selector.rs
//! Declarative surface selectors (data form, RON-friendly).

use serde::{Deserialize, Serialize};

/// Picks a set of registered surfaces out of the catalog.
///
/// `Label` matches a surface's unique label exactly; `Tag` matches every
/// surface carrying that tag; `Any` unions its sub-selectors in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum SurfaceSelector {
    /// Matches nothing. The default so an unconfigured follower stays inert.
    #[default]
    None,
    Label(String),
    Tag(String),
    Any(Vec<SurfaceSelector>),
}

impl SurfaceSelector {
    #[inline]
    pub fn label(s: impl Into<String>) -> Self {
        Self::Label(s.into())
    }

    #[inline]
    pub fn tag(s: impl Into<String>) -> Self {
        Self::Tag(s.into())
    }

    /// True if this selector can never match (used to warn early on
    /// followers bound with an empty walkable set).
    pub fn is_none(&self) -> bool {
        match self {
            Self::None => true,
            Self::Label(_) | Self::Tag(_) => false,
            Self::Any(subs) => subs.iter().all(Self::is_none),
        }
    }
}
