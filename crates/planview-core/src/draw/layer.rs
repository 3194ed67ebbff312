//! Render layers for deterministic z-ordering.
//!
//! Layers are rendered from bottom to top in declaration order; the `Ord`
//! derive uses that order directly. Every [`Role`] maps onto exactly one
//! layer, so primitives can be emitted in whatever order the layout passes
//! produce them and still stack correctly at export time.

use crate::draw::Role;

/// Z-order layer of a primitive. First variant renders first (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Tunnel strips sit behind the unit body.
    Tunnel,
    /// Module body rectangles.
    Body,
    /// Exterior, interior, separator, and global walls.
    Wall,
    /// Airflow arrows and glyphs.
    Annotation,
    /// The dashed unit frame.
    Frame,
    /// All text labels - renders last (top).
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer, used as the SVG
    /// `data-layer` group attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tunnel => "tunnel",
            Self::Body => "body",
            Self::Wall => "wall",
            Self::Annotation => "annotation",
            Self::Frame => "frame",
            Self::Text => "text",
        }
    }
}

impl From<Role> for RenderLayer {
    fn from(role: Role) -> Self {
        match role {
            Role::Tunnel => Self::Tunnel,
            Role::ModuleBody => Self::Body,
            Role::SeparatorWall | Role::ExteriorWall | Role::InteriorWall | Role::GlobalWall => {
                Self::Wall
            }
            Role::Airflow => Self::Annotation,
            Role::Frame => Self::Frame,
            Role::ModuleLabel
            | Role::WallLabel
            | Role::TunnelLabel
            | Role::AirflowCaption
            | Role::OrientationLabel
            | Role::ViewTitle => Self::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_ordering() {
        assert!(RenderLayer::Tunnel < RenderLayer::Body);
        assert!(RenderLayer::Body < RenderLayer::Wall);
        assert!(RenderLayer::Wall < RenderLayer::Annotation);
        assert!(RenderLayer::Frame < RenderLayer::Text);
    }

    #[test]
    fn test_role_to_layer() {
        assert_eq!(RenderLayer::from(Role::ModuleBody), RenderLayer::Body);
        assert_eq!(RenderLayer::from(Role::SeparatorWall), RenderLayer::Wall);
        assert_eq!(RenderLayer::from(Role::GlobalWall), RenderLayer::Wall);
        assert_eq!(RenderLayer::from(Role::Airflow), RenderLayer::Annotation);
        assert_eq!(RenderLayer::from(Role::AirflowCaption), RenderLayer::Text);
        assert_eq!(RenderLayer::from(Role::ViewTitle), RenderLayer::Text);
    }

    #[test]
    fn test_layer_names() {
        assert_eq!(RenderLayer::Body.name(), "body");
        assert_eq!(RenderLayer::Text.name(), "text");
    }
}
