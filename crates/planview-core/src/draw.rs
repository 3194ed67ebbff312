//! Drawable primitives for plan-view rendering.
//!
//! The layout engine does not touch a concrete drawing surface. It emits
//! [`Primitive`] values - rectangles, lines, polygons, ellipses, and text -
//! into anything implementing [`RenderTarget`]. Each primitive carries a
//! logical [`Role`] so tests can verify layout output without parsing SVG,
//! and roles map onto [`RenderLayer`]s for deterministic z-ordering at
//! export time.
//!
//! [`Scene`] is the standard target: an ordered primitive list that is
//! cleared and fully regenerated on every layout pass.

mod layer;
mod primitive;
mod stroke;

pub use layer::RenderLayer;
pub use primitive::{Primitive, Role, Shape, Style, TextAlign};
pub use stroke::{Stroke, StrokeStyle};

/// A surface the layout engine appends primitives to.
///
/// The engine depends only on this trait, never on a concrete widget or
/// document type.
pub trait RenderTarget {
    /// Appends one primitive to the target.
    fn push(&mut self, primitive: Primitive);
}

/// An ordered list of drawable primitives for one view.
///
/// Regenerated wholesale per layout pass; there is no incremental patching.
#[derive(Debug, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all primitives.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Returns the number of primitives in the scene.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if the scene holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// All primitives in emission order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Iterates the primitives carrying the given role.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.role() == role)
    }

    /// Returns primitive references stably sorted by render layer (bottom
    /// to top). Emission order is preserved within a layer.
    pub fn layer_order(&self) -> Vec<&Primitive> {
        let mut refs: Vec<&Primitive> = self.primitives.iter().collect();
        refs.sort_by_key(|p| RenderLayer::from(p.role()));
        refs
    }

    /// Consumes the scene, returning primitives stably sorted by render
    /// layer (bottom to top). Emission order is preserved within a layer.
    pub fn into_layer_order(mut self) -> Vec<Primitive> {
        self.primitives
            .sort_by_key(|p| RenderLayer::from(p.role()));
        self.primitives
    }
}

impl RenderTarget for Scene {
    fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Rect;

    use super::*;

    #[test]
    fn test_scene_push_and_clear() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        scene.push(Primitive::rect(
            Role::ModuleBody,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Style::default(),
        ));
        assert_eq!(scene.len(), 1);

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_scene_with_role() {
        let mut scene = Scene::new();
        scene.push(Primitive::rect(
            Role::ModuleBody,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Style::default(),
        ));
        scene.push(Primitive::rect(
            Role::SeparatorWall,
            Rect::new(10.0, 0.0, 2.0, 10.0),
            Style::default(),
        ));
        scene.push(Primitive::rect(
            Role::ModuleBody,
            Rect::new(12.0, 0.0, 10.0, 10.0),
            Style::default(),
        ));

        assert_eq!(scene.with_role(Role::ModuleBody).count(), 2);
        assert_eq!(scene.with_role(Role::SeparatorWall).count(), 1);
        assert_eq!(scene.with_role(Role::Frame).count(), 0);
    }

    #[test]
    fn test_into_layer_order_is_stable() {
        let mut scene = Scene::new();
        // Text role belongs to a later layer than the body, whatever the
        // emission order.
        scene.push(Primitive::text(
            Role::ModuleLabel,
            crate::geometry::Point::new(5.0, 5.0),
            "M1",
            12.0,
        ));
        scene.push(Primitive::rect(
            Role::ModuleBody,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Style::default(),
        ));

        let ordered = scene.into_layer_order();
        assert_eq!(ordered[0].role(), Role::ModuleBody);
        assert_eq!(ordered[1].role(), Role::ModuleLabel);
    }
}
