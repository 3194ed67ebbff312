//! The plan-view layout engine.
//!
//! # Overview
//!
//! - [`Engine`] - turns a [`UnitDocument`] into drawable scenes. Pure
//!   computation: the same document and metrics always produce the same
//!   primitives.
//! - [`UnitLayout`] - the result: nothing, a single view, or a stacked
//!   pair of top/bottom views.
//! - [`ViewLayout`] - one rendered view: its scene, canvas size, kind,
//!   and summary line.
//!
//! A layout pass walks fixed stages per view: place module bodies, draw
//! separator walls, per-module walls and airflow, unit-level walls,
//! global tunnel strips, the dashed frame, and finally the text labels.
//! Z-ordering is not an emission-order concern; the exporter sorts by
//! [`RenderLayer`](planview_core::draw::RenderLayer).

mod labels;
mod metrics;
mod palette;
mod placement;
mod summary;
mod tunnels;
mod view;
mod walls;

pub use metrics::Metrics;
pub use placement::{PlacedModule, PlacedView};
pub use summary::ViewSummary;
pub use view::ViewKind;

use log::debug;
use planview_core::draw::{Primitive, RenderTarget, Role, Scene};
use planview_core::geometry::Size;
use planview_core::model::UnitDocument;

use view::Selection;

/// One fully laid-out view.
#[derive(Debug)]
pub struct ViewLayout {
    kind: ViewKind,
    scene: Scene,
    size: Size,
    summary: ViewSummary,
}

impl ViewLayout {
    /// Which partition this view shows.
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// The drawable primitives of this view.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The canvas size of this view at zoom 1.0.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Aggregate figures for the view, in inches.
    pub fn summary(&self) -> ViewSummary {
        self.summary
    }
}

/// The layout result for one unit document.
#[derive(Debug)]
pub enum UnitLayout {
    /// The document holds no modules.
    Empty,
    /// All modules render into one view.
    Single(ViewLayout),
    /// Top and bottom partitions render as two stacked views.
    Stacked {
        top: ViewLayout,
        bottom: ViewLayout,
    },
}

impl UnitLayout {
    /// Returns `true` when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for the stacked top/bottom form.
    pub fn is_stacked(&self) -> bool {
        matches!(self, Self::Stacked { .. })
    }

    /// The rendered views in top-to-bottom order.
    pub fn views(&self) -> Vec<&ViewLayout> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(view) => vec![view],
            Self::Stacked { top, bottom } => vec![top, bottom],
        }
    }
}

/// The layout engine.
///
/// Holds the resolved [`Metrics`] and nothing else; every call to
/// [`calculate`](Engine::calculate) regenerates the scenes wholesale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    metrics: Metrics,
}

impl Engine {
    /// Creates an engine with the given metrics.
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }

    /// The metrics this engine lays out with.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Lays out the whole document.
    pub fn calculate(&self, document: &UnitDocument) -> UnitLayout {
        match view::select(&document.modules) {
            Selection::Empty => {
                debug!("no modules, empty layout");
                UnitLayout::Empty
            }
            Selection::Single { kind, indices } => {
                UnitLayout::Single(self.calculate_view(document, kind, &indices, false))
            }
            Selection::Stacked { top, bottom } => UnitLayout::Stacked {
                top: self.calculate_view(document, ViewKind::Top, &top, true),
                bottom: self.calculate_view(document, ViewKind::Bottom, &bottom, true),
            },
        }
    }

    fn calculate_view(
        &self,
        document: &UnitDocument,
        kind: ViewKind,
        indices: &[usize],
        titled: bool,
    ) -> ViewLayout {
        let metrics = self.metrics;
        let unit = &document.unit;
        let placed = placement::place(&document.modules, indices, unit, metrics);

        let mut scene = Scene::new();

        for module in &placed.modules {
            scene.push(Primitive::rect(
                Role::ModuleBody,
                module.body,
                palette::module_body(),
            ));
        }
        walls::draw_separators(&mut scene, &placed);

        for placed_module in &placed.modules {
            let module = &document.modules[placed_module.index];
            let body = placed_module.body;
            walls::draw_exterior_walls(&mut scene, module, body, metrics);
            walls::draw_interior_walls(&mut scene, module, body, metrics);
            tunnels::draw_module_airflow(&mut scene, module, body, metrics);
            labels::draw_module_label(&mut scene, module, body);
        }

        walls::draw_global_walls(&mut scene, unit, placed.unit_rect, metrics);
        let extent = tunnels::draw_global_tunnels(&mut scene, unit, placed.unit_rect, metrics);
        walls::draw_frame(&mut scene, extent, metrics);

        let title = titled.then(|| kind.title());
        labels::draw_orientation_labels(&mut scene, extent, metrics, title);

        let summary = ViewSummary::compute(&document.modules, indices, unit);
        debug!(
            view = kind.title(),
            modules = indices.len(),
            primitives = scene.len();
            "view laid out"
        );

        ViewLayout {
            kind,
            scene,
            size: placed.size,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use planview_core::model::UnitDocument;

    use super::*;

    fn document(json: &str) -> UnitDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let layout = Engine::default().calculate(&document(r#"{ "modules": [] }"#));
        assert!(layout.is_empty());
        assert!(layout.views().is_empty());
    }

    #[test]
    fn test_single_view_pipeline() {
        let doc = document(
            r#"{
                "modules": [
                    { "id": "A", "length": "48", "width": "100" },
                    { "id": "B", "length": "60", "width": "100" },
                    { "id": "C", "length": "48", "width": "100" }
                ]
            }"#,
        );
        let layout = Engine::default().calculate(&doc);

        let UnitLayout::Single(view) = &layout else {
            panic!("expected single view");
        };
        assert_eq!(view.kind(), ViewKind::Standard);
        assert_eq!(view.scene().with_role(Role::ModuleBody).count(), 3);
        assert_eq!(view.scene().with_role(Role::SeparatorWall).count(), 2);
        assert_eq!(view.scene().with_role(Role::Frame).count(), 1);
        assert_eq!(view.scene().with_role(Role::OrientationLabel).count(), 4);
        // Single views carry no title caption.
        assert_eq!(view.scene().with_role(Role::ViewTitle).count(), 0);

        // 57.6 + 72 + 57.6 + 2 * 4.8 body run plus 2 * 40 padding.
        assert_approx_eq!(f32, view.size().width(), 276.8);
        assert_approx_eq!(f32, view.size().height(), 200.0);
        assert_eq!(view.summary().module_count, 3);
    }

    #[test]
    fn test_stacked_views_carry_titles() {
        let doc = document(
            r#"{
                "modules": [
                    { "id": "T", "tunnel_position": "Top" },
                    { "id": "B", "tunnel_position": "Bottom" }
                ]
            }"#,
        );
        let layout = Engine::default().calculate(&doc);
        assert!(layout.is_stacked());

        let views = layout.views();
        assert_eq!(views[0].kind(), ViewKind::Top);
        assert_eq!(views[1].kind(), ViewKind::Bottom);
        let title = views[0].scene().with_role(Role::ViewTitle).next().unwrap();
        assert_eq!(title.as_text(), Some("TOP UNIT"));
    }

    #[test]
    fn test_determinism() {
        let doc = document(
            r#"{
                "unit": { "tunnels": { "left": { "include": true } } },
                "modules": [ { "id": "A", "airflow": "Back-To-Front" } ]
            }"#,
        );
        let engine = Engine::default();
        let first = engine.calculate(&doc);
        let second = engine.calculate(&doc);

        let a = first.views()[0].scene().primitives();
        let b = second.views()[0].scene().primitives();
        assert_eq!(a, b);
    }
}
