//! Module placement.
//!
//! Places the modules of one view left to right along the unit axis.
//! Every module body shares the same top edge; the unit rectangle spans
//! from the first module's left edge to the last module's right edge and
//! is as tall as the widest module. Consecutive modules are separated by
//! a wall strip whose thickness comes from the unit configuration.

use planview_core::geometry::{Rect, Size};
use planview_core::model::{ModuleDimension, UnitConfig};

use super::Metrics;

/// One module body placed in view coordinates.
#[derive(Debug, Clone)]
pub struct PlacedModule {
    /// Index into the document's module list.
    pub index: usize,
    /// The module body rectangle, excluding walls.
    pub body: Rect,
}

/// The placed geometry of one view, before walls and annotations.
#[derive(Debug, Clone)]
pub struct PlacedView {
    /// Placed module bodies, in placement order.
    pub modules: Vec<PlacedModule>,
    /// Separator wall strips between consecutive modules.
    pub separators: Vec<Rect>,
    /// The unit footprint: all module bodies and separators.
    pub unit_rect: Rect,
    /// The base canvas size for this view, including padding and any
    /// global tunnel strips on the left and right.
    pub size: Size,
}

/// Places the modules selected by `indices` into a view.
///
/// Space for the left and right global tunnel strips is reserved here so
/// the unit rectangle lands between them; the strips themselves are drawn
/// by the tunnel pass.
pub(crate) fn place(
    modules: &[ModuleDimension],
    indices: &[usize],
    unit: &UnitConfig,
    metrics: Metrics,
) -> PlacedView {
    let tallest = indices
        .iter()
        .map(|&index| metrics.module_width_px(&modules[index]))
        .fold(0.0_f32, f32::max);

    let unit_x = metrics.padding
        + if unit.tunnels.left.include {
            metrics.tunnel_strip
        } else {
            0.0
        };
    let unit_y = metrics.padding;
    let separator_thickness = metrics.px(unit.wall_thickness_in);

    let mut placed = Vec::with_capacity(indices.len());
    let mut separators = Vec::new();
    let mut cursor = unit_x;

    for (position, &index) in indices.iter().enumerate() {
        if position > 0 {
            separators.push(Rect::new(cursor, unit_y, separator_thickness, tallest));
            cursor += separator_thickness;
        }

        let length = metrics.module_length_px(&modules[index]);
        let width = metrics.module_width_px(&modules[index]);
        placed.push(PlacedModule {
            index,
            body: Rect::new(cursor, unit_y, length, width),
        });
        cursor += length;
    }

    let unit_rect = Rect::new(unit_x, unit_y, cursor - unit_x, tallest);

    let right_strip = if unit.tunnels.right.include {
        metrics.tunnel_strip
    } else {
        0.0
    };
    let size = Size::new(
        cursor + right_strip + metrics.padding,
        tallest + 2.0 * metrics.padding,
    );

    PlacedView {
        modules: placed,
        separators,
        unit_rect,
        size,
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
    fn test_three_module_run() {
        let doc = document(
            r#"{
                "modules": [
                    { "id": "A", "length": "48", "width": "100" },
                    { "id": "B", "length": "60", "width": "100" },
                    { "id": "C", "length": "48", "width": "100" }
                ]
            }"#,
        );
        let view = place(&doc.modules, &[0, 1, 2], &doc.unit, Metrics::default());

        assert_eq!(view.modules.len(), 3);
        assert_eq!(view.separators.len(), 2);

        // 48in -> 57.6px, 60in -> 72px, 4in separator -> 4.8px.
        assert_approx_eq!(f32, view.modules[0].body.x(), 40.0);
        assert_approx_eq!(f32, view.modules[0].body.width(), 57.6);
        assert_approx_eq!(f32, view.separators[0].x(), 97.6);
        assert_approx_eq!(f32, view.separators[0].width(), 4.8);
        assert_approx_eq!(f32, view.modules[1].body.x(), 102.4);
        assert_approx_eq!(f32, view.modules[1].body.width(), 72.0);

        // Total run: 57.6 + 72 + 57.6 + 2 * 4.8 = 196.8.
        assert_approx_eq!(f32, view.unit_rect.width(), 196.8);
        assert_approx_eq!(f32, view.unit_rect.height(), 120.0);
        assert_approx_eq!(f32, view.size.width(), 40.0 + 196.8 + 40.0);
        assert_approx_eq!(f32, view.size.height(), 120.0 + 80.0);
    }

    #[test]
    fn test_tallest_module_sets_unit_height() {
        let doc = document(
            r#"{
                "modules": [
                    { "id": "A", "width": "80" },
                    { "id": "B", "width": "120" }
                ]
            }"#,
        );
        let view = place(&doc.modules, &[0, 1], &doc.unit, Metrics::default());

        assert_approx_eq!(f32, view.unit_rect.height(), 144.0);
        assert_approx_eq!(f32, view.separators[0].height(), 144.0);
        // The shorter module still shares the common top edge.
        assert_approx_eq!(f32, view.modules[0].body.y(), view.modules[1].body.y());
        assert_approx_eq!(f32, view.modules[0].body.height(), 96.0);
    }

    #[test]
    fn test_left_tunnel_shifts_unit() {
        let doc = document(
            r#"{
                "unit": { "tunnels": { "left": { "include": true } } },
                "modules": [ { "id": "A", "length": "48" } ]
            }"#,
        );
        let view = place(&doc.modules, &[0], &doc.unit, Metrics::default());

        assert_approx_eq!(f32, view.unit_rect.x(), 90.0);
        assert!(view.separators.is_empty());
    }

    #[test]
    fn test_right_tunnel_widens_canvas() {
        let base = document(r#"{ "modules": [ { "id": "A" } ] }"#);
        let with_tunnel = document(
            r#"{
                "unit": { "tunnels": { "right": { "include": true } } },
                "modules": [ { "id": "A" } ]
            }"#,
        );
        let metrics = Metrics::default();

        let plain = place(&base.modules, &[0], &base.unit, metrics);
        let tunneled = place(&with_tunnel.modules, &[0], &with_tunnel.unit, metrics);
        assert_approx_eq!(
            f32,
            tunneled.size.width(),
            plain.size.width() + metrics.tunnel_strip
        );
    }

    #[test]
    fn test_single_module_no_separators() {
        let doc = document(r#"{ "modules": [ { "id": "only" } ] }"#);
        let view = place(&doc.modules, &[0], &doc.unit, Metrics::default());
        assert!(view.separators.is_empty());
        assert_approx_eq!(f32, view.unit_rect.width(), view.modules[0].body.width());
    }
}
