//! Wall passes: separators, exterior strips, interior walls, unit-level
//! walls, and the dashed frame.
//!
//! All walls are drawn as filled rectangles. Interior walls additionally
//! carry a distance label in inches so the diagram stays readable without
//! a dimension overlay.

use log::debug;
use planview_core::draw::{Primitive, RenderTarget, Role, TextAlign};
use planview_core::geometry::{Point, Rect};
use planview_core::model::{ModuleDimension, UnitConfig};

use super::palette;
use super::placement::PlacedView;
use super::Metrics;

const WALL_LABEL_FONT: f32 = 9.0;

/// Draws the separator walls between consecutive modules.
pub(crate) fn draw_separators(target: &mut impl RenderTarget, placed: &PlacedView) {
    for &rect in &placed.separators {
        target.push(Primitive::rect(
            Role::SeparatorWall,
            rect,
            palette::separator_wall(),
        ));
    }
}

/// Draws the flagged exterior wall strips along the edges of one module
/// body. The horizontal strips span the full body width so the corners
/// stay closed when two adjacent flags are set.
pub(crate) fn draw_exterior_walls(
    target: &mut impl RenderTarget,
    module: &ModuleDimension,
    body: Rect,
    metrics: Metrics,
) {
    let thickness = metrics.exterior_wall;
    let flags = module.exterior_walls;

    if flags.back {
        target.push(exterior(Rect::new(
            body.x(),
            body.y(),
            body.width(),
            thickness,
        )));
    }
    if flags.front {
        target.push(exterior(Rect::new(
            body.x(),
            body.bottom() - thickness,
            body.width(),
            thickness,
        )));
    }
    if flags.left {
        target.push(exterior(Rect::new(
            body.x(),
            body.y(),
            thickness,
            body.height(),
        )));
    }
    if flags.right {
        target.push(exterior(Rect::new(
            body.right() - thickness,
            body.y(),
            thickness,
            body.height(),
        )));
    }
}

fn exterior(rect: Rect) -> Primitive {
    Primitive::rect(Role::ExteriorWall, rect, palette::exterior_wall())
}

/// Draws the interior walls of one module, each with a distance label.
///
/// Distances are measured from the wall's reference edge: left from the
/// body top, right backward from the body bottom, front from the leading
/// edge, back backward from the trailing edge.
pub(crate) fn draw_interior_walls(
    target: &mut impl RenderTarget,
    module: &ModuleDimension,
    body: Rect,
    metrics: Metrics,
) {
    let walls = &module.interior_walls;

    if let Some(wall) = &walls.left {
        let y = body.y() + metrics.px(wall.distance_in);
        let rect = Rect::new(body.x(), y, body.width(), metrics.px(wall.thickness_in()));
        push_horizontal_wall(target, rect, wall.distance_in);
    }
    if let Some(wall) = &walls.right {
        let thickness = metrics.px(wall.thickness_in());
        let y = body.bottom() - metrics.px(wall.distance_in) - thickness;
        let rect = Rect::new(body.x(), y, body.width(), thickness);
        push_horizontal_wall(target, rect, wall.distance_in);
    }
    if let Some(wall) = &walls.front {
        let x = body.x() + metrics.px(wall.distance_in);
        let rect = Rect::new(x, body.y(), metrics.px(wall.thickness_in()), body.height());
        push_vertical_wall(target, rect, wall.distance_in);
    }
    if let Some(wall) = &walls.back {
        let thickness = metrics.px(wall.thickness_in());
        let x = body.right() - metrics.px(wall.distance_in) - thickness;
        let rect = Rect::new(x, body.y(), thickness, body.height());
        push_vertical_wall(target, rect, wall.distance_in);
    }
}

fn push_horizontal_wall(target: &mut impl RenderTarget, rect: Rect, distance_in: f32) {
    target.push(Primitive::rect(
        Role::InteriorWall,
        rect,
        palette::interior_wall(),
    ));
    // Label sits just above the wall's right end.
    target.push(Primitive::text_aligned(
        Role::WallLabel,
        Point::new(rect.right() - 3.0, rect.y() - 2.0),
        format!("{distance_in}\""),
        WALL_LABEL_FONT,
        TextAlign::End,
    ));
}

fn push_vertical_wall(target: &mut impl RenderTarget, rect: Rect, distance_in: f32) {
    target.push(Primitive::rect(
        Role::InteriorWall,
        rect,
        palette::interior_wall(),
    ));
    // Label sits just above the module edge, centered over the wall.
    target.push(Primitive::text(
        Role::WallLabel,
        Point::new(rect.x() + rect.width() / 2.0, rect.y() - 3.0),
        format!("{distance_in}\""),
        WALL_LABEL_FONT,
    ));
}

/// Draws the unit-level interior walls that fall strictly inside the unit
/// span. Walls positioned on or beyond either end edge are skipped.
pub(crate) fn draw_global_walls(
    target: &mut impl RenderTarget,
    unit: &UnitConfig,
    unit_rect: Rect,
    metrics: Metrics,
) {
    let thickness = metrics.px(unit.wall_thickness_in);

    for wall in unit.included_walls() {
        let x = unit_rect.x() + metrics.px(wall.position_in);
        if !unit_rect.contains_x(x) {
            debug!(position_in = wall.position_in; "global wall outside unit span, skipped");
            continue;
        }
        target.push(Primitive::rect(
            Role::GlobalWall,
            Rect::new(x, unit_rect.y(), thickness, unit_rect.height()),
            palette::global_wall(),
        ));
    }
}

/// Draws the dashed frame around the full content extent.
pub(crate) fn draw_frame(target: &mut impl RenderTarget, extent: Rect, metrics: Metrics) {
    target.push(Primitive::rect(
        Role::Frame,
        extent.inflate(metrics.frame_margin),
        palette::frame(),
    ));
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use planview_core::draw::Scene;
    use planview_core::model::{GlobalWall, UnitDocument};

    use super::*;

    fn module(json: &str) -> ModuleDimension {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_exterior_wall_flags() {
        let m = module(r#"{ "id": "M", "exterior_walls": { "back": true, "left": true } }"#);
        let body = Rect::new(40.0, 40.0, 60.0, 120.0);

        let mut scene = Scene::new();
        draw_exterior_walls(&mut scene, &m, body, Metrics::default());

        let walls: Vec<_> = scene.with_role(Role::ExteriorWall).collect();
        assert_eq!(walls.len(), 2);

        // Back wall hugs the top edge at the fixed visual thickness.
        let back = walls[0].as_rect().unwrap();
        assert_approx_eq!(f32, back.y(), 40.0);
        assert_approx_eq!(f32, back.width(), 60.0);
        assert_approx_eq!(f32, back.height(), 6.0);

        // Left wall hugs the left edge, full height.
        let left = walls[1].as_rect().unwrap();
        assert_approx_eq!(f32, left.x(), 40.0);
        assert_approx_eq!(f32, left.width(), 6.0);
        assert_approx_eq!(f32, left.height(), 120.0);
    }

    #[test]
    fn test_left_interior_wall_with_label() {
        let m = module(
            r#"{
                "id": "M",
                "interior_walls": { "left": { "distance_in": 20, "thickness": "3" } }
            }"#,
        );
        let body = Rect::new(40.0, 40.0, 57.6, 120.0);

        let mut scene = Scene::new();
        draw_interior_walls(&mut scene, &m, body, Metrics::default());

        let wall = scene
            .with_role(Role::InteriorWall)
            .next()
            .unwrap()
            .as_rect()
            .unwrap();
        // 20in from the top edge at the default 1.2 scale, 3in thick.
        assert_approx_eq!(f32, wall.y(), 40.0 + 24.0);
        assert_approx_eq!(f32, wall.height(), 3.6);
        assert_approx_eq!(f32, wall.width(), body.width());

        let label = scene.with_role(Role::WallLabel).next().unwrap();
        assert_eq!(label.as_text(), Some("20\""));
    }

    #[test]
    fn test_right_interior_wall_measured_from_bottom() {
        let m = module(
            r#"{
                "id": "M",
                "interior_walls": { "right": { "distance_in": 10 } }
            }"#,
        );
        let body = Rect::new(0.0, 0.0, 60.0, 120.0);

        let mut scene = Scene::new();
        draw_interior_walls(&mut scene, &m, body, Metrics::default());

        let wall = scene
            .with_role(Role::InteriorWall)
            .next()
            .unwrap()
            .as_rect()
            .unwrap();
        // 10in up from the bottom edge, default 4in thickness.
        assert_approx_eq!(f32, wall.bottom(), 120.0 - 12.0);
        assert_approx_eq!(f32, wall.height(), 4.8);
    }

    #[test]
    fn test_front_and_back_walls_are_vertical() {
        let m = module(
            r#"{
                "id": "M",
                "interior_walls": {
                    "front": { "distance_in": 10 },
                    "back": { "distance_in": 10 }
                }
            }"#,
        );
        let body = Rect::new(0.0, 0.0, 100.0, 120.0);

        let mut scene = Scene::new();
        draw_interior_walls(&mut scene, &m, body, Metrics::default());

        let walls: Vec<_> = scene
            .with_role(Role::InteriorWall)
            .map(|p| p.as_rect().unwrap())
            .collect();
        assert_eq!(walls.len(), 2);
        assert_approx_eq!(f32, walls[0].x(), 12.0);
        assert_approx_eq!(f32, walls[0].height(), 120.0);
        assert_approx_eq!(f32, walls[1].right(), 100.0 - 12.0);
    }

    #[test]
    fn test_global_wall_inside_span() {
        let doc: UnitDocument = serde_json::from_str(
            r#"{
                "unit": { "first_wall": { "include": true, "position_in": 50 } },
                "modules": [ { "id": "A" } ]
            }"#,
        )
        .unwrap();
        let unit_rect = Rect::new(40.0, 40.0, 200.0, 120.0);

        let mut scene = Scene::new();
        draw_global_walls(&mut scene, &doc.unit, unit_rect, Metrics::default());

        let wall = scene
            .with_role(Role::GlobalWall)
            .next()
            .unwrap()
            .as_rect()
            .unwrap();
        assert_approx_eq!(f32, wall.x(), 40.0 + 60.0);
        assert_approx_eq!(f32, wall.height(), 120.0);
        assert_approx_eq!(f32, wall.width(), 4.8);
    }

    #[test]
    fn test_global_wall_on_or_beyond_edge_skipped() {
        let unit = UnitConfig {
            first_wall: Some(GlobalWall {
                include: true,
                position_in: 0.0,
            }),
            second_wall: Some(GlobalWall {
                include: true,
                position_in: 500.0,
            }),
            ..UnitConfig::default()
        };
        let unit_rect = Rect::new(40.0, 40.0, 200.0, 120.0);

        let mut scene = Scene::new();
        draw_global_walls(&mut scene, &unit, unit_rect, Metrics::default());
        assert_eq!(scene.with_role(Role::GlobalWall).count(), 0);
    }

    #[test]
    fn test_frame_inflates_extent() {
        let mut scene = Scene::new();
        draw_frame(&mut scene, Rect::new(10.0, 10.0, 100.0, 50.0), Metrics::default());

        let frame = scene
            .with_role(Role::Frame)
            .next()
            .unwrap()
            .as_rect()
            .unwrap();
        assert_approx_eq!(f32, frame.x(), 2.0);
        assert_approx_eq!(f32, frame.width(), 116.0);
    }
}
