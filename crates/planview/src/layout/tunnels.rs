//! Global tunnel strips and airflow annotations.
//!
//! Global tunnels are fixed-width strips on the left and right of the
//! unit footprint plus an optional strip centered on it. Airflow renders
//! as a horizontal arrow (or a vestibule ellipse), inside the module
//! body for module airflow and at the strip center for tunnel airflow.

use planview_core::draw::{Primitive, RenderTarget, Role, Style};
use planview_core::geometry::{Point, Rect};
use planview_core::model::{AirflowDirection, GlobalTunnel, ModuleDimension, UnitConfig};

use super::palette;
use super::Metrics;

const ARROW_HEAD: f32 = 7.0;
const ARROW_HALF_WIDTH: f32 = 4.0;
const CAPTION_FONT: f32 = 9.0;
const CAPTION_CHIP_WIDTH: f32 = 24.0;
const CAPTION_CHIP_HEIGHT: f32 = 12.0;

/// Draws the enabled global tunnel strips and returns the combined
/// content extent (unit footprint plus strips).
pub(crate) fn draw_global_tunnels(
    target: &mut impl RenderTarget,
    unit: &UnitConfig,
    unit_rect: Rect,
    metrics: Metrics,
) -> Rect {
    let mut extent = unit_rect;
    let tunnels = unit.tunnels;

    if tunnels.left.include {
        let strip = Rect::new(
            unit_rect.x() - metrics.tunnel_strip,
            unit_rect.y(),
            metrics.tunnel_strip,
            unit_rect.height(),
        );
        draw_strip(target, tunnels.left, strip);
        extent = extent.union(strip);
    }
    if tunnels.right.include {
        let strip = Rect::new(
            unit_rect.right(),
            unit_rect.y(),
            metrics.tunnel_strip,
            unit_rect.height(),
        );
        draw_strip(target, tunnels.right, strip);
        extent = extent.union(strip);
    }
    if tunnels.middle.include {
        let strip = Rect::new(
            unit_rect.center().x() - metrics.tunnel_strip / 2.0,
            unit_rect.y(),
            metrics.tunnel_strip,
            unit_rect.height(),
        );
        draw_strip(target, tunnels.middle, strip);
    }

    extent
}

fn draw_strip(target: &mut impl RenderTarget, tunnel: GlobalTunnel, strip: Rect) {
    target.push(Primitive::rect(Role::Tunnel, strip, palette::tunnel()));
    target.push(Primitive::text(
        Role::TunnelLabel,
        Point::new(strip.center().x(), strip.y() + 12.0),
        "TUNNEL",
        CAPTION_FONT,
    ));

    let center = strip.center();
    let length = strip.width() * 0.6;
    match tunnel.airflow {
        AirflowDirection::None => {}
        AirflowDirection::BackToFront => horizontal_arrow(target, center, length, true),
        AirflowDirection::FrontToBack => horizontal_arrow(target, center, length, false),
        AirflowDirection::Vestibule => vestibule_glyph(target, center, strip.width() * 0.3),
    }
}

/// Draws the airflow annotation for one module body.
///
/// When the module carries a left interior wall the annotation sits in
/// the band above it; a right interior wall places it in the band below.
/// Otherwise it sits at the body center.
pub(crate) fn draw_module_airflow(
    target: &mut impl RenderTarget,
    module: &ModuleDimension,
    body: Rect,
    metrics: Metrics,
) {
    if !module.airflow.is_annotated() {
        return;
    }

    let y = if let Some(wall) = &module.interior_walls.left {
        body.y() + metrics.px(wall.distance_in) / 2.0
    } else if let Some(wall) = &module.interior_walls.right {
        body.bottom() - metrics.px(wall.distance_in) / 2.0
    } else {
        body.center().y()
    };
    let center = Point::new(body.center().x(), y);
    let length = body.width() * 0.6;

    match module.airflow {
        AirflowDirection::None => {}
        AirflowDirection::BackToFront => {
            horizontal_arrow(target, center, length, true);
            caption(target, center);
        }
        AirflowDirection::FrontToBack => {
            horizontal_arrow(target, center, length, false);
            caption(target, center);
        }
        AirflowDirection::Vestibule => vestibule_glyph(target, center, body.width() * 0.25),
    }
}

fn horizontal_arrow(target: &mut impl RenderTarget, center: Point, length: f32, rightward: bool) {
    let dir = if rightward { 1.0 } else { -1.0 };
    let tail = Point::new(center.x() - dir * length / 2.0, center.y());
    let tip = Point::new(center.x() + dir * length / 2.0, center.y());
    let neck = Point::new(tip.x() - dir * ARROW_HEAD, tip.y());

    target.push(Primitive::line(
        Role::Airflow,
        tail,
        neck,
        palette::airflow_stroke(),
    ));
    target.push(Primitive::polygon(
        Role::Airflow,
        vec![
            tip,
            Point::new(neck.x(), neck.y() - ARROW_HALF_WIDTH),
            Point::new(neck.x(), neck.y() + ARROW_HALF_WIDTH),
        ],
        palette::airflow_color(),
    ));
}

fn vestibule_glyph(target: &mut impl RenderTarget, center: Point, radius_x: f32) {
    target.push(Primitive::ellipse(
        Role::Airflow,
        center,
        radius_x,
        10.0,
        Style::stroked(palette::airflow_stroke()),
    ));
}

/// Pushes the white "AIR" chip over the arrow midpoint. The chip rect
/// precedes the text so both land in the text layer in that order.
fn caption(target: &mut impl RenderTarget, center: Point) {
    target.push(Primitive::rect(
        Role::AirflowCaption,
        Rect::new(
            center.x() - CAPTION_CHIP_WIDTH / 2.0,
            center.y() - CAPTION_CHIP_HEIGHT / 2.0,
            CAPTION_CHIP_WIDTH,
            CAPTION_CHIP_HEIGHT,
        ),
        palette::caption_chip(),
    ));
    target.push(Primitive::text(
        Role::AirflowCaption,
        Point::new(center.x(), center.y() + 3.0),
        "AIR",
        CAPTION_FONT,
    ));
}
