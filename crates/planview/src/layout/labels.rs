//! Text passes: module identifiers, orientation labels, and the view
//! title.

use planview_core::draw::{Primitive, RenderTarget, Role, TextAlign};
use planview_core::geometry::{Point, Rect};
use planview_core::model::ModuleDimension;

use super::Metrics;

const MODULE_LABEL_FONT: f32 = 12.0;
const ORIENTATION_FONT: f32 = 11.0;

/// Draws the identifier label of one module near the top of its body,
/// clear of the airflow annotation band at the center.
pub(crate) fn draw_module_label(
    target: &mut impl RenderTarget,
    module: &ModuleDimension,
    body: Rect,
) {
    target.push(Primitive::text(
        Role::ModuleLabel,
        Point::new(body.center().x(), body.y() + 16.0),
        module.id.clone(),
        MODULE_LABEL_FONT,
    ));
}

/// Draws the BACK/FRONT/LEFT/RIGHT orientation labels around the frame,
/// plus the view title beneath the RIGHT label when one is given.
pub(crate) fn draw_orientation_labels(
    target: &mut impl RenderTarget,
    extent: Rect,
    metrics: Metrics,
    title: Option<&str>,
) {
    let frame = extent.inflate(metrics.frame_margin);

    target.push(Primitive::text(
        Role::OrientationLabel,
        Point::new(frame.center().x(), frame.y() - 6.0),
        "BACK",
        ORIENTATION_FONT,
    ));
    target.push(Primitive::text(
        Role::OrientationLabel,
        Point::new(frame.center().x(), frame.bottom() + 14.0),
        "FRONT",
        ORIENTATION_FONT,
    ));
    target.push(Primitive::text_aligned(
        Role::OrientationLabel,
        Point::new(frame.x() - 6.0, frame.center().y()),
        "LEFT",
        ORIENTATION_FONT,
        TextAlign::End,
    ));
    target.push(Primitive::text_aligned(
        Role::OrientationLabel,
        Point::new(frame.right() + 6.0, frame.center().y()),
        "RIGHT",
        ORIENTATION_FONT,
        TextAlign::Start,
    ));

    if let Some(title) = title {
        target.push(Primitive::text_aligned(
            Role::ViewTitle,
            Point::new(frame.right() + 6.0, frame.center().y() + 16.0),
            title,
            ORIENTATION_FONT,
            TextAlign::Start,
        ));
    }
}

#[cfg(test)]
mod tests {
    use planview_core::draw::Scene;

    use super::*;

    #[test]
    fn test_module_label_content() {
        let module: ModuleDimension = serde_json::from_str(r#"{ "id": "FAN-1" }"#).unwrap();
        let mut scene = Scene::new();
        draw_module_label(&mut scene, &module, Rect::new(0.0, 0.0, 60.0, 120.0));

        let label = scene.with_role(Role::ModuleLabel).next().unwrap();
        assert_eq!(label.as_text(), Some("FAN-1"));
    }

    #[test]
    fn test_orientation_labels_without_title() {
        let mut scene = Scene::new();
        draw_orientation_labels(
            &mut scene,
            Rect::new(40.0, 40.0, 200.0, 120.0),
            Metrics::default(),
            None,
        );

        let labels: Vec<_> = scene
            .with_role(Role::OrientationLabel)
            .map(|p| p.as_text().unwrap().to_string())
            .collect();
        assert_eq!(labels, ["BACK", "FRONT", "LEFT", "RIGHT"]);
        assert_eq!(scene.with_role(Role::ViewTitle).count(), 0);
    }

    #[test]
    fn test_title_beneath_right_label() {
        let mut scene = Scene::new();
        draw_orientation_labels(
            &mut scene,
            Rect::new(40.0, 40.0, 200.0, 120.0),
            Metrics::default(),
            Some("TOP UNIT"),
        );

        let title = scene.with_role(Role::ViewTitle).next().unwrap();
        assert_eq!(title.as_text(), Some("TOP UNIT"));
    }
}
