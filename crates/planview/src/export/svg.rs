//! SVG export backend.
//!
//! Each view renders into one SVG document. Primitives are sorted into
//! render layers and emitted as `<g data-layer="...">` groups, so the
//! output is both z-ordered and greppable in tests. Zoom applies as a
//! uniform scale transform on the content group; the layout itself is
//! zoom-independent.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use planview_core::apply_stroke;
use planview_core::color::Color;
use planview_core::draw::{Primitive, RenderLayer, Scene, Shape};
use svg::node::element as svg_element;
use svg::Document;

use crate::export;
use crate::layout::{UnitLayout, ViewLayout};
use crate::zoom::Zoom;

/// Applies fill and optional stroke attributes to an SVG element.
macro_rules! apply_style {
    ($element:expr, $style:expr) => {{
        let mut elem = match $style.fill() {
            Some(fill) => $element
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => $element.set("fill", "none"),
        };

        if let Some(stroke) = $style.stroke() {
            elem = apply_stroke!(elem, stroke);
        }

        elem
    }};
}

/// SVG file exporter.
pub struct Svg {
    pub file_name: String,
    background: Option<Color>,
    zoom: Zoom,
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            background: None,
            zoom: Zoom::identity(),
        }
    }

    /// Sets a background color painted behind the whole document.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Sets the zoom factor baked into exported documents.
    pub fn with_zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = zoom;
        self
    }

    /// Writes an SVG document to the given file.
    pub fn write_document(&self, doc: Document, file_name: &str) -> Result<(), export::Error> {
        info!(file_name; "Creating SVG file");
        let f = match File::create(file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }

    /// Renders one view into an SVG document.
    pub fn render_view(&self, view: &ViewLayout) -> Document {
        let size = view.size().scale(self.zoom.factor());
        let mut doc = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0_f32, 0.0_f32, size.width(), size.height()));

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", background.to_string()),
            );
        }

        let mut content =
            svg_element::Group::new().set("transform", format!("scale({})", self.zoom.factor()));
        for group in render_scene(view.scene()) {
            content = content.add(group);
        }
        doc.add(content)
    }
}

impl export::Exporter for Svg {
    fn export_unit_layout(&self, layout: &UnitLayout) -> Result<(), export::Error> {
        match layout {
            UnitLayout::Empty => Err(export::Error::Render(
                "document holds no modules, nothing to export".to_string(),
            )),
            UnitLayout::Single(view) => {
                let doc = self.render_view(view);
                debug!("SVG document rendered");
                self.write_document(doc, &self.file_name)
            }
            UnitLayout::Stacked { top, bottom } => {
                let top_name = suffixed_file_name(&self.file_name, "top");
                let bottom_name = suffixed_file_name(&self.file_name, "bottom");

                self.write_document(self.render_view(top), &top_name)?;
                self.write_document(self.render_view(bottom), &bottom_name)
            }
        }
    }
}

/// Derives the per-view file name for stacked exports, e.g.
/// `unit.svg` becomes `unit-top.svg`.
pub fn suffixed_file_name(file_name: &str, suffix: &str) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let with_suffix = format!("{stem}-{suffix}");

    let renamed = match path.extension() {
        Some(ext) => format!("{with_suffix}.{}", ext.to_string_lossy()),
        None => with_suffix,
    };
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.join(renamed).to_string_lossy().into_owned()
        }
        _ => renamed,
    }
}

/// Renders a scene into per-layer `<g>` groups, bottom layer first.
fn render_scene(scene: &Scene) -> Vec<svg_element::Group> {
    let mut groups = Vec::new();
    let mut current: Option<(RenderLayer, svg_element::Group)> = None;

    for primitive in scene.layer_order() {
        let layer = RenderLayer::from(primitive.role());
        let group = match current.take() {
            Some((open_layer, group)) if open_layer == layer => group,
            Some((_, group)) => {
                groups.push(group);
                svg_element::Group::new().set("data-layer", layer.name())
            }
            None => svg_element::Group::new().set("data-layer", layer.name()),
        };
        current = Some((layer, group.add(render_primitive(primitive))));
    }

    if let Some((_, group)) = current {
        groups.push(group);
    }
    groups
}

fn render_primitive(primitive: &Primitive) -> Box<dyn svg::Node> {
    let style = primitive.style();
    match primitive.shape() {
        Shape::Rect(rect) => Box::new(apply_style!(
            svg_element::Rectangle::new()
                .set("x", rect.x())
                .set("y", rect.y())
                .set("width", rect.width())
                .set("height", rect.height()),
            style
        )),
        Shape::Line { from, to } => Box::new(apply_style!(
            svg_element::Line::new()
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y()),
            style
        )),
        Shape::Polygon { points } => {
            let points: Vec<String> = points
                .iter()
                .map(|p| format!("{},{}", p.x(), p.y()))
                .collect();
            Box::new(apply_style!(
                svg_element::Polygon::new().set("points", points.join(" ")),
                style
            ))
        }
        Shape::Ellipse {
            center,
            radius_x,
            radius_y,
        } => Box::new(apply_style!(
            svg_element::Ellipse::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("rx", *radius_x)
                .set("ry", *radius_y),
            style
        )),
        Shape::Text {
            anchor,
            content,
            font_size,
            align,
        } => {
            let fill = style.fill().unwrap_or_default();
            Box::new(
                svg_element::Text::new(content.clone())
                    .set("x", anchor.x())
                    .set("y", anchor.y())
                    .set("font-size", *font_size)
                    .set("font-family", "sans-serif")
                    .set("text-anchor", align.to_svg_value())
                    .set("fill", fill.to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use planview_core::model::UnitDocument;

    use crate::config::AppConfig;
    use crate::layout::Engine;

    use super::*;

    fn layout(json: &str) -> UnitLayout {
        let doc: UnitDocument = serde_json::from_str(json).unwrap();
        Engine::new(AppConfig::default().layout().metrics()).calculate(&doc)
    }

    #[test]
    fn test_render_single_view() {
        let layout = layout(
            r#"{
                "modules": [
                    { "id": "FAN-1", "airflow": "Back-To-Front" },
                    { "id": "COIL-1" }
                ]
            }"#,
        );
        let UnitLayout::Single(view) = &layout else {
            panic!("expected single view");
        };

        let rendered = Svg::new("unit.svg").render_view(view).to_string();
        assert!(rendered.contains("data-layer=\"body\""));
        assert!(rendered.contains("data-layer=\"wall\""));
        assert!(rendered.contains("data-layer=\"text\""));
        assert!(rendered.contains("FAN-1"));
        assert!(rendered.contains("AIR"));
        assert!(rendered.contains("BACK"));
    }

    #[test]
    fn test_background_and_zoom() {
        let layout = layout(r#"{ "modules": [ { "id": "A" } ] }"#);
        let UnitLayout::Single(view) = &layout else {
            panic!("expected single view");
        };

        let exporter = Svg::new("unit.svg")
            .with_background(Some(Color::new("white").unwrap()))
            .with_zoom(Zoom::new(2.0));
        let rendered = exporter.render_view(view).to_string();
        assert!(rendered.contains("scale(2)"));

        let plain = Svg::new("unit.svg").render_view(view).to_string();
        assert!(plain.contains("scale(1)"));
    }

    #[test]
    fn test_suffixed_file_names() {
        assert_eq!(suffixed_file_name("unit.svg", "top"), "unit-top.svg");
        assert_eq!(
            suffixed_file_name("out/unit.svg", "bottom"),
            "out/unit-bottom.svg"
        );
        assert_eq!(suffixed_file_name("unit", "top"), "unit-top");
    }

    #[test]
    fn test_empty_layout_rejected() {
        use crate::export::Exporter;

        let layout = layout(r#"{ "modules": [] }"#);
        let result = Svg::new("unit.svg").export_unit_layout(&layout);
        assert!(matches!(result, Err(export::Error::Render(_))));
    }
}
