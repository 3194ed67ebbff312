//! Fixed drawing palette.
//!
//! Colors are named CSS literals so the rendered SVG stays legible in any
//! viewer. They are intentionally not configurable; only the background
//! color is exposed through [`StyleConfig`](crate::config::StyleConfig).

use planview_core::color::Color;
use planview_core::draw::{Stroke, Style};

/// Parses a known-good CSS color literal.
fn css(literal: &str) -> Color {
    match Color::new(literal) {
        Ok(color) => color,
        Err(_) => Color::default(),
    }
}

/// White body with a black outline.
pub(crate) fn module_body() -> Style {
    Style::new(Some(css("white")), Some(Stroke::solid(css("black"), 1.5)))
}

/// Separator wall strips between modules.
pub(crate) fn separator_wall() -> Style {
    Style::filled(css("darkgray"))
}

/// Exterior wall strips on module edges.
pub(crate) fn exterior_wall() -> Style {
    Style::filled(css("dimgray"))
}

/// Per-module interior wall strips.
pub(crate) fn interior_wall() -> Style {
    Style::filled(css("gray"))
}

/// Unit-level interior walls.
pub(crate) fn global_wall() -> Style {
    Style::filled(css("dimgray"))
}

/// Global tunnel strips.
pub(crate) fn tunnel() -> Style {
    Style::new(
        Some(css("lightsteelblue")),
        Some(Stroke::solid(css("steelblue"), 1.0)),
    )
}

/// Airflow arrows and vestibule glyphs.
pub(crate) fn airflow_color() -> Color {
    css("steelblue")
}

/// Airflow arrow shaft stroke.
pub(crate) fn airflow_stroke() -> Stroke {
    Stroke::solid(airflow_color(), 2.0)
}

/// The white chip behind the "AIR" caption.
pub(crate) fn caption_chip() -> Style {
    Style::filled(css("white"))
}

/// The dashed frame around the view extent.
pub(crate) fn frame() -> Style {
    Style::stroked(Stroke::dashed(css("gray"), 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_literals_parse() {
        // Each style resolves without falling back to the default color.
        assert_ne!(module_body().fill().unwrap(), Color::default());
        assert_ne!(separator_wall().fill().unwrap(), Color::default());
        assert_ne!(airflow_color(), Color::default());
        assert!(frame().stroke().is_some());
        assert!(tunnel().fill().is_some());
    }
}
