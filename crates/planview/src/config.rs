//! Configuration types for planview rendering.
//!
//! # Overview
//!
//! - [`AppConfig`] - top-level configuration combining layout and style
//!   settings.
//! - [`LayoutConfig`] - the layout constants (scale, padding, clamps,
//!   strip widths). The defaults are the values the legacy visualizer
//!   hard-coded; exposing them here makes them configuration rather than
//!   magic numbers.
//! - [`StyleConfig`] - visual styling options such as background color.
//!
//! All types implement [`serde::Deserialize`] with per-field defaults, so
//! a partial TOML document is always acceptable.

use serde::Deserialize;

use planview_core::color::Color;

use crate::layout::Metrics;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style
    /// configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout constants for the plan-view engine.
///
/// The defaults (48/100 inch dimension fallbacks live in
/// `planview_core::dimension`; the pixel constants live here) stem from
/// the legacy visualizer and have no documented domain rationale; treat
/// them as placeholders that happen to produce readable diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels per inch.
    scale_px_per_in: f32,

    /// Padding between the drawing origin and the unit's start edge, and
    /// between the unit's end edge and the view border.
    padding_px: f32,

    /// Minimum rendered module length; zero or garbage dimensions never
    /// collapse to invisible boxes.
    min_module_length_px: f32,

    /// Minimum rendered module width.
    min_module_width_px: f32,

    /// Fixed visual thickness of exterior wall strips.
    exterior_wall_px: f32,

    /// Fixed width of global tunnel strips.
    tunnel_strip_px: f32,

    /// Gap between the content extent and the dashed unit frame.
    frame_margin_px: f32,
}

impl LayoutConfig {
    /// Returns the resolved layout metrics used by the engine.
    pub fn metrics(&self) -> Metrics {
        Metrics {
            scale: self.scale_px_per_in,
            padding: self.padding_px,
            min_module_length: self.min_module_length_px,
            min_module_width: self.min_module_width_px,
            exterior_wall: self.exterior_wall_px,
            tunnel_strip: self.tunnel_strip_px,
            frame_margin: self.frame_margin_px,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale_px_per_in: 1.2,
            padding_px: 40.0,
            min_module_length_px: 20.0,
            min_module_width_px: 40.0,
            exterior_wall_px: 6.0,
            tunnel_strip_px: 50.0,
            frame_margin_px: 8.0,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the rendered SVG, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
