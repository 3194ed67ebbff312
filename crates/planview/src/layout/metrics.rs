//! Resolved layout metrics.
//!
//! [`Metrics`] is the plain-value form of
//! [`LayoutConfig`](crate::config::LayoutConfig): everything the layout
//! passes need to convert inches to pixels and clamp degenerate sizes,
//! copied once per calculation so the engine never touches serde types.

use planview_core::model::ModuleDimension;

/// Pixel-space layout constants.
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    /// Pixels per inch.
    pub scale: f32,
    /// Padding from the drawing origin to the unit's start edge.
    pub padding: f32,
    /// Minimum rendered module length in pixels.
    pub min_module_length: f32,
    /// Minimum rendered module width in pixels.
    pub min_module_width: f32,
    /// Fixed visual thickness of exterior wall strips.
    pub exterior_wall: f32,
    /// Fixed width of global tunnel strips.
    pub tunnel_strip: f32,
    /// Gap between the content extent and the dashed unit frame.
    pub frame_margin: f32,
}

impl Metrics {
    /// Converts inches to pixels.
    pub fn px(self, inches: f32) -> f32 {
        inches * self.scale
    }

    /// The rendered length of a module along the unit axis, clamped so
    /// zero or garbage dimensions never collapse to an invisible box.
    pub fn module_length_px(self, module: &ModuleDimension) -> f32 {
        self.px(module.length_in()).max(self.min_module_length)
    }

    /// The rendered width of a module across the unit, clamped.
    pub fn module_width_px(self, module: &ModuleDimension) -> f32 {
        self.px(module.width_in()).max(self.min_module_width)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        crate::config::LayoutConfig::default().metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(length: &str, width: &str) -> ModuleDimension {
        serde_json::from_str(&format!(
            r#"{{ "id": "M", "length": "{length}", "width": "{width}" }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_px_conversion() {
        let m = Metrics::default();
        assert_eq!(m.px(48.0), 57.6);
        assert_eq!(m.px(4.0), 4.8);
    }

    #[test]
    fn test_module_pixel_sizes() {
        let m = Metrics::default();
        let mod_a = module("48 in", "100 in");
        assert_eq!(m.module_length_px(&mod_a), 57.6);
        assert_eq!(m.module_width_px(&mod_a), 120.0);
    }

    #[test]
    fn test_minimum_clamps() {
        let m = Metrics::default();
        // A 1-inch length scales to 1.2px, well below the minimum.
        let tiny = module("1", "1");
        assert_eq!(m.module_length_px(&tiny), m.min_module_length);
        assert_eq!(m.module_width_px(&tiny), m.min_module_width);
    }
}
