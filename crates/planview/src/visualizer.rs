//! Stateful visualizer session.
//!
//! [`Visualizer`] owns the current document, the computed layout, and the
//! zoom level, and enforces the interaction policy: new data resets the
//! zoom and rebuilds everything, a refresh rebuilds while keeping the
//! zoom. Scenes are never patched in place.

use log::info;
use planview_core::model::UnitDocument;

use crate::config::AppConfig;
use crate::layout::{Engine, UnitLayout};
use crate::zoom::Zoom;

/// What a rebuild changed, for hosts that manage window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawReport {
    /// The layout switched between stacked and non-stacked forms.
    pub stacked_changed: bool,
    /// Number of views in the new layout (0, 1, or 2).
    pub view_count: usize,
}

/// A layout session with zoom state.
#[derive(Debug)]
pub struct Visualizer {
    engine: Engine,
    document: UnitDocument,
    layout: UnitLayout,
    zoom: Zoom,
}

impl Visualizer {
    /// Creates a visualizer with an empty document.
    pub fn new(config: &AppConfig) -> Self {
        let engine = Engine::new(config.layout().metrics());
        let document = UnitDocument {
            unit: Default::default(),
            modules: Vec::new(),
        };
        let layout = engine.calculate(&document);
        Self {
            engine,
            document,
            layout,
            zoom: Zoom::identity(),
        }
    }

    /// The current layout.
    pub fn layout(&self) -> &UnitLayout {
        &self.layout
    }

    /// The current document.
    pub fn document(&self) -> &UnitDocument {
        &self.document
    }

    /// The current zoom level.
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Replaces the document, resets the zoom, and rebuilds the layout.
    pub fn update_document(&mut self, document: UnitDocument) -> RedrawReport {
        self.document = document;
        self.zoom = Zoom::identity();
        let report = self.rebuild();
        info!(
            modules = self.document.modules.len(),
            views = report.view_count;
            "document updated"
        );
        report
    }

    /// Replaces the layout configuration, resets the zoom, and rebuilds
    /// the layout.
    pub fn update_config(&mut self, config: &AppConfig) -> RedrawReport {
        self.engine = Engine::new(config.layout().metrics());
        self.zoom = Zoom::identity();
        self.rebuild()
    }

    /// Rebuilds the layout from the current document, keeping the zoom.
    pub fn refresh(&mut self) -> RedrawReport {
        self.rebuild()
    }

    /// Steps the zoom in. The layout itself is zoom-independent; only
    /// export applies the factor.
    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    /// Steps the zoom out.
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
    }

    /// Sets an explicit zoom factor, clamped to the valid range.
    pub fn set_zoom(&mut self, factor: f32) {
        self.zoom = Zoom::new(factor);
    }

    /// Resets the zoom to neutral.
    pub fn reset_zoom(&mut self) {
        self.zoom = Zoom::identity();
    }

    fn rebuild(&mut self) -> RedrawReport {
        let was_stacked = self.layout.is_stacked();
        self.layout = self.engine.calculate(&self.document);
        RedrawReport {
            stacked_changed: was_stacked != self.layout.is_stacked(),
            view_count: self.layout.views().len(),
        }
    }
}
