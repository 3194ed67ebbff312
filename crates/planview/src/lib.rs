//! Planview - plan-view diagrams for modular air handling units.
//!
//! Layout and rendering for AHU unit configuration documents: module
//! boxes, separator and interior walls, global tunnels, and airflow
//! annotations, exported as SVG.

pub mod config;
pub mod export;
pub mod layout;
pub mod visualizer;
pub mod zoom;

mod error;

pub use planview_core::{color, dimension, draw, geometry, model};

pub use error::PlanError;

use log::{debug, info};

use config::AppConfig;
use layout::{Engine, UnitLayout, ViewKind};
use model::UnitDocument;

/// Builder for loading and rendering unit configuration documents.
///
/// # Examples
///
/// ```rust,no_run
/// use planview::{PlanBuilder, config::AppConfig};
///
/// let source = r#"{ "modules": [ { "id": "FAN-1", "length": "60 in" } ] }"#;
///
/// let builder = PlanBuilder::new(AppConfig::default());
///
/// // Load the JSON document into the model
/// let document = builder.load_document(source)
///     .expect("Failed to load");
///
/// // Render to SVG, one string per view
/// let views = builder.render_svg(&document)
///     .expect("Failed to render");
///
/// // Or use the default config
/// let builder = PlanBuilder::default();
/// ```
#[derive(Default)]
pub struct PlanBuilder {
    config: AppConfig,
}

impl PlanBuilder {
    /// Create a new plan builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON unit configuration document into the model.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Document` when the JSON is malformed or a
    /// closed-enum field (tunnel position, tunnel type, airflow) carries
    /// an unknown value.
    pub fn load_document(&self, source: &str) -> Result<UnitDocument, PlanError> {
        info!("Loading unit document");

        let document: UnitDocument = serde_json::from_str(source)?;

        debug!(modules = document.modules.len(); "Unit document loaded");
        Ok(document)
    }

    /// Lay out the whole document.
    pub fn calculate(&self, document: &UnitDocument) -> UnitLayout {
        Engine::new(self.config.layout().metrics()).calculate(document)
    }

    /// Render a document to SVG, one string per view.
    ///
    /// An empty document yields an empty list. Stacked units yield two
    /// entries, top first.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Config` when the configured background color
    /// does not parse.
    pub fn render_svg(&self, document: &UnitDocument) -> Result<Vec<(ViewKind, String)>, PlanError> {
        let layout = self.calculate(document);
        info!(views = layout.views().len(); "Layout calculated");

        let background = self
            .config
            .style()
            .background_color()
            .map_err(PlanError::Config)?;
        let exporter = export::svg::Svg::new("unit.svg").with_background(background);

        let rendered: Vec<(ViewKind, String)> = layout
            .views()
            .into_iter()
            .map(|view| (view.kind(), exporter.render_view(view).to_string()))
            .collect();

        info!("SVG rendered successfully");
        Ok(rendered)
    }
}
