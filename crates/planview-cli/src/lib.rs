//! CLI logic for the planview tool.
//!
//! Reads a unit configuration document (JSON), lays it out, and writes
//! the resulting SVG file(s).

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use planview::export::svg::Svg;
use planview::export::Exporter;
use planview::zoom::Zoom;
use planview::{PlanBuilder, PlanError};

/// Run the planview CLI application
///
/// This function processes the input document through the layout
/// pipeline and writes the resulting SVG to the output file. Stacked
/// units write two files with -top and -bottom suffixes.
///
/// # Errors
///
/// Returns `PlanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PlanError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing unit document"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let background = app_config
        .style()
        .background_color()
        .map_err(PlanError::Config)?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the document using the PlanBuilder API
    let builder = PlanBuilder::new(app_config);
    let document = builder.load_document(&source)?;
    let layout = builder.calculate(&document);

    if layout.is_empty() {
        warn!("Document holds no modules, no output written");
        return Ok(());
    }

    for view in layout.views() {
        info!(
            view = view.kind().title(),
            summary = view.summary().to_string();
            "View laid out"
        );
    }

    // Write output file(s)
    let exporter = Svg::new(&args.output)
        .with_background(background)
        .with_zoom(Zoom::new(args.zoom));
    exporter.export_unit_layout(&layout)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
