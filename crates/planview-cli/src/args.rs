//! Command-line argument definitions for the planview CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, zoom, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the planview tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input unit configuration file (JSON)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file. Stacked units write two files with
    /// -top and -bottom suffixes.
    #[arg(short, long, default_value = "unit.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Zoom factor baked into the output, clamped to 0.25..=4.0
    #[arg(short, long, default_value_t = 1.0)]
    pub zoom: f32,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
