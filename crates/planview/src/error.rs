//! Error types for planview operations.
//!
//! The layout engine itself is total: any module list, including an empty
//! one, yields a valid layout. [`PlanError`] therefore only covers the
//! edges - reading files, deserializing documents, and writing SVG output.

use std::io;

use thiserror::Error;

/// The main error type for planview operations.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid unit document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for PlanError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
