//! Error adapter for converting PlanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Unit
//! documents carry no source spans, so every error renders as a single
//! diagnostic with a stable error code.

use std::error::Error;
use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use planview::PlanError;

/// Adapter wrapping a [`PlanError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a PlanError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PlanError::Io(_) => "planview::io",
            PlanError::Document(_) => "planview::document",
            PlanError::Config(_) => "planview::config",
            PlanError::Export(_) => "planview::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            PlanError::Document(_) => Some(Box::new(
                "valid tunnel positions are Standard, Top, and Bottom; \
                 valid airflow values are None, Back-To-Front, Front-To-Back, and Vestibule",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_carries_help() {
        let err = planview::PlanBuilder::default()
            .load_document(r#"{ "modules": [ { "id": "A", "tunnel_position": "Tpo" } ] }"#)
            .unwrap_err();

        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "planview::document");
        assert!(adapter.help().is_some());
    }

    #[test]
    fn test_config_error_code() {
        let err = PlanError::Config("bad color".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "planview::config");
        assert!(adapter.help().is_none());
    }
}
