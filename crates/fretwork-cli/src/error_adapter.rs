//! Error adapter for converting FretworkError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Fretwork
//! errors carry no source spans, so the adapter contributes codes and
//! help text rather than labeled snippets.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use fretwork::{FretworkError, LayoutError, library};

/// Adapter wrapping a [`FretworkError`] for miette rendering.
pub struct ReportAdapter<'a> {
    err: &'a FretworkError,
}

/// Create a reportable diagnostic for a Fretwork error.
pub fn to_reportable(err: &FretworkError) -> ReportAdapter<'_> {
    ReportAdapter { err }
}

impl fmt::Debug for ReportAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportAdapter").field("err", &self.err).finish()
    }
}

impl fmt::Display for ReportAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ReportAdapter<'_> {}

impl MietteDiagnostic for ReportAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            FretworkError::Io(_) => "fretwork::io",
            FretworkError::Layout(LayoutError::InvalidParameter(_)) => {
                "fretwork::layout::invalid_parameter"
            }
            FretworkError::Layout(LayoutError::ShapeMismatch { .. }) => {
                "fretwork::layout::shape_mismatch"
            }
            FretworkError::Pattern(_) => "fretwork::pattern",
            FretworkError::UnknownChord(_) => "fretwork::unknown_chord",
            FretworkError::MissingChord => "fretwork::missing_chord",
            FretworkError::Style(_) => "fretwork::style",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            FretworkError::UnknownChord(_) => format!(
                "built-in chords: {}",
                library::names().collect::<Vec<_>>().join(", ")
            ),
            FretworkError::Pattern(_) => {
                "patterns are comma-separated per-string values, e.g. `2,1,0,0` or `4,3,0,x`"
                    .to_string()
            }
            FretworkError::Layout(LayoutError::ShapeMismatch { strings, .. }) => {
                format!("the configured tuning has {strings} strings; supply one value per string")
            }
            FretworkError::MissingChord => {
                "pass a chord name, --pattern, or --list".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}
