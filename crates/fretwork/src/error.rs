//! Error types for Fretwork operations.

use std::io;

use thiserror::Error;

use fretwork_core::chord::PatternParseError;

/// Errors raised by the layout engine.
///
/// Both variants are detected synchronously, before any primitive is
/// produced; the engine never returns partial results. These are pure,
/// deterministic computations, so retrying an identical call reproduces
/// the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A layout parameter fails its invariant: non-positive width, height,
    /// or padding, padding of at least half the width or height, fewer than
    /// two strings, or a fret count of zero.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A chord pattern's length differs from the tuning's string count.
    #[error("pattern has {pattern} values but the tuning has {strings} strings")]
    ShapeMismatch { pattern: usize, strings: usize },
}

/// The main error type for Fretwork operations.
#[derive(Debug, Error)]
pub enum FretworkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Pattern(#[from] PatternParseError),

    #[error("unknown chord `{0}`")]
    UnknownChord(String),

    #[error("no chord name or pattern given")]
    MissingChord,

    #[error("invalid style: {0}")]
    Style(String),
}
