//! Export functionality for chord diagrams.
//!
//! This module is the final stage in the Fretwork pipeline:
//!
//! ```text
//! ChordPattern + LayoutParameters
//!     ↓ layout
//! Primitives (LineSegment, Marker)
//!     ↓ export (this module)
//! SVG document
//! ```
//!
//! The exporter is deliberately thin: all geometry is decided by the
//! [`layout`](crate::layout) engine, and this module only maps primitives
//! to `svg` crate nodes, honors the hidden/suppression flags, and composes
//! labeled diagrams into documents.

/// SVG export backend.
pub mod svg;

pub use self::svg::Svg;
