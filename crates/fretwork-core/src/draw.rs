//! Drawable primitives for chord diagrams.
//!
//! The layout engine produces values of these types with fully resolved
//! pixel coordinates; the SVG exporter maps each of them to an `svg` crate
//! node. Primitives are transient: they are produced fresh on every layout
//! request and carry no identity beyond the render pass.
//!
//! Exported types:
//! - [`StrokeDefinition`], [`StrokeStyle`], [`StrokeCap`]: line styling
//! - [`LineSegment`]: strings, frets, and the capo bar
//! - [`Marker`], [`MarkerKind`]: fingertip markers (dot, circle, cross)

mod line;
mod marker;
mod stroke;

pub use line::LineSegment;
pub use marker::{Marker, MarkerKind};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;
