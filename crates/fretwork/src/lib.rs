//! Fretwork - chord diagram layout and rendering for fretted instruments.
//!
//! Given a chord's fret pattern (which string is pressed at which fret,
//! muted, or open) and a set of display parameters (tuning, fret count,
//! capo position), Fretwork computes the geometric primitives of a chord
//! diagram (strings, fret wires, capo bar, fingertip markers) and
//! composes them into a labeled SVG.
//!
//! The [`layout`] module is the core: pure functions from parameters to
//! pixel coordinates. [`DiagramBuilder`] wraps it together with the
//! [`export`] stage into a convenient API.

pub mod config;
pub mod layout;
pub mod library;

mod error;
mod export;

pub use fretwork_core::{chord, color, draw, geometry};

pub use config::LayoutParameters;
pub use error::{FretworkError, LayoutError};

use log::{debug, info};

use fretwork_core::chord::ChordPattern;

use export::Svg;

/// One chord diagram instance: a pattern plus its per-diagram display
/// options.
///
/// The pattern and capo are owned by the diagram; the shared
/// [`LayoutParameters`] are supplied separately by the
/// [`DiagramBuilder`].
///
/// # Examples
///
/// ```
/// use fretwork::Diagram;
/// use fretwork::chord::ChordPattern;
///
/// // E minor, barred at the second fret
/// let diagram = Diagram::new(ChordPattern::from([4, 4, 3, 0]))
///     .with_capo(2)
///     .with_label("E min");
/// assert_eq!(diagram.capo(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pattern: ChordPattern,
    capo: u32,
    frets: u32,
    label: Option<String>,
}

impl Diagram {
    /// Creates a diagram for the given pattern with no capo, no label, and
    /// the default fret count.
    pub fn new(pattern: ChordPattern) -> Self {
        Self {
            pattern,
            capo: 0,
            frets: config::DEFAULT_FRET_COUNT,
            label: None,
        }
    }

    /// Creates a diagram for a chord from the built-in [`library`],
    /// labeled with the chord's name.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::UnknownChord`] if the name is not in the
    /// library.
    pub fn named(name: &str) -> Result<Self, FretworkError> {
        let pattern =
            library::lookup(name).ok_or_else(|| FretworkError::UnknownChord(name.to_string()))?;
        Ok(Self::new(pattern).with_label(name))
    }

    /// Returns this diagram with the given capo position (0 = no capo).
    pub fn with_capo(mut self, capo: u32) -> Self {
        self.capo = capo;
        self
    }

    /// Returns this diagram with the given fret count.
    pub fn with_frets(mut self, frets: u32) -> Self {
        self.frets = frets;
        self
    }

    /// Returns this diagram with the given label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the chord pattern.
    pub fn pattern(&self) -> &ChordPattern {
        &self.pattern
    }

    /// Returns the capo position (0 = no capo).
    pub fn capo(&self) -> u32 {
        self.capo
    }

    /// Returns the fret count.
    pub fn frets(&self) -> u32 {
        self.frets
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Builder for rendering chord diagrams.
///
/// Holds an immutable [`LayoutParameters`] snapshot and renders any number
/// of diagrams against it. Rendering is pure; builders can be shared
/// freely across diagrams.
///
/// # Examples
///
/// ```
/// use fretwork::{Diagram, DiagramBuilder};
///
/// let builder = DiagramBuilder::default();
/// let diagram = Diagram::named("C").expect("built-in chord");
///
/// let svg = builder.render_svg(&diagram).expect("valid defaults");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    params: LayoutParameters,
}

impl DiagramBuilder {
    /// Creates a builder over the given parameter set.
    pub fn new(params: LayoutParameters) -> Self {
        Self { params }
    }

    /// Returns the builder's parameter set.
    pub fn params(&self) -> &LayoutParameters {
        &self.params
    }

    /// Renders a single labeled chord diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Layout`] if the parameters fail validation
    /// or the pattern length does not match the tuning.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, FretworkError> {
        info!(
            pattern = diagram.pattern().to_string(),
            capo = diagram.capo();
            "Rendering chord diagram"
        );

        let document = Svg::new(&self.params).render_diagram(diagram)?;

        debug!("Diagram rendered successfully");
        Ok(document.to_string())
    }

    /// Renders rows of labeled chord diagrams into one SVG sheet.
    ///
    /// Rows stack top to bottom; each row is centered horizontally. This
    /// mirrors a song sheet: one row per bar line, one diagram per chord.
    pub fn render_sheet_svg(&self, rows: &[Vec<Diagram>]) -> Result<String, FretworkError> {
        info!(
            rows = rows.len(),
            chords = rows.iter().map(Vec::len).sum::<usize>();
            "Rendering chord sheet"
        );

        let document = Svg::new(&self.params).render_sheet(rows)?;
        Ok(document.to_string())
    }
}
