//! Configuration types for chord diagram rendering.
//!
//! This module provides two layers:
//!
//! - [`AppConfig`] - The serde-facing configuration root, loadable from
//!   TOML. Colors and stroke caps are plain strings here and are only
//!   parsed when the config is resolved.
//! - [`LayoutParameters`] - The resolved, immutable parameter set consumed
//!   by the layout engine: dimensions, tuning, and ready-to-use
//!   [`StrokeDefinition`]s. Shared read-only across all calculators for a
//!   given diagram.
//!
//! # Example
//!
//! ```
//! # use fretwork::config::AppConfig;
//! let config = AppConfig::default();
//! let params = config.layout_parameters().expect("defaults are valid");
//! assert_eq!(params.width(), 100.0);
//! assert_eq!(params.tuning().string_count(), 4);
//! ```

use std::str::FromStr;

use serde::Deserialize;

use fretwork_core::{
    chord::Tuning,
    color::Color,
    draw::{StrokeCap, StrokeDefinition, StrokeStyle},
};

use crate::error::FretworkError;

/// Default fret count for a diagram.
pub const DEFAULT_FRET_COUNT: u32 = 5;

/// Top-level application configuration combining diagram and style settings.
///
/// Groups [`DiagramConfig`] and [`StyleConfig`] into a single configuration
/// root. All fields have defaults, so a partial (or empty) TOML file is
/// valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagram geometry section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from the given sections.
    pub fn new(diagram: DiagramConfig, style: StyleConfig) -> Self {
        Self { diagram, style }
    }

    /// Returns the diagram geometry configuration.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Resolves this configuration into engine-ready [`LayoutParameters`].
    ///
    /// # Errors
    ///
    /// Returns [`FretworkError::Style`] if a configured color or stroke cap
    /// string cannot be parsed.
    pub fn layout_parameters(&self) -> Result<LayoutParameters, FretworkError> {
        let line = self.style.line.resolve()?;
        let cross = self.style.cross.resolve()?;
        let circle = self.style.circle.resolve()?;

        Ok(LayoutParameters {
            margin: self.diagram.margin,
            padding: self.diagram.padding,
            width: self.diagram.width,
            height: self.diagram.height,
            marker_radius: self.diagram.marker_radius,
            frets: self.diagram.frets,
            tuning: self.diagram.tuning.clone(),
            line,
            cross,
            circle,
            label: self.style.label.clone(),
        })
    }
}

/// Diagram geometry configuration: dimensions, spacing, and tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Outer margin around each diagram when composing a sheet.
    margin: f32,
    /// Inner padding between the diagram border and the string grid.
    padding: f32,
    /// Diagram width in pixels.
    width: f32,
    /// Diagram height in pixels.
    height: f32,
    /// Radius of fingertip markers.
    marker_radius: f32,
    /// Number of fret rows displayed.
    frets: u32,
    /// String names in left-to-right diagram order.
    tuning: Tuning,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            margin: 5.0,
            padding: 8.0,
            width: 100.0,
            height: 150.0,
            marker_radius: 6.0,
            frets: DEFAULT_FRET_COUNT,
            tuning: Tuning::default(),
        }
    }
}

impl DiagramConfig {
    pub fn frets(&self) -> u32 {
        self.frets
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

/// Stroke styling as written in configuration files.
///
/// Colors and caps are parsed lazily when resolved into a
/// [`StrokeDefinition`], so invalid values surface as errors only at
/// resolution time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    color: String,
    width: f32,
    cap: Option<String>,
    /// `solid`, `dashed`, `dotted`, or a custom dasharray pattern.
    style: Option<String>,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            width: 1.0,
            cap: None,
            style: None,
        }
    }
}

impl StrokeConfig {
    fn new(color: &str, width: f32, cap: Option<&str>) -> Self {
        Self {
            color: color.to_string(),
            width,
            cap: cap.map(str::to_string),
            style: None,
        }
    }

    /// Parses this configuration into a [`StrokeDefinition`].
    fn resolve(&self) -> Result<StrokeDefinition, FretworkError> {
        let color = Color::new(&self.color).map_err(FretworkError::Style)?;
        let mut stroke = StrokeDefinition::new(color, self.width);
        if let Some(cap) = &self.cap {
            stroke = stroke.with_cap(StrokeCap::from_str(cap).map_err(FretworkError::Style)?);
        }
        if let Some(style) = &self.style {
            stroke = stroke.with_style(StrokeStyle::from_str(style).map_err(FretworkError::Style)?);
        }
        Ok(stroke)
    }
}

/// Label typography for the chord name above each diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    font_family: String,
    font_size: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 14.0,
        }
    }
}

impl LabelStyle {
    /// Returns the configured font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the configured font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

/// Visual styling configuration for the diagram primitives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Stroke used for strings and fret wires.
    line: StrokeConfig,
    /// Stroke used for muted-string crosses.
    cross: StrokeConfig,
    /// Stroke used for open-string circles.
    circle: StrokeConfig,
    /// Label typography.
    label: LabelStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line: StrokeConfig::new("black", 1.0, None),
            cross: StrokeConfig::new("black", 3.0, Some("round")),
            circle: StrokeConfig::new("black", 1.0, None),
            label: LabelStyle::default(),
        }
    }
}

/// The resolved, immutable parameter set for one diagram family.
///
/// All layout calculators take this by shared reference together with a
/// fret count; no calculator mutates it. Construct via
/// [`AppConfig::layout_parameters`] or [`LayoutParameters::default`].
#[derive(Debug, Clone)]
pub struct LayoutParameters {
    margin: f32,
    padding: f32,
    width: f32,
    height: f32,
    marker_radius: f32,
    frets: u32,
    tuning: Tuning,
    line: StrokeDefinition,
    cross: StrokeDefinition,
    circle: StrokeDefinition,
    label: LabelStyle,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        AppConfig::default()
            .layout_parameters()
            .expect("default configuration is valid")
    }
}

impl LayoutParameters {
    /// Returns the sheet margin around each diagram.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the inner padding between border and string grid.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the diagram width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the diagram height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the fingertip marker radius.
    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }

    /// Returns the default fret count for diagrams using these parameters.
    pub fn frets(&self) -> u32 {
        self.frets
    }

    /// Returns the instrument tuning.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Returns the stroke for strings and fret wires.
    pub fn line(&self) -> &StrokeDefinition {
        &self.line
    }

    /// Returns the stroke for muted-string crosses.
    pub fn cross(&self) -> &StrokeDefinition {
        &self.cross
    }

    /// Returns the stroke for open-string circles.
    pub fn circle(&self) -> &StrokeDefinition {
        &self.circle
    }

    /// Returns the label typography.
    pub fn label(&self) -> &LabelStyle {
        &self.label
    }

    /// Returns these parameters with a different tuning.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Returns these parameters with different diagram dimensions.
    pub fn with_dimensions(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns these parameters with a different padding.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}
