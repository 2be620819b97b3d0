//! The coordinate-generation engine.
//!
//! Pure functions that turn a [`LayoutParameters`] snapshot, a fret count,
//! and a chord's finger pattern into exact pixel coordinates for strings,
//! fret wires, the capo bar, and fingertip markers. Every function here is
//! side-effect free and deterministic: identical inputs yield identical
//! primitives, and multiple diagrams may be computed in parallel without
//! coordination.
//!
//! # Geometry
//!
//! The string grid is inset by `padding` on every side. Horizontal spacing
//! between adjacent strings is `w`; vertical spacing between adjacent fret
//! wires is `h`, with half a fret row of extra space reserved above the nut
//! for open/muted markers (the `+ 0.5` in the `h` formula). Strings start
//! `h/3` below the top edge of the grid so they meet the nut rather than
//! the border, and stop `h/6` short of the bottom.
//!
//! Errors are raised before any primitive is produced; there are no
//! partial results.

use fretwork_core::{
    chord::ChordPattern,
    draw::{LineSegment, Marker, MarkerKind, StrokeCap},
    geometry::Point,
};

use crate::{config::LayoutParameters, error::LayoutError};

/// Stroke-width multiplier for the nut (fret row 0).
const NUT_WIDTH_FACTOR: f32 = 5.0;

/// Horizontal widening of the nut on each end, in pixels.
const NUT_OVERHANG: f32 = 0.5;

/// Stroke width of the capo bar.
const CAPO_STROKE_WIDTH: f32 = 6.0;

/// Per-cell spacing derived from the parameters and fret count.
///
/// Computed fresh by [`compute_size`] for every layout request; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    width: f32,
    height: f32,
    w: f32,
    h: f32,
}

impl CellSize {
    /// Returns the full diagram width.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the full diagram height.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the horizontal spacing between adjacent strings.
    pub fn w(self) -> f32 {
        self.w
    }

    /// Returns the vertical spacing between adjacent fret wires.
    pub fn h(self) -> f32 {
        self.h
    }
}

/// Derives per-cell spacing from the parameters and fret count.
///
/// - `w = (width − 2·padding) / (stringCount − 1)`
/// - `h = (height − 2·padding) / (fretCount − 1 + 0.5)`
///
/// The `+ 0.5` reserves half a fret row of vertical space above the nut
/// for open/muted markers.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidParameter`] for non-positive width,
/// height, or padding, padding of at least half the width or height, fewer
/// than two strings, or a fret count of zero. Validation happens here,
/// before any dependent computation runs.
pub fn compute_size(params: &LayoutParameters, fret_count: u32) -> Result<CellSize, LayoutError> {
    validate(params, fret_count)?;

    let (width, height, padding) = (params.width(), params.height(), params.padding());
    let string_count = params.tuning().string_count() as f32;

    Ok(CellSize {
        width,
        height,
        w: (width - 2.0 * padding) / (string_count - 1.0),
        h: (height - 2.0 * padding) / (fret_count as f32 - 1.0 + 0.5),
    })
}

fn validate(params: &LayoutParameters, fret_count: u32) -> Result<(), LayoutError> {
    let (width, height, padding) = (params.width(), params.height(), params.padding());

    if width <= 0.0 || height <= 0.0 || padding <= 0.0 {
        return Err(LayoutError::InvalidParameter(format!(
            "width ({width}), height ({height}), and padding ({padding}) must be positive"
        )));
    }
    if 2.0 * padding >= width || 2.0 * padding >= height {
        return Err(LayoutError::InvalidParameter(format!(
            "padding ({padding}) must be less than half the width ({width}) and height ({height})"
        )));
    }
    if params.tuning().string_count() < 2 {
        return Err(LayoutError::InvalidParameter(format!(
            "at least 2 strings required, tuning has {}",
            params.tuning().string_count()
        )));
    }
    if fret_count < 1 {
        return Err(LayoutError::InvalidParameter(
            "fret count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Produces one vertical line segment per string, in tuning order.
///
/// String `i` sits at `x = i·w + padding`. All strings share the same
/// vertical extent: from `h/3` below the top of the grid (meeting the nut)
/// down to `h/6` above the grid's bottom edge. Each segment carries the
/// string's tuning name as its identifier.
pub fn compute_strings(
    params: &LayoutParameters,
    fret_count: u32,
) -> Result<Vec<LineSegment>, LayoutError> {
    let size = compute_size(params, fret_count)?;
    let padding = params.padding();
    let (w, h) = (size.w(), size.h());

    let y1 = padding + h / 3.0;
    let y2 = (size.height() - 2.0 * padding) + padding - h / 6.0;

    Ok(params
        .tuning()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let x = i as f32 * w + padding;
            LineSegment::new(
                name,
                Point::new(x, y1),
                Point::new(x, y2),
                params.line().clone(),
            )
        })
        .collect())
}

/// Produces one horizontal line segment per fret row `0..fret_count`, in
/// ascending order.
///
/// Row `i` sits at `y = i·h + h/3 + padding` and spans the grid from
/// `padding` to `width − padding`. Row 0 is the nut: its stroke is 5× the
/// base line width and it extends half a unit past each end.
pub fn compute_frets(
    params: &LayoutParameters,
    fret_count: u32,
) -> Result<Vec<LineSegment>, LayoutError> {
    let size = compute_size(params, fret_count)?;
    let padding = params.padding();
    let h = size.h();

    let x1 = padding;
    let x2 = size.width() - padding;

    Ok((0..fret_count)
        .map(|i| {
            let y = i as f32 * h + h / 3.0 + padding;
            let segment = LineSegment::new(
                i.to_string(),
                Point::new(x1, y),
                Point::new(x2, y),
                params.line().clone(),
            );
            if i == 0 {
                LineSegment::new(
                    segment.id(),
                    segment.start().translate_x(-NUT_OVERHANG),
                    segment.end().translate_x(NUT_OVERHANG),
                    params.line().clone().with_width_scaled(NUT_WIDTH_FACTOR),
                )
            } else {
                segment
            }
        })
        .collect())
}

/// Produces the capo bar segment for the given capo position.
///
/// The bar sits at `y = (capo − 1 + 0.5)·h + h/3 + padding`, spanning the
/// full string width, with a thick round-capped stroke. A segment is
/// always returned: when `capo == 0` it carries the hidden flag instead of
/// being absent, so the layout math stays independent of visibility.
/// Renderers must honor the flag by omitting the visual.
pub fn compute_capo(
    params: &LayoutParameters,
    fret_count: u32,
    capo: u32,
) -> Result<LineSegment, LayoutError> {
    let size = compute_size(params, fret_count)?;
    let padding = params.padding();
    let h = size.h();

    let y = (capo as f32 - 1.0 + 0.5) * h + h / 3.0 + padding;
    let stroke = params
        .line()
        .clone()
        .with_width(CAPO_STROKE_WIDTH)
        .with_cap(StrokeCap::Round);

    Ok(LineSegment::new(
        "capo",
        Point::new(padding, y),
        Point::new(size.width() - padding, y),
        stroke,
    )
    .with_hidden(capo == 0))
}

/// Produces one fingertip marker per string, in tuning order.
///
/// Marker `i` sits at `cx = i·w + padding`. Open and muted strings
/// (value ≤ 0) sit in the reserved half row above the nut at
/// `cy = padding`; pressed strings sit centered on their fret cell at
/// `cy = value·h − h/2 + padding + h/3`. The raw pattern value is decoded
/// into a [`MarkerKind`] tag at this boundary.
///
/// # Errors
///
/// Returns [`LayoutError::ShapeMismatch`] when the pattern length differs
/// from the tuning's string count, before producing any marker.
pub fn compute_fingertips(
    params: &LayoutParameters,
    fret_count: u32,
    pattern: &ChordPattern,
) -> Result<Vec<Marker>, LayoutError> {
    let size = compute_size(params, fret_count)?;

    if pattern.len() != params.tuning().string_count() {
        return Err(LayoutError::ShapeMismatch {
            pattern: pattern.len(),
            strings: params.tuning().string_count(),
        });
    }

    let padding = params.padding();
    let (w, h) = (size.w(), size.h());

    Ok(params
        .tuning()
        .iter()
        .zip(pattern.iter())
        .enumerate()
        .map(|(i, (name, value))| {
            let cx = i as f32 * w + padding;
            let cy = if value <= 0 {
                padding
            } else {
                value as f32 * h - h / 2.0 + padding + h / 3.0
            };

            let stroke = match MarkerKind::from_value(value) {
                MarkerKind::Cross => params.cross(),
                MarkerKind::Circle => params.circle(),
                MarkerKind::Dot => params.line(),
            };

            Marker::new(
                name,
                value,
                params.marker_radius(),
                Point::new(cx, cy),
                stroke.clone(),
            )
        })
        .collect())
}

/// Returns true if a marker of the given kind is not drawn under the given
/// capo position.
///
/// With an active capo, open-circle and muted-cross markers are redundant
/// and suppressed diagram-wide; dots for actively fretted strings are
/// always shown. This intentionally preserves the diagram-wide rule rather
/// than a per-string one.
pub fn is_suppressed(kind: MarkerKind, capo: u32) -> bool {
    capo > 0 && matches!(kind, MarkerKind::Circle | MarkerKind::Cross)
}
