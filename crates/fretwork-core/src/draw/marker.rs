//! Fingertip markers: dots, open circles, and mute crosses.

use log::trace;
use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{StrokeDefinition, SvgNode},
    geometry::Point,
};

/// Ratio of an open-string circle's radius to the configured marker radius.
const OPEN_CIRCLE_RADIUS_RATIO: f32 = 0.775;

/// The visual kind of a fingertip marker.
///
/// This is the decoded form of a pattern value: the integer wire encoding
/// (`-1`/`0`/`>0`) is translated into a tagged variant at the fingertip
/// layout boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A filled dot on a pressed string, centered on the fret cell.
    Dot,
    /// An open-string circle above the nut.
    Circle,
    /// A muted-string cross above the nut.
    Cross,
}

impl MarkerKind {
    /// Decodes a pattern value into a marker kind.
    ///
    /// `-1` and any other negative value decode to [`Cross`](Self::Cross),
    /// `0` to [`Circle`](Self::Circle), and positive values to
    /// [`Dot`](Self::Dot).
    pub fn from_value(value: i32) -> Self {
        match value {
            v if v < 0 => Self::Cross,
            0 => Self::Circle,
            _ => Self::Dot,
        }
    }
}

/// A fingertip marker with resolved center coordinates.
///
/// One marker is produced per string, tagged with the string's tuning name,
/// the raw pattern value it was decoded from, and the stroke used for
/// circle and cross outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    string: String,
    value: i32,
    radius: f32,
    center: Point,
    kind: MarkerKind,
    stroke: StrokeDefinition,
}

impl Marker {
    /// Creates a marker for the given string, decoding the marker kind from
    /// the raw pattern value.
    pub fn new(
        string: impl Into<String>,
        value: i32,
        radius: f32,
        center: Point,
        stroke: StrokeDefinition,
    ) -> Self {
        Self {
            string: string.into(),
            value,
            radius,
            center,
            kind: MarkerKind::from_value(value),
            stroke,
        }
    }

    /// Returns the tuning name of the marker's string.
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Returns the raw pattern value the marker was decoded from.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the marker radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the marker's center position.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the decoded marker kind.
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Returns the stroke used for circle and cross outlines.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Renders this marker to an SVG node.
    ///
    /// - `Dot`: a filled circle of the full marker radius
    /// - `Circle`: an unfilled circle at 0.775 × radius
    /// - `Cross`: a two-stroke path spanning the marker radius
    pub fn render_to_svg(&self) -> SvgNode {
        let (cx, cy, r) = (self.center.x(), self.center.y(), self.radius);
        trace!(string = self.string, kind:? = self.kind; "Rendering marker");

        match self.kind {
            MarkerKind::Dot => {
                let dot = svg_element::Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", r)
                    .set("fill", self.stroke.color().to_string());
                Box::new(dot)
            }
            MarkerKind::Circle => {
                let circle = svg_element::Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", r * OPEN_CIRCLE_RADIUS_RATIO)
                    .set("fill", "transparent");
                Box::new(apply_stroke!(circle, &self.stroke))
            }
            MarkerKind::Cross => {
                let corner = self.center.translate_x(-r / 2.0).translate_y(-r / 2.0);
                let (x, y) = (corner.x(), corner.y());
                let fall = format!("M {x},{y} L {},{}", x + r, y + r);
                let raise = format!("M {x},{} L {},{y}", y + r, x + r);
                let path = svg_element::Path::new()
                    .set("d", format!("{fall} {raise}"))
                    .set("fill", "transparent");
                Box::new(apply_stroke!(path, &self.stroke))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn marker(value: i32) -> Marker {
        Marker::new(
            "A",
            value,
            6.0,
            Point::new(92.0, 8.0),
            StrokeDefinition::new(Color::default(), 1.0),
        )
    }

    #[test]
    fn test_kind_decoding() {
        assert_eq!(MarkerKind::from_value(-1), MarkerKind::Cross);
        assert_eq!(MarkerKind::from_value(0), MarkerKind::Circle);
        assert_eq!(MarkerKind::from_value(1), MarkerKind::Dot);
        assert_eq!(MarkerKind::from_value(12), MarkerKind::Dot);
    }

    #[test]
    fn test_marker_tags() {
        let m = marker(3);
        assert_eq!(m.string(), "A");
        assert_eq!(m.value(), 3);
        assert_eq!(m.kind(), MarkerKind::Dot);
        assert_eq!(m.center(), Point::new(92.0, 8.0));
    }

    #[test]
    fn test_dot_renders_filled_circle() {
        let rendered = marker(3).render_to_svg().to_string();
        assert!(rendered.contains("circle"));
        assert!(rendered.contains("r=\"6\""));
        assert!(rendered.contains("fill=\"black\""));
    }

    #[test]
    fn test_open_circle_is_scaled_down() {
        let rendered = marker(0).render_to_svg().to_string();
        assert!(rendered.contains("r=\"4.65\"")); // 6.0 * 0.775
        assert!(rendered.contains("fill=\"transparent\""));
    }

    #[test]
    fn test_cross_path_spans_radius() {
        let rendered = marker(-1).render_to_svg().to_string();
        assert!(rendered.contains("path"));
        // Cross corners sit at center +/- r/2
        assert!(rendered.contains("M 89,5 L 95,11"));
        assert!(rendered.contains("M 89,11 L 95,5"));
    }
}
