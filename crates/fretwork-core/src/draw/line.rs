//! Straight line segments with resolved diagram coordinates.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{StrokeDefinition, SvgNode},
    geometry::Point,
};

/// A straight line segment with resolved endpoint coordinates and a stroke.
///
/// Strings, fret wires, and the capo bar are all line segments. The `id`
/// carries the string's tuning name or the fret row index for stable
/// ordering and keying; it plays no part in rendering.
///
/// A hidden segment (capo at position 0) is still computed with valid
/// coordinates; only the exporter skips it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    id: String,
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
    hidden: bool,
}

impl LineSegment {
    /// Creates a visible line segment.
    pub fn new(id: impl Into<String>, start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            stroke,
            hidden: false,
        }
    }

    /// Returns the segment's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the segment's start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the segment's end point.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the segment's stroke definition.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns true if the segment must not be drawn.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns this segment with the hidden flag set as given.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Renders this segment to an SVG `<line>` element.
    ///
    /// Hidden segments render too; skipping them is the caller's decision
    /// so layout math stays independent of visibility.
    pub fn render_to_svg(&self) -> SvgNode {
        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y());
        Box::new(apply_stroke!(line, &self.stroke))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_line_segment_accessors() {
        let segment = LineSegment::new(
            "G",
            Point::new(8.0, 10.0),
            Point::new(8.0, 137.0),
            StrokeDefinition::new(Color::default(), 1.0),
        );

        assert_eq!(segment.id(), "G");
        assert_eq!(segment.start(), Point::new(8.0, 10.0));
        assert_eq!(segment.end(), Point::new(8.0, 137.0));
        assert!(!segment.is_hidden());
    }

    #[test]
    fn test_line_segment_hidden_flag() {
        let segment = LineSegment::new(
            "capo",
            Point::new(8.0, 20.0),
            Point::new(92.0, 20.0),
            StrokeDefinition::default(),
        )
        .with_hidden(true);

        assert!(segment.is_hidden());
        assert!(!segment.clone().with_hidden(false).is_hidden());
    }

    #[test]
    fn test_line_segment_svg_attributes() {
        let segment = LineSegment::new(
            "fret-0",
            Point::new(7.5, 17.9),
            Point::new(92.5, 17.9),
            StrokeDefinition::new(Color::default(), 5.0),
        );

        let rendered = segment.render_to_svg().to_string();
        assert!(rendered.contains("x1=\"7.5\""));
        assert!(rendered.contains("x2=\"92.5\""));
        assert!(rendered.contains("stroke-width=\"5\""));
    }
}
