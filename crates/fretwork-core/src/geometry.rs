//! Geometric primitives for chord diagram layout.
//!
//! # Coordinate System
//!
//! Fretwork uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward, across the strings
//! - **Y-axis**: Increases downward, from the nut towards higher frets

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates. The coordinate system has origin at
/// top-left with Y increasing downward (see [module documentation](self)).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Shifts the point horizontally by the given amount.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretwork_core::geometry::Point;
    /// let position = Point::new(100.0, 50.0);
    ///
    /// let moved = position.translate_x(10.0).translate_y(-5.0);
    /// assert_eq!(moved.x(), 110.0);
    /// assert_eq!(moved.y(), 45.0);
    /// ```
    pub fn translate_x(self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            ..self
        }
    }

    /// Shifts the point vertically by the given amount
    pub fn translate_y(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Merges two sizes horizontally by adding their widths and taking the maximum height
    pub fn merge_horizontal(self, other: Size) -> Self {
        Self {
            width: self.width + other.width,
            height: self.height.max(other.height),
        }
    }

    /// Merges two sizes vertically by adding their heights and taking the maximum width
    pub fn merge_vertical(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height + other.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_translate() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.translate_x(5.0), Point::new(15.0, 20.0));
        assert_eq!(point.translate_y(-4.0), Point::new(10.0, 16.0));
    }

    #[test]
    fn test_size_new() {
        let size = Size::new(100.0, 200.0);
        assert_eq!(size.width(), 100.0);
        assert_eq!(size.height(), 200.0);
    }

    #[test]
    fn test_size_merge() {
        let a = Size::new(10.0, 30.0);
        let b = Size::new(20.0, 15.0);

        let horizontal = a.merge_horizontal(b);
        assert_eq!(horizontal.width(), 30.0);
        assert_eq!(horizontal.height(), 30.0);

        let vertical = a.merge_vertical(b);
        assert_eq!(vertical.width(), 20.0);
        assert_eq!(vertical.height(), 45.0);
    }
}
