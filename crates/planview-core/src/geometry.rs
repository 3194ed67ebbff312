//! Geometric primitives for diagram layout.
//!
//! # Coordinate System
//!
//! Planview uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: top-left corner at `(0, 0)`
//! - **X-axis**: increases rightward, along the unit's length
//! - **Y-axis**: increases downward, along the unit's width
//!
//! Unlike a general diagramming tool, planview only ever deals with
//! axis-aligned geometry, so [`Rect`] is stored as a top-left corner plus a
//! size rather than as min/max extents.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use planview_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// let moved = p.translate(5.0, -5.0);
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point offset by the given amounts.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the midpoint between this point and another.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Width and height dimensions of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new size with the component-wise maximum of both sizes.
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Multiplies both dimensions by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both dimensions are zero.
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// An axis-aligned rectangle defined by its top-left corner and size.
///
/// # Examples
///
/// ```
/// # use planview_core::geometry::{Point, Rect};
/// let r = Rect::new(10.0, 20.0, 100.0, 50.0);
/// assert_eq!(r.right(), 110.0);
/// assert_eq!(r.bottom(), 70.0);
/// assert_eq!(r.center(), Point::new(60.0, 45.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a top-left point and a size.
    pub fn from_point_size(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x(),
            y: top_left.y(),
            width: size.width(),
            height: size.height(),
        }
    }

    /// Returns the x-coordinate of the left edge.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the top edge.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the rectangle width.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the rectangle height.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the x-coordinate of the right edge.
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// Returns the y-coordinate of the bottom edge.
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner as a point.
    pub fn top_left(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the center point of the rectangle.
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the rectangle dimensions as a size.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns a new rectangle offset by the given amounts.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns a new rectangle grown by `amount` on every side.
    ///
    /// A negative amount shrinks the rectangle; the size never goes below
    /// zero.
    pub fn inflate(self, amount: f32) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: (self.width + amount * 2.0).max(0.0),
            height: (self.height + amount * 2.0).max(0.0),
        }
    }

    /// Returns the smallest rectangle containing both rectangles.
    pub fn union(self, other: Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }

    /// Returns true if the given x-coordinate lies strictly inside the
    /// horizontal span of the rectangle.
    pub fn contains_x(self, x: f32) -> bool {
        x > self.x && x < self.right()
    }
}
