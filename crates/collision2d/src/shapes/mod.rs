//! Collision shapes
//!
//! Plain value types for the shapes the collider understands. Shapes are
//! created and moved by their owner every frame; the collision layer only
//! reads them.
//!
//! # Module Organization
//!
//! - [`point`], [`circle`], [`line`], [`rectangle`], [`pill`] - primitives
//! - [`collection`] - heterogeneous groups of shapes
//! - [`aabb`] - axis-aligned bounding boxes
//! - [`factory`] - rectangle constructors used by entity code
//!
//! # Key Types
//!
//! - [`Shape`] - any collidable shape, tagged by [`ShapeKind`]
//! - [`Transform2d`] - translation and rotation shared by every primitive

pub mod aabb;
pub mod circle;
pub mod collection;
pub mod factory;
pub mod line;
pub mod pill;
pub mod point;
pub mod rectangle;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::utils::rotate_point;

pub use aabb::Aabb;
pub use circle::Circle;
pub use collection::Collection;
pub use factory::{make_rect_at_bottom_left, make_rect_at_center};
pub use line::{Line, LineEquation};
pub use pill::Pill;
pub use point::Point;
pub use rectangle::Rectangle;

/// Discriminant identifying the concrete kind of a [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A single point
    Point,
    /// A circle
    Circle,
    /// A line segment
    Line,
    /// A possibly rotated rectangle
    Rectangle,
    /// A capsule: two circles joined by a rectangle
    Pill,
    /// A group of shapes
    Collection,
}

impl ShapeKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Point,
        Self::Circle,
        Self::Line,
        Self::Rectangle,
        Self::Pill,
        Self::Collection,
    ];

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Circle => "Circle",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Pill => "Pill",
            Self::Collection => "Collection",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The operation has no meaning for this kind of shape
    #[error("`{operation}` is not implemented for {kind}")]
    Unsupported {
        /// Name of the rejected operation
        operation: &'static str,
        /// Kind of the shape it was called on
        kind: ShapeKind,
    },
}

/// Translation and rotation of a single shape
///
/// Rotations are in radians, counter-clockwise.
pub trait Transform2d {
    /// The shape's centroid
    fn center(&self) -> Point;

    /// Move the shape so its centroid sits at `point`, keeping size and rotation
    fn center_at(&mut self, point: Point);

    /// Stored orientation in radians
    fn rotation(&self) -> f64;

    /// Rotate about the shape's own center
    fn rotate(&mut self, theta: f64);

    /// Rotate about an external pivot
    ///
    /// Orbiting a pivot both moves and reorients the shape, so the center is
    /// carried around the pivot first and the shape then turns in place.
    fn rotate_about(&mut self, theta: f64, pivot: Point) {
        let orbited = rotate_point(pivot.as_vec(), self.center().as_vec(), theta);
        self.center_at(Point::new(orbited.x, orbited.y));
        self.rotate(theta);
    }
}

/// Any collidable shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A single point
    Point(Point),
    /// A circle
    Circle(Circle),
    /// A line segment
    Line(Line),
    /// A rectangle
    Rectangle(Rectangle),
    /// A capsule
    Pill(Pill),
    /// A group of shapes
    Collection(Collection),
}

impl Shape {
    /// The collision discriminant of this shape
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Point(_) => ShapeKind::Point,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Line(_) => ShapeKind::Line,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Pill(_) => ShapeKind::Pill,
            Self::Collection(_) => ShapeKind::Collection,
        }
    }

    /// Borrow the shape as a transformable primitive, if it is one
    pub fn as_transform(&self) -> Option<&dyn Transform2d> {
        match self {
            Self::Point(point) => Some(point as &dyn Transform2d),
            Self::Circle(circle) => Some(circle as &dyn Transform2d),
            Self::Line(line) => Some(line as &dyn Transform2d),
            Self::Rectangle(rect) => Some(rect as &dyn Transform2d),
            Self::Pill(pill) => Some(pill as &dyn Transform2d),
            Self::Collection(_) => None,
        }
    }

    /// Mutable counterpart of [`Shape::as_transform`]
    pub fn as_transform_mut(&mut self) -> Option<&mut dyn Transform2d> {
        match self {
            Self::Point(point) => Some(point as &mut dyn Transform2d),
            Self::Circle(circle) => Some(circle as &mut dyn Transform2d),
            Self::Line(line) => Some(line as &mut dyn Transform2d),
            Self::Rectangle(rect) => Some(rect as &mut dyn Transform2d),
            Self::Pill(pill) => Some(pill as &mut dyn Transform2d),
            Self::Collection(_) => None,
        }
    }

    fn transform_mut(&mut self, operation: &'static str) -> Result<&mut dyn Transform2d, ShapeError> {
        let kind = self.kind();
        self.as_transform_mut()
            .ok_or(ShapeError::Unsupported { operation, kind })
    }

    /// The shape's centroid
    pub fn center(&self) -> Result<Point, ShapeError> {
        self.as_transform()
            .map(|shape| shape.center())
            .ok_or(ShapeError::Unsupported { operation: "center", kind: self.kind() })
    }

    /// Move the shape so its centroid sits at `point`
    pub fn center_at(&mut self, point: Point) -> Result<(), ShapeError> {
        self.transform_mut("center_at")?.center_at(point);
        Ok(())
    }

    /// Rotate about the shape's own center
    pub fn rotate(&mut self, theta: f64) -> Result<(), ShapeError> {
        self.transform_mut("rotate")?.rotate(theta);
        Ok(())
    }

    /// Rotate about an external pivot
    pub fn rotate_about(&mut self, theta: f64, pivot: Point) -> Result<(), ShapeError> {
        self.transform_mut("rotate_about")?.rotate_about(theta, pivot);
        Ok(())
    }

    /// Axis-aligned bounding box, for the kinds that cache one
    pub fn bbox(&self) -> Option<Aabb> {
        match self {
            Self::Line(line) => Some(line.bbox()),
            Self::Rectangle(rect) => Some(rect.bbox()),
            _ => None,
        }
    }
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Pill> for Shape {
    fn from(pill: Pill) -> Self {
        Self::Pill(pill)
    }
}

impl From<Collection> for Shape {
    fn from(collection: Collection) -> Self {
        Self::Collection(collection)
    }
}
