//! Collidable 2D point

use serde::{Deserialize, Serialize};

use super::Transform2d;
use crate::foundation::math::Vec2;

/// A position with an orientation tag
///
/// The rotation is carried for callers that track heading on a point, but it
/// never affects point geometry or equality.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Orientation in radians
    #[serde(default)]
    pub rotation: f64,
}

impl Point {
    /// Creates a point with zero rotation
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, rotation: 0.0 }
    }

    /// Creates a point carrying an orientation
    pub const fn with_rotation(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }

    /// Creates a point from a vector
    pub fn from_vec(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Position as a vector
    pub fn as_vec(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Vector from `other` to `self`
    pub fn diff(&self, other: &Self) -> Vec2 {
        self.as_vec() - other.as_vec()
    }

    /// Squared distance to another point
    pub fn distance_squared(&self, other: &Self) -> f64 {
        self.diff(other).norm_squared()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Transform2d for Point {
    /// A point is its own center
    fn center(&self) -> Point {
        *self
    }

    fn center_at(&mut self, point: Point) {
        self.x = point.x;
        self.y = point.y;
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn rotate(&mut self, theta: f64) {
        self.rotation += theta;
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::from_vec(v)
    }
}
