//! Collidable circle

use serde::{Deserialize, Serialize};

use super::{Point, Transform2d};

/// A circle defined by its center and radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point
    pub center: Point,
    /// Radius
    pub radius: f64,
    /// Orientation in radians (metadata only)
    #[serde(default)]
    pub rotation: f64,
}

impl Circle {
    /// Creates a circle centred at `(x, y)`
    pub const fn new(x: f64, y: f64, radius: f64, rotation: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
            rotation,
        }
    }

    /// Creates a circle around an existing point
    pub const fn around(center: Point, radius: f64) -> Self {
        Self { center, radius, rotation: 0.0 }
    }
}

impl Transform2d for Circle {
    fn center(&self) -> Point {
        self.center
    }

    fn center_at(&mut self, point: Point) {
        self.center.center_at(point);
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn rotate(&mut self, theta: f64) {
        self.rotation += theta;
    }
}
