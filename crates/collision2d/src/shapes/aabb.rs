//! Axis-aligned bounding boxes

use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::foundation::math::Vec2;

/// The smallest unrotated box enclosing a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Lower-left corner
    pub min: Vec2,
    /// Upper-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Creates a box from its corners
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point
    ///
    /// An empty slice yields an inverted box that contains nothing.
    pub fn enclosing(points: &[Vec2]) -> Self {
        let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    /// Width along x
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height along y
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies inside the box grown by `pad` on every side
    pub fn contains(&self, point: Vec2, pad: f64) -> bool {
        self.min.x - pad <= point.x
            && point.x <= self.max.x + pad
            && self.min.y - pad <= point.y
            && point.y <= self.max.y + pad
    }

    /// Whether two boxes overlap once the gap between them is allowed to reach `pad`
    pub fn overlaps(&self, other: &Self, pad: f64) -> bool {
        self.min.x <= other.max.x + pad
            && other.min.x <= self.max.x + pad
            && self.min.y <= other.max.y + pad
            && other.min.y <= self.max.y + pad
    }

    /// The box as an unrotated, center-based rectangle
    pub fn to_rectangle(&self) -> Rectangle {
        let center = self.center();
        Rectangle::new(center.x, center.y, self.width(), self.height(), 0.0)
    }
}
