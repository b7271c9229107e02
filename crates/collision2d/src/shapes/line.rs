//! Collidable line segment

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::{Aabb, Point, Transform2d};
use crate::foundation::math::{utils, Vec2, DEGENERATE_EPSILON};

/// Infinite-line form of a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    /// `y = slope * x + intercept`
    Sloped {
        /// Rise over run
        slope: f64,
        /// Value of y at x = 0
        intercept: f64,
    },
    /// `x = x`
    Vertical {
        /// The constant x coordinate
        x: f64,
    },
    /// Both endpoints coincide; the segment is a single point
    Degenerate {
        /// Where the segment collapsed to
        point: Point,
    },
}

/// A segment between two endpoints
///
/// Endpoints are private so that moving them always discards the cached
/// bounding box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    p1: Point,
    p2: Point,
    #[serde(default)]
    rotation: f64,
    #[serde(skip)]
    bbox: OnceLock<Aabb>,
}

impl Line {
    /// Creates a segment from `p1` to `p2`
    pub fn new(p1: Point, p2: Point, rotation: f64) -> Self {
        Self {
            p1,
            p2,
            rotation,
            bbox: OnceLock::new(),
        }
    }

    /// Creates an unrotated segment from raw coordinates
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2), 0.0)
    }

    /// First endpoint
    pub const fn p1(&self) -> Point {
        self.p1
    }

    /// Second endpoint
    pub const fn p2(&self) -> Point {
        self.p2
    }

    /// Move the first endpoint
    pub fn set_p1(&mut self, p1: Point) {
        self.p1 = p1;
        self.invalidate();
    }

    /// Move the second endpoint
    pub fn set_p2(&mut self, p2: Point) {
        self.p2 = p2;
        self.invalidate();
    }

    /// Move both endpoints
    pub fn set_endpoints(&mut self, p1: Point, p2: Point) {
        self.p1 = p1;
        self.p2 = p2;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.bbox.take();
    }

    /// `(dx, dy)` from `p1` to `p2`
    pub fn delta(&self) -> Vec2 {
        self.p2.diff(&self.p1)
    }

    /// Squared segment length
    pub fn length_squared(&self) -> f64 {
        self.delta().norm_squared()
    }

    /// True when both endpoints coincide
    pub fn is_degenerate(&self) -> bool {
        let d = self.delta();
        utils::is_zero(d.x, DEGENERATE_EPSILON) && utils::is_zero(d.y, DEGENERATE_EPSILON)
    }

    /// Slope-intercept form of the infinite line through both endpoints
    pub fn slope_intercept(&self) -> LineEquation {
        let d = self.delta();
        if self.is_degenerate() {
            LineEquation::Degenerate { point: self.p1 }
        } else if utils::is_zero(d.x, DEGENERATE_EPSILON) {
            LineEquation::Vertical { x: self.p1.x }
        } else {
            let slope = d.y / d.x;
            LineEquation::Sloped {
                slope,
                intercept: self.p1.y - slope * self.p1.x,
            }
        }
    }

    /// Axis-aligned bounding box of the segment
    pub fn bbox(&self) -> Aabb {
        *self
            .bbox
            .get_or_init(|| Aabb::enclosing(&[self.p1.as_vec(), self.p2.as_vec()]))
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1 && self.p2 == other.p2
    }
}

impl Transform2d for Line {
    /// Midpoint of the segment
    fn center(&self) -> Point {
        Point::from_vec(self.p1.as_vec() + self.delta() * 0.5)
    }

    fn center_at(&mut self, point: Point) {
        let offset = point.diff(&self.center());
        self.p1.x += offset.x;
        self.p1.y += offset.y;
        self.p2.x += offset.x;
        self.p2.y += offset.y;
        self.invalidate();
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn rotate(&mut self, theta: f64) {
        let mid = self.center();
        self.p1.rotate_about(theta, mid);
        self.p2.rotate_about(theta, mid);
        self.rotation += theta;
        self.invalidate();
    }
}
