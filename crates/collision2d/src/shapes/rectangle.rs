//! Collidable rectangle
//!
//! Rectangles are center-based and may be rotated about their center. The
//! axis-aligned bounding box is computed lazily and discarded by every
//! setter, so [`Rectangle::bbox`] never reports a stale box.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::{Aabb, Point, Transform2d};
use crate::foundation::math::{utils, Vec2};

/// A rectangle centred at `center`, `width` by `height`, rotated by `rotation`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    center: Point,
    width: f64,
    height: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(skip)]
    bbox: OnceLock<Aabb>,
}

impl Rectangle {
    /// Creates a rectangle centred at `(x, y)`
    pub fn new(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        Self {
            center: Point::new(x, y),
            width,
            height,
            rotation,
            bbox: OnceLock::new(),
        }
    }

    /// Creates a square centred at `(x, y)`
    pub fn square(x: f64, y: f64, side: f64, rotation: f64) -> Self {
        Self::new(x, y, side, side, rotation)
    }

    /// Center x
    pub const fn x(&self) -> f64 {
        self.center.x
    }

    /// Center y
    pub const fn y(&self) -> f64 {
        self.center.y
    }

    /// Width before rotation
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height before rotation
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// `(width, height)` as a vector
    pub fn dimensions(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Half of [`Rectangle::dimensions`]
    pub fn half_extents(&self) -> Vec2 {
        self.dimensions() * 0.5
    }

    /// Set center x
    pub fn set_x(&mut self, x: f64) {
        self.center.x = x;
        self.invalidate();
    }

    /// Set center y
    pub fn set_y(&mut self, y: f64) {
        self.center.y = y;
        self.invalidate();
    }

    /// Set width
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
        self.invalidate();
    }

    /// Set height
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
        self.invalidate();
    }

    /// Set absolute rotation
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.bbox.take();
    }

    /// Whether the rotation is within `precision` of zero
    pub fn is_axis_aligned(&self, precision: f64) -> bool {
        utils::is_zero(self.rotation, precision)
    }

    /// The four corners in world space, counter-clockwise from bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        let c = self.center.as_vec();
        let h = self.half_extents();
        [
            Vec2::new(c.x - h.x, c.y - h.y),
            Vec2::new(c.x + h.x, c.y - h.y),
            Vec2::new(c.x + h.x, c.y + h.y),
            Vec2::new(c.x - h.x, c.y + h.y),
        ]
        .map(|corner| utils::rotate_point(c, corner, self.rotation))
    }

    /// Axis-aligned bounding box of the rotated rectangle
    pub fn bbox(&self) -> Aabb {
        *self.bbox.get_or_init(|| Aabb::enclosing(&self.corners()))
    }

    /// `point` expressed in this rectangle's unrotated, center-origin frame
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        utils::to_local(self.center.as_vec(), self.rotation, point)
    }

    /// Copy grown by `amount` on every side, keeping center and rotation
    #[must_use]
    pub fn inflated(&self, amount: f64) -> Self {
        Self::new(
            self.center.x,
            self.center.y,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
            self.rotation,
        )
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
            && self.width == other.width
            && self.height == other.height
            && self.rotation == other.rotation
    }
}

impl Transform2d for Rectangle {
    fn center(&self) -> Point {
        self.center
    }

    fn center_at(&mut self, point: Point) {
        self.center.center_at(point);
        self.invalidate();
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn rotate(&mut self, theta: f64) {
        self.rotation += theta;
        self.invalidate();
    }
}
