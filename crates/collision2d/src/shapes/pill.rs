//! Collidable pill (capsule)
//!
//! A pill is two circles joined by a rectangle. It owns those three parts
//! and rebuilds them after every change to its pose or dimensions, so they
//! always agree with `(center, radius, height, rotation)`.

use serde::{Deserialize, Serialize};

use super::{Circle, Point, Rectangle, Shape, Transform2d};
use crate::foundation::math::{utils, Vec2};

/// Serialized form of a [`Pill`]; the parts are derived on load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillParams {
    /// Center of the body
    pub center: Point,
    /// Cap radius
    pub radius: f64,
    /// Cap-to-cap distance
    pub height: f64,
    /// Orientation in radians
    #[serde(default)]
    pub rotation: f64,
}

/// A capsule whose long axis is `height` long before rotation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "PillParams", into = "PillParams")]
pub struct Pill {
    center: Point,
    radius: f64,
    height: f64,
    rotation: f64,
    top: Circle,
    bottom: Circle,
    body: Rectangle,
}

impl Pill {
    /// Creates a pill centred on `center`
    pub fn new(center: Point, radius: f64, height: f64, rotation: f64) -> Self {
        let mut pill = Self {
            center,
            radius,
            height,
            rotation,
            top: Circle::around(center, radius),
            bottom: Circle::around(center, radius),
            body: Rectangle::new(center.x, center.y, 2.0 * radius, height, rotation),
        };
        pill.calc_segments();
        pill
    }

    /// Radius of the end caps
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance between the end cap centers
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// End cap on the +y side of the unrotated pill
    pub const fn top(&self) -> &Circle {
        &self.top
    }

    /// End cap on the -y side of the unrotated pill
    pub const fn bottom(&self) -> &Circle {
        &self.bottom
    }

    /// Rectangle joining the end caps
    pub const fn body(&self) -> &Rectangle {
        &self.body
    }

    /// Change the cap radius
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.calc_segments();
    }

    /// Change the cap-to-cap distance
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
        self.calc_segments();
    }

    /// Set absolute rotation
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
        self.calc_segments();
    }

    /// The three parts as shapes, caps first
    pub fn segments(&self) -> [Shape; 3] {
        [
            Shape::Circle(self.top.clone()),
            Shape::Circle(self.bottom.clone()),
            Shape::Rectangle(self.body.clone()),
        ]
    }

    /// Rebuild the parts: lay them out unrotated, then turn them into place
    fn calc_segments(&mut self) {
        let c = self.center.as_vec();
        let half = self.height * 0.5;
        let top = utils::rotate_point(c, c + Vec2::new(0.0, half), self.rotation);
        let bottom = utils::rotate_point(c, c - Vec2::new(0.0, half), self.rotation);

        self.top = Circle::new(top.x, top.y, self.radius, self.rotation);
        self.bottom = Circle::new(bottom.x, bottom.y, self.radius, self.rotation);
        self.body = Rectangle::new(c.x, c.y, 2.0 * self.radius, self.height, self.rotation);
    }
}

impl PartialEq for Pill {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
            && self.radius == other.radius
            && self.height == other.height
            && self.rotation == other.rotation
    }
}

impl Transform2d for Pill {
    fn center(&self) -> Point {
        self.center
    }

    fn center_at(&mut self, point: Point) {
        self.center.center_at(point);
        self.calc_segments();
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn rotate(&mut self, theta: f64) {
        self.rotation += theta;
        self.calc_segments();
    }
}

impl From<PillParams> for Pill {
    fn from(params: PillParams) -> Self {
        Self::new(params.center, params.radius, params.height, params.rotation)
    }
}

impl From<Pill> for PillParams {
    fn from(pill: Pill) -> Self {
        Self {
            center: pill.center,
            radius: pill.radius,
            height: pill.height,
            rotation: pill.rotation,
        }
    }
}
