//! Separating axis helpers
//!
//! Two convex point sets are disjoint iff some axis exists on which their
//! projections do not overlap. In 2D the candidates are the edge normals of
//! both shapes; segments also contribute their own direction so that
//! collinear segments can be told apart.

use crate::foundation::math::{utils, Vec2, DEGENERATE_EPSILON};
use crate::shapes::{Line, Rectangle, Transform2d};

/// Closed interval of projected coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Smallest projection
    pub min: f64,
    /// Largest projection
    pub max: f64,
}

impl Interval {
    /// Whether the gap between the intervals is at most `gap`
    pub fn overlaps(&self, other: &Self, gap: f64) -> bool {
        self.min <= other.max + gap && other.min <= self.max + gap
    }
}

/// Project every point onto `axis`
pub fn project(points: &[Vec2], axis: Vec2) -> Interval {
    points.iter().fold(
        Interval { min: f64::INFINITY, max: f64::NEG_INFINITY },
        |acc, p| {
            let d = p.dot(&axis);
            Interval { min: acc.min.min(d), max: acc.max.max(d) }
        },
    )
}

/// Whether `axis` separates the two point sets by more than `gap`
///
/// The axis is normalised so `gap` is a distance. A zero-length axis never
/// separates anything.
pub fn separated_on_axis(a: &[Vec2], b: &[Vec2], axis: Vec2, gap: f64) -> bool {
    let Some(unit) = axis.try_normalize(DEGENERATE_EPSILON) else {
        return false;
    };
    !project(a, unit).overlaps(&project(b, unit), gap)
}

/// True when no axis in `axes` separates the point sets
pub fn overlaps_on_axes(a: &[Vec2], b: &[Vec2], axes: &[Vec2], gap: f64) -> bool {
    axes.iter().all(|axis| !separated_on_axis(a, b, *axis, gap))
}

/// The rectangle's local x and y axes in world space
pub fn rect_axes(rect: &Rectangle) -> [Vec2; 2] {
    let rotation = rect.rotation();
    [
        utils::rotate_point(Vec2::zeros(), Vec2::new(1.0, 0.0), rotation),
        utils::rotate_point(Vec2::zeros(), Vec2::new(0.0, 1.0), rotation),
    ]
}

/// The segment's direction and normal
///
/// A zero-length segment falls back to the world axes so it behaves like a
/// point.
pub fn segment_axes(line: &Line) -> [Vec2; 2] {
    if line.is_degenerate() {
        return [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
    }
    let d = line.delta();
    [d, Vec2::new(-d.y, d.x)]
}

/// Endpoints of a segment as a point set
pub fn segment_points(line: &Line) -> [Vec2; 2] {
    [line.p1().as_vec(), line.p2().as_vec()]
}
