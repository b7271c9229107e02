//! Pairwise intersection tests
//!
//! One function per pair of primitive kinds, written for a fixed argument
//! order; the [`Collider`](super::Collider) takes care of swapping. Every
//! test takes a tolerance `eps` that grows the effective collision region
//! (negative values shrink it). None of them mutate their inputs: rotated
//! cases work on locally derived coordinates.

use super::sat;
use crate::foundation::math::{utils, Vec2, DEGENERATE_EPSILON, ROTATION_EPSILON};
use crate::shapes::{Circle, Line, LineEquation, Point, Rectangle, Transform2d};

/// Circle-circle: centers within `r1 + r2 + eps`
pub fn circle_circle(c1: &Circle, c2: &Circle, eps: f64) -> bool {
    within(&c1.center, &c2.center, c1.radius + c2.radius + eps)
}

/// Circle-point: point within `radius + eps` of the center
pub fn circle_point(circle: &Circle, point: &Point, eps: f64) -> bool {
    within(&circle.center, point, circle.radius + eps)
}

/// Circle-line: the segment enters the circle grown by `eps`
///
/// Solves `|p1 + t*d - center|^2 = (r + eps)^2` for `t`. The roots bound
/// the part of the infinite line inside the circle; the segment collides
/// when that range meets `[0, 1]`, which also covers a segment lying
/// entirely inside the circle.
pub fn circle_line(circle: &Circle, line: &Line, eps: f64) -> bool {
    if line.is_degenerate() {
        return circle_point(circle, &line.p1(), eps);
    }

    let reach = circle.radius + eps;
    if reach < 0.0 {
        return false;
    }

    let d = line.delta();
    let f = line.p1().diff(&circle.center);

    let a = d.dot(&d);
    let b = 2.0 * f.dot(&d);
    let c = f.dot(&f) - reach * reach;
    let disc = b * b - 4.0 * a * c;

    if disc < 0.0 {
        return false;
    }

    let root = disc.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);

    t1 <= 1.0 && t2 >= 0.0
}

/// Circle-rectangle: the circle's center lies in the rectangle grown by the radius
///
/// This is the Minkowski sum with square corners, so circles just off a
/// corner diagonal may report a hit.
pub fn circle_rect(circle: &Circle, rect: &Rectangle, eps: f64) -> bool {
    point_rect(&circle.center, &rect.inflated(circle.radius), eps)
}

/// Point-point: the points are within `eps` of each other
pub fn point_point(p1: &Point, p2: &Point, eps: f64) -> bool {
    within(p1, p2, eps)
}

/// Point-rectangle: the point lies in the rectangle padded by `eps / 2` per side
pub fn point_rect(point: &Point, rect: &Rectangle, eps: f64) -> bool {
    let local = if rect.is_axis_aligned(ROTATION_EPSILON) {
        point.diff(&rect.center())
    } else {
        rect.to_local(point.as_vec())
    };
    let reach = rect.half_extents() + Vec2::repeat(eps / 2.0);
    local.x.abs() <= reach.x && local.y.abs() <= reach.y
}

/// Line-point: the point lies in the segment's bounding box padded by `eps / 2`
///
/// Off-segment points inside the box of a diagonal segment also count.
pub fn line_point(line: &Line, point: &Point, eps: f64) -> bool {
    line.bbox().contains(point.as_vec(), eps / 2.0)
}

/// Line-line: the infinite lines cross at a point inside both segment boxes
///
/// Parallel segments fall back to endpoint containment once their lines
/// are within `eps / 2` of each other.
pub fn line_line(line1: &Line, line2: &Line, eps: f64) -> bool {
    match (line1.slope_intercept(), line2.slope_intercept()) {
        (LineEquation::Degenerate { point }, _) => line_point(line2, &point, eps),
        (_, LineEquation::Degenerate { point }) => line_point(line1, &point, eps),
        (LineEquation::Vertical { x: x1 }, LineEquation::Vertical { x: x2 }) => {
            if (x1 - x2).abs() > eps / 2.0 + DEGENERATE_EPSILON {
                return false;
            }
            endpoints_touch(line1, line2, eps)
        }
        (LineEquation::Vertical { x }, LineEquation::Sloped { slope, intercept })
        | (LineEquation::Sloped { slope, intercept }, LineEquation::Vertical { x }) => {
            crossing_on_both(line1, line2, Point::new(x, slope * x + intercept), eps)
        }
        (
            LineEquation::Sloped { slope: m1, intercept: b1 },
            LineEquation::Sloped { slope: m2, intercept: b2 },
        ) => {
            if utils::is_zero(m1 - m2, DEGENERATE_EPSILON) {
                // Parallel: only collinear (or eps-close) segments can touch
                let separation = (b1 - b2).abs() / m1.mul_add(m1, 1.0).sqrt();
                if separation > eps / 2.0 + DEGENERATE_EPSILON {
                    return false;
                }
                return endpoints_touch(line1, line2, eps);
            }
            let x = (b2 - b1) / (m1 - m2);
            crossing_on_both(line1, line2, Point::new(x, m1.mul_add(x, b1)), eps)
        }
    }
}

/// Line-rectangle: the segment's bounding box overlaps the rectangle
pub fn line_rect(line: &Line, rect: &Rectangle, eps: f64) -> bool {
    rect_rect(&line.bbox().to_rectangle(), rect, eps)
}

/// Line-point against the segment itself: within `eps / 2` along its direction and normal
pub fn line_point_exact(line: &Line, point: &Point, eps: f64) -> bool {
    sat::overlaps_on_axes(
        &sat::segment_points(line),
        &[point.as_vec()],
        &sat::segment_axes(line),
        eps / 2.0,
    )
}

/// Line-line against the segments themselves
pub fn line_line_exact(line1: &Line, line2: &Line, eps: f64) -> bool {
    let [d1, n1] = sat::segment_axes(line1);
    let [d2, n2] = sat::segment_axes(line2);
    sat::overlaps_on_axes(
        &sat::segment_points(line1),
        &sat::segment_points(line2),
        &[d1, n1, d2, n2],
        eps / 2.0,
    )
}

/// Line-rectangle against the segment itself
pub fn line_rect_exact(line: &Line, rect: &Rectangle, eps: f64) -> bool {
    let [d, n] = sat::segment_axes(line);
    let [rx, ry] = sat::rect_axes(rect);
    sat::overlaps_on_axes(&sat::segment_points(line), &rect.corners(), &[d, n, rx, ry], eps)
}

/// Rectangle-rectangle: overlap with each box grown so gaps up to `eps` count
///
/// Axis-aligned pairs compare half extents directly. Otherwise each
/// rectangle's frame is tried as a separating frame; the pair collides only
/// if neither frame separates them.
pub fn rect_rect(r1: &Rectangle, r2: &Rectangle, eps: f64) -> bool {
    if r1.is_axis_aligned(ROTATION_EPSILON) && r2.is_axis_aligned(ROTATION_EPSILON) {
        let distance = r1.center().diff(&r2.center()).abs();
        let reach = r1.half_extents() + r2.half_extents() + Vec2::repeat(eps);
        return distance.x <= reach.x && distance.y <= reach.y;
    }

    !definitely_not_intersecting(r1, r2, eps) && !definitely_not_intersecting(r2, r1, eps)
}

/// True when `other`, seen from `frame`'s unrotated frame, misses `frame`
///
/// Projects `other`'s corners onto both of `frame`'s axes, which is the
/// same as taking `other`'s bounding box after un-rotating the pair about
/// `frame`'s center.
fn definitely_not_intersecting(frame: &Rectangle, other: &Rectangle, eps: f64) -> bool {
    let [ax, ay] = sat::rect_axes(frame);
    !sat::overlaps_on_axes(&frame.corners(), &other.corners(), &[ax, ay], eps)
}

fn within(a: &Point, b: &Point, reach: f64) -> bool {
    reach >= 0.0 && a.distance_squared(b) <= reach * reach
}

/// Either segment has an endpoint inside the other's box
fn endpoints_touch(line1: &Line, line2: &Line, eps: f64) -> bool {
    line_point(line1, &line2.p1(), eps)
        || line_point(line1, &line2.p2(), eps)
        || line_point(line2, &line1.p1(), eps)
        || line_point(line2, &line1.p2(), eps)
}

/// A computed crossing lies in both boxes, allowing for rounding in the solve
fn crossing_on_both(line1: &Line, line2: &Line, crossing: Point, eps: f64) -> bool {
    let pad = eps / 2.0 + DEGENERATE_EPSILON;
    line1.bbox().contains(crossing.as_vec(), pad) && line2.bbox().contains(crossing.as_vec(), pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::{HALF_PI, PI};

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::from_coords(x1, y1, x2, y2)
    }

    #[test]
    fn test_circle_circle_boundary() {
        let a = Circle::new(0.0, 0.0, 5.0, 0.0);
        let b = Circle::new(12.0, 0.0, 5.0, 0.0);
        assert!(!circle_circle(&a, &b, 0.0));
        assert!(circle_circle(&a, &b, 2.0));
        assert!(!circle_circle(&a, &b, 1.9));
    }

    #[test]
    fn test_circle_circle_negative_eps_shrinks() {
        let a = Circle::new(0.0, 0.0, 5.0, 0.0);
        let b = Circle::new(9.0, 0.0, 5.0, 0.0);
        assert!(circle_circle(&a, &b, 0.0));
        assert!(!circle_circle(&a, &b, -2.0));
        // Past the combined radius nothing collides, not even concentric circles
        assert!(!circle_circle(&a, &a.clone(), -20.0));
    }

    #[test]
    fn test_circle_point() {
        let circle = Circle::new(1.0, 1.0, 2.0, 0.0);
        assert!(circle_point(&circle, &Point::new(3.0, 1.0), 0.0));
        assert!(!circle_point(&circle, &Point::new(4.0, 1.0), 0.0));
        assert!(circle_point(&circle, &Point::new(4.0, 1.0), 1.0));
    }

    #[test]
    fn test_circle_line_crossing_and_miss() {
        let circle = Circle::new(0.0, 0.0, 1.0, 0.0);
        assert!(circle_line(&circle, &line(-5.0, 0.5, 5.0, 0.5), 0.0));
        assert!(!circle_line(&circle, &line(-5.0, 2.0, 5.0, 2.0), 0.0));
        assert!(circle_line(&circle, &line(-5.0, 2.0, 5.0, 2.0), 1.0));
    }

    #[test]
    fn test_circle_line_segment_short_of_circle() {
        // The infinite line crosses the circle but the segment stops before it
        let circle = Circle::new(0.0, 0.0, 1.0, 0.0);
        assert!(!circle_line(&circle, &line(3.0, 0.0, 5.0, 0.0), 0.0));
        assert!(circle_line(&circle, &line(3.0, 0.0, 5.0, 0.0), 2.0));
    }

    #[test]
    fn test_circle_line_segment_inside_circle() {
        let circle = Circle::new(0.0, 0.0, 10.0, 0.0);
        assert!(circle_line(&circle, &line(-1.0, 0.0, 1.0, 0.0), 0.0));
    }

    #[test]
    fn test_circle_line_degenerate_segment() {
        let circle = Circle::new(0.0, 0.0, 1.0, 0.0);
        assert!(circle_line(&circle, &line(0.5, 0.0, 0.5, 0.0), 0.0));
        assert!(!circle_line(&circle, &line(2.0, 0.0, 2.0, 0.0), 0.0));
    }

    #[test]
    fn test_circle_rect() {
        let rect = Rectangle::new(0.0, 0.0, 4.0, 2.0, 0.0);
        assert!(circle_rect(&Circle::new(2.5, 0.0, 1.0, 0.0), &rect, 0.0));
        assert!(!circle_rect(&Circle::new(3.5, 0.0, 1.0, 0.0), &rect, 0.0));
        assert!(circle_rect(&Circle::new(3.5, 0.0, 1.0, 0.0), &rect, 1.0));

        // Rotating the rectangle a quarter turn brings its long side up to y = 2
        let upright = Rectangle::new(0.0, 0.0, 4.0, 2.0, HALF_PI);
        assert!(circle_rect(&Circle::new(0.0, 2.5, 1.0, 0.0), &upright, 0.0));
        assert!(!circle_rect(&Circle::new(2.5, 0.0, 1.0, 0.0), &upright, 0.0));
    }

    #[test]
    fn test_point_point_exactness() {
        let origin = Point::new(0.0, 0.0);
        let far = Point::new(3.0, 4.0);
        assert!(!point_point(&origin, &far, 4.999));
        assert!(point_point(&origin, &far, 5.0));
        assert!(point_point(&origin, &origin.clone(), 0.0));
        assert!(!point_point(&origin, &far, -5.0));
    }

    #[test]
    fn test_point_rect_axis_aligned_padding() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0, 0.0);
        assert!(point_rect(&Point::new(5.0, 5.0), &rect, 0.0));
        assert!(!point_rect(&Point::new(5.5, 0.0), &rect, 0.0));
        // eps pads half of itself on each side
        assert!(point_rect(&Point::new(5.5, 0.0), &rect, 1.0));
        assert!(!point_rect(&Point::new(5.5, 0.0), &rect, 0.9));
    }

    #[test]
    fn test_point_rect_rotated() {
        let diamond = Rectangle::square(0.0, 0.0, 2.0, PI / 4.0);
        // Tip of the diamond is at sqrt(2) on the x axis
        assert!(point_rect(&Point::new(1.4, 0.0), &diamond, 0.0));
        assert!(!point_rect(&Point::new(1.5, 0.0), &diamond, 0.0));
        // Corner of the unrotated square is outside the diamond
        assert!(!point_rect(&Point::new(0.95, 0.95), &diamond, 0.0));
    }

    #[test]
    fn test_point_rect_leaves_inputs_untouched() {
        let rect = Rectangle::new(1.0, 1.0, 2.0, 2.0, 0.3);
        let point = Point::new(1.5, 1.5);
        let (rect_before, point_before) = (rect.clone(), point);
        let _ = point_rect(&point, &rect, 0.0);
        assert_eq!(rect, rect_before);
        assert_eq!(point, point_before);
    }

    #[test]
    fn test_line_point_uses_bbox() {
        let diagonal = line(0.0, 0.0, 10.0, 10.0);
        assert!(line_point(&diagonal, &Point::new(5.0, 5.0), 0.0));
        // Off the segment but inside its box
        assert!(line_point(&diagonal, &Point::new(9.0, 1.0), 0.0));
        assert!(!line_point(&diagonal, &Point::new(11.0, 5.0), 0.0));
        assert!(line_point(&diagonal, &Point::new(11.0, 5.0), 2.0));
    }

    #[test]
    fn test_line_point_exact() {
        let diagonal = line(0.0, 0.0, 10.0, 10.0);
        assert!(line_point_exact(&diagonal, &Point::new(5.0, 5.0), 0.0));
        assert!(!line_point_exact(&diagonal, &Point::new(9.0, 1.0), 0.0));
        assert!(!line_point_exact(&diagonal, &Point::new(11.0, 11.0), 0.0));
        // (6, 4) is sqrt(2) from the segment
        assert!(!line_point_exact(&diagonal, &Point::new(6.0, 4.0), 2.8));
        assert!(line_point_exact(&diagonal, &Point::new(6.0, 4.0), 2.9));
    }

    #[test]
    fn test_line_line_crossing() {
        let a = line(0.0, 0.0, 10.0, 10.0);
        let b = line(0.0, 10.0, 10.0, 0.0);
        assert!(line_line(&a, &b, 0.0));
        assert!(line_line(&b, &a, 0.0));

        // Lines cross at (5, 5) but this segment stops short of it
        let short = line(0.0, 10.0, 4.0, 6.0);
        assert!(!line_line(&a, &short, 0.0));
    }

    #[test]
    fn test_line_line_vertical_cases() {
        let vertical = line(5.0, 0.0, 5.0, 10.0);
        let horizontal = line(0.0, 3.0, 10.0, 3.0);
        assert!(line_line(&vertical, &horizontal, 0.0));
        assert!(line_line(&horizontal, &vertical, 0.0));

        let far_vertical = line(8.0, 0.0, 8.0, 10.0);
        assert!(!line_line(&vertical, &far_vertical, 0.0));
        assert!(!line_line(&vertical, &far_vertical, 5.9));
        assert!(line_line(&vertical, &far_vertical, 6.0));

        let stacked = line(5.0, 11.0, 5.0, 20.0);
        assert!(!line_line(&vertical, &stacked, 0.0));
        assert!(line_line(&vertical, &line(5.0, 2.0, 5.0, 4.0), 0.0));
    }

    #[test]
    fn test_line_line_parallel_and_collinear() {
        let a = line(0.0, 0.0, 4.0, 2.0);
        let shifted = line(0.0, 1.0, 4.0, 3.0);
        assert!(!line_line(&a, &shifted, 0.0));

        let overlapping = line(2.0, 1.0, 6.0, 3.0);
        assert!(line_line(&a, &overlapping, 0.0));
        assert!(line_line(&a, &a.clone(), 0.0));

        let disjoint = line(6.0, 3.0, 8.0, 4.0);
        assert!(!line_line(&a, &disjoint, 0.0));
    }

    #[test]
    fn test_line_line_degenerate() {
        let a = line(0.0, 0.0, 4.0, 4.0);
        assert!(line_line(&a, &line(2.0, 2.0, 2.0, 2.0), 0.0));
        assert!(line_line(&line(2.0, 2.0, 2.0, 2.0), &a, 0.0));
        assert!(!line_line(&a, &line(6.0, 2.0, 6.0, 2.0), 0.0));
    }

    #[test]
    fn test_line_line_exact() {
        let a = line(0.0, 0.0, 10.0, 10.0);
        assert!(line_line_exact(&a, &line(0.0, 10.0, 10.0, 0.0), 0.0));
        assert!(!line_line_exact(&a, &line(0.0, 10.0, 4.0, 6.0), 0.0));
        // Collinear but separated along the shared direction
        assert!(!line_line_exact(&a, &line(11.0, 11.0, 12.0, 12.0), 0.0));
        assert!(line_line_exact(&a, &line(5.0, 5.0, 12.0, 12.0), 0.0));
    }

    #[test]
    fn test_line_rect_bbox_and_exact() {
        let diagonal = line(0.0, 0.0, 10.0, 10.0);
        let corner_box = Rectangle::new(9.0, 1.0, 1.0, 1.0, 0.0);
        assert!(line_rect(&diagonal, &corner_box, 0.0));
        assert!(!line_rect_exact(&diagonal, &corner_box, 0.0));

        let on_line = Rectangle::new(5.0, 5.0, 1.0, 1.0, 0.7);
        assert!(line_rect(&diagonal, &on_line, 0.0));
        assert!(line_rect_exact(&diagonal, &on_line, 0.0));

        let away = Rectangle::new(20.0, 0.0, 2.0, 2.0, 0.0);
        assert!(!line_rect(&diagonal, &away, 0.0));
        assert!(!line_rect_exact(&diagonal, &away, 0.0));
    }

    #[test]
    fn test_rect_rect_axis_aligned() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0, 0.0);
        assert!(rect_rect(&a, &Rectangle::new(9.0, 0.0, 10.0, 10.0, 0.0), 0.0));

        let b = Rectangle::new(11.0, 0.0, 10.0, 10.0, 0.0);
        assert!(!rect_rect(&a, &b, 0.0));
        assert!(rect_rect(&a, &b, 1.0));

        // Overlapping in x only
        assert!(!rect_rect(&a, &Rectangle::new(0.0, 20.0, 10.0, 10.0, 0.0), 0.0));
    }

    #[test]
    fn test_rect_rect_rotated() {
        let square = Rectangle::new(0.0, 0.0, 2.0, 2.0, 0.0);

        // A diamond whose tip reaches x = 1 + sqrt(2) from center 2.3
        let diamond = Rectangle::square(2.3, 0.0, 2.0, PI / 4.0);
        assert!(rect_rect(&square, &diamond, 0.0));
        assert!(rect_rect(&diamond, &square, 0.0));

        let far_diamond = Rectangle::square(2.5, 0.0, 2.0, PI / 4.0);
        assert!(!rect_rect(&square, &far_diamond, 0.0));
        assert!(!rect_rect(&far_diamond, &square, 0.0));
    }

    #[test]
    fn test_rect_rect_needs_both_frames() {
        // Aligned box near a long thin rotated bar: the box's own axes see an
        // overlap of bounding extents; only the bar's frame separates them.
        let boxed = Rectangle::new(0.0, 0.0, 2.0, 2.0, 0.0);
        let bar = Rectangle::new(3.0, 3.0, 10.0, 0.5, -PI / 4.0);
        assert!(!rect_rect(&boxed, &bar, 0.0));
        assert!(!rect_rect(&bar, &boxed, 0.0));
        assert!(boxed.bbox().overlaps(&bar.bbox(), 0.0));
    }
}
