//! Math utilities and types
//!
//! Provides the 2D vector type and the small set of scalar helpers the
//! collision code is built from.
//!
//! Vectors only multiply by scalars. A vector-by-vector product is
//! ambiguous (componentwise or dot?) and is rejected by the compiler:
//!
//! ```compile_fail
//! use collision2d::foundation::math::Vec2;
//!
//! let a = Vec2::new(1.0, 2.0);
//! let b = Vec2::new(3.0, 4.0);
//! let _ = a * b;
//! ```
//!
//! Use [`Vec2::dot`] or [`Vec2::component_mul`] to say which one you mean.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// Rotations smaller than this are treated as axis-aligned
pub const ROTATION_EPSILON: f64 = 1e-8;

/// Line deltas smaller than this are treated as zero
pub const DEGENERATE_EPSILON: f64 = 1e-8;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = std::f64::consts::TAU;

    /// Pi / 2
    pub const HALF_PI: f64 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }

    /// True when `value` is within `precision` of zero
    pub fn is_zero(value: f64, precision: f64) -> bool {
        value.abs() <= precision
    }

    /// Linear interpolation from `min` towards `max`
    pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
        min + t * (max - min)
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Rotate `point` counter-clockwise about `origin` by `theta` radians
    pub fn rotate_point(origin: Vec2, point: Vec2, theta: f64) -> Vec2 {
        let (sin, cos) = theta.sin_cos();
        let dx = point.x - origin.x;
        let dy = point.y - origin.y;
        Vec2::new(
            cos * dx - sin * dy + origin.x,
            sin * dx + cos * dy + origin.y,
        )
    }

    /// Express `point` in the frame of a body centred at `origin` and rotated by `rotation`
    ///
    /// This is `rotate_point(origin, point, -rotation)` shifted so that
    /// `origin` maps to zero.
    pub fn to_local(origin: Vec2, rotation: f64, point: Vec2) -> Vec2 {
        rotate_point(origin, point, -rotation) - origin
    }
}
