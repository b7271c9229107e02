//! # collision2d
//!
//! Collision detection for simple 2D shapes.
//!
//! ## Features
//!
//! - **Primitives**: points, circles, line segments, rotated rectangles and pills
//! - **Collections**: heterogeneous groups that collide when any member does
//! - **Tolerances**: every check takes an epsilon that grows (or shrinks) the hit region
//! - **Pluggable dispatch**: tests are looked up per pair of shape kinds and
//!   the registry can be built by hand
//! - **Configuration**: tolerances and line strategy load from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use collision2d::prelude::*;
//!
//! let collider = Collider::new();
//!
//! let ship = Shape::from(Pill::new(Point::new(0.0, 0.0), 1.0, 3.0, 0.4));
//! let rock = Shape::from(Circle::new(1.5, 0.5, 1.0, 0.0));
//!
//! assert!(collider.check(&ship, &rock, 0.0)?);
//! # Ok::<(), CollisionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod collision;
pub mod config;
pub mod foundation;
pub mod shapes;

/// Common imports for collision users
pub mod prelude {
    pub use crate::{
        collision::{Collider, CollisionError, CollisionRegistry},
        config::{CollisionSettings, Config, ConfigError, LineTestMode},
        foundation::math::Vec2,
        shapes::{
            make_rect_at_bottom_left, make_rect_at_center, Circle, Collection, Line, Pill, Point,
            Rectangle, Shape, ShapeError, ShapeKind, Transform2d,
        },
    };
}
