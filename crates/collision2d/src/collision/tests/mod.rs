//! Cross-cutting collision tests
//!
//! `properties` sweeps every pair of a shared scene; `dispatch` covers
//! registry behavior seen through the collider.


use crate::collision::{CollisionFn, CollisionRegistry, Resolution};
use crate::shapes::{Circle, Collection, Line, Pill, Point, Rectangle, Shape, ShapeKind};

/// A scene with every kind, some pairs touching and some well apart
fn sample_shapes() -> Vec<Shape> {
    vec![
        Point::new(1.0, 1.0).into(),
        Point::new(20.0, 20.0).into(),
        Circle::new(0.0, 0.0, 2.0, 0.0).into(),
        Circle::new(6.0, 0.0, 1.5, 0.3).into(),
        Line::from_coords(-3.0, -3.0, 3.0, 3.0).into(),
        Line::from_coords(5.0, -5.0, 5.0, 5.0).into(),
        Line::from_coords(-10.0, 8.0, 10.0, 8.0).into(),
        Rectangle::new(0.0, 0.0, 4.0, 2.0, 0.0).into(),
        Rectangle::new(8.0, 1.0, 3.0, 3.0, 0.6).into(),
        Pill::new(Point::new(3.0, -4.0), 1.0, 3.0, 0.4).into(),
        [Shape::from(Point::new(20.0, 20.0)), Circle::new(-6.0, 6.0, 1.0, 0.0).into()]
            .into_iter()
            .collect::<Collection>()
            .into(),
    ]
}

/// The stock test for a pair, as registered in the default registry
fn default_test(first: ShapeKind, second: ShapeKind) -> CollisionFn {
    match CollisionRegistry::new().resolve(first, second) {
        Ok(Resolution::Direct(test)) => test,
        other => panic!("{first} / {second} is not registered directly: {other:?}"),
    }
}
