//! Dispatch table from shape-kind pairs to collision tests
//!
//! Each unordered pair of kinds is registered once, in one order. Lookups
//! for the other order resolve to the same test with a flag telling the
//! caller to swap arguments.

use std::collections::HashMap;

use super::primitives;
use super::{Collider, CollisionError};
use crate::config::LineTestMode;
use crate::shapes::{Shape, ShapeKind};

/// Signature shared by every registered test
///
/// The collider is passed through so composite tests can dispatch on their
/// members and line tests can read the configured [`LineTestMode`].
pub type CollisionFn = fn(&Collider, &Shape, &Shape, f64) -> Result<bool, CollisionError>;

/// How a lookup was satisfied
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    /// Registered in the requested order
    Direct(CollisionFn),
    /// Registered in the opposite order; swap arguments before calling
    Reversed(CollisionFn),
}

impl Resolution {
    /// Call the test, swapping arguments if needed
    pub fn invoke(
        self,
        collider: &Collider,
        first: &Shape,
        second: &Shape,
        eps: f64,
    ) -> Result<bool, CollisionError> {
        match self {
            Self::Direct(test) => test(collider, first, second, eps),
            Self::Reversed(test) => test(collider, second, first, eps),
        }
    }

    /// True when the arguments get swapped
    pub const fn is_reversed(&self) -> bool {
        matches!(self, Self::Reversed(_))
    }
}

/// Immutable-after-construction map of kind pairs to tests
#[derive(Debug, Clone)]
pub struct CollisionRegistry {
    tests: HashMap<(ShapeKind, ShapeKind), CollisionFn>,
}

impl CollisionRegistry {
    /// A registry with no tests at all
    pub fn empty() -> Self {
        Self { tests: HashMap::new() }
    }

    /// A registry covering every pair of supported kinds
    pub fn new() -> Self {
        use ShapeKind::{Circle, Collection, Line, Pill, Point, Rectangle};

        let mut registry = Self::empty();
        let defaults: [(ShapeKind, ShapeKind, CollisionFn); 21] = [
            // Circle-x
            (Circle, Circle, circle_circle),
            (Circle, Line, circle_line),
            (Circle, Point, circle_point),
            (Circle, Rectangle, circle_rect),
            // Line-x
            (Line, Line, line_line),
            (Line, Point, line_point),
            (Line, Rectangle, line_rect),
            // Point-x
            (Point, Point, point_point),
            (Point, Rectangle, point_rect),
            // Rectangle-x
            (Rectangle, Rectangle, rect_rect),
            // Pill-x, tested through its parts
            (Pill, Pill, pill_pill),
            (Pill, Circle, pill_single),
            (Pill, Line, pill_single),
            (Pill, Point, pill_single),
            (Pill, Rectangle, pill_single),
            // Collection-x
            (Collection, Collection, collection_collection),
            (Collection, Circle, collection_single),
            (Collection, Line, collection_single),
            (Collection, Point, collection_single),
            (Collection, Rectangle, collection_single),
            (Collection, Pill, collection_single),
        ];
        for (first, second, test) in defaults {
            registry.tests.insert((first, second), test);
        }

        log::debug!("Built collision registry with {} pair tests", registry.len());
        registry
    }

    /// Register a test for `(first, second)`
    ///
    /// Fails if the pair is already covered in either order.
    pub fn register(
        &mut self,
        first: ShapeKind,
        second: ShapeKind,
        test: CollisionFn,
    ) -> Result<(), CollisionError> {
        if self.contains(first, second) {
            return Err(CollisionError::DuplicateRegistration { first, second });
        }
        self.tests.insert((first, second), test);
        log::debug!("Registered collision test for {first} / {second}");
        Ok(())
    }

    /// Find the test for an ordered pair of kinds
    pub fn resolve(&self, first: ShapeKind, second: ShapeKind) -> Result<Resolution, CollisionError> {
        if let Some(test) = self.tests.get(&(first, second)) {
            return Ok(Resolution::Direct(*test));
        }
        if let Some(test) = self.tests.get(&(second, first)) {
            return Ok(Resolution::Reversed(*test));
        }
        Err(CollisionError::UnsupportedPair { first, second })
    }

    /// Whether the pair is covered in either order
    pub fn contains(&self, first: ShapeKind, second: ShapeKind) -> bool {
        self.tests.contains_key(&(first, second)) || self.tests.contains_key(&(second, first))
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl Default for CollisionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an adapter that unwraps two [`Shape`] variants and runs `$body`
macro_rules! typed_test {
    ($name:ident, $first:ident, $second:ident, |$collider:pat_param, $a:ident, $b:ident, $eps:ident| $body:expr) => {
        fn $name(
            collider: &Collider,
            first: &Shape,
            second: &Shape,
            $eps: f64,
        ) -> Result<bool, CollisionError> {
            let $collider = collider;
            match (first, second) {
                (Shape::$first($a), Shape::$second($b)) => Ok($body),
                _ => Err(CollisionError::KindMismatch {
                    expected_first: ShapeKind::$first,
                    expected_second: ShapeKind::$second,
                    found_first: first.kind(),
                    found_second: second.kind(),
                }),
            }
        }
    };
}

typed_test!(circle_circle, Circle, Circle, |_, a, b, eps| primitives::circle_circle(a, b, eps));
typed_test!(circle_line, Circle, Line, |_, a, b, eps| primitives::circle_line(a, b, eps));
typed_test!(circle_point, Circle, Point, |_, a, b, eps| primitives::circle_point(a, b, eps));
typed_test!(circle_rect, Circle, Rectangle, |_, a, b, eps| primitives::circle_rect(a, b, eps));
typed_test!(point_point, Point, Point, |_, a, b, eps| primitives::point_point(a, b, eps));
typed_test!(point_rect, Point, Rectangle, |_, a, b, eps| primitives::point_rect(a, b, eps));
typed_test!(rect_rect, Rectangle, Rectangle, |_, a, b, eps| primitives::rect_rect(a, b, eps));

typed_test!(line_line, Line, Line, |collider, a, b, eps| {
    match collider.settings().line_mode {
        LineTestMode::BoundingBox => primitives::line_line(a, b, eps),
        LineTestMode::Exact => primitives::line_line_exact(a, b, eps),
    }
});

typed_test!(line_point, Line, Point, |collider, a, b, eps| {
    match collider.settings().line_mode {
        LineTestMode::BoundingBox => primitives::line_point(a, b, eps),
        LineTestMode::Exact => primitives::line_point_exact(a, b, eps),
    }
});

typed_test!(line_rect, Line, Rectangle, |collider, a, b, eps| {
    match collider.settings().line_mode {
        LineTestMode::BoundingBox => primitives::line_rect(a, b, eps),
        LineTestMode::Exact => primitives::line_rect_exact(a, b, eps),
    }
});

/// Any member of `members` collides with `other`
fn any_collides<'a>(
    collider: &Collider,
    members: impl IntoIterator<Item = &'a Shape>,
    other: &Shape,
    eps: f64,
) -> Result<bool, CollisionError> {
    for member in members {
        if collider.check(member, other, eps)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn collection_single(
    collider: &Collider,
    first: &Shape,
    second: &Shape,
    eps: f64,
) -> Result<bool, CollisionError> {
    match first {
        Shape::Collection(group) => any_collides(collider, group, second, eps),
        _ => Err(CollisionError::KindMismatch {
            expected_first: ShapeKind::Collection,
            expected_second: second.kind(),
            found_first: first.kind(),
            found_second: second.kind(),
        }),
    }
}

fn collection_collection(
    collider: &Collider,
    first: &Shape,
    second: &Shape,
    eps: f64,
) -> Result<bool, CollisionError> {
    match (first, second) {
        (Shape::Collection(a), Shape::Collection(b)) => {
            for member in a {
                if any_collides(collider, b, member, eps)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        _ => Err(CollisionError::KindMismatch {
            expected_first: ShapeKind::Collection,
            expected_second: ShapeKind::Collection,
            found_first: first.kind(),
            found_second: second.kind(),
        }),
    }
}

fn pill_single(
    collider: &Collider,
    first: &Shape,
    second: &Shape,
    eps: f64,
) -> Result<bool, CollisionError> {
    match first {
        Shape::Pill(pill) => any_collides(collider, &pill.segments(), second, eps),
        _ => Err(CollisionError::KindMismatch {
            expected_first: ShapeKind::Pill,
            expected_second: second.kind(),
            found_first: first.kind(),
            found_second: second.kind(),
        }),
    }
}

fn pill_pill(
    collider: &Collider,
    first: &Shape,
    second: &Shape,
    eps: f64,
) -> Result<bool, CollisionError> {
    match (first, second) {
        (Shape::Pill(a), Shape::Pill(b)) => {
            let theirs = b.segments();
            for part in &a.segments() {
                if any_collides(collider, &theirs, part, eps)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        _ => Err(CollisionError::KindMismatch {
            expected_first: ShapeKind::Pill,
            expected_second: ShapeKind::Pill,
            found_first: first.kind(),
            found_second: second.kind(),
        }),
    }
}
