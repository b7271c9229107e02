//! Collision mediator
//!
//! The [`Collider`] owns a [`CollisionRegistry`] and the active
//! [`CollisionSettings`]. Callers hand it two shapes in any order; it picks
//! the registered test and swaps the arguments when only the reversed pair
//! is registered.

use super::{CollisionError, CollisionRegistry};
use crate::config::CollisionSettings;
use crate::shapes::Shape;

/// Entry point for collision queries
///
/// Construct once and share; checks take `&self` and never mutate the
/// shapes they inspect.
///
/// ```
/// use collision2d::collision::Collider;
/// use collision2d::shapes::{Circle, Point, Shape};
///
/// let collider = Collider::new();
/// let circle = Shape::from(Circle::new(0.0, 0.0, 5.0, 0.0));
/// let point = Shape::from(Point::new(3.0, 4.0));
///
/// assert!(collider.check(&point, &circle, 0.0).unwrap());
/// assert!(collider.check(&circle, &point, 0.0).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Collider {
    registry: CollisionRegistry,
    settings: CollisionSettings,
}

impl Collider {
    /// Collider with every supported pair and default settings
    pub fn new() -> Self {
        Self::with_settings(CollisionSettings::default())
    }

    /// Collider with every supported pair and the given settings
    pub fn with_settings(settings: CollisionSettings) -> Self {
        Self::with_registry(CollisionRegistry::new(), settings)
    }

    /// Collider using a caller-built registry
    pub const fn with_registry(registry: CollisionRegistry, settings: CollisionSettings) -> Self {
        Self { registry, settings }
    }

    /// Active settings
    pub const fn settings(&self) -> &CollisionSettings {
        &self.settings
    }

    /// Registered tests
    pub const fn registry(&self) -> &CollisionRegistry {
        &self.registry
    }

    /// Whether `first` and `second` collide within tolerance `eps`
    ///
    /// Symmetric in its arguments. Fails with
    /// [`CollisionError::UnsupportedPair`] when the registry has no test for
    /// the two kinds in either order.
    pub fn check(&self, first: &Shape, second: &Shape, eps: f64) -> Result<bool, CollisionError> {
        let resolution = match self.registry.resolve(first.kind(), second.kind()) {
            Ok(resolution) => resolution,
            Err(err) => {
                log::warn!("{err}");
                return Err(err);
            }
        };

        log::trace!(
            "Checking {} / {} (eps {eps}, reversed: {})",
            first.kind(),
            second.kind(),
            resolution.is_reversed()
        );

        resolution.invoke(self, first, second, eps)
    }

    /// Alias of [`check`](Self::check)
    pub fn collision_check(
        &self,
        first: &Shape,
        second: &Shape,
        eps: f64,
    ) -> Result<bool, CollisionError> {
        self.check(first, second, eps)
    }

    /// [`check`](Self::check) with the configured default epsilon
    pub fn check_default(&self, first: &Shape, second: &Shape) -> Result<bool, CollisionError> {
        self.check(first, second, self.settings.default_epsilon)
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::new()
    }
}
