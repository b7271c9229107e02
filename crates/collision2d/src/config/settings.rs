//! Collision tuning parameters

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// How tests involving line segments are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTestMode {
    /// Test against the segment's axis-aligned bounding box.
    ///
    /// Cheap, but a diagonal segment reports hits anywhere inside its box.
    #[default]
    BoundingBox,
    /// Test against the segment itself using separating axes
    Exact,
}

/// # Collision Settings
///
/// Tolerances and algorithm choices consumed by the
/// [`Collider`](crate::collision::Collider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Epsilon used by `Collider::check_default`
    pub default_epsilon: f64,
    /// Line segment test strategy
    pub line_mode: LineTestMode,
}

impl CollisionSettings {
    /// Create settings with the stock tolerances
    pub fn new() -> Self {
        Self {
            default_epsilon: 0.0,
            line_mode: LineTestMode::BoundingBox,
        }
    }

    /// Set the default epsilon
    #[must_use]
    pub fn with_default_epsilon(mut self, eps: f64) -> Self {
        self.default_epsilon = eps;
        self
    }

    /// Choose the line segment test strategy
    #[must_use]
    pub fn with_line_mode(mut self, mode: LineTestMode) -> Self {
        self.line_mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_epsilon.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "default_epsilon must be finite, got {}",
                self.default_epsilon
            )));
        }

        Ok(())
    }

    /// Load settings from a TOML or RON file and validate them
    pub fn load_validated(path: &str) -> Result<Self, ConfigError> {
        let settings = Self::load_from_file(path)?;
        settings.validate()?;
        log::debug!("Loaded collision settings from {path}: {settings:?}");
        Ok(settings)
    }
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for CollisionSettings {}
