//! Scene files: named shapes loaded from RON

use std::fs;

use collision2d::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while preparing a demo run
#[derive(Error, Debug)]
pub enum DemoError {
    /// Scene file could not be read
    #[error("failed to read scene {path}: {source}")]
    Io {
        /// Scene path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Scene file is not valid RON
    #[error("failed to parse scene {path}: {message}")]
    Parse {
        /// Scene path
        path: String,
        /// Parser message
        message: String,
    },

    /// Settings file failed to load or validate
    #[error("settings error: {0}")]
    Settings(#[from] ConfigError),

    /// A pair could not be checked
    #[error("collision error: {0}")]
    Collision(#[from] CollisionError),
}

/// A shape with a label for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedShape {
    /// Label shown in the report
    pub name: String,
    /// The shape itself
    pub shape: Shape,
}

/// Read a scene from a RON file
pub fn load_scene(path: &str) -> Result<Vec<NamedShape>, DemoError> {
    let contents = fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_scene(&contents, path)
}

/// Parse scene text; `path` is only used in error messages
pub fn parse_scene(contents: &str, path: &str) -> Result<Vec<NamedShape>, DemoError> {
    ron::from_str(contents).map_err(|e| DemoError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Scene used when no file is given
pub fn default_scene() -> Vec<NamedShape> {
    let named = |name: &str, shape: Shape| NamedShape { name: name.to_string(), shape };

    let debris: Collection = [
        Shape::from(Point::new(-9.0, 4.0)),
        Circle::new(-7.5, 5.0, 0.6, 0.0).into(),
    ]
    .into_iter()
    .collect();

    vec![
        named("ship", Pill::new(Point::new(0.0, 0.0), 1.0, 3.0, 0.4).into()),
        named("asteroid", Circle::new(1.5, 0.5, 1.0, 0.0).into()),
        named("laser", Line::from_coords(-10.0, 4.5, 10.0, 4.5).into()),
        named("wall", make_rect_at_bottom_left(5.0, -6.0, 2.0, 12.0, 0.0).into()),
        named("crate", Rectangle::new(6.5, 3.0, 2.0, 2.0, 0.6).into()),
        named("mine", Point::new(-3.0, -3.0).into()),
        named("debris", debris.into()),
    ]
}

/// Check every unordered pair once, returning the names of colliding pairs
pub fn colliding_pairs<'a>(
    collider: &Collider,
    scene: &'a [NamedShape],
) -> Result<Vec<(&'a str, &'a str)>, DemoError> {
    let mut hits = Vec::new();
    for (i, a) in scene.iter().enumerate() {
        for b in &scene[i + 1..] {
            if collider.check_default(&a.shape, &b.shape)? {
                hits.push((a.name.as_str(), b.name.as_str()));
            }
        }
    }
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_hits() {
        let collider = Collider::new();
        let scene = default_scene();
        let hits = colliding_pairs(&collider, &scene).unwrap();

        assert!(hits.contains(&("ship", "asteroid")));
        assert!(hits.contains(&("laser", "debris")));
        assert!(hits.contains(&("laser", "wall")));
        assert!(!hits.contains(&("ship", "mine")));
    }

    #[test]
    fn test_bundled_scene_parses() {
        let scene = parse_scene(include_str!("../resources/scene.ron"), "scene.ron").unwrap();
        assert_eq!(scene.len(), 7);
        assert!(scene.iter().any(|named| named.shape.kind() == ShapeKind::Collection));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = parse_scene("[ (name: \"x\") ]", "broken.ron").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse scene broken.ron"));
    }
}
