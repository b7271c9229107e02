//! Heterogeneous groups of shapes
//!
//! A collection collides with something when any of its members does. It
//! has no single center or orientation, so it does not implement
//! [`Transform2d`](super::Transform2d); move its members individually.

use serde::{Deserialize, Serialize};

use super::Shape;

/// An ordered group of shapes, possibly including nested collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    shapes: Vec<Shape>,
}

impl Collection {
    /// Creates a collection from its members
    pub const fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Append a member
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Number of direct members
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when there are no members
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Members in insertion order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterate over members
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Iterate mutably over members
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Shape> {
        self.shapes.iter_mut()
    }

    fn contains(&self, shape: &Shape) -> bool {
        self.shapes.iter().any(|member| member == shape)
    }
}

/// Set equality: same members regardless of order or repetition
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.shapes.iter().all(|shape| other.contains(shape))
            && other.shapes.iter().all(|shape| self.contains(shape))
    }
}

impl FromIterator<Shape> for Collection {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl IntoIterator for Collection {
    type Item = Shape;
    type IntoIter = std::vec::IntoIter<Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Point, Rectangle, Transform2d};

    #[test]
    fn test_equality_is_order_independent() {
        let a: Collection = vec![
            Shape::from(Point::new(0.0, 0.0)),
            Shape::from(Circle::new(1.0, 1.0, 2.0, 0.0)),
        ]
        .into_iter()
        .collect();
        let b = Collection::new(vec![
            Shape::from(Circle::new(1.0, 1.0, 2.0, 0.0)),
            Shape::from(Point::new(0.0, 0.0)),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_detects_missing_members() {
        let a = Collection::new(vec![Point::new(0.0, 0.0).into()]);
        let b = Collection::new(vec![Point::new(0.0, 0.0).into(), Point::new(1.0, 0.0).into()]);
        assert_ne!(a, b);
        assert_ne!(b, a);
        assert_eq!(Collection::default(), Collection::new(Vec::new()));
    }

    #[test]
    fn test_nested_collections_compare_by_value() {
        let inner = Collection::new(vec![Rectangle::new(0.0, 0.0, 1.0, 1.0, 0.0).into()]);
        let a = Collection::new(vec![inner.clone().into()]);
        let b = Collection::new(vec![inner.into()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_members_can_be_moved_individually() {
        let mut group = Collection::default();
        group.push(Point::new(0.0, 0.0));
        group.push(Circle::new(5.0, 5.0, 1.0, 0.0));
        assert_eq!(group.len(), 2);

        for shape in group.iter_mut() {
            shape.center_at(Point::new(9.0, 9.0)).unwrap();
        }
        for shape in &group {
            assert_eq!(shape.center().unwrap(), Point::new(9.0, 9.0));
        }
        assert!(!group.is_empty());
        assert_eq!(group.shapes().len(), 2);
        assert_eq!(group.into_iter().count(), 2);
    }

    #[test]
    fn test_copy_is_deep() {
        let mut original = Collection::new(vec![Point::new(1.0, 1.0).into()]);
        let copy = original.clone();
        if let Some(Shape::Point(point)) = original.iter_mut().next() {
            point.center_at(Point::new(7.0, 7.0));
        }
        assert_ne!(original, copy);
    }
}
