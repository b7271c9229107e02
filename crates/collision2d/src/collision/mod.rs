//! Collision detection between 2D shapes
//!
//! # Architecture
//!
//! - **Pairwise tests** ([`primitives`]): one function per pair of shape
//!   kinds, written for a fixed argument order
//! - **Registry** ([`registry`]): maps each unordered kind pair to exactly
//!   one test, built once and owned by the collider
//! - **Mediator** ([`collider`]): resolves a pair of shapes to a test,
//!   swapping arguments when only the reversed entry exists
//!
//! # Key Types
//!
//! - [`Collider`] - entry point, `check(a, b, eps)`
//! - [`CollisionRegistry`] - injectable dispatch table
//! - [`CollisionError`] - dispatch failures

pub mod collider;
pub mod primitives;
pub mod registry;
pub mod sat;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::shapes::ShapeKind;

pub use collider::Collider;
pub use registry::{CollisionFn, CollisionRegistry, Resolution};

/// Collision dispatch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollisionError {
    /// No test is registered for the pair in either order
    #[error("no collision test registered for {first} / {second}")]
    UnsupportedPair {
        /// Kind of the first shape
        first: ShapeKind,
        /// Kind of the second shape
        second: ShapeKind,
    },

    /// The pair already has a test, in this or the reversed order
    #[error("collision test for {first} / {second} is already registered")]
    DuplicateRegistration {
        /// First kind of the rejected registration
        first: ShapeKind,
        /// Second kind of the rejected registration
        second: ShapeKind,
    },

    /// A test received shapes other than the kinds it was written for
    #[error("collision test for {expected_first} / {expected_second} called with {found_first} / {found_second}")]
    KindMismatch {
        /// First kind the test handles
        expected_first: ShapeKind,
        /// Second kind the test handles
        expected_second: ShapeKind,
        /// First kind actually passed
        found_first: ShapeKind,
        /// Second kind actually passed
        found_second: ShapeKind,
    },
}
