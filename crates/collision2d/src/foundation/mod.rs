//! Foundation module - Core utilities and types
//!
//! This module provides the numeric building blocks shared by the shapes and
//! the collision tests:
//! - Math types and planar rotation
//! - Logging utilities

pub mod math;
pub mod logging;
