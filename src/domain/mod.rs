//! Pure domain types with minimal dependencies
//!
//! This module contains core types used throughout the engine.
//! Types here carry no rendering or I/O dependencies so they can
//! flow freely between the crop, annotation, and session layers.

pub mod annotation;
pub mod geometry;
pub mod selection;

pub use annotation::*;
pub use geometry::*;
pub use selection::*;
