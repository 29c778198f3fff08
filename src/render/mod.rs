//! Annotation rendering module
//!
//! This module contains:
//! - Geometry calculations shared by the drawing routines
//! - Shape rendering using tiny-skia
//! - Text rendering using imageproc and system fonts
//! - The canvas that composites base bitmap and annotations

pub mod canvas;
pub mod geometry;
pub mod shapes;
pub mod text;

pub use canvas::Canvas;
