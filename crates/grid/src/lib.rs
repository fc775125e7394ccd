//! Grid model and viewport engine.
//!
//! This crate maps the unbounded integer lattice onto a finite pixel
//! canvas. It never touches pixels itself; all drawing goes through the
//! [`render::RenderAdapter`] seam as abstract line/fill/clear commands.
//!
//! - [`geometry`]: the grid model (`GridGeometry`) and the pure
//!   derived-bounds computation
//! - [`viewport`]: pan/zoom/resize, lattice-to-pixel mapping, cell
//!   fill/clear with gridline margin
//! - [`render`]: the adapter contract plus a recording implementation
//!   for tests and benches

pub mod geometry;
pub mod render;
pub mod viewport;

pub use geometry::{axis_bounds, AxisBounds, GridGeometry};
pub use render::{RecordingAdapter, RenderAdapter, RenderCommand};
pub use viewport::ViewportEngine;
