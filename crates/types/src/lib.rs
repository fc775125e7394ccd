//! Core types shared across the workspace.
//!
//! This crate contains pure data types with no I/O dependencies:
//! lattice coordinates, pixel rectangles, pan directions, the shared
//! error type, and tuning constants.

use std::fmt;

use thiserror::Error;

/// Lattice cell the canvas is centered on when a viewport is first sized.
pub const DEFAULT_CENTER_ROW: i64 = 10;
pub const DEFAULT_CENTER_COL: i64 = 10;

/// Smallest cell edge length that can still show a fill inside the margin.
pub const MIN_CELL_SIZE_PX: f64 = 2.0;

/// Default cell edge length in pixels.
pub const DEFAULT_CELL_SIZE_PX: f64 = 10.0;

/// Inset applied when filling/clearing a cell so that adjacent live cells
/// never visually merge across a gridline.
pub const CELL_FILL_MARGIN_PX: f64 = 1.0;

/// Cell-size change applied per zoom step.
pub const ZOOM_STEP_PX: f64 = 1.0;

/// Default interval between generations in continuous-simulation mode.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 200;

/// A cell on the unbounded integer lattice.
///
/// Identity is by value; the canonical string key is `"{row}|{col}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub row: i64,
    pub col: i64,
}

impl CellCoord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Canonical map key, `"{row}|{col}"`.
    pub fn key(&self) -> String {
        format!("{}|{}", self.row, self.col)
    }

    /// The 8 neighboring coordinates, in a fixed order: top-left, top,
    /// top-right, mid-left, mid-right, bottom-left, bottom, bottom-right.
    ///
    /// The order carries no rule semantics but keeps neighbor enumeration
    /// deterministic.
    pub fn neighbors(&self) -> [CellCoord; 8] {
        let (r, c) = (self.row, self.col);
        [
            CellCoord::new(r - 1, c - 1),
            CellCoord::new(r - 1, c),
            CellCoord::new(r - 1, c + 1),
            CellCoord::new(r, c - 1),
            CellCoord::new(r, c + 1),
            CellCoord::new(r + 1, c - 1),
            CellCoord::new(r + 1, c),
            CellCoord::new(r + 1, c + 1),
        ]
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.row, self.col)
    }
}

/// Direction the viewport pans in, expressed as the direction the view
/// moves over the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Axis-aligned rectangle in pixel space (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Errors surfaced by the grid/viewport layer.
///
/// Everything not covered here (off-screen fills, stepping an empty
/// population, panning at extreme zoom) is a valid no-op rather than
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The drawing surface could not be acquired. Fatal to the viewport
    /// instance; never retried.
    #[error("drawing surface unavailable: {reason}")]
    SurfaceUnavailable { reason: String },

    /// Rejected synchronously with state unchanged.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}
