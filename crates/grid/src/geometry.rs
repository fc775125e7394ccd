//! Grid model: viewport geometry plus the derived visible window.
//!
//! `GridGeometry` is a plain data holder. All mutation goes through the
//! viewport engine so the derived fields stay consistent with the
//! primary ones.

use tui_life_types::{DEFAULT_CENTER_COL, DEFAULT_CENTER_ROW};

/// Viewport geometry for one canvas.
///
/// The center point of the canvas is a grid-line intersection: the
/// boundary between `center_row` and `center_row + 1` horizontally, and
/// between `center_col` and `center_col + 1` vertically. The `*_center_px`
/// offsets track where that intersection currently sits in pixel space;
/// panning moves them, and the engine rebalances them back toward the
/// half-dimensions by shifting `center_row`/`center_col`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub cell_size: f64,

    pub center_row: i64,
    pub center_col: i64,
    pub vertical_center_px: f64,
    pub horizontal_center_px: f64,

    // Derived visible window, recomputed on every geometry change.
    pub top_row: i64,
    pub bottom_row: i64,
    pub left_col: i64,
    pub right_col: i64,
    pub top_row_height_px: f64,
    pub bottom_row_height_px: f64,
    pub left_col_width_px: f64,
    pub right_col_width_px: f64,
}

impl GridGeometry {
    /// Create geometry with the center offsets at the half-dimensions.
    ///
    /// The derived window starts out degenerate; the viewport engine
    /// recomputes it before the geometry is ever observed.
    pub fn new(pixel_width: u32, pixel_height: u32, cell_size: f64) -> Self {
        Self {
            pixel_width,
            pixel_height,
            cell_size,
            center_row: DEFAULT_CENTER_ROW,
            center_col: DEFAULT_CENTER_COL,
            vertical_center_px: f64::from(pixel_height) / 2.0,
            horizontal_center_px: f64::from(pixel_width) / 2.0,
            top_row: DEFAULT_CENTER_ROW,
            bottom_row: DEFAULT_CENTER_ROW,
            left_col: DEFAULT_CENTER_COL,
            right_col: DEFAULT_CENTER_COL,
            top_row_height_px: cell_size,
            bottom_row_height_px: cell_size,
            left_col_width_px: cell_size,
            right_col_width_px: cell_size,
        }
    }

    /// Number of (fully or partially) visible rows.
    pub fn row_count(&self) -> i64 {
        self.bottom_row - self.top_row + 1
    }

    /// Number of (fully or partially) visible columns.
    pub fn col_count(&self) -> i64 {
        self.right_col - self.left_col + 1
    }
}

/// Derived bounds for one axis of the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// First visible lattice index (top row / left column).
    pub near_index: i64,
    /// Last visible lattice index (bottom row / right column).
    pub far_index: i64,
    /// Pixel size of the partially visible near edge cell, in `(0, cell]`.
    pub near_edge_px: f64,
    /// Pixel size of the partially visible far edge cell, in `(0, cell]`.
    pub far_edge_px: f64,
}

impl AxisBounds {
    /// Number of whole-cell gridlines strictly between the canvas origin
    /// and the center gridline.
    pub fn lines_before_center(&self, center_index: i64) -> i64 {
        center_index - self.near_index
    }

    /// Number of whole-cell gridlines strictly between the center
    /// gridline and the far canvas edge.
    pub fn lines_after_center(&self, center_index: i64) -> i64 {
        self.far_index - center_index - 1
    }
}

/// Compute the visible lattice window along one axis.
///
/// `center_px` is the pixel offset of the center gridline (strictly
/// inside `(0, dimension_px)`), `center_index` the lattice cell whose far
/// boundary that gridline is. Walking outward from the center in
/// `cell_size` steps, every whole step that stays strictly inside the
/// canvas is a fully visible cell; the leftover remainder becomes the
/// partial edge size. A remainder of exactly zero means the edge cell
/// fills flush to the canvas border and is normalized to a full
/// `cell_size`.
pub fn axis_bounds(
    center_px: f64,
    dimension_px: f64,
    cell_size: f64,
    center_index: i64,
) -> AxisBounds {
    debug_assert!(center_px > 0.0 && center_px < dimension_px);
    debug_assert!(cell_size > 0.0);

    let full_near = ((center_px / cell_size).ceil() as i64 - 1).max(0);
    let near_edge_px = center_px - full_near as f64 * cell_size;

    let far_span = dimension_px - center_px;
    let full_far = ((far_span / cell_size).ceil() as i64 - 1).max(0);
    let far_edge_px = far_span - full_far as f64 * cell_size;

    let bounds = AxisBounds {
        near_index: center_index - full_near,
        far_index: center_index + 1 + full_far,
        near_edge_px,
        far_edge_px,
    };

    debug_assert!(bounds.near_edge_px > 0.0 && bounds.near_edge_px <= cell_size + 1e-9);
    debug_assert!(bounds.far_edge_px > 0.0 && bounds.far_edge_px <= cell_size + 1e-9);
    bounds
}
