//! Viewport engine: keeps the grid model's derived window consistent and
//! turns lattice coordinates into drawing commands.

use tui_life_types::{
    GridError, PanDirection, PixelRect, CELL_FILL_MARGIN_PX, MIN_CELL_SIZE_PX,
};

use crate::geometry::{axis_bounds, GridGeometry};
use crate::render::RenderAdapter;

/// Owns one [`GridGeometry`] and the render adapter drawing it.
///
/// Construction doubles as initialization: a `ViewportEngine` that exists
/// has a valid surface and a consistent derived window, so there is no
/// "called before initialize" state to defend against.
#[derive(Debug)]
pub struct ViewportEngine<A: RenderAdapter> {
    grid: GridGeometry,
    adapter: A,
}

impl<A: RenderAdapter> ViewportEngine<A> {
    /// Acquire the surface, set up default geometry and draw the empty
    /// grid.
    ///
    /// Fails with `InvalidConfiguration` for non-positive dimensions or a
    /// cell size below [`MIN_CELL_SIZE_PX`], and with `SurfaceUnavailable`
    /// if the adapter cannot provide a drawing surface.
    pub fn initialize(
        mut adapter: A,
        pixel_width: u32,
        pixel_height: u32,
        cell_size: f64,
    ) -> Result<Self, GridError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(GridError::InvalidConfiguration {
                reason: format!("canvas dimensions {pixel_width}x{pixel_height} must be positive"),
            });
        }
        if cell_size < MIN_CELL_SIZE_PX {
            return Err(GridError::InvalidConfiguration {
                reason: format!("cell size {cell_size} below minimum {MIN_CELL_SIZE_PX}"),
            });
        }

        adapter.acquire_surface(pixel_width, pixel_height)?;

        let grid = GridGeometry::new(pixel_width, pixel_height, cell_size);
        let mut engine = Self { grid, adapter };
        engine.recompute_bounds();
        engine.redraw_grid();
        Ok(engine)
    }

    pub fn grid(&self) -> &GridGeometry {
        &self.grid
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Recompute the derived visible window from the primary geometry.
    pub fn recompute_bounds(&mut self) {
        let g = &mut self.grid;

        let rows = axis_bounds(
            g.vertical_center_px,
            f64::from(g.pixel_height),
            g.cell_size,
            g.center_row,
        );
        g.top_row = rows.near_index;
        g.bottom_row = rows.far_index;
        g.top_row_height_px = rows.near_edge_px;
        g.bottom_row_height_px = rows.far_edge_px;

        let cols = axis_bounds(
            g.horizontal_center_px,
            f64::from(g.pixel_width),
            g.cell_size,
            g.center_col,
        );
        g.left_col = cols.near_index;
        g.right_col = cols.far_index;
        g.left_col_width_px = cols.near_edge_px;
        g.right_col_width_px = cols.far_edge_px;

        debug_assert!(g.top_row <= g.center_row && g.center_row <= g.bottom_row);
        debug_assert!(g.left_col <= g.center_col && g.center_col <= g.right_col);
    }

    /// Clear the surface and draw every visible gridline.
    ///
    /// Lines are walked outward from the center gridline in `cell_size`
    /// steps; the center lines themselves are always drawn. Lives are not
    /// repainted here — that is the session's job.
    pub fn redraw_grid(&mut self) {
        self.adapter.clear_all();

        let g = &self.grid;
        let width = f64::from(g.pixel_width);
        let height = f64::from(g.pixel_height);
        let cell = g.cell_size;

        // Horizontal gridlines around the vertical center offset.
        let above = g.center_row - g.top_row;
        let below = g.bottom_row - g.center_row - 1;
        for k in (1..=above).rev() {
            let y = g.vertical_center_px - k as f64 * cell;
            self.adapter.draw_line(0.0, y, width, y);
        }
        self.adapter
            .draw_line(0.0, g.vertical_center_px, width, g.vertical_center_px);
        for k in 1..=below {
            let y = g.vertical_center_px + k as f64 * cell;
            self.adapter.draw_line(0.0, y, width, y);
        }

        // Vertical gridlines around the horizontal center offset.
        let before = g.center_col - g.left_col;
        let after = g.right_col - g.center_col - 1;
        for k in (1..=before).rev() {
            let x = g.horizontal_center_px - k as f64 * cell;
            self.adapter.draw_line(x, 0.0, x, height);
        }
        self.adapter
            .draw_line(g.horizontal_center_px, 0.0, g.horizontal_center_px, height);
        for k in 1..=after {
            let x = g.horizontal_center_px + k as f64 * cell;
            self.adapter.draw_line(x, 0.0, x, height);
        }
    }

    /// Redraw only (clear + gridlines); no geometry change.
    pub fn reset_grid(&mut self) {
        self.redraw_grid();
    }

    /// Pixel rectangle of a lattice cell, or `None` when the cell lies
    /// outside the visible window.
    ///
    /// Edge cells use their stored partial size and sit flush against the
    /// canvas border; rectangles of adjacent cells tile the canvas with
    /// no gap or overlap.
    pub fn cell_to_pixel_rect(&self, row: i64, col: i64) -> Option<PixelRect> {
        let g = &self.grid;
        if row < g.top_row || row > g.bottom_row || col < g.left_col || col > g.right_col {
            return None;
        }

        let y = if row == g.top_row {
            0.0
        } else {
            g.top_row_height_px + (row - g.top_row - 1) as f64 * g.cell_size
        };
        let height = if row == g.top_row {
            g.top_row_height_px
        } else if row == g.bottom_row {
            g.bottom_row_height_px
        } else {
            g.cell_size
        };

        let x = if col == g.left_col {
            0.0
        } else {
            g.left_col_width_px + (col - g.left_col - 1) as f64 * g.cell_size
        };
        let width = if col == g.left_col {
            g.left_col_width_px
        } else if col == g.right_col {
            g.right_col_width_px
        } else {
            g.cell_size
        };

        Some(PixelRect::new(x, y, width, height))
    }

    /// Fill a cell. Returns `false` without side effect when the cell is
    /// not visible.
    pub fn fill_cell(&mut self, row: i64, col: i64) -> bool {
        match self.cell_to_pixel_rect(row, col) {
            Some(rect) => {
                let m = CELL_FILL_MARGIN_PX;
                self.adapter
                    .fill_rect(rect.x + m, rect.y + m, rect.width - m, rect.height - m);
                true
            }
            None => false,
        }
    }

    /// Clear a cell. Returns `false` without side effect when the cell is
    /// not visible.
    ///
    /// The margin keeps the surrounding gridlines intact.
    pub fn clear_cell(&mut self, row: i64, col: i64) -> bool {
        match self.cell_to_pixel_rect(row, col) {
            Some(rect) => {
                let m = CELL_FILL_MARGIN_PX;
                self.adapter
                    .clear_rect(rect.x + m, rect.y + m, rect.width - m, rect.height - m);
                true
            }
            None => false,
        }
    }

    /// Pan the viewport by `delta_px` pixels.
    ///
    /// The relevant center offset moves, and whenever it deviates from the
    /// half-dimension by one `cell_size` or more the center row/col shifts
    /// by one and the offset is pulled back one `cell_size`. Panning by an
    /// exact multiple of `cell_size` therefore shifts the center indices
    /// and leaves the fractional offset untouched.
    ///
    /// A pan that would push the center gridline off the canvas (only
    /// possible when `cell_size` exceeds the half-dimension) is a valid
    /// no-op.
    pub fn pan(&mut self, direction: PanDirection, delta_px: f64) {
        let g = &mut self.grid;
        match direction {
            PanDirection::Up | PanDirection::Down => {
                let half = f64::from(g.pixel_height) / 2.0;
                let mut center = g.vertical_center_px;
                let mut center_row = g.center_row;
                match direction {
                    PanDirection::Up => center += delta_px,
                    _ => center -= delta_px,
                }
                rebalance(&mut center, &mut center_row, half, g.cell_size);
                if center <= 0.0 || center >= f64::from(g.pixel_height) {
                    return;
                }
                g.vertical_center_px = center;
                g.center_row = center_row;
            }
            PanDirection::Left | PanDirection::Right => {
                let half = f64::from(g.pixel_width) / 2.0;
                let mut center = g.horizontal_center_px;
                let mut center_col = g.center_col;
                match direction {
                    PanDirection::Left => center += delta_px,
                    _ => center -= delta_px,
                }
                rebalance(&mut center, &mut center_col, half, g.cell_size);
                if center <= 0.0 || center >= f64::from(g.pixel_width) {
                    return;
                }
                g.horizontal_center_px = center;
                g.center_col = center_col;
            }
        }

        self.recompute_bounds();
        self.redraw_grid();
    }

    /// Change the cell size (zoom), keeping the center anchored.
    pub fn set_cell_size(&mut self, new_size: f64) -> Result<(), GridError> {
        if new_size < MIN_CELL_SIZE_PX {
            return Err(GridError::InvalidConfiguration {
                reason: format!("cell size {new_size} below minimum {MIN_CELL_SIZE_PX}"),
            });
        }
        self.grid.cell_size = new_size;
        self.recompute_bounds();
        self.redraw_grid();
        Ok(())
    }

    /// Resize the canvas, keeping the center lattice cell and re-centering
    /// the pixel offsets on the new half-dimensions.
    pub fn resize(&mut self, pixel_width: u32, pixel_height: u32) -> Result<(), GridError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(GridError::InvalidConfiguration {
                reason: format!("canvas dimensions {pixel_width}x{pixel_height} must be positive"),
            });
        }
        self.adapter.acquire_surface(pixel_width, pixel_height)?;
        self.grid.pixel_width = pixel_width;
        self.grid.pixel_height = pixel_height;
        self.grid.vertical_center_px = f64::from(pixel_height) / 2.0;
        self.grid.horizontal_center_px = f64::from(pixel_width) / 2.0;
        self.recompute_bounds();
        self.redraw_grid();
        Ok(())
    }
}

/// Pull an offset back toward the half-dimension one cell at a time,
/// shifting the center lattice index to compensate.
///
/// The loop form and `floor(offset/cell)` integer division agree; the loop
/// keeps the deviation strictly inside `(-cell, cell)`.
fn rebalance(center_px: &mut f64, center_index: &mut i64, half_px: f64, cell_size: f64) {
    loop {
        let deviation = *center_px - half_px;
        if deviation >= cell_size {
            *center_px -= cell_size;
            *center_index -= 1;
        } else if deviation <= -cell_size {
            *center_px += cell_size;
            *center_index += 1;
        } else {
            break;
        }
    }
}
