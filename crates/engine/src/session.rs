//! One simulation session: a viewport, a life engine, and the wiring
//! between them.

use log::debug;

use tui_life_grid::{RenderAdapter, ViewportEngine};
use tui_life_life::{LifeEngine, Pattern, Population, StepDelta};
use tui_life_types::{CellCoord, GridError, PanDirection, ZOOM_STEP_PX};

/// Simulation state machine.
///
/// `Idle -> Seeded -> Running <-> Paused`; `seed` is valid from any state
/// and returns to `Seeded`; `reset` returns to `Idle`. Stopping keeps the
/// population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Idle,
    Seeded,
    Running,
    Paused,
}

/// A Game-of-Life session over one canvas.
///
/// Owns the population and the geometry outright; everything runs on the
/// caller's thread, one operation to completion at a time, so a redraw
/// can never observe a half-built generation.
pub struct GolSession<A: RenderAdapter> {
    viewport: ViewportEngine<A>,
    life: LifeEngine,
    state: SimState,
}

impl<A: RenderAdapter> GolSession<A> {
    /// Initialize the viewport (surface acquisition, default geometry,
    /// gridline redraw) and start with no population.
    pub fn new(
        adapter: A,
        pixel_width: u32,
        pixel_height: u32,
        cell_size: f64,
    ) -> Result<Self, GridError> {
        let viewport = ViewportEngine::initialize(adapter, pixel_width, pixel_height, cell_size)?;
        Ok(Self {
            viewport,
            life: LifeEngine::new(),
            state: SimState::Idle,
        })
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.life.generation()
    }

    pub fn population(&self) -> &Population {
        self.life.population()
    }

    pub fn grid(&self) -> &tui_life_grid::GridGeometry {
        self.viewport.grid()
    }

    pub fn viewport(&self) -> &ViewportEngine<A> {
        &self.viewport
    }

    pub fn adapter(&self) -> &A {
        self.viewport.adapter()
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        self.viewport.adapter_mut()
    }

    /// Replace the population with exactly these cells, redraw the empty
    /// grid, and fill each visible live cell.
    pub fn seed(&mut self, cells: Vec<CellCoord>) {
        debug!("seeding {} cells", cells.len());
        self.viewport.reset_grid();
        self.life.seed(cells.iter().copied());
        for cell in &cells {
            self.viewport.fill_cell(cell.row, cell.col);
        }
        self.state = SimState::Seeded;
    }

    /// Seed a named pattern at the current center cell.
    pub fn seed_pattern(&mut self, pattern: &Pattern) {
        let g = self.viewport.grid();
        let cells = pattern.cells_at(g.center_row, g.center_col);
        self.seed(cells);
    }

    /// Advance one generation and redraw only the delta.
    pub fn step(&mut self) -> StepDelta {
        let delta = self.life.step();
        debug!(
            "generation {}: {} born, {} died",
            self.life.generation(),
            delta.born.len(),
            delta.died.len()
        );
        for cell in &delta.died {
            self.viewport.clear_cell(cell.row, cell.col);
        }
        for cell in &delta.born {
            self.viewport.fill_cell(cell.row, cell.col);
        }
        delta
    }

    /// Enter continuous mode. The host's ticker drives the actual steps.
    pub fn start(&mut self) {
        self.state = SimState::Running;
    }

    /// Halt continuous mode without discarding the population.
    pub fn stop(&mut self) {
        if self.state == SimState::Running {
            self.state = SimState::Paused;
        }
    }

    /// Discard the population and redraw the empty grid.
    pub fn reset(&mut self) {
        self.life = LifeEngine::new();
        self.viewport.reset_grid();
        self.state = SimState::Idle;
    }

    /// Pan the viewport and repaint the visible live cells over the fresh
    /// gridlines.
    pub fn pan(&mut self, direction: PanDirection, delta_px: f64) {
        self.viewport.pan(direction, delta_px);
        self.redraw_lives();
    }

    /// Change the cell size, then repaint the visible live cells.
    pub fn set_cell_size(&mut self, new_size: f64) -> Result<(), GridError> {
        self.viewport.set_cell_size(new_size)?;
        self.redraw_lives();
        Ok(())
    }

    /// Grow the cell size by one zoom step.
    pub fn zoom_in(&mut self) -> Result<(), GridError> {
        let size = self.viewport.grid().cell_size + ZOOM_STEP_PX;
        self.set_cell_size(size)
    }

    /// Shrink the cell size by one zoom step. Shrinking below the minimum
    /// is rejected and leaves the zoom unchanged.
    pub fn zoom_out(&mut self) -> Result<(), GridError> {
        let size = self.viewport.grid().cell_size - ZOOM_STEP_PX;
        self.set_cell_size(size)
    }

    /// Resize the canvas, then repaint the visible live cells.
    pub fn resize(&mut self, pixel_width: u32, pixel_height: u32) -> Result<(), GridError> {
        self.viewport.resize(pixel_width, pixel_height)?;
        self.redraw_lives();
        Ok(())
    }

    fn redraw_lives(&mut self) {
        for cell in self.life.population().sorted_coords() {
            self.viewport.fill_cell(cell.row, cell.col);
        }
    }
}
