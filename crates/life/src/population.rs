//! Sparse population storage.
//!
//! A `Population` holds exactly the currently alive cells. Dead cells are
//! only materialized transiently while a generation is being evaluated
//! and are never persisted.

use std::collections::HashMap;

use tui_life_types::CellCoord;

/// One cell's life record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeCell {
    pub cell: CellCoord,
    pub alive: bool,
}

impl LifeCell {
    pub const fn alive_at(cell: CellCoord) -> Self {
        Self { cell, alive: true }
    }
}

/// Mapping from coordinate to life record, keys unique.
///
/// Owned exclusively by the life engine and replaced wholesale each
/// generation; no cell is ever mutated in place across generations.
#[derive(Debug, Clone, Default)]
pub struct Population {
    cells: HashMap<CellCoord, LifeCell>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
        }
    }

    /// Mark a coordinate alive. Idempotent.
    pub fn insert_alive(&mut self, cell: CellCoord) {
        self.cells.insert(cell, LifeCell::alive_at(cell));
    }

    pub fn get(&self, cell: &CellCoord) -> Option<&LifeCell> {
        self.cells.get(cell)
    }

    pub fn is_alive(&self, cell: &CellCoord) -> bool {
        self.cells.contains_key(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the alive coordinates (arbitrary order).
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.keys().copied()
    }

    /// Alive coordinates sorted by (row, col), for deterministic output.
    pub fn sorted_coords(&self) -> Vec<CellCoord> {
        let mut coords: Vec<CellCoord> = self.coords().collect();
        coords.sort();
        coords
    }
}

impl FromIterator<CellCoord> for Population {
    fn from_iter<I: IntoIterator<Item = CellCoord>>(iter: I) -> Self {
        let mut population = Population::new();
        for cell in iter {
            population.insert_alive(cell);
        }
        population
    }
}
