//! Generation stepping with minimal deltas.

use std::collections::HashSet;

use tui_life_types::CellCoord;

use crate::population::Population;

/// Minimal difference between two consecutive generations.
///
/// Cells whose aliveness did not change appear in neither list. Both
/// lists are sorted by (row, col).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepDelta {
    pub born: Vec<CellCoord>,
    pub died: Vec<CellCoord>,
}

impl StepDelta {
    pub fn is_empty(&self) -> bool {
        self.born.is_empty() && self.died.is_empty()
    }
}

/// Sparse Conway engine.
///
/// Knows nothing about drawing or timers; the session layer owns both.
#[derive(Debug, Clone, Default)]
pub struct LifeEngine {
    population: Population,
    generation: u64,
}

impl LifeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Generation counter: 1 right after a seed, +1 per step, 0 before
    /// any seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Replace the population with exactly these coordinates and reset the
    /// generation counter to 1.
    pub fn seed<I: IntoIterator<Item = CellCoord>>(&mut self, cells: I) {
        self.population = cells.into_iter().collect();
        self.generation = 1;
    }

    /// Compute the next generation and return the delta.
    ///
    /// Every live cell and each of its 8 neighbors is evaluated exactly
    /// once, however many times it is reached; neighbor counts always read
    /// the pre-step population, never cells already decided this step.
    /// The old population is discarded wholesale once the new one is
    /// complete, so no partial generation is ever observable.
    ///
    /// An empty population steps to an empty population with an empty
    /// delta; that is still a successful step and bumps the counter.
    pub fn step(&mut self) -> StepDelta {
        let current = &self.population;
        let mut next = Population::with_capacity(current.len());
        let mut processed: HashSet<CellCoord> = HashSet::with_capacity(current.len() * 9);
        let mut delta = StepDelta::default();

        for cell in current.coords().collect::<Vec<_>>() {
            evaluate(cell, current, &mut next, &mut processed, &mut delta);
            for neighbor in cell.neighbors() {
                evaluate(neighbor, current, &mut next, &mut processed, &mut delta);
            }
        }

        delta.born.sort();
        delta.died.sort();
        self.population = next;
        self.generation += 1;
        delta
    }
}

/// Decide one coordinate's next state against the pre-step population.
fn evaluate(
    cell: CellCoord,
    current: &Population,
    next: &mut Population,
    processed: &mut HashSet<CellCoord>,
    delta: &mut StepDelta,
) {
    if !processed.insert(cell) {
        return;
    }

    let alive = current.is_alive(&cell);
    let live_neighbors = cell
        .neighbors()
        .iter()
        .filter(|n| current.is_alive(n))
        .count();

    // Standard Conway: live survives on 2 or 3, dead is born on exactly 3.
    let alive_next = matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3));

    if alive_next {
        next.insert_alive(cell);
        if !alive {
            delta.born.push(cell);
        }
    } else if alive {
        delta.died.push(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i64, i64)]) -> Vec<CellCoord> {
        coords.iter().map(|&(r, c)| CellCoord::new(r, c)).collect()
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut engine = LifeEngine::new();
        engine.seed(cells(&[(0, 0)]));

        let delta = engine.step();
        assert_eq!(delta.born, vec![]);
        assert_eq!(delta.died, cells(&[(0, 0)]));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let mut engine = LifeEngine::new();
        engine.seed(cells(&[(0, 0), (0, 1), (1, 0), (1, 1)]));

        let delta = engine.step();
        assert!(delta.is_empty());
        assert_eq!(engine.population().len(), 4);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let vertical = cells(&[(-1, 0), (0, 0), (1, 0)]);
        let mut engine = LifeEngine::new();
        engine.seed(vertical.clone());

        engine.step();
        assert_eq!(
            engine.population().sorted_coords(),
            cells(&[(0, -1), (0, 0), (0, 1)])
        );

        engine.step();
        assert_eq!(engine.population().sorted_coords(), vertical);
    }

    #[test]
    fn test_empty_population_steps_to_empty() {
        let mut engine = LifeEngine::new();
        engine.seed(Vec::new());
        assert_eq!(engine.generation(), 1);

        let delta = engine.step();
        assert!(delta.is_empty());
        assert!(engine.is_empty());
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_generation_counter_resets_on_seed() {
        let mut engine = LifeEngine::new();
        assert_eq!(engine.generation(), 0);

        engine.seed(cells(&[(0, 0)]));
        assert_eq!(engine.generation(), 1);
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 3);

        engine.seed(cells(&[(5, 5)]));
        assert_eq!(engine.generation(), 1);
    }
}
