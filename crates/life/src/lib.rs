//! Life engine: sparse Conway simulation over the unbounded lattice.
//!
//! Pure and deterministic; it has zero dependencies on drawing, timers,
//! or I/O. Each generation is computed snapshot-to-snapshot and reported
//! as a minimal delta of births and deaths.

pub mod engine;
pub mod patterns;
pub mod population;

pub use engine::{LifeEngine, StepDelta};
pub use patterns::{find as find_pattern, Pattern, PATTERNS};
pub use population::{LifeCell, Population};
