//! Simulation session layer.
//!
//! Ties one viewport engine and one life engine together behind a single
//! object, so independent grids can coexist (no module-level state), and
//! provides the host-owned cooperative ticker that drives continuous
//! stepping.

pub mod session;
pub mod ticker;

pub use session::{GolSession, SimState};
pub use ticker::Ticker;
