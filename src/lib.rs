//! tui-life (workspace facade crate).
//!
//! Re-exports the member crates under one roof: an infinite, pannable,
//! zoomable Conway's Game of Life with incremental rendering. The
//! implementation lives in dedicated crates under `crates/`.

pub use tui_life_engine as engine;
pub use tui_life_grid as grid;
pub use tui_life_life as life;
pub use tui_life_term as term;
pub use tui_life_types as types;
