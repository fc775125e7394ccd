//! Named seed patterns.
//!
//! Each pattern is a literal list of (row, col) offsets relative to the
//! grid center; the host picks one by name and materializes it at the
//! viewport's center cell.

use tui_life_types::CellCoord;

pub struct Pattern {
    pub name: &'static str,
    /// (row, col) offsets relative to the grid center.
    pub offsets: &'static [(i64, i64)],
}

impl Pattern {
    /// Absolute coordinates of this pattern centered on the given cell.
    pub fn cells_at(&self, center_row: i64, center_col: i64) -> Vec<CellCoord> {
        self.offsets
            .iter()
            .map(|&(dr, dc)| CellCoord::new(center_row + dr, center_col + dc))
            .collect()
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        offsets: &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        offsets: &[(-1, 0), (0, 0), (1, 0)],
    },
    Pattern {
        name: "toad",
        offsets: &[(0, 0), (0, 1), (0, 2), (1, -1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "beacon",
        offsets: &[
            (-2, -2), (-2, -1), (-1, -2), (-1, -1),
            (0, 0), (0, 1), (1, 0), (1, 1),
        ],
    },
    Pattern {
        name: "pulsar",
        offsets: &[
            (-6, -4), (-6, -3), (-6, -2), (-6, 2), (-6, 3), (-6, 4),
            (-4, -6), (-4, -1), (-4, 1), (-4, 6),
            (-3, -6), (-3, -1), (-3, 1), (-3, 6),
            (-2, -6), (-2, -1), (-2, 1), (-2, 6),
            (-1, -4), (-1, -3), (-1, -2), (-1, 2), (-1, 3), (-1, 4),
            (1, -4), (1, -3), (1, -2), (1, 2), (1, 3), (1, 4),
            (2, -6), (2, -1), (2, 1), (2, 6),
            (3, -6), (3, -1), (3, 1), (3, 6),
            (4, -6), (4, -1), (4, 1), (4, 6),
            (6, -4), (6, -3), (6, -2), (6, 2), (6, 3), (6, 4),
        ],
    },
    Pattern {
        name: "lwss",
        offsets: &[
            (-1, -1), (-1, 0), (-1, 1), (-1, 2),
            (0, -2), (0, 2),
            (1, 2),
            (2, -2), (2, 1),
        ],
    },
    Pattern {
        name: "hwss",
        offsets: &[
            (-2, -2), (-2, -1), (-2, 0), (-2, 1), (-2, 2), (-2, 3),
            (-1, -3), (-1, 3),
            (0, 3),
            (1, -3), (1, 2),
            (2, -1), (2, 0),
        ],
    },
    Pattern {
        name: "r-pentomino",
        offsets: &[(-1, 0), (-1, 1), (0, -1), (0, 0), (1, 0)],
    },
    Pattern {
        name: "glider-gun",
        offsets: &[
            (0, -17), (0, -16), (1, -17), (1, -16),
            (0, -7), (1, -7), (2, -7),
            (-1, -6), (3, -6),
            (-2, -5), (4, -5), (-2, -4), (4, -4),
            (1, -3),
            (-1, -2), (3, -2),
            (0, -1), (1, -1), (2, -1),
            (1, 0),
            (-2, 3), (-1, 3), (0, 3), (-2, 4), (-1, 4), (0, 4),
            (-3, 5), (1, 5),
            (-4, 7), (-3, 7), (1, 7), (2, 7),
            (-2, 17), (-1, 17), (-2, 18), (-1, 18),
        ],
    },
];

/// Look up a pattern by name, case-insensitive.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
