use serde::{Deserialize, Serialize};

/// Single board square as tracked by the gameplay engine.
///
/// A cell's position is implicit in its grid index; the hash-key codec maps
/// between `(row, col)` pairs and flat keys where one is needed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    /// Number of mines on the up-to-8 surrounding cells.
    pub mines_around: u8,
    pub is_open: bool,
    pub is_flagged: bool,
}

impl Cell {
    /// Whether an open request may act on this cell.
    pub const fn is_openable(self) -> bool {
        !self.is_open && !self.is_flagged
    }
}
