use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of [`Cell`]s for one game.
///
/// The public surface is read-only; only the engine mutates cells. Observers
/// receive `&Board` and may inspect any cell through [`Board::get`] or
/// indexing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Board of `size` default cells: closed, unflagged, no mines, hint 0.
    pub fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.has_mine)
            .count()
            .try_into()
            .unwrap()
    }

    /// Returns the cell at `coords`, or `None` when out of bounds.
    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        neighbors(coords, self.size())
    }

    pub(crate) fn get_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_default_cells() {
        let board = Board::empty((4, 7));

        assert_eq!(board.size(), (4, 7));
        assert_eq!(board.total_cells(), 28);
        assert_eq!(board.mine_count(), 0);
        assert_eq!(board[(3, 6)], Cell::default());
        assert!(board[(0, 0)].is_openable());
    }

    #[test]
    fn get_is_none_out_of_bounds() {
        let board = Board::empty((4, 7));

        assert!(board.get((3, 6)).is_some());
        assert!(board.get((4, 0)).is_none());
        assert!(board.get((0, 7)).is_none());
    }

    #[test]
    fn neighbors_use_board_bounds() {
        let board = Board::empty((2, 2));

        assert_eq!(board.neighbors((0, 0)).count(), 3);
        assert_eq!(board.neighbors((1, 1)).count(), 3);
    }
}
