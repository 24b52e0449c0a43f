use serde::{Deserialize, Serialize};

use crate::*;

/// Direction of a single cursor step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Keyboard-navigation position over a board, clamped to its edges.
///
/// Steps past an edge keep the cursor on that edge instead of wrapping.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    row: Coord,
    col: Coord,
    max_row: Coord,
    max_col: Coord,
}

impl Cursor {
    /// `max_row` and `max_col` are inclusive; a starting position past them is
    /// clamped.
    pub const fn new(row: Coord, col: Coord, max_row: Coord, max_col: Coord) -> Self {
        let row = if row > max_row { max_row } else { row };
        let col = if col > max_col { max_col } else { col };
        Self {
            row,
            col,
            max_row,
            max_col,
        }
    }

    /// Cursor at the origin of a board of `size`.
    pub const fn for_board(size: Coord2) -> Self {
        Self::new(0, 0, size.0.saturating_sub(1), size.1.saturating_sub(1))
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub fn step(&mut self, direction: Direction) {
        use Direction::*;
        match direction {
            Up => self.row = self.row.saturating_sub(1),
            Down => self.row = self.row.saturating_add(1).min(self.max_row),
            Left => self.col = self.col.saturating_sub(1),
            Right => self.col = self.col.saturating_add(1).min(self.max_col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn walk(cursor: &mut Cursor, steps: &[Direction]) {
        for &step in steps {
            cursor.step(step);
        }
    }

    #[test]
    fn steps_move_one_cell() {
        let mut cursor = Cursor::new(0, 0, 8, 8);

        walk(&mut cursor, &[Right, Down, Down, Right, Up]);

        assert_eq!(cursor.coords(), (1, 2));
    }

    #[test]
    fn clamps_at_top_left() {
        let mut cursor = Cursor::new(0, 0, 8, 8);

        walk(&mut cursor, &[Up, Up, Up, Left]);

        assert_eq!(cursor.coords(), (0, 0));
    }

    #[test]
    fn clamps_at_bottom_right() {
        let mut cursor = Cursor::new(8, 8, 8, 8);

        walk(&mut cursor, &[Down, Down, Down, Right]);

        assert_eq!(cursor.coords(), (8, 8));
    }

    #[test]
    fn for_board_starts_at_origin_with_inclusive_bounds() {
        let mut cursor = Cursor::for_board((9, 9));

        assert_eq!(cursor.coords(), (0, 0));
        for _ in 0..20 {
            cursor.step(Down);
        }
        assert_eq!(cursor.row(), 8);
    }

    #[test]
    fn new_clamps_out_of_range_start() {
        let cursor = Cursor::new(20, 3, 8, 8);

        assert_eq!(cursor.coords(), (8, 3));
    }
}
