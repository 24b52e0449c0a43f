use crate::*;

/// Callbacks fired synchronously at the point of board mutation.
///
/// The engine passes a read-only view of the board, so an observer can repaint
/// any cell but never mutate game state from inside a notification. Defined
/// no-ops (out-of-bounds requests, re-opens, moves after the game ended)
/// produce no notification at all.
pub trait GameObserver {
    /// A cell was opened. Fired once per opened cell, after the cell state is
    /// final; the winning open is reported a second time carrying
    /// [`GameState::Victory`].
    fn cell_opened(&mut self, board: &Board, coords: Coord2, state: GameState) {
        let _ = (board, coords, state);
    }

    /// A flag was placed (`flagged == true`) or removed on a cell.
    fn flag_toggled(&mut self, board: &Board, coords: Coord2, flagged: bool, flags_left: i32) {
        let _ = (board, coords, flagged, flags_left);
    }
}

/// Observer that ignores all notifications.
impl GameObserver for () {}
