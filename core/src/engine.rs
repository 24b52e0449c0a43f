use alloc::collections::VecDeque;
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Pending -> Active (first open)
/// - Active -> Victory (all safe cells open)
/// - Active -> Loss (mine opened)
///
/// Victory and Loss are terminal; only [`Game::flush`] leaves them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Pending,
    Active,
    Victory,
    Loss,
}

impl GameState {
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Loss)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    NoChange,
    Opened,
    Won,
    Exploded,
}

impl OpenOutcome {
    /// Whether this outcome changed the game.
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            NoChange => false,
            Opened => true,
            Won => true,
            Exploded => true,
        }
    }
}

/// Used to merge outcomes when draining a cascade.
impl BitOr for OpenOutcome {
    type Output = OpenOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use OpenOutcome::*;
        match (self, rhs) {
            (Exploded, _) => Exploded,
            (_, Exploded) => Exploded,
            (Won, _) => Won,
            (_, Won) => Won,
            (Opened, _) => Opened,
            (_, Opened) => Opened,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

impl FlagOutcome {
    /// Whether this outcome changed the game.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled => true,
        }
    }
}

/// Represents one game from construction to a terminal state.
///
/// Mines are placed lazily on the first open, excluding the opened cell, so
/// the first open never hits a mine. Zero-hint opens enqueue their neighbors
/// on the cascade queue instead of recursing; callers drain the queue with
/// [`Game::step_cascade`] or [`Game::resolve_cascade`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    state: GameState,
    cells_open: CellCount,
    flags_left: i32,
    planted: bool,
    pending: VecDeque<Coord2>,
    seed: u64,
}

impl Game {
    /// New pending game; no mines exist until the first open.
    pub fn new(config: GameConfig, seed: u64) -> Game {
        Self {
            board: Board::empty(config.size()),
            state: Default::default(),
            cells_open: 0,
            flags_left: config.mines().into(),
            planted: false,
            pending: VecDeque::new(),
            seed,
            config,
        }
    }

    /// Pending game over a pre-planted board, for deterministic layouts.
    ///
    /// Duplicate coordinates are merged. The first open still transitions the
    /// game to active but skips mine placement, so it carries no safety
    /// guarantee.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Game> {
        let mut board = Board::empty(size);

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::MineOutOfBounds);
            }
            if board[coords].has_mine {
                continue;
            }
            board.get_mut(coords).has_mine = true;
            for pos in board.neighbors(coords) {
                board.get_mut(pos).mines_around += 1;
            }
        }

        let config = GameConfig::new(size, board.mine_count())?;
        Ok(Self {
            board,
            state: Default::default(),
            cells_open: 0,
            flags_left: config.mines().into(),
            planted: true,
            pending: VecDeque::new(),
            seed: 0,
            config,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    /// Read-only view of the board, also handed to observers.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells_open(&self) -> CellCount {
        self.cells_open
    }

    /// Mines minus placed flags. Goes negative when over-flagging; the engine
    /// never refuses a toggle for lack of flags.
    pub fn flags_left(&self) -> i32 {
        self.flags_left
    }

    /// Number of queued cascade opens not yet dispatched.
    pub fn pending_cascade(&self) -> usize {
        self.pending.len()
    }

    /// Resets to a fresh pending game with the same configuration. The next
    /// first open places a new set of mines.
    pub fn flush(&mut self) {
        log::debug!("resetting game, config {:?}", self.config);
        self.board = Board::empty(self.config.size());
        self.state = Default::default();
        self.cells_open = 0;
        self.flags_left = self.config.mines().into();
        self.planted = false;
        self.pending.clear();
    }

    /// Opens a cell, placing mines first when the game is still pending.
    ///
    /// Out-of-bounds coordinates, cells already open or flagged, and games in
    /// a terminal state are defined no-ops. Opening a zero-hint cell enqueues
    /// its neighbors for cascading instead of opening them inline.
    pub fn open(&mut self, coords: Coord2, observer: &mut impl GameObserver) -> OpenOutcome {
        use OpenOutcome::*;

        let Some(cell) = self.board.get(coords) else {
            return NoChange;
        };
        if !cell.is_openable() {
            return NoChange;
        }
        if self.state.is_terminal() {
            return NoChange;
        }

        if self.state.is_pending() {
            if !self.planted {
                self.place_mines(coords);
            }
            self.state = GameState::Active;
            log::debug!("first open at {:?}, game is now active", coords);
        }

        let cell = self.board.get_mut(coords);
        cell.is_open = true;
        let has_mine = cell.has_mine;
        let hint = cell.mines_around;
        self.cells_open += 1;
        log::trace!("opened {:?}, hint {}", coords, hint);

        if has_mine {
            self.state = GameState::Loss;
            log::debug!("mine hit at {:?}", coords);
            observer.cell_opened(&self.board, coords, self.state);
            return Exploded;
        }

        observer.cell_opened(&self.board, coords, self.state);

        let mut outcome = Opened;
        if self.cells_open == self.config.safe_cells() {
            self.state = GameState::Victory;
            log::debug!("all safe cells open, victory");
            observer.cell_opened(&self.board, coords, self.state);
            outcome = Won;
        }

        // stale entries are filtered by the guards when dispatched
        if hint == 0 {
            self.pending.extend(self.board.neighbors(coords));
        }

        outcome
    }

    /// Dispatches one queued cascade open, or `None` when the queue is empty.
    ///
    /// Queued coordinates go through the full open procedure, so entries that
    /// were opened or flagged in the meantime, and everything after a terminal
    /// state, fall out as no-ops.
    pub fn step_cascade(&mut self, observer: &mut impl GameObserver) -> Option<OpenOutcome> {
        let coords = self.pending.pop_front()?;
        Some(self.open(coords, observer))
    }

    /// Drains the cascade queue and merges the outcomes.
    pub fn resolve_cascade(&mut self, observer: &mut impl GameObserver) -> OpenOutcome {
        let mut outcome = OpenOutcome::NoChange;
        while let Some(step) = self.step_cascade(observer) {
            outcome = outcome | step;
        }
        outcome
    }

    /// Toggles the flag on a closed cell, adjusting the flag counter.
    ///
    /// Allowed while the game is pending without starting it. Out-of-bounds
    /// coordinates, open cells, and terminal states are defined no-ops.
    pub fn flag(&mut self, coords: Coord2, observer: &mut impl GameObserver) -> FlagOutcome {
        use FlagOutcome::*;

        let Some(cell) = self.board.get(coords) else {
            return NoChange;
        };
        if cell.is_open {
            return NoChange;
        }
        if self.state.is_terminal() {
            return NoChange;
        }

        let cell = self.board.get_mut(coords);
        cell.is_flagged = !cell.is_flagged;
        let flagged = cell.is_flagged;
        self.flags_left += if flagged { -1 } else { 1 };
        log::trace!("flag at {:?} -> {}, {} left", coords, flagged, self.flags_left);
        observer.flag_toggled(&self.board, coords, flagged, self.flags_left);
        Toggled
    }

    fn place_mines(&mut self, avoided: Coord2) {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let positions = generate_mine_positions(&self.config, avoided, &mut rng);
        // advance the seed for the placement after the next flush
        self.seed = rng.random();

        for key in positions {
            let coords = decode_hash_key(key, self.config.cols());
            self.board.get_mut(coords).has_mine = true;
            for pos in self.board.neighbors(coords) {
                self.board.get_mut(pos).mines_around += 1;
            }
        }
        self.planted = true;
    }
}
