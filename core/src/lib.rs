#![no_std]

extern crate alloc;

use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use cursor::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use observer::*;
pub use types::*;

mod board;
mod cell;
mod cursor;
mod engine;
mod error;
mod generator;
mod observer;
mod types;

/// Validated board shape and mine count. Every constructed value satisfies
/// `0 < mines < rows * cols`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 || mines == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mines >= mult(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Fixed board presets selectable by name.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::new_unchecked((9, 9), 9),
            Self::Normal => GameConfig::new_unchecked((16, 16), 40),
            Self::Hard => GameConfig::new_unchecked((16, 30), 99),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            _ => Err(GameError::UnknownDifficulty),
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}
