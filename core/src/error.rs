use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown difficulty name")]
    UnknownDifficulty,
    #[error("Board dimensions and mine count must be positive")]
    InvalidDimensions,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mine coordinates outside the board")]
    MineOutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
