use thiserror::Error;

use crate::CELL_COUNT;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Cell index {index} is out of range, the board has {} cells", CELL_COUNT)]
    InvalidCellIndex { index: usize },
    #[error("Phrase pool has {available} phrases, a board needs at least {}", CELL_COUNT)]
    PhrasePoolTooSmall { available: usize },
}

pub type Result<T> = core::result::Result<T, BingoError>;
