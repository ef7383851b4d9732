use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 16 phrases of one board in row-major order, derived from a seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardAssignment {
    phrases: [Phrase; CELL_COUNT],
}

impl BoardAssignment {
    pub fn phrases(&self) -> &[Phrase; CELL_COUNT] {
        &self.phrases
    }

    pub fn get(&self, index: usize) -> Option<&Phrase> {
        self.phrases.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }

    /// Phrases grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Phrase]> {
        self.phrases.chunks(usize::from(BOARD_SIDE))
    }
}

impl Index<usize> for BoardAssignment {
    type Output = Phrase;

    fn index(&self, index: usize) -> &Self::Output {
        &self.phrases[index]
    }
}

impl Index<GridPos> for BoardAssignment {
    type Output = Phrase;

    fn index(&self, pos: GridPos) -> &Self::Output {
        assert!(pos.0 < BOARD_SIDE && pos.1 < BOARD_SIDE, "{pos:?} is off the board");
        &self.phrases[cell_index(pos)]
    }
}

/// Shuffles the pool with `seed` and keeps the first `CELL_COUNT` phrases.
pub fn build_board(pool: &PhrasePool, seed: &str) -> Result<BoardAssignment> {
    let available = pool.len();
    let phrases: Vec<Phrase> = shuffle(pool.phrases(), seed)
        .into_iter()
        .take(CELL_COUNT)
        .collect();
    let phrases = phrases
        .try_into()
        .map_err(|_| BingoError::PhrasePoolTooSmall { available })?;
    Ok(BoardAssignment { phrases })
}
