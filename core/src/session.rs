use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a single toggle did, with the completed lines on both sides of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub index: usize,
    pub state: CellState,
    pub token: StateToken,
    pub lines_before: CompletedLines,
    pub lines_after: CompletedLines,
}

impl ToggleOutcome {
    /// Whether the toggled cell ended up marked.
    pub fn marked(&self) -> bool {
        self.state[self.index]
    }

    /// The line count went up, the moment to celebrate. Fires once per completion, not while a line stays complete.
    pub const fn is_new_completion(&self) -> bool {
        self.lines_after.count() > self.lines_before.count()
    }

    /// Lines completed by this toggle.
    pub fn newly_completed(&self) -> CompletedLines {
        self.lines_after.difference(self.lines_before)
    }

    /// Lines this toggle broke.
    pub fn newly_broken(&self) -> CompletedLines {
        self.lines_before.difference(self.lines_after)
    }
}

/// A board and its marked cells, everything a page needs between two URL updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    seed: String,
    board: BoardAssignment,
    state: CellState,
}

impl Session {
    /// Board for `seed` with the marks read from `token`, an unreadable token means nothing is marked.
    pub fn new(pool: &PhrasePool, seed: &str, token: Option<&str>) -> Result<Self> {
        let board = build_board(pool, seed)?;
        let state = decode(token);
        log::debug!("session for seed {:?}, state {}", seed, encode(&state));
        Ok(Self {
            seed: seed.into(),
            board,
            state,
        })
    }

    /// A whole new board for another seed, with nothing marked.
    pub fn with_seed(&self, pool: &PhrasePool, seed: &str) -> Result<Self> {
        Self::new(pool, seed, None)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn board(&self) -> &BoardAssignment {
        &self.board
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn token(&self) -> StateToken {
        encode(&self.state)
    }

    pub fn phrase_at(&self, index: usize) -> Option<&Phrase> {
        self.board.get(index)
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.state.get(index).unwrap_or(false)
    }

    pub fn completed_lines(&self) -> CompletedLines {
        completed_lines(&self.state)
    }

    pub fn line_count(&self) -> u8 {
        self.completed_lines().count()
    }

    pub fn has_bingo(&self) -> bool {
        self.line_count() > 0
    }

    /// Flips cell `index`, swapping in the new state and reporting the line counts on both sides.
    pub fn toggle(&mut self, index: usize) -> Result<ToggleOutcome> {
        let lines_before = self.completed_lines();
        let state = self.state.toggle(index)?;
        let lines_after = completed_lines(&state);
        self.state = state;

        log::trace!(
            "toggle {}: {} lines -> {} lines",
            index,
            lines_before.count(),
            lines_after.count()
        );

        Ok(ToggleOutcome {
            index,
            state,
            token: encode(&state),
            lines_before,
            lines_after,
        })
    }

    /// Clears every mark, the board stays.
    pub fn reset(&mut self) {
        self.state = CellState::EMPTY;
    }

    /// Path that reproduces this board without marks, `/{seed}`.
    pub fn board_path(&self) -> String {
        alloc::format!("/{}", encode_path_segment(&self.seed))
    }

    /// Path that reproduces this board and its marks, `/{seed}?state={token}`.
    pub fn share_path(&self) -> String {
        alloc::format!("{}?{}={}", self.board_path(), STATE_PARAM, self.token())
    }
}
