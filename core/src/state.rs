use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Marked/unmarked flag of every cell, row-major.
///
/// Values are replaced rather than edited: [`CellState::toggle`] hands back a new state and leaves the old one as it
/// was. On the wire a state is its [`StateToken`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "StateToken", from = "StateToken")]
pub struct CellState {
    cells: [bool; CELL_COUNT],
}

impl CellState {
    /// Nothing marked, what a missing or unreadable token decodes to.
    pub const EMPTY: Self = Self {
        cells: [false; CELL_COUNT],
    };

    pub const fn from_cells(cells: [bool; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// State with exactly the given cells marked.
    pub fn from_marked(indices: impl IntoIterator<Item = usize>) -> Result<Self> {
        let mut cells = [false; CELL_COUNT];
        for index in indices {
            *cells
                .get_mut(index)
                .ok_or(BingoError::InvalidCellIndex { index })? = true;
        }
        Ok(Self { cells })
    }

    pub const fn cells(&self) -> [bool; CELL_COUNT] {
        self.cells
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&marked| !marked)
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&marked| marked).count()
    }

    /// Indices of the marked cells, ascending.
    pub fn iter_marked(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, &marked)| marked.then_some(index))
    }

    /// New state with cell `index` flipped.
    pub fn toggle(self, index: usize) -> Result<Self> {
        let mut cells = self.cells;
        let cell = cells
            .get_mut(index)
            .ok_or(BingoError::InvalidCellIndex { index })?;
        *cell = !*cell;
        Ok(Self { cells })
    }

    /// The cells laid out as a `BOARD_SIDE` × `BOARD_SIDE` grid indexed by `(row, col)`.
    pub fn grid(&self) -> Array2<bool> {
        let side = usize::from(BOARD_SIDE);
        Array2::from_shape_fn((side, side), |(row, col)| self.cells[row * side + col])
    }
}

impl Index<usize> for CellState {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl Index<GridPos> for CellState {
    type Output = bool;

    fn index(&self, pos: GridPos) -> &Self::Output {
        assert!(pos.0 < BOARD_SIDE && pos.1 < BOARD_SIDE, "{pos:?} is off the board");
        &self.cells[cell_index(pos)]
    }
}

impl From<[bool; CELL_COUNT]> for CellState {
    fn from(cells: [bool; CELL_COUNT]) -> Self {
        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_only_the_given_cell() {
        let state = CellState::EMPTY.toggle(5).unwrap();

        assert_eq!(state.iter_marked().collect::<alloc::vec::Vec<_>>(), [5]);
        assert!(state[(1, 1)]);
        assert_eq!(state.marked_count(), 1);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let state = CellState::from_marked([0, 3, 7, 12]).unwrap();
        for index in 0..CELL_COUNT {
            assert_eq!(state.toggle(index).unwrap().toggle(index).unwrap(), state);
        }
    }

    #[test]
    fn toggle_leaves_the_original_alone() {
        let before = CellState::from_marked([2]).unwrap();
        let after = before.toggle(2).unwrap();

        assert!(before[2]);
        assert!(after.is_empty());
    }

    #[test]
    fn toggle_rejects_out_of_range_index() {
        assert_eq!(
            CellState::EMPTY.toggle(CELL_COUNT),
            Err(BingoError::InvalidCellIndex { index: CELL_COUNT })
        );
        assert_eq!(
            CellState::EMPTY.toggle(usize::MAX),
            Err(BingoError::InvalidCellIndex { index: usize::MAX })
        );
    }

    #[test]
    fn from_marked_rejects_out_of_range_index() {
        assert_eq!(
            CellState::from_marked([1, 16]),
            Err(BingoError::InvalidCellIndex { index: 16 })
        );
    }

    #[test]
    fn grid_is_row_major() {
        let state = CellState::from_marked([1, 4, 14]).unwrap();
        let grid = state.grid();

        assert_eq!(grid.dim(), (4, 4));
        assert!(grid[(0, 1)]);
        assert!(grid[(1, 0)]);
        assert!(grid[(3, 2)]);
        assert_eq!(grid.iter().filter(|&&marked| marked).count(), 3);
    }
}
