use bitflags::bitflags;
use ndarray::{Axis, s};
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    /// Set of lines whose four cells are all marked.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CompletedLines: u16 {
        const ROW_0         = 1;
        const ROW_1         = 1 << 1;
        const ROW_2         = 1 << 2;
        const ROW_3         = 1 << 3;
        const COL_0         = 1 << 4;
        const COL_1         = 1 << 5;
        const COL_2         = 1 << 6;
        const COL_3         = 1 << 7;
        /// `(0, 0)` to `(3, 3)`
        const DIAGONAL      = 1 << 8;
        /// `(0, 3)` to `(3, 0)`
        const ANTI_DIAGONAL = 1 << 9;
    }
}

impl CompletedLines {
    const ROWS: [Self; BOARD_SIDE as usize] = [Self::ROW_0, Self::ROW_1, Self::ROW_2, Self::ROW_3];
    const COLS: [Self; BOARD_SIDE as usize] = [Self::COL_0, Self::COL_1, Self::COL_2, Self::COL_3];

    /// Number of completed lines, what the "bingo" count is.
    pub const fn count(self) -> u8 {
        self.bits().count_ones() as u8
    }

    /// Every cell that lies on one of the lines.
    pub fn cells(self) -> CellState {
        let mut cells = [false; CELL_COUNT];
        for index in self.iter().filter_map(line_cells).flatten() {
            cells[index] = true;
        }
        CellState::from_cells(cells)
    }

    /// Whether the cell at `index` lies on one of the lines.
    pub fn covers(self, index: usize) -> bool {
        self.iter()
            .filter_map(line_cells)
            .any(|cells| cells.contains(&index))
    }
}

/// Cells of every line, row-major indices.
const LINE_CELLS: [(CompletedLines, [usize; BOARD_SIDE as usize]); 10] = [
    (CompletedLines::ROW_0, [0, 1, 2, 3]),
    (CompletedLines::ROW_1, [4, 5, 6, 7]),
    (CompletedLines::ROW_2, [8, 9, 10, 11]),
    (CompletedLines::ROW_3, [12, 13, 14, 15]),
    (CompletedLines::COL_0, [0, 4, 8, 12]),
    (CompletedLines::COL_1, [1, 5, 9, 13]),
    (CompletedLines::COL_2, [2, 6, 10, 14]),
    (CompletedLines::COL_3, [3, 7, 11, 15]),
    (CompletedLines::DIAGONAL, [0, 5, 10, 15]),
    (CompletedLines::ANTI_DIAGONAL, [3, 6, 9, 12]),
];

/// Cell indices of a single line, `None` for anything but exactly one flag.
pub fn line_cells(line: CompletedLines) -> Option<[usize; BOARD_SIDE as usize]> {
    LINE_CELLS
        .iter()
        .find(|(flag, _)| *flag == line)
        .map(|&(_, cells)| cells)
}

/// Which rows, columns and diagonals of the grid are fully marked.
pub fn completed_lines(state: &CellState) -> CompletedLines {
    let grid = state.grid();
    let mut lines = CompletedLines::empty();

    for (row, cells) in grid.axis_iter(Axis(0)).enumerate() {
        if cells.iter().all(|&marked| marked) {
            lines |= CompletedLines::ROWS[row];
        }
    }
    for (col, cells) in grid.axis_iter(Axis(1)).enumerate() {
        if cells.iter().all(|&marked| marked) {
            lines |= CompletedLines::COLS[col];
        }
    }
    if grid.diag().iter().all(|&marked| marked) {
        lines |= CompletedLines::DIAGONAL;
    }
    if grid.slice(s![.., ..;-1]).diag().iter().all(|&marked| marked) {
        lines |= CompletedLines::ANTI_DIAGONAL;
    }

    lines
}

/// Completed rows + columns + diagonals; more than one line may complete at once.
pub fn count_completed_lines(state: &CellState) -> u8 {
    completed_lines(state).count()
}

/// At least one completed line.
pub fn has_bingo(state: &CellState) -> bool {
    count_completed_lines(state) > 0
}
