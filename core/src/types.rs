/// Single coordinate axis, used for rows and columns.
pub type Coord = u8;

/// Grid position `(row, col)`.
pub type GridPos = (Coord, Coord);

/// Side length of the square board.
pub const BOARD_SIDE: Coord = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// Row-major index of a grid position, which must be on the board.
pub const fn cell_index((row, col): GridPos) -> usize {
    (row as usize) * (BOARD_SIDE as usize) + (col as usize)
}

/// Grid position of a row-major index, `None` when the index is off the board.
pub const fn grid_pos(index: usize) -> Option<GridPos> {
    if index < CELL_COUNT {
        let side = BOARD_SIDE as usize;
        Some(((index / side) as Coord, (index % side) as Coord))
    } else {
        None
    }
}
