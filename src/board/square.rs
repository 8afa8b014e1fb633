use crate::chess_errors::ChessErrors;

/// A board square as a `(file, rank)` pair, each in `0..=7` when valid.
pub type Square = (i8, i8);

/// Moves a square by a specified file and rank offset.
///
/// # Arguments
///
/// * `x` - The current square.
/// * `d_file` - The file offset.
/// * `d_rank` - The rank offset.
///
/// # Returns
///
/// * `Result<Square, ChessErrors>` - Returns the new square if within bounds,
///   otherwise returns an error.
pub fn offset_square(x: &Square, d_file: i8, d_rank: i8) -> Result<Square, ChessErrors> {
    let y: Square = (x.0 + d_file, x.1 + d_rank);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::TriedToMoveOutOfBounds((*x, d_file, d_rank)))
    } else {
        Ok(y)
    }
}

/// True iff both coordinates of the square are on the 8x8 board.
pub fn square_in_bounds(x: &Square) -> bool {
    (0..=7).contains(&x.0) && (0..=7).contains(&x.1)
}

/// True iff both squares name the same tile.
pub fn same_square(a: &Square, b: &Square) -> bool {
    (a.0 == b.0) && (a.1 == b.1)
}
