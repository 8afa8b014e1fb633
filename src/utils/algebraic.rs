//! Conversions between human-readable algebraic coordinates (e.g., `e4`) and
//! the internal `(file, rank)` square representation.

use crate::board::square::{square_in_bounds, Square};
use crate::chess_errors::ChessErrors;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: &Square) -> Result<String, ChessErrors> {
    if !square_in_bounds(square) {
        return Err(ChessErrors::TriedToMoveOutOfBounds((*square, 0, 0)));
    }

    let file_char = char::from(b'a' + square.0 as u8);
    let rank_char = char::from(b'1' + square.1 as u8);
    Ok(format!("{file_char}{rank_char}"))
}
