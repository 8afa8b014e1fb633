//! Errors used throughout the referee crate.
//!
//! The enum `ChessErrors` is the single error type returned by the fallible
//! surfaces of the crate (move application, algebraic parsing, square
//! arithmetic). The rule predicates themselves never error; an illegal move
//! simply reads as `false`.

use crate::board::piece_kind::PieceKind;
use crate::board::square::Square;
use crate::game::chess_move::ChessMove;

/// Unified error type for the referee.
///
/// Each variant carries contextual payloads where useful so callers can log
/// or display precise diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChessErrors {
    /// Attempted to offset a square by `(d_file, d_rank)` which would place
    /// it off the board.
    ///
    /// Payload: (origin_square, d_file, d_rank)
    TriedToMoveOutOfBounds((Square, i8, i8)),

    /// A long-algebraic string (e.g. "e2e4") failed to parse.
    ///
    /// Payload: the original string that could not be interpreted.
    InvalidAlgebraicString(String),

    /// A single character used during algebraic parsing was invalid.
    ///
    /// Payload: the offending character (a file outside 'a'..'h' or a rank
    /// outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// A move names an origin square with no piece on it.
    ///
    /// Payload: the empty square.
    NoPieceAtSquare(Square),

    /// The move was rejected by the legality rules.
    ///
    /// Payload: the offending move.
    IllegalMove(ChessMove),

    /// A pawn reached its promotion rank but the move message carried no
    /// promotion kind. The engine never picks one silently.
    ///
    /// Payload: the promotion square.
    PromotionRequired(Square),

    /// A promotion kind was supplied for a move that is not a promotion, or
    /// the kind itself is not a legal promotion target (Pawn, King).
    ///
    /// Payload: the offending kind.
    InvalidPromotionKind(PieceKind),

    /// Attempted to remove a piece from an empty square. Indicates a
    /// corrupted snapshot rather than a recoverable condition.
    ///
    /// Payload: the square that was expected to hold a piece.
    CannotRemoveFromEmptySquare(Square),

    /// Generic failure used in tests.
    FailedTest,
}
