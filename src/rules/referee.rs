//! Single entry point routing legality questions to the per-piece rules.
//!
//! Everything here is **pseudo-legal**: a move consistent with the piece's
//! movement pattern and board occupancy, without regard to whether it leaves
//! the mover's king exposed. Check, checkmate, stalemate, and castling are
//! deliberately not modeled.

use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_kind::PieceKind;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::{square_in_bounds, Square};
use crate::rules::bishop_rules::{bishop_move, possible_bishop_moves};
use crate::rules::king_rules::{king_move, possible_king_moves};
use crate::rules::knight_rules::{knight_move, possible_knight_moves};
use crate::rules::pawn_rules::{is_en_passant_capture, pawn_move, possible_pawn_moves};
use crate::rules::queen_rules::{possible_queen_moves, queen_move};
use crate::rules::rook_rules::{possible_rook_moves, rook_move};

/// Decides whether a proposed move is legal for a piece of the given kind.
///
/// Out-of-range squares simply read as illegal rather than relying on the
/// caller to keep coordinates on the board.
pub fn is_legal_move(
    origin: &Square,
    destination: &Square,
    kind: PieceKind,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    if !square_in_bounds(origin) || !square_in_bounds(destination) {
        return false;
    }
    match kind {
        PieceKind::Pawn => pawn_move(origin, destination, team, board),
        PieceKind::Knight => knight_move(origin, destination, team, board),
        PieceKind::Bishop => bishop_move(origin, destination, team, board),
        PieceKind::Rook => rook_move(origin, destination, team, board),
        PieceKind::Queen => queen_move(origin, destination, team, board),
        PieceKind::King => king_move(origin, destination, team, board),
    }
}

/// Decides whether a proposed move is an en passant capture.
///
/// Only pawns can capture en passant; any other kind reads as `false`.
pub fn is_en_passant_move(
    origin: &Square,
    destination: &Square,
    kind: PieceKind,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    if !square_in_bounds(origin) || !square_in_bounds(destination) {
        return false;
    }
    match kind {
        PieceKind::Pawn => is_en_passant_capture(origin, destination, team, board),
        _ => false,
    }
}

/// All squares the given piece can move to, pseudo-legally.
///
/// Used by callers to highlight reachable tiles; the list is never cached on
/// the piece itself.
pub fn possible_moves(piece: &PieceRecord, board: &BoardSnapshot) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => possible_pawn_moves(piece, board),
        PieceKind::Knight => possible_knight_moves(piece, board),
        PieceKind::Bishop => possible_bishop_moves(piece, board),
        PieceKind::Rook => possible_rook_moves(piece, board),
        PieceKind::Queen => possible_queen_moves(piece, board),
        PieceKind::King => possible_king_moves(piece, board),
    }
}
