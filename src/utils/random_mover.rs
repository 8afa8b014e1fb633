//! Uniform random move selection.
//!
//! Picks uniformly from a team's pseudo-legal moves; primarily used for
//! diagnostics, integration testing, and the `random_playout` demo binary.

use rand::prelude::IndexedRandom;

use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_kind::PieceKind;
use crate::board::piece_team::Team;
use crate::game::chess_move::ChessMove;
use crate::rules::pawn_rules::reaches_promotion_rank;
use crate::rules::referee::possible_moves;

/// All pseudo-legal moves available to `team`, as ready-to-apply messages.
/// Moves that land a pawn on its promotion rank carry a queen promotion.
pub fn all_moves_for_team(board: &BoardSnapshot, team: Team) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for piece in board.iter().filter(|p| p.team == team) {
        for destination in possible_moves(piece, board) {
            if piece.kind == PieceKind::Pawn && reaches_promotion_rank(team, &destination) {
                moves.push(ChessMove::with_promotion(
                    piece.square,
                    destination,
                    PieceKind::Queen,
                ));
            } else {
                moves.push(ChessMove::new(piece.square, destination));
            }
        }
    }
    moves
}

/// Selects a uniformly random pseudo-legal move for `team`, or `None` when
/// the team has no moves.
pub fn choose_random_move(board: &BoardSnapshot, team: Team) -> Option<ChessMove> {
    let candidates = all_moves_for_team(board, team);
    let mut rng = rand::rng();
    candidates.as_slice().choose(&mut rng).cloned()
}
