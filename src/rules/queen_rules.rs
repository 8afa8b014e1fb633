use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::Square;
use crate::rules::bishop_rules::{bishop_move, BISHOP_DIRECTIONS};
use crate::rules::rook_rules::{rook_move, ROOK_DIRECTIONS};
use crate::rules::sliding_rules::follow_move_vector;

/// Decides whether a single proposed queen move is legal.
///
/// Purely the disjunction of the bishop and rook rules; no independent logic.
pub fn queen_move(
    origin: &Square,
    destination: &Square,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    bishop_move(origin, destination, team, board) || rook_move(origin, destination, team, board)
}

/// All squares this queen can move to, pseudo-legally.
pub fn possible_queen_moves(piece: &PieceRecord, board: &BoardSnapshot) -> Vec<Square> {
    let mut possible_moves = Vec::new();
    for (d_file, d_rank) in ROOK_DIRECTIONS {
        follow_move_vector(piece, board, d_file, d_rank, rook_move, &mut possible_moves);
    }
    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        follow_move_vector(piece, board, d_file, d_rank, bishop_move, &mut possible_moves);
    }
    possible_moves
}
