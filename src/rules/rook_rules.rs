use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::Square;
use crate::rules::sliding_rules::follow_move_vector;

/// The four rank/file directions as `(d_file, d_rank)` unit steps.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Decides whether a single proposed rook move is legal.
///
/// Legal only along a pure rank or file line (exactly one of the deltas is
/// zero, which also throws out the zero-length move), with every square
/// strictly between origin and destination empty; the final square must be
/// empty or opponent-occupied.
pub fn rook_move(
    origin: &Square,
    destination: &Square,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    let dx = destination.0 - origin.0;
    let dy = destination.1 - origin.1;

    if (dx == 0) == (dy == 0) {
        return false;
    }

    let step_x = dx.signum();
    let step_y = dy.signum();
    let distance = dx.abs().max(dy.abs());
    for i in 1..distance {
        let passed = (origin.0 + i * step_x, origin.1 + i * step_y);
        if board.is_occupied(&passed) {
            return false;
        }
    }

    !board.is_occupied(destination) || board.is_occupied_by_opponent(destination, team)
}

/// All squares this rook can move to, pseudo-legally.
pub fn possible_rook_moves(piece: &PieceRecord, board: &BoardSnapshot) -> Vec<Square> {
    let mut possible_moves = Vec::new();
    for (d_file, d_rank) in ROOK_DIRECTIONS {
        follow_move_vector(piece, board, d_file, d_rank, rook_move, &mut possible_moves);
    }
    possible_moves
}
