use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::Square;
use crate::rules::sliding_rules::follow_move_vector;

/// The four diagonal directions as `(d_file, d_rank)` unit steps.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Decides whether a single proposed bishop move is legal.
///
/// Legal only on a pure diagonal with every square strictly between origin
/// and destination empty; the final square must be empty or
/// opponent-occupied. The zero-length move is rejected.
pub fn bishop_move(
    origin: &Square,
    destination: &Square,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    let dx = destination.0 - origin.0;
    let dy = destination.1 - origin.1;

    // Pure diagonal; dx == 0 also throws out the zero-length move
    if dx.abs() != dy.abs() || dx == 0 {
        return false;
    }

    let step_x = dx.signum();
    let step_y = dy.signum();
    for i in 1..dx.abs() {
        let passed = (origin.0 + i * step_x, origin.1 + i * step_y);
        if board.is_occupied(&passed) {
            return false;
        }
    }

    !board.is_occupied(destination) || board.is_occupied_by_opponent(destination, team)
}

/// All squares this bishop can move to, pseudo-legally.
pub fn possible_bishop_moves(piece: &PieceRecord, board: &BoardSnapshot) -> Vec<Square> {
    let mut possible_moves = Vec::new();
    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        follow_move_vector(piece, board, d_file, d_rank, bishop_move, &mut possible_moves);
    }
    possible_moves
}
