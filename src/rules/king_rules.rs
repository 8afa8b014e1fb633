use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::{offset_square, Square};

/// Decides whether a single proposed king move is legal.
///
/// Legal iff the destination is one of the eight neighboring squares and is
/// empty or opponent-occupied. No castling and no moving-into-check
/// restriction; the engine has no check detection.
pub fn king_move(
    origin: &Square,
    destination: &Square,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    let dx = destination.0 - origin.0;
    let dy = destination.1 - origin.1;

    if dx == 0 && dy == 0 {
        return false;
    }
    if dx.abs() <= 1 && dy.abs() <= 1 {
        !board.is_occupied(destination) || board.is_occupied_by_opponent(destination, team)
    } else {
        false
    }
}

/// All squares this king can move to, pseudo-legally.
pub fn possible_king_moves(piece: &PieceRecord, board: &BoardSnapshot) -> Vec<Square> {
    let mut possible_moves = Vec::new();
    for d_file in -1..2 {
        for d_rank in -1..2 {
            if (d_file == 0) && (d_rank == 0) {
                continue;
            }
            if let Ok(destination) = offset_square(&piece.square, d_file, d_rank) {
                if king_move(&piece.square, &destination, piece.team, board) {
                    possible_moves.push(destination);
                }
            }
        }
    }
    possible_moves
}
