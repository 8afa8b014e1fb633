use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::{offset_square, Square};

/// A single-move rule predicate, as implemented by each piece module.
pub type MoveRule = fn(&Square, &Square, Team, &BoardSnapshot) -> bool;

/// Walks outward from a sliding piece along one `(d_file, d_rank)` direction,
/// testing `rule` at each step and collecting the squares it accepts.
///
/// Advancing stops at the board edge or at the first occupied square; that
/// square itself is included only when the rule accepts it (an opponent
/// capture).
pub(crate) fn follow_move_vector(
    piece: &PieceRecord,
    board: &BoardSnapshot,
    d_file: i8,
    d_rank: i8,
    rule: MoveRule,
    possible_moves: &mut Vec<Square>,
) {
    let mut stop = piece.square;
    loop {
        stop = match offset_square(&stop, d_file, d_rank) {
            Ok(next) => next,
            Err(_) => break,
        };
        if rule(&piece.square, &stop, piece.team, board) {
            possible_moves.push(stop);
        }
        if board.is_occupied(&stop) {
            break;
        }
    }
}
