use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::{offset_square, Square};

/// The eight knight jump offsets as `(d_file, d_rank)` pairs.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Decides whether a single proposed knight move is legal.
///
/// Legal iff the displacement matches one of the eight knight offsets and the
/// destination is empty or opponent-occupied. Knights ignore intermediate
/// squares.
pub fn knight_move(
    origin: &Square,
    destination: &Square,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    let dx = destination.0 - origin.0;
    let dy = destination.1 - origin.1;

    for (offset_x, offset_y) in KNIGHT_OFFSETS {
        if dx == offset_x && dy == offset_y {
            return !board.is_occupied(destination)
                || board.is_occupied_by_opponent(destination, team);
        }
    }
    false
}

/// All squares this knight can move to, pseudo-legally.
pub fn possible_knight_moves(piece: &PieceRecord, board: &BoardSnapshot) -> Vec<Square> {
    let mut possible_moves = Vec::new();
    for (d_file, d_rank) in KNIGHT_OFFSETS {
        if let Ok(destination) = offset_square(&piece.square, d_file, d_rank) {
            if knight_move(&piece.square, &destination, piece.team, board) {
                possible_moves.push(destination);
            }
        }
    }
    possible_moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece_kind::PieceKind;

    #[test]
    fn offset_membership() {
        // Scenario E: (2,1) is a knight offset, (2,2) is not
        let board = BoardSnapshot::new(vec![PieceRecord::new(
            PieceKind::Knight,
            Team::Ours,
            (1, 0),
        )]);
        assert!(knight_move(&(1, 0), &(3, 1), Team::Ours, &board));
        assert!(!knight_move(&(1, 0), &(3, 2), Team::Ours, &board));
    }

    #[test]
    fn destination_occupancy() {
        let board = BoardSnapshot::new(vec![
            PieceRecord::new(PieceKind::Knight, Team::Ours, (4, 4)),
            PieceRecord::new(PieceKind::Pawn, Team::Ours, (6, 5)),
            PieceRecord::new(PieceKind::Pawn, Team::Opponent, (2, 5)),
        ]);
        assert!(!knight_move(&(4, 4), &(6, 5), Team::Ours, &board));
        assert!(knight_move(&(4, 4), &(2, 5), Team::Ours, &board));
    }

    #[test]
    fn jumps_over_blockers() {
        // Knight on its starting square surrounded by the pawn rank
        let board = BoardSnapshot::standard_setup();
        assert!(knight_move(&(1, 0), &(2, 2), Team::Ours, &board));
        assert!(knight_move(&(1, 0), &(0, 2), Team::Ours, &board));
    }

    #[test]
    fn generator_matches_offsets() {
        let knight = PieceRecord::new(PieceKind::Knight, Team::Ours, (4, 4));
        let board = BoardSnapshot::new(vec![knight]);
        let moves = possible_knight_moves(&knight, &board);
        assert_eq!(moves.len(), 8);
        for square in &moves {
            let dx = square.0 - 4;
            let dy = square.1 - 4;
            assert!(KNIGHT_OFFSETS.contains(&(dx, dy)));
        }

        // In a corner only two jumps stay on the board
        let cornered = PieceRecord::new(PieceKind::Knight, Team::Ours, (0, 0));
        let board = BoardSnapshot::new(vec![cornered]);
        assert_eq!(possible_knight_moves(&cornered, &board).len(), 2);
    }

    #[test]
    fn generator_excludes_teammates() {
        let knight = PieceRecord::new(PieceKind::Knight, Team::Ours, (1, 0));
        let board = BoardSnapshot::standard_setup();
        let mut moves = possible_knight_moves(&knight, &board);
        moves.sort();
        assert_eq!(moves, vec![(0, 2), (2, 2)]);
    }
}
