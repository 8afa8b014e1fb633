use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_kind::PieceKind;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::{square_in_bounds, Square};

/// Decides whether a single proposed pawn move is legal.
///
/// Covers the double-step from the start rank, the single forward step, and
/// the ordinary diagonal capture. En passant is a separate predicate
/// (`is_en_passant_capture`) and is not folded in here.
///
/// # Arguments
/// * `origin` - The pawn's current square.
/// * `destination` - The proposed square.
/// * `team` - The pawn's team.
/// * `board` - The board snapshot.
pub fn pawn_move(
    origin: &Square,
    destination: &Square,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    let dx = destination.0 - origin.0;
    let dy = destination.1 - origin.1;
    let direction = team.forward_direction();

    if dx == 0 && origin.1 == team.start_rank() && dy == 2 * direction {
        // Double step: both the destination and the jumped square must be empty
        let intermediate = (origin.0, origin.1 + direction);
        !board.is_occupied(destination) && !board.is_occupied(&intermediate)
    } else if dx == 0 && dy == direction {
        // Single forward step
        !board.is_occupied(destination)
    } else if dy == direction && dx.abs() == 1 {
        // Diagonal capture
        board.is_occupied_by_opponent(destination, team)
    } else {
        false
    }
}

/// Decides whether a proposed pawn move is an en passant capture.
///
/// Legal iff the move is one diagonal step forward and a pawn with its
/// `en_passant_eligible` flag set sits directly behind the destination. The
/// caller is responsible for removing the captured pawn on acceptance; this
/// only answers the predicate.
pub fn is_en_passant_capture(
    origin: &Square,
    destination: &Square,
    team: Team,
    board: &BoardSnapshot,
) -> bool {
    let dx = destination.0 - origin.0;
    let dy = destination.1 - origin.1;
    let direction = team.forward_direction();

    if dy != direction || dx.abs() != 1 {
        return false;
    }

    let behind = (destination.0, destination.1 - direction);
    match board.piece_at(&behind) {
        Some(piece) => piece.kind == PieceKind::Pawn && piece.en_passant_eligible,
        None => false,
    }
}

/// True iff `destination` is the last rank from `team`'s perspective.
///
/// Promotion is a post-condition the caller detects and applies; the rule
/// predicates evaluate the destination square normally.
pub fn reaches_promotion_rank(team: Team, destination: &Square) -> bool {
    destination.1 == team.promotion_rank()
}

/// All squares this pawn can move to, pseudo-legally.
///
/// Probes the 3x2 block directly ahead of the pawn through `pawn_move`, then
/// both en passant targets through the en passant predicate.
pub fn possible_pawn_moves(piece: &PieceRecord, board: &BoardSnapshot) -> Vec<Square> {
    let mut possible_moves = Vec::new();
    let direction = piece.team.forward_direction();

    for dy in 1..3 {
        for dx in -1..=1 {
            let destination = (piece.square.0 + dx, piece.square.1 + dy * direction);
            if square_in_bounds(&destination)
                && pawn_move(&piece.square, &destination, piece.team, board)
            {
                possible_moves.push(destination);
            }
        }
    }

    for dx in [-1, 1] {
        let destination = (piece.square.0 + dx, piece.square.1 + direction);
        if square_in_bounds(&destination)
            && is_en_passant_capture(&piece.square, &destination, piece.team, board)
            && !possible_moves.contains(&destination)
        {
            possible_moves.push(destination);
        }
    }

    possible_moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: Vec<PieceRecord>) -> BoardSnapshot {
        BoardSnapshot::new(pieces)
    }

    #[test]
    fn double_step_from_start_rank() {
        // Scenario A: both squares ahead empty
        let board = board_with(vec![PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 1))]);
        assert!(pawn_move(&(4, 1), &(4, 3), Team::Ours, &board));
        assert!(pawn_move(&(4, 1), &(4, 2), Team::Ours, &board));

        // Scenario B: intermediate occupied blocks the double step but not
        // the single step beyond it
        let board = board_with(vec![
            PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 1)),
            PieceRecord::new(PieceKind::Knight, Team::Opponent, (4, 2)),
        ]);
        assert!(!pawn_move(&(4, 1), &(4, 3), Team::Ours, &board));
        assert!(!pawn_move(&(4, 1), &(4, 2), Team::Ours, &board));

        // Occupied destination with empty intermediate also blocks
        let board = board_with(vec![
            PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 1)),
            PieceRecord::new(PieceKind::Knight, Team::Opponent, (4, 3)),
        ]);
        assert!(!pawn_move(&(4, 1), &(4, 3), Team::Ours, &board));
        assert!(pawn_move(&(4, 1), &(4, 2), Team::Ours, &board));

        // Not from the start rank
        let board = board_with(vec![PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 2))]);
        assert!(!pawn_move(&(4, 2), &(4, 4), Team::Ours, &board));
    }

    #[test]
    fn opponent_pawns_move_down() {
        let board = board_with(vec![PieceRecord::new(PieceKind::Pawn, Team::Opponent, (3, 6))]);
        assert!(pawn_move(&(3, 6), &(3, 5), Team::Opponent, &board));
        assert!(pawn_move(&(3, 6), &(3, 4), Team::Opponent, &board));
        assert!(!pawn_move(&(3, 6), &(3, 7), Team::Opponent, &board));
    }

    #[test]
    fn diagonal_capture_requires_an_opponent() {
        let board = board_with(vec![
            PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 3)),
            PieceRecord::new(PieceKind::Pawn, Team::Opponent, (5, 4)),
            PieceRecord::new(PieceKind::Pawn, Team::Ours, (3, 4)),
        ]);
        assert!(pawn_move(&(4, 3), &(5, 4), Team::Ours, &board));
        // Teammate on the other diagonal
        assert!(!pawn_move(&(4, 3), &(3, 4), Team::Ours, &board));
        // Empty diagonal
        assert!(!pawn_move(&(4, 3), &(5, 4), Team::Opponent, &board));
    }

    #[test]
    fn forward_step_cannot_capture() {
        let board = board_with(vec![
            PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 3)),
            PieceRecord::new(PieceKind::Pawn, Team::Opponent, (4, 4)),
        ]);
        assert!(!pawn_move(&(4, 3), &(4, 4), Team::Ours, &board));
    }

    #[test]
    fn en_passant_window() {
        // Scenario C: black pawn just double-stepped from (3,6) to (3,4)
        let mut eligible = PieceRecord::new(PieceKind::Pawn, Team::Opponent, (3, 4));
        eligible.en_passant_eligible = true;
        let board = board_with(vec![
            PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 4)),
            eligible,
        ]);
        assert!(is_en_passant_capture(&(4, 4), &(3, 5), Team::Ours, &board));
        // Ordinary capture legality does not cover it
        assert!(!pawn_move(&(4, 4), &(3, 5), Team::Ours, &board));

        // One ply later the flag is gone and the capture is illegal
        let mut stale = eligible;
        stale.en_passant_eligible = false;
        let board = board_with(vec![
            PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 4)),
            stale,
        ]);
        assert!(!is_en_passant_capture(&(4, 4), &(3, 5), Team::Ours, &board));
    }

    #[test]
    fn generator_probes_the_forward_block() {
        let pawn = PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 1));
        let board = board_with(vec![pawn]);
        let mut moves = possible_pawn_moves(&pawn, &board);
        moves.sort();
        assert_eq!(moves, vec![(4, 2), (4, 3)]);

        // A capture on each diagonal joins the two pushes
        let board = board_with(vec![
            pawn,
            PieceRecord::new(PieceKind::Rook, Team::Opponent, (3, 2)),
            PieceRecord::new(PieceKind::Rook, Team::Opponent, (5, 2)),
        ]);
        assert_eq!(possible_pawn_moves(&pawn, &board).len(), 4);
    }

    #[test]
    fn generator_includes_en_passant_target() {
        let capturer = PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 4));
        let mut victim = PieceRecord::new(PieceKind::Pawn, Team::Opponent, (3, 4));
        victim.en_passant_eligible = true;
        let board = board_with(vec![capturer, victim]);
        let moves = possible_pawn_moves(&capturer, &board);
        assert!(moves.contains(&(3, 5)));
        assert!(moves.contains(&(4, 5)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn generator_never_duplicates_a_destination() {
        // A piece on the en passant target square makes the same destination
        // both an ordinary capture and an en passant capture; it must still
        // appear once.
        let capturer = PieceRecord::new(PieceKind::Pawn, Team::Ours, (4, 4));
        let mut victim = PieceRecord::new(PieceKind::Pawn, Team::Opponent, (3, 4));
        victim.en_passant_eligible = true;
        let board = board_with(vec![
            capturer,
            victim,
            PieceRecord::new(PieceKind::Rook, Team::Opponent, (3, 5)),
        ]);
        let mut moves = possible_pawn_moves(&capturer, &board);
        moves.sort();
        assert_eq!(moves, vec![(3, 5), (4, 5)]);
    }

    #[test]
    fn generator_stays_on_the_board() {
        let pawn = PieceRecord::new(PieceKind::Pawn, Team::Ours, (0, 1));
        let board = board_with(vec![pawn]);
        for square in possible_pawn_moves(&pawn, &board) {
            assert!(square_in_bounds(&square));
        }
    }

    #[test]
    fn promotion_rank_detection() {
        assert!(reaches_promotion_rank(Team::Ours, &(2, 7)));
        assert!(!reaches_promotion_rank(Team::Ours, &(2, 0)));
        assert!(reaches_promotion_rank(Team::Opponent, &(2, 0)));
        assert!(!reaches_promotion_rank(Team::Opponent, &(2, 7)));
    }
}
