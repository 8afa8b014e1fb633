//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of a snapshot for debugging, tests, and
//! diagnostics in text environments.

use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_kind::PieceKind;
use crate::board::piece_team::Team;

/// Render the snapshot to a Unicode string for terminal output.
///
/// Rank 7 is printed first so `Ours` (ranks 0-1) appears at the bottom, the
/// way the board faces that player.
pub fn render_board(board: &BoardSnapshot) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            match board.piece_at(&(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece.team, piece.kind)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(team: Team, kind: PieceKind) -> char {
    match (team, kind) {
        (Team::Ours, PieceKind::Pawn) => '♙',
        (Team::Ours, PieceKind::Knight) => '♘',
        (Team::Ours, PieceKind::Bishop) => '♗',
        (Team::Ours, PieceKind::Rook) => '♖',
        (Team::Ours, PieceKind::Queen) => '♕',
        (Team::Ours, PieceKind::King) => '♔',
        (Team::Opponent, PieceKind::Pawn) => '♟',
        (Team::Opponent, PieceKind::Knight) => '♞',
        (Team::Opponent, PieceKind::Bishop) => '♝',
        (Team::Opponent, PieceKind::Rook) => '♜',
        (Team::Opponent, PieceKind::Queen) => '♛',
        (Team::Opponent, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_standard_setup() {
        let rendered = render_board(&BoardSnapshot::standard_setup());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[2], "7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
