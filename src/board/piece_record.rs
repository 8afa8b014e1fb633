use crate::board::piece_kind::PieceKind;
use crate::board::piece_team::Team;
use crate::board::square::Square;

/// Represents a chess piece on the board.
///
/// `en_passant_eligible` is transient: the apply-move step sets it on a pawn
/// that just double-stepped and clears it on every piece on the very next
/// application. Derived data such as a piece's currently reachable squares is
/// deliberately not stored here; callers compute it on demand through
/// `rules::referee::possible_moves`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// The kind of the piece (e.g., pawn, knight).
    pub kind: PieceKind,
    /// Piece team
    pub team: Team,
    /// Piece square
    pub square: Square,
    /// True only on a pawn that double-stepped on the previous ply.
    pub en_passant_eligible: bool,
}

impl PieceRecord {
    /// Convenience constructor with the en passant flag cleared.
    pub fn new(kind: PieceKind, team: Team, square: Square) -> Self {
        PieceRecord {
            kind,
            team,
            square,
            en_passant_eligible: false,
        }
    }
}
