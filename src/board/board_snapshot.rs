use crate::board::piece_kind::PieceKind;
use crate::board::piece_record::PieceRecord;
use crate::board::piece_team::Team;
use crate::board::square::{same_square, Square};
use crate::chess_errors::ChessErrors;

/// A read-only view of piece positions at one instant of the game.
///
/// Invariant (owned by the caller): no two pieces occupy the same square.
/// Query functions take the snapshot by shared reference and never mutate it;
/// the apply-move step clones the snapshot and returns a new value.
///
/// At 32 pieces a plain linear scan beats any index structure, so all lookups
/// walk the vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pieces: Vec<PieceRecord>,
}

impl BoardSnapshot {
    pub fn new(pieces: Vec<PieceRecord>) -> Self {
        BoardSnapshot { pieces }
    }

    /// The 32-piece standard chess starting layout. `Ours` occupies ranks 0
    /// and 1, `Opponent` ranks 6 and 7.
    pub fn standard_setup() -> Self {
        let mut pieces = Vec::with_capacity(32);

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (file, kind) in back_rank.iter().enumerate() {
            pieces.push(PieceRecord::new(*kind, Team::Ours, (file as i8, 0)));
            pieces.push(PieceRecord::new(*kind, Team::Opponent, (file as i8, 7)));
        }
        for file in 0..8 {
            pieces.push(PieceRecord::new(PieceKind::Pawn, Team::Ours, (file, 1)));
            pieces.push(PieceRecord::new(PieceKind::Pawn, Team::Opponent, (file, 6)));
        }

        BoardSnapshot { pieces }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PieceRecord> {
        self.pieces.iter()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The piece sitting on `square`, if any.
    pub fn piece_at(&self, square: &Square) -> Option<&PieceRecord> {
        self.pieces.iter().find(|p| same_square(&p.square, square))
    }

    /// True iff some piece sits on `square`.
    pub fn is_occupied(&self, square: &Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// True iff some piece on `square` belongs to the team opposing `team`.
    pub fn is_occupied_by_opponent(&self, square: &Square, team: Team) -> bool {
        match self.piece_at(square) {
            Some(piece) => piece.team != team,
            None => false,
        }
    }

    /// Mutable access for the apply-move step. Not part of the query surface.
    pub(crate) fn piece_at_mut(&mut self, square: &Square) -> Option<&mut PieceRecord> {
        self.pieces
            .iter_mut()
            .find(|p| same_square(&p.square, square))
    }

    pub(crate) fn pieces_mut(&mut self) -> &mut Vec<PieceRecord> {
        &mut self.pieces
    }

    /// Removes and returns the piece on `square`.
    pub(crate) fn remove_piece_at(&mut self, square: &Square) -> Result<PieceRecord, ChessErrors> {
        match self.pieces.iter().position(|p| same_square(&p.square, square)) {
            Some(index) => Ok(self.pieces.swap_remove(index)),
            None => Err(ChessErrors::CannotRemoveFromEmptySquare(*square)),
        }
    }
}
