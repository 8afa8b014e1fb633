use crate::board::piece_kind::PieceKind;
use crate::board::square::Square;
use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// The move message exchanged between paired sessions: origin, destination,
/// and an optional promotion kind chosen when a pawn reaches the last rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    pub fn new(from: Square, to: Square) -> Self {
        ChessMove {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        ChessMove {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Converts this move to long algebraic notation (e.g., "e2e4", "e7e8q").
    pub fn to_long_algebraic(&self) -> Result<String, ChessErrors> {
        let mut out = format!(
            "{}{}",
            square_to_algebraic(&self.from)?,
            square_to_algebraic(&self.to)?
        );
        if let Some(kind) = self.promotion {
            let promo = match kind {
                PieceKind::Queen => 'q',
                PieceKind::Rook => 'r',
                PieceKind::Bishop => 'b',
                PieceKind::Knight => 'n',
                other => return Err(ChessErrors::InvalidPromotionKind(other)),
            };
            out.push(promo);
        }
        Ok(out)
    }

    /// Attempts to create a move from long algebraic notation
    /// (e.g., "e2e4", "e7e8q").
    pub fn from_long_algebraic(text: &str) -> Result<Self, ChessErrors> {
        let text = text.trim();
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
        }

        let from = algebraic_to_square(&text[0..2])?;
        let to = algebraic_to_square(&text[2..4])?;

        let promotion = if text.len() == 5 {
            match text.as_bytes()[4] as char {
                'q' | 'Q' => Some(PieceKind::Queen),
                'r' | 'R' => Some(PieceKind::Rook),
                'b' | 'B' => Some(PieceKind::Bishop),
                'n' | 'N' => Some(PieceKind::Knight),
                other => return Err(ChessErrors::InvalidAlgebraicChar(other)),
            }
        } else {
            None
        };

        Ok(ChessMove {
            from,
            to,
            promotion,
        })
    }
}
