//! Move application: the single-owner step that turns one snapshot into the
//! next.
//!
//! The rule predicates only answer questions; everything stateful lives here.
//! Application is copy-on-write: the input snapshot is cloned and the clone is
//! edited, so concurrent readers of the old snapshot never observe a
//! half-applied move. This step also owns the `en_passant_eligible`
//! bookkeeping and promotion rewriting.

use crate::board::board_snapshot::BoardSnapshot;
use crate::board::piece_kind::PieceKind;
use crate::board::piece_record::PieceRecord;
use crate::chess_errors::ChessErrors;
use crate::game::chess_move::ChessMove;
use crate::rules::pawn_rules::reaches_promotion_rank;
use crate::rules::referee::{is_en_passant_move, is_legal_move};

/// Validates `chess_move` against the movement rules, then applies it,
/// returning the next snapshot.
///
/// # Returns
/// * `Ok(BoardSnapshot)` - The new snapshot after the move.
/// * `Err(ChessErrors)` - If no piece sits on the origin, the rules reject
///   the move, or the promotion field is inconsistent with the move.
pub fn apply_move(
    board: &BoardSnapshot,
    chess_move: &ChessMove,
) -> Result<BoardSnapshot, ChessErrors> {
    let mover = board
        .piece_at(&chess_move.from)
        .copied()
        .ok_or(ChessErrors::NoPieceAtSquare(chess_move.from))?;

    let en_passant = is_en_passant_move(
        &chess_move.from,
        &chess_move.to,
        mover.kind,
        mover.team,
        board,
    );
    if !en_passant
        && !is_legal_move(
            &chess_move.from,
            &chess_move.to,
            mover.kind,
            mover.team,
            board,
        )
    {
        return Err(ChessErrors::IllegalMove(chess_move.clone()));
    }

    apply_move_unchecked(board, chess_move, &mover, en_passant)
}

/// Applies an already-validated move. Split out so callers that have just run
/// the predicates themselves (e.g. after a drag-and-drop hit test) do not pay
/// for a second validation.
fn apply_move_unchecked(
    board: &BoardSnapshot,
    chess_move: &ChessMove,
    mover: &PieceRecord,
    en_passant: bool,
) -> Result<BoardSnapshot, ChessErrors> {
    let mut result = board.clone();
    let direction = mover.team.forward_direction();

    // Handle capture
    if en_passant {
        // The captured pawn sits behind the destination square
        let behind = (chess_move.to.0, chess_move.to.1 - direction);
        result.remove_piece_at(&behind)?;
    } else if result.is_occupied(&chess_move.to) {
        result.remove_piece_at(&chess_move.to)?;
    }

    // Any application closes the en passant window for every pawn
    for piece in result.pieces_mut() {
        piece.en_passant_eligible = false;
    }

    let double_step = mover.kind == PieceKind::Pawn
        && (chess_move.to.1 - chess_move.from.1).abs() == 2;
    let promoting =
        mover.kind == PieceKind::Pawn && reaches_promotion_rank(mover.team, &chess_move.to);

    match (promoting, chess_move.promotion) {
        (true, Some(kind)) => {
            if matches!(kind, PieceKind::Pawn | PieceKind::King) {
                return Err(ChessErrors::InvalidPromotionKind(kind));
            }
        }
        (true, None) => return Err(ChessErrors::PromotionRequired(chess_move.to)),
        (false, Some(kind)) => return Err(ChessErrors::InvalidPromotionKind(kind)),
        (false, None) => {}
    }

    // Handle movement
    let moved = result
        .piece_at_mut(&chess_move.from)
        .ok_or(ChessErrors::NoPieceAtSquare(chess_move.from))?;
    moved.square = chess_move.to;
    moved.en_passant_eligible = double_step;
    if promoting {
        if let Some(kind) = chess_move.promotion {
            moved.kind = kind;
        }
    }

    Ok(result)
}
