//! Crate root module declarations for the chess referee library.
//!
//! This file exposes all top-level subsystems (board data model, per-piece
//! movement rules, move application, and utility helpers) so binaries, tests,
//! and external tooling can import stable module paths.
//!
//! The crate answers legality questions over a caller-supplied board
//! snapshot: per-piece movement rules, sliding-piece ray casting, en passant,
//! and promotion-rank detection, plus a pseudo-legal move generator for
//! highlighting reachable squares. Check, checkmate, stalemate, and castling
//! are not modeled.

pub mod board {
    pub mod board_snapshot;
    pub mod piece_kind;
    pub mod piece_record;
    pub mod piece_team;
    pub mod square;
}

pub mod rules {
    pub mod bishop_rules;
    pub mod king_rules;
    pub mod knight_rules;
    pub mod pawn_rules;
    pub mod queen_rules;
    pub mod referee;
    pub mod rook_rules;
    pub mod sliding_rules;
}

pub mod game {
    pub mod apply_move;
    pub mod chess_move;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_mover;
    pub mod render_board;
}

pub mod chess_errors;
