//! Error types for position setup and the game session.
//!
//! The engine core itself is infallible; these cover text input and
//! presentation-supplied moves.

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("missing FEN field: {field}")]
    MissingField { field: &'static str },

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    #[error("board layout must contain 8 ranks, found {found}")]
    RankCount { found: usize },

    #[error("rank {rank} does not sum to 8 files")]
    RankWidth { rank: u8 },

    #[error("invalid piece character '{ch}' in board layout")]
    PieceChar { ch: char },

    #[error("invalid side-to-move field: {value}")]
    SideToMove { value: String },

    #[error("invalid castling rights character: {ch}")]
    CastlingChar { ch: char },

    #[error("invalid algebraic square: {value}")]
    Square { value: String },

    #[error("invalid move counter: {value}")]
    Counter { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no piece on square {square}")]
    EmptySquare { square: Square },

    #[error("piece on square {square} does not belong to the side to move")]
    NotYourPiece { square: Square },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("game is already over")]
    GameOver,
}

pub type GameResult<T> = Result<T, GameError>;
