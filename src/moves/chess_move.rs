//! Move record shared by generation, execution, hashing and search.
//!
//! A `Move` carries everything needed to undo it: the captured piece and a
//! snapshot of the castling rights and en-passant target taken by
//! `make_move` just before the move is applied.

use std::fmt;

use crate::game_state::chess_rules::{kingside_lane, queenside_lane, CastlingLane};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    CastleKingside,
    CastleQueenside,
    EnPassant,
    /// Pawn reaching the last rank; always becomes a queen.
    Promotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,

    // Filled in by make_move.
    pub castling_before: CastlingRights,
    pub en_passant_before: Option<Square>,
}

impl Move {
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
    ) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            kind,
            castling_before: 0,
            en_passant_before: None,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }

    /// Piece standing on `to` once the move is made.
    #[inline]
    pub const fn placed_piece(&self) -> Piece {
        match self.kind {
            MoveKind::Promotion => Piece::new(self.piece.color, PieceKind::Queen),
            _ => self.piece,
        }
    }

    /// Square the captured piece is removed from.
    #[inline]
    pub const fn capture_square(&self) -> Square {
        match (self.kind, self.piece.color) {
            (MoveKind::EnPassant, Color::White) => self.to - 8,
            (MoveKind::EnPassant, Color::Black) => self.to + 8,
            _ => self.to,
        }
    }

    /// King and rook squares of a castling move.
    #[inline]
    pub const fn castling_lane(&self) -> Option<&'static CastlingLane> {
        match self.kind {
            MoveKind::CastleKingside => Some(kingside_lane(self.piece.color)),
            MoveKind::CastleQueenside => Some(queenside_lane(self.piece.color)),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )?;
        if self.kind == MoveKind::Promotion {
            f.write_str("q")?;
        }
        Ok(())
    }
}
