//! Mutable bitboard position.
//!
//! `Position` is the one piece of game state the engine mutates. Move
//! generation reads it, `make_move`/`unmake_move` edit it in place, and the
//! search threads a single `&mut Position` through every node.

use std::fmt;

use crate::errors::FenError;
use crate::game_state::chess_rules::{STARTING_BITBOARDS, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::search::zobrist::ZobristHasher;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_position;

/// A non-empty square: which piece stands there and its bitboard at the time
/// of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedSquare {
    pub piece: Piece,
    pub bitboard: Bitboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // [color][piece_kind]
    pub pieces: [[Bitboard; 6]; 2],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // Running Zobrist key and the keys of every position before it.
    pub hash: u64,
    pub hash_history: Vec<u64>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            hash: 0,
            hash_history: Vec::new(),
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial layout with all castling rights and White to move.
    pub fn new_game(hasher: &ZobristHasher) -> Self {
        let mut position = Self {
            pieces: STARTING_BITBOARDS,
            castling_rights: CASTLE_ALL,
            ..Self::default()
        };
        position.hash = hasher.compute_initial_hash(&position);
        position
    }

    pub fn from_fen(fen: &str, hasher: &ZobristHasher) -> Result<Self, FenError> {
        let mut position = parse_fen(fen)?;
        position.hash = hasher.compute_initial_hash(&position);
        Ok(position)
    }

    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    #[inline]
    pub fn bitboard(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.color.index()][piece.kind.index()]
    }

    #[inline]
    pub fn bitboard_mut(&mut self, piece: Piece) -> &mut Bitboard {
        &mut self.pieces[piece.color.index()][piece.kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(0u64, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn occupancy_all(&self) -> Bitboard {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupancy_all() & square_bit(square) != 0
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        let mask = square_bit(square);
        if self.occupancy(Color::White) & mask != 0 {
            Some(Color::White)
        } else if self.occupancy(Color::Black) & mask != 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<OccupiedSquare> {
        let mask = square_bit(square);
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let bitboard = self.pieces[color.index()][kind.index()];
                if bitboard & mask != 0 {
                    return Some(OccupiedSquare {
                        piece: Piece::new(color, kind),
                        bitboard,
                    });
                }
            }
        }
        None
    }

    /// Piece of `color` on `square`, if any.
    pub fn piece_of_color_at(&self, color: Color, square: Square) -> Option<Piece> {
        let mask = square_bit(square);
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & mask != 0)
            .map(|kind| Piece::new(color, kind))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces[color.index()][PieceKind::King.index()];
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// `true` when no square is claimed by two bitboards.
    pub fn bitboards_are_disjoint(&self) -> bool {
        let mut seen = 0u64;
        for bb in self.pieces.iter().flatten() {
            if seen & bb != 0 {
                return false;
            }
            seen |= bb;
        }
        true
    }

    /// The twelve bitboards in [`Piece::index`] order, for drawing.
    pub fn piece_bitboards(&self) -> [(Piece, Bitboard); 12] {
        let mut out = [(Piece::new(Color::White, PieceKind::Pawn), 0u64); 12];
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                out[piece.index()] = (piece, self.bitboard(piece));
            }
        }
        out
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}
