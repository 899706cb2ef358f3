//! Zobrist keys and incremental position hashing.
//!
//! Keys come from a seeded `StdRng`, so every hasher built from the same seed
//! produces the same hashes. One hasher is created per game session and lent
//! to move execution and search.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub const DEFAULT_ZOBRIST_SEED: u64 = 0x1234_5678_9ABC_DEF0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristHasher {
    piece_square: [[[u64; 64]; 6]; 2],
    castling: [u64; 16],
    en_passant_file: [u64; 8],
    side_to_move: u64,
}

impl Default for ZobristHasher {
    fn default() -> Self {
        Self::new(DEFAULT_ZOBRIST_SEED)
    }
}

impl ZobristHasher {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut piece_square = [[[0u64; 64]; 6]; 2];
        for color in &mut piece_square {
            for kind in color {
                for key in kind {
                    *key = rng.next_u64();
                }
            }
        }

        let mut castling = [0u64; 16];
        for key in &mut castling {
            *key = rng.next_u64();
        }

        let mut en_passant_file = [0u64; 8];
        for key in &mut en_passant_file {
            *key = rng.next_u64();
        }

        let side_to_move = rng.next_u64();

        Self {
            piece_square,
            castling,
            en_passant_file,
            side_to_move,
        }
    }

    #[inline]
    pub fn piece_square_key(&self, piece: Piece, square: Square) -> u64 {
        self.piece_square[piece.color.index()][piece.kind.index()][square as usize]
    }

    #[inline]
    pub fn castling_key(&self, rights: CastlingRights) -> u64 {
        self.castling[(rights & CASTLE_ALL) as usize]
    }

    #[inline]
    pub fn en_passant_key(&self, square: Square) -> u64 {
        self.en_passant_file[file_of(square) as usize]
    }

    /// XORed in while Black is to move.
    #[inline]
    pub fn side_to_move_key(&self) -> u64 {
        self.side_to_move
    }

    /// Full hash of `position` from scratch.
    pub fn compute_initial_hash(&self, position: &Position) -> u64 {
        let mut hash = 0u64;

        for (piece, bitboard) in position.piece_bitboards() {
            for square in squares_of(bitboard) {
                hash ^= self.piece_square_key(piece, square);
            }
        }

        hash ^= self.castling_key(position.castling_rights);

        if let Some(square) = position.en_passant_square {
            hash ^= self.en_passant_key(square);
        }

        if position.side_to_move == Color::Black {
            hash ^= self.side_to_move_key();
        }

        hash
    }

    /// Hash after `mv`, given the hash before it. `mv` must carry the
    /// snapshots `make_move` takes; `castling_after` and `en_passant_after`
    /// are the state the move left behind.
    pub fn update_hash(
        &self,
        hash: u64,
        mv: &Move,
        castling_after: CastlingRights,
        en_passant_after: Option<Square>,
    ) -> u64 {
        let mut hash = hash;

        hash ^= self.piece_square_key(mv.piece, mv.from);
        hash ^= self.piece_square_key(mv.placed_piece(), mv.to);

        if let Some(captured) = mv.captured {
            hash ^= self.piece_square_key(captured, mv.capture_square());
        }

        if let Some(lane) = mv.castling_lane() {
            let rook = Piece::new(mv.piece.color, PieceKind::Rook);
            hash ^= self.piece_square_key(rook, lane.rook_from);
            hash ^= self.piece_square_key(rook, lane.rook_to);
        }

        hash ^= self.castling_key(mv.castling_before);
        hash ^= self.castling_key(castling_after);

        if let Some(square) = mv.en_passant_before {
            hash ^= self.en_passant_key(square);
        }
        if let Some(square) = en_passant_after {
            hash ^= self.en_passant_key(square);
        }

        hash ^ self.side_to_move_key()
    }
}
