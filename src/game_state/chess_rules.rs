//! Canonical chess-rule constants.
//!
//! The initial layout is stored as literal bitboards, one per colored piece,
//! alongside the fixed king/rook squares used by castling.

use crate::game_state::chess_types::{Bitboard, CastlingRights, Color, Square};
use crate::game_state::chess_types::{
    CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Starting bitboards indexed `[color][piece_kind]`.
pub const STARTING_BITBOARDS: [[Bitboard; 6]; 2] = [
    [
        0x0000_0000_0000_FF00,
        0x0000_0000_0000_0042,
        0x0000_0000_0000_0024,
        0x0000_0000_0000_0081,
        0x0000_0000_0000_0008,
        0x0000_0000_0000_0010,
    ],
    [
        0x00FF_0000_0000_0000,
        0x4200_0000_0000_0000,
        0x2400_0000_0000_0000,
        0x8100_0000_0000_0000,
        0x0800_0000_0000_0000,
        0x1000_0000_0000_0000,
    ],
];

/// Rank a pawn double-pushes from.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Rank on which a pawn promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Geometry of one castling option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub must_be_empty: Bitboard,
    /// Squares the king passes over or lands on.
    pub king_path: [Square; 2],
}

pub const WHITE_KINGSIDE: CastlingLane = CastlingLane {
    right: CASTLE_WHITE_KINGSIDE,
    king_from: 4,
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
    must_be_empty: (1 << 5) | (1 << 6),
    king_path: [5, 6],
};

pub const WHITE_QUEENSIDE: CastlingLane = CastlingLane {
    right: CASTLE_WHITE_QUEENSIDE,
    king_from: 4,
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
    must_be_empty: (1 << 1) | (1 << 2) | (1 << 3),
    king_path: [3, 2],
};

pub const BLACK_KINGSIDE: CastlingLane = CastlingLane {
    right: CASTLE_BLACK_KINGSIDE,
    king_from: 60,
    king_to: 62,
    rook_from: 63,
    rook_to: 61,
    must_be_empty: (1 << 61) | (1 << 62),
    king_path: [61, 62],
};

pub const BLACK_QUEENSIDE: CastlingLane = CastlingLane {
    right: CASTLE_BLACK_QUEENSIDE,
    king_from: 60,
    king_to: 58,
    rook_from: 56,
    rook_to: 59,
    must_be_empty: (1 << 57) | (1 << 58) | (1 << 59),
    king_path: [59, 58],
};

#[inline]
pub const fn kingside_lane(color: Color) -> &'static CastlingLane {
    match color {
        Color::White => &WHITE_KINGSIDE,
        Color::Black => &BLACK_KINGSIDE,
    }
}

#[inline]
pub const fn queenside_lane(color: Color) -> &'static CastlingLane {
    match color {
        Color::White => &WHITE_QUEENSIDE,
        Color::Black => &BLACK_QUEENSIDE,
    }
}

/// Both castling rights of one side.
#[inline]
pub const fn rights_of(color: Color) -> CastlingRights {
    kingside_lane(color).right | queenside_lane(color).right
}

/// Right lost when a rook leaves, or is captured on, `square`.
#[inline]
pub const fn right_for_rook_home(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_bitboards_are_disjoint_and_fill_two_ranks_each() {
        let mut all = 0u64;
        for color in STARTING_BITBOARDS {
            for bb in color {
                assert_eq!(all & bb, 0);
                all |= bb;
            }
        }
        assert_eq!(all, 0xFFFF_0000_0000_FFFF);
    }

    #[test]
    fn castling_lanes_keep_rook_landing_next_to_king() {
        for lane in [WHITE_KINGSIDE, WHITE_QUEENSIDE, BLACK_KINGSIDE, BLACK_QUEENSIDE] {
            assert_eq!(lane.king_path[1], lane.king_to);
            assert_eq!(lane.king_path[0], lane.rook_to);
            assert_ne!(lane.must_be_empty & (1u64 << lane.king_to), 0);
        }
    }
}
