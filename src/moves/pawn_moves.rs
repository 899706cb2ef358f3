//! Pawn capture geometry.
//!
//! `pawn_attacks(color, sq)` gives the diagonal squares a pawn of `color` on
//! `sq` attacks. The same table read with the opposite color answers "which
//! squares would a pawn of `color` have to stand on to hit `sq`", which is
//! how check detection uses it.

use crate::game_state::chess_types::{Bitboard, Color, Square};

pub const WHITE_PAWN_ATTACKS: [Bitboard; 64] = pawn_attack_table(Color::White);
pub const BLACK_PAWN_ATTACKS: [Bitboard; 64] = pawn_attack_table(Color::Black);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

/// Square directly in front of a pawn, if still on the board.
#[inline]
pub const fn pawn_push(color: Color, square: Square) -> Option<Square> {
    match color {
        Color::White if square < 56 => Some(square + 8),
        Color::Black if square >= 8 => Some(square - 8),
        _ => None,
    }
}

const fn pawn_attack_table(color: Color) -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        match color {
            Color::White if rank < 7 => {
                if file > 0 {
                    attacks |= 1u64 << (sq + 7);
                }
                if file < 7 {
                    attacks |= 1u64 << (sq + 9);
                }
            }
            Color::Black if rank > 0 => {
                if file > 0 {
                    attacks |= 1u64 << (sq - 9);
                }
                if file < 7 {
                    attacks |= 1u64 << (sq - 7);
                }
            }
            _ => {}
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
