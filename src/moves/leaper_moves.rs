//! Knight and king target tables.
//!
//! Each table is built at compile time from a list of `(file, rank)` offsets;
//! offsets that would leave the board, including around the left/right edge,
//! contribute nothing.

use crate::game_state::chess_types::{Bitboard, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_TARGETS: [Bitboard; 64] = offset_table(&KNIGHT_OFFSETS);
pub const KING_TARGETS: [Bitboard; 64] = offset_table(&KING_OFFSETS);

#[inline]
pub const fn knight_targets(square: Square) -> Bitboard {
    KNIGHT_TARGETS[square as usize]
}

#[inline]
pub const fn king_targets(square: Square) -> Bitboard {
    KING_TARGETS[square as usize]
}

const fn offset_table(offsets: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let f = file + offsets[i].0;
            let r = rank + offsets[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                targets |= 1u64 << (r as usize * 8 + f as usize);
            }
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_target_counts() {
        assert_eq!(knight_targets(27).count_ones(), 8);
        assert_eq!(knight_targets(0).count_ones(), 2);
        // g1 knight reaches e2, f3, h3 only.
        assert_eq!(knight_targets(6), (1 << 12) | (1 << 21) | (1 << 23));
    }

    #[test]
    fn king_targets_do_not_wrap() {
        assert_eq!(king_targets(0).count_ones(), 3);
        assert_eq!(king_targets(7), (1 << 6) | (1 << 14) | (1 << 15));
        assert_eq!(king_targets(36).count_ones(), 8);
    }
}
