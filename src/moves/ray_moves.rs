//! Sliding-piece ray walks.
//!
//! Rays advance by a fixed square delta (±1, ±7, ±8, ±9). A step is rejected
//! when it leaves `0..64` *or* when it wraps around the board edge, which is
//! detected by the file of the landing square: moving east (`+1`, `+9`, `-7`)
//! must never land on the a-file and moving west (`-1`, `+7`, `-9`) must
//! never land on the h-file.

use crate::game_state::chess_types::{square_bit, Bitboard, Square};

pub const ROOK_DELTAS: [i8; 4] = [1, -1, 8, -8];
pub const BISHOP_DELTAS: [i8; 4] = [9, 7, -7, -9];
pub const QUEEN_DELTAS: [i8; 8] = [1, -1, 8, -8, 9, 7, -7, -9];

/// One step from `square` along `delta`, or `None` off the board.
#[inline]
pub const fn step(square: Square, delta: i8) -> Option<Square> {
    let next = square as i16 + delta as i16;
    if next < 0 || next >= 64 {
        return None;
    }

    let file = next & 7;
    let wrapped = match delta {
        1 | 9 | -7 => file == 0,
        -1 | 7 | -9 => file == 7,
        _ => false,
    };

    if wrapped {
        None
    } else {
        Some(next as Square)
    }
}

/// Squares reached along one ray, up to and including the first occupied
/// square.
#[inline]
pub fn ray_attacks(square: Square, delta: i8, occupancy: Bitboard) -> Bitboard {
    let mut attacks = 0u64;
    let mut current = square;

    while let Some(next) = step(current, delta) {
        let bit = square_bit(next);
        attacks |= bit;
        if occupancy & bit != 0 {
            break;
        }
        current = next;
    }

    attacks
}

/// First occupied square along a ray, if any.
#[inline]
pub fn first_blocker(square: Square, delta: i8, occupancy: Bitboard) -> Option<Square> {
    let mut current = square;
    while let Some(next) = step(current, delta) {
        if occupancy & square_bit(next) != 0 {
            return Some(next);
        }
        current = next;
    }
    None
}

#[inline]
pub fn slider_attacks(square: Square, deltas: &[i8], occupancy: Bitboard) -> Bitboard {
    deltas
        .iter()
        .fold(0u64, |acc, delta| acc | ray_attacks(square, *delta, occupancy))
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_attacks(square, &ROOK_DELTAS, occupancy)
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_attacks(square, &BISHOP_DELTAS, occupancy)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_attacks(square, &QUEEN_DELTAS, occupancy)
}
