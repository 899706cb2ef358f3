//! Pseudo-legal rook, bishop and queen destinations.
//!
//! Each ray stops at the first occupied square; that square is kept when it
//! holds an enemy piece and dropped when it holds one of ours.

use crate::game_state::chess_types::*;
use crate::moves::ray_moves::{bishop_attacks, queen_attacks, rook_attacks};

#[inline]
pub fn rook_destinations(position: &Position, color: Color, from: Square) -> Bitboard {
    rook_attacks(from, position.occupancy_all()) & !position.occupancy(color)
}

#[inline]
pub fn bishop_destinations(position: &Position, color: Color, from: Square) -> Bitboard {
    bishop_attacks(from, position.occupancy_all()) & !position.occupancy(color)
}

#[inline]
pub fn queen_destinations(position: &Position, color: Color, from: Square) -> Bitboard {
    queen_attacks(from, position.occupancy_all()) & !position.occupancy(color)
}
