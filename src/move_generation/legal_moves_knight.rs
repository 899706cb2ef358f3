//! Pseudo-legal knight destinations.

use crate::game_state::chess_types::*;
use crate::moves::leaper_moves::knight_targets;

#[inline]
pub fn knight_destinations(position: &Position, color: Color, from: Square) -> Bitboard {
    knight_targets(from) & !position.occupancy(color)
}
