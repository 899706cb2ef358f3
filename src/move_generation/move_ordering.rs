//! MVV-LVA capture ordering.

use std::cmp::Reverse;

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;

/// Ordering value of a piece, both as victim and as attacker.
#[inline]
pub const fn ordering_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// `victim * 10 - attacker`; quiet moves score 0.
#[inline]
pub fn mvv_lva_score(mv: &Move) -> i32 {
    match mv.captured {
        Some(victim) => ordering_value(victim.kind) * 10 - ordering_value(mv.piece.kind),
        None => 0,
    }
}

/// Highest score first. Equal scores keep their generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(mvv_lva_score(mv)));
}
