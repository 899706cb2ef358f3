//! Attack queries used for legality filtering, castling safety and
//! checkmate/stalemate detection.
//!
//! Every probe starts at the target square and looks outward: along each
//! rook and bishop ray to the first blocker, then at the fixed knight, king
//! and pawn squares. Nothing here mutates the position.

use crate::game_state::chess_types::*;
use crate::moves::leaper_moves::{king_targets, knight_targets};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::ray_moves::{first_blocker, BISHOP_DELTAS, ROOK_DELTAS};

/// `true` if `side`'s king is attacked. A side without a king is never in
/// check.
#[inline]
pub fn is_in_check(position: &Position, side: Color) -> bool {
    let Some(king_sq) = position.king_square(side) else {
        return false;
    };
    is_attacked(position, king_sq, side)
}

/// `true` if any piece of `side`'s opponent attacks `square`.
pub fn is_attacked(position: &Position, square: Square, side: Color) -> bool {
    let enemy = side.opposite();
    let theirs = |kind: PieceKind| position.pieces[enemy.index()][kind.index()];
    let occupancy = position.occupancy_all();

    let straight = theirs(PieceKind::Rook) | theirs(PieceKind::Queen);
    if ray_hits(square, &ROOK_DELTAS, occupancy, straight) {
        return true;
    }

    let diagonal = theirs(PieceKind::Bishop) | theirs(PieceKind::Queen);
    if ray_hits(square, &BISHOP_DELTAS, occupancy, diagonal) {
        return true;
    }

    if knight_targets(square) & theirs(PieceKind::Knight) != 0 {
        return true;
    }

    if king_targets(square) & theirs(PieceKind::King) != 0 {
        return true;
    }

    // An enemy pawn hits `square` from where our own pawn on `square` would
    // capture.
    pawn_attacks(side, square) & theirs(PieceKind::Pawn) != 0
}

#[inline]
fn ray_hits(square: Square, deltas: &[i8], occupancy: Bitboard, attackers: Bitboard) -> bool {
    deltas.iter().any(|delta| {
        first_blocker(square, *delta, occupancy)
            .is_some_and(|blocker| attackers & square_bit(blocker) != 0)
    })
}
