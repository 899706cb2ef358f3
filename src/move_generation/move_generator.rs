//! Move enumeration for one side.
//!
//! `all_moves_for_side` is pseudo-legal: it may leave the mover's king in
//! check. The `legal_*` helpers filter with a trial `make_move`, a check
//! probe and `unmake_move`, so they need the position mutably but always
//! hand it back unchanged.

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_moves_king::{generate_castling_moves, king_destinations};
use crate::move_generation::legal_moves_knight::knight_destinations;
use crate::move_generation::legal_moves_pawn::{en_passant_target, pawn_destinations};
use crate::move_generation::legal_moves_sliders::{
    bishop_destinations, queen_destinations, rook_destinations,
};
use crate::moves::chess_move::{Move, MoveKind};
use crate::search::zobrist::ZobristHasher;

/// Pseudo-legal destination bitboard of whatever stands on `square`.
/// Castling is not included.
pub fn destinations_from(position: &Position, square: Square) -> Bitboard {
    let Some(occupied) = position.piece_at(square) else {
        return 0;
    };
    piece_destinations(position, occupied.piece, square)
}

#[inline]
fn piece_destinations(position: &Position, piece: Piece, from: Square) -> Bitboard {
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(position, piece.color, from),
        PieceKind::Knight => knight_destinations(position, piece.color, from),
        PieceKind::Bishop => bishop_destinations(position, piece.color, from),
        PieceKind::Rook => rook_destinations(position, piece.color, from),
        PieceKind::Queen => queen_destinations(position, piece.color, from),
        PieceKind::King => king_destinations(position, piece.color, from),
    }
}

/// Classify a non-castling move of `piece` and record what it captures.
pub fn build_move(position: &Position, from: Square, to: Square, piece: Piece) -> Move {
    let enemy = piece.color.opposite();
    let captured = position.piece_of_color_at(enemy, to);

    if piece.kind != PieceKind::Pawn {
        return Move::new(from, to, piece, captured, MoveKind::Normal);
    }

    if captured.is_none()
        && file_of(from) != file_of(to)
        && en_passant_target(position, piece.color) == Some(to)
    {
        let victim = Piece::new(enemy, PieceKind::Pawn);
        return Move::new(from, to, piece, Some(victim), MoveKind::EnPassant);
    }

    let kind = if rank_of(to) == promotion_rank(piece.color) {
        MoveKind::Promotion
    } else {
        MoveKind::Normal
    };
    Move::new(from, to, piece, captured, kind)
}

/// Every pseudo-legal move of `side`, castling included.
pub fn all_moves_for_side(position: &Position, side: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);

    for kind in PieceKind::ALL {
        let piece = Piece::new(side, kind);
        for from in squares_of(position.bitboard(piece)) {
            let targets = piece_destinations(position, piece, from);
            moves.extend(squares_of(targets).map(|to| build_move(position, from, to, piece)));
        }
    }

    generate_castling_moves(position, side, &mut moves);
    moves
}

/// `true` if playing `mv` does not leave its mover in check.
pub fn is_legal(position: &mut Position, hasher: &ZobristHasher, mv: &mut Move) -> bool {
    let mover = mv.piece.color;
    let was_promotion = make_move(position, hasher, mv);
    let legal = !is_in_check(position, mover);
    unmake_move(position, was_promotion, mv);
    legal
}

pub fn legal_moves_for_side(
    position: &mut Position,
    hasher: &ZobristHasher,
    side: Color,
) -> Vec<Move> {
    let mut moves = all_moves_for_side(position, side);
    moves.retain_mut(|mv| is_legal(position, hasher, mv));
    moves
}

/// Legal target squares of the piece on `square`, castling included for a
/// king. Empty when the square is empty.
pub fn legal_destinations(
    position: &mut Position,
    hasher: &ZobristHasher,
    square: Square,
) -> Vec<Square> {
    let Some(color) = position.color_at(square) else {
        return Vec::new();
    };
    legal_moves_for_side(position, hasher, color)
        .into_iter()
        .filter(|mv| mv.from == square)
        .map(|mv| mv.to)
        .collect()
}

/// `true` as soon as one legal move for `side` is found.
pub fn has_legal_move(position: &mut Position, hasher: &ZobristHasher, side: Color) -> bool {
    let mut moves = all_moves_for_side(position, side);
    moves.iter_mut().any(|mv| is_legal(position, hasher, mv))
}
