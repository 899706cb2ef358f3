//! In-place make/unmake.
//!
//! `make_move` snapshots what it is about to overwrite into the move itself
//! and pushes the old hash onto `hash_history`; `unmake_move` undoes the
//! bitboard edits in reverse and pops the hash back. Search and legality
//! filtering share one `Position` this way and never clone it.

use tracing::warn;

use crate::game_state::chess_rules::{right_for_rook_home, rights_of};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{Move, MoveKind};
use crate::search::zobrist::ZobristHasher;

#[inline]
fn place(position: &mut Position, piece: Piece, square: Square) {
    *position.bitboard_mut(piece) |= square_bit(square);
}

#[inline]
fn lift(position: &mut Position, piece: Piece, square: Square) {
    *position.bitboard_mut(piece) &= !square_bit(square);
}

#[inline]
fn shift(position: &mut Position, piece: Piece, from: Square, to: Square) {
    *position.bitboard_mut(piece) ^= square_bit(from) | square_bit(to);
}

/// Apply `mv` for its mover and return whether it was a promotion, which
/// `unmake_move` needs back.
pub fn make_move(position: &mut Position, hasher: &ZobristHasher, mv: &mut Move) -> bool {
    let color = mv.piece.color;

    position.hash_history.push(position.hash);
    mv.castling_before = position.castling_rights;
    mv.en_passant_before = position.en_passant_square;
    position.en_passant_square = None;

    if let Some(captured) = mv.captured {
        let square = mv.capture_square();
        lift(position, captured, square);
        if captured.kind == PieceKind::Rook {
            position.castling_rights &= !(right_for_rook_home(square) & rights_of(captured.color));
        }
    }

    match mv.kind {
        MoveKind::Promotion => {
            lift(position, mv.piece, mv.from);
            place(position, mv.placed_piece(), mv.to);
        }
        MoveKind::CastleKingside | MoveKind::CastleQueenside => {
            shift(position, mv.piece, mv.from, mv.to);
            if let Some(lane) = mv.castling_lane() {
                let rook = Piece::new(color, PieceKind::Rook);
                shift(position, rook, lane.rook_from, lane.rook_to);
            }
        }
        MoveKind::Normal | MoveKind::EnPassant => {
            shift(position, mv.piece, mv.from, mv.to);
        }
    }

    match mv.piece.kind {
        PieceKind::King => position.castling_rights &= !rights_of(color),
        PieceKind::Rook => {
            position.castling_rights &= !(right_for_rook_home(mv.from) & rights_of(color));
        }
        PieceKind::Pawn if mv.from.abs_diff(mv.to) == 16 => {
            position.en_passant_square = Some((mv.from + mv.to) / 2);
        }
        _ => {}
    }

    position.side_to_move = color.opposite();
    position.hash = hasher.update_hash(
        position.hash,
        mv,
        position.castling_rights,
        position.en_passant_square,
    );

    mv.kind == MoveKind::Promotion
}

/// Undo a `make_move` of the same `mv`.
pub fn unmake_move(position: &mut Position, was_promotion: bool, mv: &Move) {
    debug_assert_eq!(was_promotion, mv.kind == MoveKind::Promotion);

    if was_promotion {
        lift(position, mv.placed_piece(), mv.to);
        place(position, mv.piece, mv.from);
    } else if let Some(lane) = mv.castling_lane() {
        shift(position, mv.piece, mv.to, mv.from);
        let rook = Piece::new(mv.piece.color, PieceKind::Rook);
        shift(position, rook, lane.rook_to, lane.rook_from);
    } else {
        shift(position, mv.piece, mv.to, mv.from);
    }

    if let Some(captured) = mv.captured {
        place(position, captured, mv.capture_square());
    }

    position.castling_rights = mv.castling_before;
    position.en_passant_square = mv.en_passant_before;
    position.side_to_move = mv.piece.color;

    match position.hash_history.pop() {
        Some(hash) => position.hash = hash,
        None => warn!(mv = %mv, "unmake_move with empty hash history; hash left unchanged"),
    }
}
