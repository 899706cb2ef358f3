//! Pseudo-legal pawn destinations: pushes, double pushes, diagonal
//! captures and en passant.

use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::{pawn_attacks, pawn_push};

/// Rank the en-passant target sits on when `color` is the capturer.
#[inline]
const fn en_passant_rank(color: Color) -> u8 {
    match color {
        Color::White => 5,
        Color::Black => 2,
    }
}

/// En-passant target `color` may capture onto: set, on the right rank and
/// with an enemy pawn on the square behind it.
pub fn en_passant_target(position: &Position, color: Color) -> Option<Square> {
    let ep = position.en_passant_square?;
    if rank_of(ep) != en_passant_rank(color) {
        return None;
    }

    let victim = match color {
        Color::White => ep - 8,
        Color::Black => ep + 8,
    };
    let enemy_pawns = position.bitboard(Piece::new(color.opposite(), PieceKind::Pawn));
    (enemy_pawns & square_bit(victim) != 0).then_some(ep)
}

pub fn pawn_destinations(position: &Position, color: Color, from: Square) -> Bitboard {
    let occupied = position.occupancy_all();
    let mut targets = 0u64;

    if let Some(one) = pawn_push(color, from) {
        if occupied & square_bit(one) == 0 {
            targets |= square_bit(one);

            if rank_of(from) == pawn_start_rank(color) {
                if let Some(two) = pawn_push(color, one) {
                    if occupied & square_bit(two) == 0 {
                        targets |= square_bit(two);
                    }
                }
            }
        }
    }

    let mut capturable = position.occupancy(color.opposite());
    if let Some(ep) = en_passant_target(position, color) {
        capturable |= square_bit(ep);
    }
    targets |= pawn_attacks(color, from) & capturable;

    targets
}

#[cfg(test)]
mod tests {
    use super::{en_passant_target, pawn_destinations};
    use crate::game_state::chess_types::*;
    use crate::search::zobrist::ZobristHasher;

    fn fen(text: &str) -> Position {
        Position::from_fen(text, &ZobristHasher::default()).expect("FEN should parse")
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let position = Position::new_game(&ZobristHasher::default());
        assert_eq!(
            pawn_destinations(&position, Color::White, 12),
            (1u64 << 20) | (1u64 << 28)
        );
        assert_eq!(
            pawn_destinations(&position, Color::Black, 51),
            (1u64 << 43) | (1u64 << 35)
        );
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        // Knight on e3 blocks both pushes of the e2 pawn.
        let position = fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert_eq!(pawn_destinations(&position, Color::White, 12), 0);

        // Piece on e4 still allows the single push.
        let position = fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(pawn_destinations(&position, Color::White, 12), 1u64 << 20);
    }

    #[test]
    fn captures_only_enemy_pieces_diagonally() {
        let position = fen("4k3/8/8/8/8/3n1N2/4P3/4K3 w - - 0 1");
        let targets = pawn_destinations(&position, Color::White, 12);
        assert_ne!(targets & (1u64 << 19), 0);
        assert_eq!(targets & (1u64 << 21), 0);
    }

    #[test]
    fn en_passant_target_is_a_destination() {
        let position = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let targets = pawn_destinations(&position, Color::White, 36);
        assert_eq!(targets, (1u64 << 44) | (1u64 << 43));
    }

    #[test]
    fn en_passant_needs_a_pawn_to_capture() {
        // d6 is set but d5 is empty.
        let position = fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1");
        assert_eq!(en_passant_target(&position, Color::White), None);
        assert_eq!(pawn_destinations(&position, Color::White, 36), 1u64 << 44);

        // A knight on d5 is not a pawn that just double-pushed.
        let position = fen("4k3/8/8/3nP3/8/8/8/4K3 w - d6 0 1");
        assert_eq!(en_passant_target(&position, Color::White), None);
        assert_eq!(pawn_destinations(&position, Color::White, 36), 1u64 << 44);
    }

    #[test]
    fn black_en_passant_target_sits_above_the_white_pawn() {
        let position = fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1");
        assert_eq!(en_passant_target(&position, Color::Black), Some(19));
        assert_eq!(
            pawn_destinations(&position, Color::Black, 28),
            (1u64 << 20) | (1u64 << 19)
        );
    }
}
