//! King steps and castling.
//!
//! Castling is only ever emitted when it is fully legal: the right is still
//! set, king and rook stand on their home squares, the squares between them
//! are empty, and neither the king's square nor any square it crosses or
//! lands on is attacked.

use crate::game_state::chess_rules::{kingside_lane, queenside_lane, CastlingLane};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_attacked;
use crate::moves::chess_move::{Move, MoveKind};
use crate::moves::leaper_moves::king_targets;

#[inline]
pub fn king_destinations(position: &Position, color: Color, from: Square) -> Bitboard {
    king_targets(from) & !position.occupancy(color)
}

pub fn generate_castling_moves(position: &Position, color: Color, out: &mut Vec<Move>) {
    let king = Piece::new(color, PieceKind::King);

    for (lane, kind) in [
        (kingside_lane(color), MoveKind::CastleKingside),
        (queenside_lane(color), MoveKind::CastleQueenside),
    ] {
        if can_castle(position, color, lane) {
            out.push(Move::new(lane.king_from, lane.king_to, king, None, kind));
        }
    }
}

fn can_castle(position: &Position, color: Color, lane: &CastlingLane) -> bool {
    if !position.has_castling_right(lane.right) {
        return false;
    }

    let king_home = position.bitboard(Piece::new(color, PieceKind::King)) & square_bit(lane.king_from);
    let rook_home = position.bitboard(Piece::new(color, PieceKind::Rook)) & square_bit(lane.rook_from);
    if king_home == 0 || rook_home == 0 {
        return false;
    }

    if position.occupancy_all() & lane.must_be_empty != 0 {
        return false;
    }

    !is_attacked(position, lane.king_from, color)
        && lane
            .king_path
            .iter()
            .all(|square| !is_attacked(position, *square, color))
}

#[cfg(test)]
mod tests {
    use super::generate_castling_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::MoveKind;
    use crate::search::zobrist::ZobristHasher;

    fn castles(text: &str, color: Color) -> Vec<(Square, MoveKind)> {
        let position = Position::from_fen(text, &ZobristHasher::default()).expect("FEN should parse");
        let mut out = Vec::new();
        generate_castling_moves(&position, color, &mut out);
        out.into_iter().map(|mv| (mv.to, mv.kind)).collect()
    }

    #[test]
    fn start_position_cannot_castle_with_pieces_in_the_way() {
        let position = Position::new_game(&ZobristHasher::default());
        let mut out = Vec::new();
        generate_castling_moves(&position, Color::White, &mut out);
        assert!(out.is_empty(), "f1/g1 are occupied even though the right is set");
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Color::White);
        assert_eq!(
            moves,
            vec![(6, MoveKind::CastleKingside), (2, MoveKind::CastleQueenside)]
        );
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", Color::Black);
        assert_eq!(
            moves,
            vec![(62, MoveKind::CastleKingside), (58, MoveKind::CastleQueenside)]
        );
    }

    #[test]
    fn attacked_transit_square_forbids_castling() {
        // Black rook on f8 covers f1.
        let moves = castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White);
        assert_eq!(moves, vec![(2, MoveKind::CastleQueenside)]);

        // Black rook on g8 covers the g1 landing square.
        let moves = castles("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White);
        assert_eq!(moves, vec![(2, MoveKind::CastleQueenside)]);
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let moves = castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn attacked_b1_does_not_block_queenside() {
        // Only the king's path matters; the rook may pass an attacked b1.
        let moves = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", Color::White);
        assert_eq!(moves, vec![(2, MoveKind::CastleQueenside)]);
    }

    #[test]
    fn missing_right_means_no_castle() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", Color::White);
        assert_eq!(moves, vec![(2, MoveKind::CastleQueenside)]);
    }
}
