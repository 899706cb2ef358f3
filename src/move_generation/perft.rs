//! Perft: leaf counting through make/unmake, the reference check for move
//! generation.
//!
//! Only queen promotions are generated, so counts match published tables
//! only for positions and depths where no promotion occurs.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::{has_legal_move, legal_moves_for_side};
use crate::moves::chess_move::MoveKind;
use crate::search::zobrist::ZobristHasher;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count at `depth` plies.
pub fn perft(position: &mut Position, hasher: &ZobristHasher, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let side = position.side_to_move;
    let moves = legal_moves_for_side(position, hasher, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mut mv in moves {
        let was_promotion = make_move(position, hasher, &mut mv);
        nodes += perft(position, hasher, depth - 1);
        unmake_move(position, was_promotion, &mv);
    }
    nodes
}

/// Leaf count with a breakdown of what the last move at each leaf was.
pub fn perft_detailed(position: &mut Position, hasher: &ZobristHasher, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let side = position.side_to_move;
    let mut total = PerftCounts::default();

    for mut mv in legal_moves_for_side(position, hasher, side) {
        let was_promotion = make_move(position, hasher, &mut mv);

        if depth == 1 {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            if mv.is_capture() {
                leaf.captures = 1;
            }
            if mv.is_castle() {
                leaf.castles = 1;
            }
            match mv.kind {
                MoveKind::EnPassant => leaf.en_passant = 1,
                MoveKind::Promotion => leaf.promotions = 1,
                _ => {}
            }
            let opponent = side.opposite();
            if is_in_check(position, opponent) {
                leaf.checks = 1;
                if !has_legal_move(position, hasher, opponent) {
                    leaf.checkmates = 1;
                }
            }
            total.merge(leaf);
        } else {
            total.merge(perft_detailed(position, hasher, depth - 1));
        }

        unmake_move(position, was_promotion, &mv);
    }

    total
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(position: &mut Position, hasher: &ZobristHasher, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let side = position.side_to_move;
    let mut out = Vec::new();
    for mut mv in legal_moves_for_side(position, hasher, side) {
        let was_promotion = make_move(position, hasher, &mut mv);
        out.push((mv.to_string(), perft(position, hasher, depth - 1)));
        unmake_move(position, was_promotion, &mv);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn fen(text: &str) -> (Position, ZobristHasher) {
        let hasher = ZobristHasher::default();
        let position = Position::from_fen(text, &hasher).expect("FEN should parse");
        (position, hasher)
    }

    #[test]
    fn start_position_reference_counts() {
        let hasher = ZobristHasher::default();
        let mut position = Position::new_game(&hasher);
        let before = position.clone();
        assert_eq!(perft(&mut position, &hasher, 1), 20);
        assert_eq!(perft(&mut position, &hasher, 2), 400);
        assert_eq!(perft(&mut position, &hasher, 3), 8_902);
        assert_eq!(position, before);
    }

    #[test]
    fn kiwipete_reference_counts() {
        let (mut position, hasher) = fen(KIWIPETE);
        assert_eq!(perft(&mut position, &hasher, 1), 48);
        assert_eq!(perft(&mut position, &hasher, 2), 2_039);
    }

    #[test]
    fn rook_endgame_reference_counts() {
        let (mut position, hasher) = fen(POSITION_3);
        assert_eq!(perft(&mut position, &hasher, 1), 14);
        assert_eq!(perft(&mut position, &hasher, 2), 191);
        assert_eq!(perft(&mut position, &hasher, 3), 2_812);
    }

    #[test]
    fn detailed_counts_break_down_kiwipete() {
        let (mut position, hasher) = fen(KIWIPETE);
        let counts = perft_detailed(&mut position, &hasher, 2);
        assert_eq!(counts.nodes, 2_039);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.promotions, 0);
        assert_eq!(counts.checks, 3);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn detailed_counts_see_en_passant_in_rook_endgame() {
        let (mut position, hasher) = fen(POSITION_3);
        let counts = perft_detailed(&mut position, &hasher, 3);
        assert_eq!(counts.nodes, 2_812);
        assert_eq!(counts.captures, 209);
        assert_eq!(counts.en_passant, 2);
        assert_eq!(counts.checks, 267);
    }

    #[test]
    fn divide_sums_to_perft() {
        let hasher = ZobristHasher::default();
        let mut position = Position::new_game(&hasher);
        let divide = perft_divide(&mut position, &hasher, 2);
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divide.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
    }
}
