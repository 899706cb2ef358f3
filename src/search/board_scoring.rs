//! Static evaluation strategies behind the `BoardScorer` trait.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, position: &Position) -> i32;
}

/// White minus Black, flipped when Black is to move.
#[inline]
fn from_side_to_move(position: &Position, white_minus_black: i32) -> i32 {
    match position.side_to_move {
        Color::White => white_minus_black,
        Color::Black => -white_minus_black,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 20,
        }
    }

    fn balance(position: &Position, kinds: &[PieceKind]) -> i32 {
        kinds
            .iter()
            .map(|kind| {
                let white = position.bitboard(Piece::new(Color::White, *kind)).count_ones() as i32;
                let black = position.bitboard(Piece::new(Color::Black, *kind)).count_ones() as i32;
                (white - black) * Self::piece_value(*kind)
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        from_side_to_move(position, Self::balance(position, &PieceKind::ALL))
    }
}

/// Material, except a pawn is worth the number of ranks it has left behind
/// its own back rank: `rank` for White, `7 - rank` for Black.
#[derive(Debug, Clone, Copy, Default)]
pub struct PawnAdvanceScorer;

impl PawnAdvanceScorer {
    const OFFICERS: [PieceKind; 5] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    fn pawn_advance(position: &Position, color: Color) -> i32 {
        squares_of(position.bitboard(Piece::new(color, PieceKind::Pawn)))
            .map(|square| match color {
                Color::White => rank_of(square) as i32,
                Color::Black => 7 - rank_of(square) as i32,
            })
            .sum()
    }
}

impl BoardScorer for PawnAdvanceScorer {
    fn score(&self, position: &Position) -> i32 {
        let white_minus_black = MaterialScorer::balance(position, &Self::OFFICERS)
            + Self::pawn_advance(position, Color::White)
            - Self::pawn_advance(position, Color::Black);
        from_side_to_move(position, white_minus_black)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationStrategy {
    Material,
    #[default]
    MaterialPawnAdvance,
}

impl EvaluationStrategy {
    pub fn scorer(self) -> Box<dyn BoardScorer> {
        match self {
            Self::Material => Box::new(MaterialScorer),
            Self::MaterialPawnAdvance => Box::new(PawnAdvanceScorer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::zobrist::ZobristHasher;

    fn fen(text: &str) -> Position {
        Position::from_fen(text, &ZobristHasher::default()).expect("FEN should parse")
    }

    #[test]
    fn start_position_is_balanced_under_both_strategies() {
        let position = Position::new_game(&ZobristHasher::default());
        assert_eq!(MaterialScorer.score(&position), 0);
        assert_eq!(PawnAdvanceScorer.score(&position), 0);
    }

    #[test]
    fn material_counts_white_minus_black_for_side_to_move() {
        // White: queen + bishop, Black: rook + knight => 9 + 3 - 5 - 3 = 4
        let white = fen("4k3/8/8/8/8/8/6rn/4KBQ1 w - - 0 1");
        let black = fen("4k3/8/8/8/8/8/6rn/4KBQ1 b - - 0 1");
        assert_eq!(MaterialScorer.score(&white), 4);
        assert_eq!(MaterialScorer.score(&black), -4);
    }

    #[test]
    fn advanced_pawns_are_worth_more() {
        let home = fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        let far = fen("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(PawnAdvanceScorer.score(&home), 1);
        assert_eq!(PawnAdvanceScorer.score(&far), 6);
        assert_eq!(MaterialScorer.score(&far), 1);

        // Black pawn on e2 is one step from promotion.
        let black_far = fen("4k3/8/8/8/8/8/4p3/4K3 b - - 0 1");
        assert_eq!(PawnAdvanceScorer.score(&black_far), 6);
    }

    #[test]
    fn strategy_selects_scorer() {
        let position = fen("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(EvaluationStrategy::default(), EvaluationStrategy::MaterialPawnAdvance);
        assert_eq!(EvaluationStrategy::Material.scorer().score(&position), 1);
        assert_eq!(
            EvaluationStrategy::MaterialPawnAdvance.scorer().score(&position),
            6
        );
    }
}
