//! Fixed-depth negamax alpha-beta over a single mutable `Position`.
//!
//! Every node probes the transposition table by the running Zobrist hash,
//! generates pseudo-legal moves ordered by MVV-LVA, and filters self-check
//! with a trial `make_move`. The root (`choose_move`) searches one ply more
//! than the configured depth and commits its best move to the position.
//!
//! Under the default `ProbePolicy::DepthOnly` a stored score is reused
//! whenever it was searched at least as deep, regardless of the window it
//! was produced under. Scores can therefore be off by a bound; the
//! `RespectBounds` policy only reuses entries the current window allows.

use std::time::Instant;

use tracing::{debug, info};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::{all_moves_for_side, has_legal_move};
use crate::move_generation::move_ordering::order_moves;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, EvaluationStrategy};
use crate::search::transposition_table::{Bound, TranspositionTable, TtEntry, TtStats};
use crate::search::zobrist::ZobristHasher;

pub const MATE_SCORE: i32 = 10_000;
pub const INFINITY: i32 = 100_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProbePolicy {
    /// Reuse any entry searched at least as deep.
    #[default]
    DepthOnly,
    /// Reuse exact entries, and bounds only when they already decide the
    /// current window.
    RespectBounds,
}

impl ProbePolicy {
    #[inline]
    fn accepts(self, entry: TtEntry, alpha: i32, beta: i32) -> bool {
        match self {
            Self::DepthOnly => true,
            Self::RespectBounds => match entry.bound {
                Bound::Exact => true,
                Bound::Lower => entry.score >= beta,
                Bound::Upper => entry.score <= alpha,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each root move.
    pub depth: u8,
    /// The table is cleared after a root search that leaves more entries
    /// than this.
    pub tt_entry_limit: usize,
    pub probe_policy: ProbePolicy,
    pub evaluation: EvaluationStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 6,
            tt_entry_limit: 100_000,
            probe_policy: ProbePolicy::DepthOnly,
            evaluation: EvaluationStrategy::MaterialPawnAdvance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Checkmate | Self::Stalemate)
    }
}

/// Status of the game from the point of view of `side`, who is to move.
pub fn game_status(position: &mut Position, hasher: &ZobristHasher, side: Color) -> GameStatus {
    let in_check = is_in_check(position, side);
    match (in_check, has_legal_move(position, hasher, side)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_cutoffs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// The committed move, with the snapshots needed to unmake it.
    pub best_move: Option<Move>,
    pub score: i32,
    /// Status of the side to move after the search.
    pub status: GameStatus,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub tt_stats: TtStats,
}

pub struct SearchEngine {
    config: SearchConfig,
    table: TranspositionTable,
    scorer: Box<dyn BoardScorer>,
    stats: SearchStats,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, config.evaluation.scorer())
    }

    /// Engine with a custom evaluation; `config.evaluation` is ignored.
    pub fn with_scorer(config: SearchConfig, scorer: Box<dyn BoardScorer>) -> Self {
        Self {
            config,
            table: TranspositionTable::new(),
            scorer,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn evaluate(&self, position: &Position) -> i32 {
        self.scorer.score(position)
    }

    /// Negamax score of `position` for `side`, which must be the side to
    /// move. The position is restored before returning.
    pub fn alpha_beta(
        &mut self,
        position: &mut Position,
        hasher: &ZobristHasher,
        depth: u8,
        side: Color,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        debug_assert_eq!(side, position.side_to_move);
        self.stats.nodes += 1;
        let alpha_orig = alpha;

        if let Some(entry) = self.table.probe(position.hash) {
            if entry.depth >= depth && self.config.probe_policy.accepts(entry, alpha, beta) {
                self.stats.tt_cutoffs += 1;
                return entry.score;
            }
        }

        if depth == 0 {
            let score = self.evaluate(position);
            self.table.store(
                position.hash,
                TtEntry {
                    score,
                    depth: 0,
                    bound: Bound::Exact,
                },
            );
            return score;
        }

        let mut moves = all_moves_for_side(position, side);
        order_moves(&mut moves);

        let mut best = -INFINITY;
        let mut found_legal = false;

        for mut mv in moves {
            let was_promotion = make_move(position, hasher, &mut mv);
            if !is_in_check(position, side) {
                found_legal = true;
                let score =
                    -self.alpha_beta(position, hasher, depth - 1, side.opposite(), -beta, -alpha);
                best = best.max(score);
                alpha = alpha.max(score);
            }
            unmake_move(position, was_promotion, &mv);

            if alpha >= beta {
                if self.config.probe_policy == ProbePolicy::RespectBounds {
                    self.table.store(
                        position.hash,
                        TtEntry {
                            score: best,
                            depth,
                            bound: Bound::Lower,
                        },
                    );
                }
                return best;
            }
        }

        if !found_legal {
            return terminal_score(position, side, depth);
        }

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else {
            Bound::Exact
        };
        self.table.store(
            position.hash,
            TtEntry {
                score: best,
                depth,
                bound,
            },
        );
        best
    }

    /// Search every legal move of the side to move `config.depth` plies
    /// deep, commit the best one to `position` and report the resulting
    /// status of the opponent. With no legal move nothing is committed.
    pub fn choose_move(&mut self, position: &mut Position, hasher: &ZobristHasher) -> SearchReport {
        let started_at = Instant::now();
        let nodes_before = self.stats.nodes;
        let side = position.side_to_move;
        let depth = self.config.depth;

        let mut moves = all_moves_for_side(position, side);
        order_moves(&mut moves);

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mut mv in moves {
            let was_promotion = make_move(position, hasher, &mut mv);
            if !is_in_check(position, side) {
                let score =
                    -self.alpha_beta(position, hasher, depth, side.opposite(), -beta, -alpha);
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((mv, score));
                }
                alpha = alpha.max(score);
            }
            unmake_move(position, was_promotion, &mv);
        }

        let (best_move, score, status) = match best {
            Some((mut mv, score)) => {
                make_move(position, hasher, &mut mv);
                let status = game_status(position, hasher, side.opposite());
                (Some(mv), score, status)
            }
            None => {
                let score = terminal_score(position, side, depth.saturating_add(1));
                (None, score, game_status(position, hasher, side))
            }
        };

        let tt_stats = self.table.stats();
        let tt_len = self.table.len();
        if tt_len > self.config.tt_entry_limit {
            info!(
                entries = tt_len,
                limit = self.config.tt_entry_limit,
                "transposition table over limit; cleared"
            );
            self.table.clear();
        }

        let elapsed_ms = started_at.elapsed().as_millis() as u64;
        let nodes = self.stats.nodes - nodes_before;
        debug!(
            depth = depth as u32 + 1,
            nodes,
            tt_hits = tt_stats.hits,
            tt_entries = tt_len,
            elapsed_ms,
            best = %best_move.map(|mv| mv.to_string()).unwrap_or_else(|| "none".to_owned()),
            score,
            "root search finished"
        );

        SearchReport {
            best_move,
            score,
            status,
            nodes,
            elapsed_ms,
            tt_stats,
        }
    }
}

/// Score of a node with no legal move: a mate is worth more the closer it
/// is to the root, a stalemate is a draw.
#[inline]
fn terminal_score(position: &Position, side: Color, depth: u8) -> i32 {
    if is_in_check(position, side) {
        -(MATE_SCORE + depth as i32)
    } else {
        0
    }
}
