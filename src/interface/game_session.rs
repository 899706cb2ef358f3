//! A game between a human player and the engine, without any window.
//!
//! The session owns the position, the Zobrist keys and the search engine.
//! A presentation layer draws `piece_bitboards`, highlights
//! `legal_destinations` for a clicked square, submits the player's move with
//! `play_move` and asks for the answer with `engine_reply`.

use tracing::{info, trace};

use crate::errors::{FenError, GameError, GameResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::move_generator::{legal_destinations, legal_moves_for_side};
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::{game_status, GameStatus, SearchConfig, SearchEngine, SearchReport};
use crate::search::zobrist::ZobristHasher;

pub struct GameSession {
    position: Position,
    hasher: ZobristHasher,
    engine: SearchEngine,
    status: GameStatus,
    moves_played: Vec<Move>,
}

impl GameSession {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_hasher(config, ZobristHasher::default())
    }

    pub fn with_hasher(config: SearchConfig, hasher: ZobristHasher) -> Self {
        let position = Position::new_game(&hasher);
        Self {
            position,
            hasher,
            engine: SearchEngine::new(config),
            status: GameStatus::Ongoing,
            moves_played: Vec::new(),
        }
    }

    /// Session starting from an arbitrary position.
    pub fn from_fen(fen: &str, config: SearchConfig) -> Result<Self, FenError> {
        let hasher = ZobristHasher::default();
        let mut position = Position::from_fen(fen, &hasher)?;
        let side = position.side_to_move;
        let status = game_status(&mut position, &hasher, side);
        Ok(Self {
            position,
            hasher,
            engine: SearchEngine::new(config),
            status,
            moves_played: Vec::new(),
        })
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn hasher(&self) -> &ZobristHasher {
        &self.hasher
    }

    #[inline]
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    pub fn moves_played(&self) -> &[Move] {
        &self.moves_played
    }

    #[inline]
    pub fn piece_bitboards(&self) -> [(Piece, Bitboard); 12] {
        self.position.piece_bitboards()
    }

    /// Legal targets of the piece on `square`; empty unless it belongs to the
    /// side to move and the game is still running.
    pub fn legal_destinations(&mut self, square: Square) -> Vec<Square> {
        if self.status.is_over() || self.position.color_at(square) != Some(self.side_to_move()) {
            return Vec::new();
        }
        legal_destinations(&mut self.position, &self.hasher, square)
    }

    /// Play the side to move's piece from `from` to `to` if that is a legal
    /// move, and return the opponent's status afterwards.
    pub fn play_move(&mut self, from: Square, to: Square) -> GameResult<GameStatus> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let side = self.side_to_move();
        let occupied = self
            .position
            .piece_at(from)
            .ok_or(GameError::EmptySquare { square: from })?;
        if occupied.piece.color != side {
            return Err(GameError::NotYourPiece { square: from });
        }

        let mut mv = legal_moves_for_side(&mut self.position, &self.hasher, side)
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .ok_or(GameError::IllegalMove { from, to })?;

        make_move(&mut self.position, &self.hasher, &mut mv);
        self.record(mv);
        Ok(self.status)
    }

    /// Let the engine move for the side to move.
    pub fn engine_reply(&mut self) -> GameResult<SearchReport> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let report = self.engine.choose_move(&mut self.position, &self.hasher);
        match report.best_move {
            Some(mv) => self.record(mv),
            None => self.status = report.status,
        }
        Ok(report)
    }

    fn record(&mut self, mv: Move) {
        let side = self.side_to_move();
        self.status = game_status(&mut self.position, &self.hasher, side);
        self.moves_played.push(mv);
        trace!(mv = %mv, status = ?self.status, ply = self.moves_played.len(), "move applied");

        if self.status.is_over() {
            info!(status = ?self.status, plies = self.moves_played.len(), "game over");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
