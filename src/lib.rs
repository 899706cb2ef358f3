//! Crate root module declarations for the bitchess engine.
//!
//! Bitboard position and rules, move generation with in-place make/unmake,
//! Zobrist hashing, alpha-beta search with a transposition table, and a
//! window-free game session for a presentation layer to drive.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod chess_move;
    pub mod leaper_moves;
    pub mod pawn_moves;
    pub mod ray_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod move_generator;
    pub mod move_ordering;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod interface {
    pub mod board_input;
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
}
