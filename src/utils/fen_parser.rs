//! FEN-to-Position parser.
//!
//! Fills the twelve bitboards, side to move, castling rights and en-passant
//! target. The halfmove and fullmove counters are accepted but not stored,
//! since the engine keeps no draw clocks. The hash is left at zero; callers
//! go through [`Position::from_fen`] to key it.

use crate::errors::FenError;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField { field: "board" })?;
    let side_part = parts.next().ok_or(FenError::MissingField { field: "side to move" })?;
    let castling_part = parts.next().ok_or(FenError::MissingField { field: "castling" })?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField { field: "en passant" })?;

    // Clocks are optional so that four-field EPD-style strings work too.
    for counter in parts.by_ref().take(2) {
        counter
            .parse::<u16>()
            .map_err(|_| FenError::Counter { value: counter.to_owned() })?;
    }
    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let mut position = Position::new_empty();
    parse_board(board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.en_passant_square = parse_en_passant_square(en_passant_part)?;

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = (7 - fen_rank_idx) as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::PieceChar { ch });
                }
                file += empty_count as u8;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(FenError::PieceChar { ch })?;
            if file >= 8 {
                return Err(FenError::RankWidth { rank: board_rank + 1 });
            }

            *position.bitboard_mut(piece) |= square_bit(board_rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::RankWidth { rank: board_rank + 1 });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::SideToMove { value: side_part.to_owned() }),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let flag = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FenError::CastlingChar { ch }),
        };
        Ok(rights | flag)
    })
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .ok_or_else(|| FenError::Square { value: en_passant_part.to_owned() })
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
