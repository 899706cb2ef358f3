//! Mapping from window pixels to board squares.

use crate::game_state::chess_types::Square;

/// Square under pixel `(x, y)` of a square board drawn `board_pixel_size`
/// pixels wide with a8 in the top-left corner. Points off the board, or an
/// empty board, give `None`.
pub fn square_from_pixel(x: i32, y: i32, board_pixel_size: u32) -> Option<Square> {
    if board_pixel_size == 0 || x < 0 || y < 0 {
        return None;
    }

    let cell = board_pixel_size as f32 / 8.0;
    let file = (x as f32 / cell).floor() as u32;
    let row = (y as f32 / cell).floor() as u32;
    if file > 7 || row > 7 {
        return None;
    }

    let rank = 7 - row;
    Some((rank * 8 + file) as Square)
}

#[cfg(test)]
mod tests {
    use super::square_from_pixel;

    #[test]
    fn corners_map_to_a8_and_h1() {
        assert_eq!(square_from_pixel(0, 0, 800), Some(56));
        assert_eq!(square_from_pixel(799, 799, 800), Some(7));
        assert_eq!(square_from_pixel(0, 799, 800), Some(0));
        assert_eq!(square_from_pixel(799, 0, 800), Some(63));
    }

    #[test]
    fn cell_boundaries() {
        // 100 px cells: x = 450 is the e-file, y = 650 the second rank.
        assert_eq!(square_from_pixel(450, 650, 800), Some(12));
        assert_eq!(square_from_pixel(99, 99, 800), Some(56));
        assert_eq!(square_from_pixel(100, 100, 800), Some(49));
    }

    #[test]
    fn fractional_cells_on_boards_not_divisible_by_eight() {
        // 62.5 px cells: x = 434 is still the g-file.
        assert_eq!(square_from_pixel(434, 0, 500), Some(62));
        assert_eq!(square_from_pixel(499, 499, 500), Some(7));
        assert_eq!(square_from_pixel(500, 0, 500), None);
        // The last pixel column of an 801 px board is the h-file.
        assert_eq!(square_from_pixel(800, 0, 801), Some(63));
    }

    #[test]
    fn off_board_points_are_rejected() {
        assert_eq!(square_from_pixel(-1, 10, 800), None);
        assert_eq!(square_from_pixel(10, 800, 800), None);
        assert_eq!(square_from_pixel(800, 10, 800), None);
        assert_eq!(square_from_pixel(3, 3, 0), None);
    }
}
