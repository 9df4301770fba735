//! Flip rules for Othello
//!
//! A placement flips every straight run of opponent discs that is bracketed
//! on the far end by one of the mover's discs. All eight directions are
//! checked independently.

use crate::board::{Bitboard, Board, Color, Move};

/// Direction vectors for line checking (8 directions)
pub(crate) const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // ↖
    (-1, 0),  // ↑
    (-1, 1),  // ↗
    (0, -1),  // ←
    (0, 1),   // →
    (1, -1),  // ↙
    (1, 0),   // ↓
    (1, 1),   // ↘
];

/// Discs flipped along one direction if `color` plays at `mv`.
///
/// Walks from the square next to `mv` while the discs belong to the
/// opponent; the run counts only if it ends on a disc of `color`.
fn flips_in_direction(board: &Board, mv: Move, color: Color, dr: i32, dc: i32) -> Bitboard {
    let size = board.size();
    let own = board.discs(color);
    let opp = board.discs(color.opponent());

    let mut run = Bitboard::new();
    let mut r = mv.row as i32 + dr;
    let mut c = mv.col as i32 + dc;

    while Move::is_valid(r, c, size) {
        let cur = Move::new(r as u8, c as u8);
        if opp.get(cur) {
            run.set(cur);
        } else if own.get(cur) {
            return run;
        } else {
            break;
        }
        r += dr;
        c += dc;
    }

    Bitboard::new()
}

/// Find every disc that would flip if `color` placed at `mv`.
///
/// # Arguments
/// * `board` - Current board state
/// * `mv` - Square where the disc would be placed
/// * `color` - Color of the disc being placed
///
/// # Returns
/// Mask of flipped discs; empty when the square is occupied, off the board,
/// or brackets nothing.
pub fn flips_for(board: &Board, mv: Move, color: Color) -> Bitboard {
    if !board.contains(mv) || !board.is_empty(mv) {
        return Bitboard::new();
    }

    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &(dr, dc)| {
            acc | flips_in_direction(board, mv, color, dr, dc)
        })
}

/// Check whether a placement flips at least one disc.
///
/// Stops at the first bracketing direction.
#[inline]
pub fn has_flip(board: &Board, mv: Move, color: Color) -> bool {
    if !board.contains(mv) || !board.is_empty(mv) {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| !flips_in_direction(board, mv, color, dr, dc).is_empty())
}

/// Number of discs a placement would flip
#[inline]
pub fn count_flips(board: &Board, mv: Move, color: Color) -> u32 {
    flips_for(board, mv, color).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_flip_single_disc() {
        let board = Board::standard();
        let flips = flips_for(&board, Move::new(2, 3), Color::Dark);
        let flipped: Vec<Move> = flips.iter_ones().collect();
        assert_eq!(flipped, vec![Move::new(3, 3)]);
    }

    #[test]
    fn test_no_flip_without_bracket() {
        let board = Board::from_ascii(
            "
            ....
            .OO.
            ....
            ....
            ",
        )
        .unwrap();
        // Light run with no dark disc at the far end
        assert!(flips_for(&board, Move::new(1, 0), Color::Dark).is_empty());
        assert!(!has_flip(&board, Move::new(1, 0), Color::Dark));
    }

    #[test]
    fn test_long_run_and_multiple_directions() {
        let board = Board::from_ascii(
            "
            X...X
            .O.O.
            .....
            .....
            .....
            ",
        )
        .unwrap();
        // (2,2) brackets both diagonals upward
        let flips = flips_for(&board, Move::new(2, 2), Color::Dark);
        assert_eq!(flips.count(), 2);
        assert!(flips.get(Move::new(1, 1)));
        assert!(flips.get(Move::new(1, 3)));

        let row = Board::from_ascii("XOOO.").unwrap_err();
        assert!(matches!(row, crate::error::OthelloError::RaggedRow { .. }));

        let line = Board::from_ascii(
            "
            XOOO.
            .....
            .....
            .....
            .....
            ",
        )
        .unwrap();
        assert_eq!(count_flips(&line, Move::new(0, 4), Color::Dark), 3);
    }

    #[test]
    fn test_occupied_and_out_of_bounds() {
        let board = Board::standard();
        assert!(flips_for(&board, Move::new(3, 3), Color::Dark).is_empty());
        let small = Board::new(4).unwrap();
        assert!(!has_flip(&small, Move::new(5, 5), Color::Dark));
    }
}
