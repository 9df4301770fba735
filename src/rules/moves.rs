//! Legal move enumeration and move application

use crate::board::{Board, Color, Move};
use crate::error::OthelloError;

use super::flip::{flips_for, has_flip};

/// Check if `color` may place at `mv`.
#[inline]
pub fn is_legal_move(board: &Board, mv: Move, color: Color) -> bool {
    has_flip(board, mv, color)
}

/// All legal placements for `color`, in row-major order.
///
/// An empty vector means the side has to pass.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .empties()
        .iter_ones()
        .filter(|&mv| has_flip(board, mv, color))
        .collect()
}

/// Check whether `color` has at least one legal placement.
#[inline]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.empties().iter_ones().any(|mv| has_flip(board, mv, color))
}

/// Return the board after `color` plays `mv`.
///
/// Pure: the input board is untouched. The move is assumed legal; an
/// illegal square gets the disc placed with nothing flipped. Use
/// [`try_apply_move`] for untrusted input.
#[must_use]
pub fn apply_move(board: &Board, color: Color, mv: Move) -> Board {
    let flips = flips_for(board, mv, color);
    let mut next = *board;
    next.place_disc(mv, color);
    for cell in flips.iter_ones() {
        next.flip(cell, color);
    }
    next
}

/// Validated variant of [`apply_move`].
pub fn try_apply_move(board: &Board, color: Color, mv: Move) -> Result<Board, OthelloError> {
    if !board.contains(mv) {
        return Err(OthelloError::OutOfBounds(mv));
    }
    if !is_legal_move(board, mv, color) {
        return Err(OthelloError::IllegalMove(mv));
    }
    Ok(apply_move(board, color, mv))
}
