//! Disc-differential utility
//!
//! The static evaluation shared by both search strategies: the number of
//! discs owned by `color` minus the number owned by its opponent.

use crate::board::{Board, Color};

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate more discs for `color`
/// - Negative values indicate more discs for the opponent
/// - The magnitude never exceeds the number of squares
///
/// # Arguments
/// * `board` - The board to score
/// * `color` - The color to evaluate for
#[must_use]
#[inline]
pub fn compute_utility(board: &Board, color: Color) -> i32 {
    let (dark, light) = board.score();
    let (own, opp) = match color {
        Color::Dark => (dark, light),
        Color::Light => (light, dark),
    };
    own as i32 - opp as i32
}
