//! Game end detection
//!
//! The game is over when neither side has a legal placement. The side with
//! more discs wins; equal counts are a draw.

use crate::board::{Board, Color};

use super::moves::has_legal_move;

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// Check if neither side can move
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Color::Dark) && !has_legal_move(board, Color::Light)
}

/// Side with more discs, `None` on equal counts.
///
/// Does not check whether the game is actually over.
pub fn leader(board: &Board) -> Option<Color> {
    let (dark, light) = board.score();
    match dark.cmp(&light) {
        std::cmp::Ordering::Greater => Some(Color::Dark),
        std::cmp::Ordering::Less => Some(Color::Light),
        std::cmp::Ordering::Equal => None,
    }
}

/// Outcome of the game if it has ended
pub fn outcome(board: &Board) -> Option<Outcome> {
    if !is_game_over(board) {
        return None;
    }
    Some(leader(board).map_or(Outcome::Draw, Outcome::Win))
}
