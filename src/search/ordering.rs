//! Move ordering by shallow static evaluation
//!
//! Children are sorted by the mover's own disc differential after the move,
//! best first. Exploring strong moves early tightens the alpha-beta window
//! sooner; the sort is stable, so equal scores keep row-major order.

use std::cmp::Reverse;

use crate::board::{Board, Color, Move};
use crate::eval::compute_utility;
use crate::rules::{apply_move, legal_moves};

/// Legal moves for `mover` paired with the resulting boards, best first.
///
/// Returns an empty vector when `mover` has to pass.
pub fn ordered_children(board: &Board, mover: Color) -> Vec<(Move, Board)> {
    let mut children: Vec<(Move, Board, i32)> = legal_moves(board, mover)
        .into_iter()
        .map(|mv| {
            let child = apply_move(board, mover, mv);
            (mv, child, compute_utility(&child, mover))
        })
        .collect();

    children.sort_by_key(|&(_, _, score)| Reverse(score));
    children.into_iter().map(|(mv, child, _)| (mv, child)).collect()
}
