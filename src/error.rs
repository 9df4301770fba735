//! Error types for board construction and move validation
//!
//! The search itself is total over validated boards; these errors are raised
//! at the edges where untrusted input becomes a [`crate::Board`] or a
//! [`crate::Color`].

use crate::board::Move;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// Board dimension outside the supported range
    #[error("unsupported board size {0} (expected 1..=8, even for a starting position)")]
    BoardSize(usize),

    /// Row length does not match the number of rows
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Cell value other than 0, 1 or 2
    #[error("invalid cell value {0}")]
    InvalidCell(u8),

    /// Unknown character in a text diagram
    #[error("invalid board symbol {0:?}")]
    InvalidSymbol(char),

    /// Color value other than 1 (dark) or 2 (light)
    #[error("invalid color {0} (expected 1 for dark or 2 for light)")]
    InvalidColor(u8),

    /// Coordinates off the board
    #[error("move {0} is outside the board")]
    OutOfBounds(Move),

    /// Coordinates on the board but not a legal placement
    #[error("move {0} is not legal")]
    IllegalMove(Move),

    /// Unrecognized configuration value
    #[error("unknown {kind} {value:?}")]
    UnknownOption { kind: &'static str, value: String },
}

/// Result type for board operations
pub type OthelloResult<T> = Result<T, OthelloError>;
