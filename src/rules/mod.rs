//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Flip rules (bracketing runs in eight directions)
//! - Legal move enumeration and pure move application
//! - Game end detection and winner

pub mod flip;
pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use flip::{count_flips, flips_for, has_flip};
pub use moves::{apply_move, has_legal_move, is_legal_move, legal_moves, try_apply_move};
pub use outcome::{is_game_over, leader, outcome, Outcome};
