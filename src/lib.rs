//! Othello (Reversi) move-selection engine
//!
//! Given a board and the side to move, the engine picks the placement that
//! maximizes the mover's final disc differential under adversarial play:
//! - Boards up to 8x8, standard capture rules in all eight directions
//! - Utility: own discs minus opponent discs
//! - Exhaustive minimax, or depth-limited alpha-beta with static move
//!   ordering and a transposition cache
//! - Passes modelled as `None`
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Flips, legal moves, move application, game end
//! - [`eval`]: Disc-differential utility
//! - [`search`]: Transposition cache, move ordering, minimax, alpha-beta
//! - [`engine`]: Move selector integrating both searchers
//! - [`protocol`]: Line protocol for an external game controller
//!
//! # Quick Start
//!
//! ```
//! use othello::{Board, Color, OthelloEngine, SearchConfig};
//!
//! // Shallow limit for a fast doc test
//! let mut engine = OthelloEngine::with_config(SearchConfig { limit: 3, ..SearchConfig::default() });
//! let mut board = Board::standard();
//!
//! if let Some(mv) = engine.get_move(&board, Color::Dark) {
//!     board = othello::rules::apply_move(&board, Color::Dark, mv);
//!     println!("Dark plays at ({}, {})", mv.row, mv.col);
//! }
//! assert_eq!(board.score(), (4, 1));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Move, BOARD_SIZE};
pub use config::{CachePolicy, PassRule, SearchConfig, Strategy};
pub use engine::{MoveResult, OthelloEngine};
pub use error::{OthelloError, OthelloResult};
