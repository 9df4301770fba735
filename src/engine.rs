//! Move selection engine
//!
//! This module provides the engine that owns the search configuration and
//! both searchers, and turns a `(Board, Color)` pair into a move:
//!
//! 1. **Pass**: no legal move, return `None` without searching
//! 2. **Alpha-Beta** (default): depth-limited search with move ordering and
//!    the transposition cache
//! 3. **Minimax**: exhaustive search, optionally capped by `minimax_limit`
//!
//! # Example
//!
//! ```
//! use othello::{Board, Color, OthelloEngine, SearchConfig};
//!
//! // Use a shallow limit for a fast example
//! let mut engine = OthelloEngine::with_config(SearchConfig { limit: 3, ..SearchConfig::default() });
//! let board = Board::standard();
//!
//! let result = engine.get_move_with_stats(&board, Color::Dark);
//! println!("Best move: {:?}", result.best_move);
//! println!("Strategy: {}", result.strategy);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Color, Move};
use crate::config::{CachePolicy, PassRule, SearchConfig, Strategy};
use crate::rules::has_legal_move;
use crate::search::{CacheStats, MinimaxSearcher, SearchResult, SearchStats, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found; `None` means pass
    pub best_move: Option<Move>,
    /// Value of the move for the mover
    pub score: i32,
    /// Strategy that produced the move
    pub strategy: Strategy,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, strategy: Strategy, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            strategy,
            time_ms,
            nodes: result.nodes,
            stats: result.stats,
        }
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.best_move.is_none()
    }
}

/// Othello move selector.
///
/// Holds the alpha-beta searcher (which owns the transposition cache) and a
/// minimax searcher that borrows the same cache. The cache persists across
/// moves; call `clear_cache()` for a new game.
///
/// # Example
///
/// ```
/// use othello::{Board, Color, OthelloEngine, SearchConfig, Strategy};
///
/// let mut engine = OthelloEngine::with_config(SearchConfig {
///     strategy: Strategy::Minimax,
///     ..SearchConfig::default()
/// });
///
/// // Exhaustive search is fine on a 4x4 board
/// let board = Board::new(4).unwrap();
/// if let Some(mv) = engine.get_move(&board, Color::Dark) {
///     println!("Play at ({}, {})", mv.row, mv.col);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OthelloEngine {
    config: SearchConfig,
    searcher: Searcher,
    minimax: MinimaxSearcher,
}

impl OthelloEngine {
    /// Create an engine with the default configuration (alpha-beta, limit 5,
    /// depth-keyed cache, passes continue the game).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            searcher: Searcher::new(&config),
            minimax: MinimaxSearcher::with_limit(config.minimax_limit, config.pass_rule),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the best move for the given position, or `None` to pass.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics, using the configured
    /// strategy.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Color) -> MoveResult {
        match self.config.strategy {
            Strategy::AlphaBeta => self.select_move_alphabeta(board, color),
            Strategy::Minimax => self.select_move_minimax(board, color),
        }
    }

    /// Select a move by minimax, writing terminal utilities into the shared
    /// cache.
    #[must_use]
    pub fn select_move_minimax(&mut self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();
        let result = self.minimax.select_move(board, color, self.searcher.cache_mut());
        self.finish(result, Strategy::Minimax, color, start)
    }

    /// Select a move by alpha-beta.
    #[must_use]
    pub fn select_move_alphabeta(&mut self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.select_move(board, color);
        self.finish(result, Strategy::AlphaBeta, color, start)
    }

    fn finish(&self, result: SearchResult, strategy: Strategy, color: Color, start: Instant) -> MoveResult {
        let time_ms = start.elapsed().as_millis() as u64;
        let result = MoveResult::from_search(result, strategy, time_ms);

        match result.best_move {
            Some(mv) => log::info!(
                "{} plays {} by {} (score {}, {} nodes, {}ms, cache hit {:.1}%)",
                color.name(),
                mv,
                strategy,
                result.score,
                result.nodes,
                time_ms,
                result.stats.cache_hit_rate()
            ),
            None => log::info!("{} has no legal move and passes", color.name()),
        }

        result
    }

    /// Set the alpha-beta ply limit.
    pub fn set_limit(&mut self, limit: u8) {
        self.config.limit = limit;
        self.searcher.set_limit(limit);
    }

    #[must_use]
    pub fn limit(&self) -> u8 {
        self.config.limit
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.config.strategy = strategy;
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Change the cache keying policy. Existing entries are dropped when the
    /// policy actually changes.
    pub fn set_cache_policy(&mut self, policy: CachePolicy) {
        self.config.cache_policy = policy;
        self.searcher.cache_mut().set_policy(policy);
    }

    pub fn set_pass_rule(&mut self, pass_rule: PassRule) {
        self.config.pass_rule = pass_rule;
        self.searcher.set_pass_rule(pass_rule);
        self.minimax.set_pass_rule(pass_rule);
    }

    pub fn set_minimax_limit(&mut self, limit: Option<u8>) {
        self.config.minimax_limit = limit;
        self.minimax.set_limit(limit);
    }

    /// Clear the transposition cache.
    ///
    /// Call this when starting a new game.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_cache();
    }

    /// Get transposition cache statistics.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.searcher.cache_stats()
    }

    /// Whether `color` must pass on `board`
    #[inline]
    pub fn must_pass(board: &Board, color: Color) -> bool {
        !has_legal_move(board, color)
    }
}

impl Default for OthelloEngine {
    fn default() -> Self {
        Self::new()
    }
}
