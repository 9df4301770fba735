//! Depth-limited alpha-beta search with move ordering and a transposition cache
//!
//! Every node value is measured for the root player. Max nodes play the root
//! player's moves, min nodes the opponent's. Root moves are searched as min
//! nodes at level 0 and the search stops at `level == limit`, scoring the
//! board statically there.
//!
//! # Features
//!
//! - Children ordered by the mover's static utility, best first
//! - Cache probe before the horizon check, so a stored value short-circuits
//!   the whole subtree
//! - Every child value is cached as soon as it is known. Under
//!   `CachePolicy::DepthKeyed` a value that fell outside the child's window
//!   is kept as a bound and only reused when it decides a later window;
//!   `CachePolicy::BoardOnly` treats every value as exact
//! - Passes handled per [`PassRule`]
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Color};
//! use othello::search::Searcher;
//! use othello::SearchConfig;
//!
//! let mut searcher = Searcher::new(&SearchConfig { limit: 3, ..SearchConfig::default() });
//! let board = Board::standard();
//!
//! let result = searcher.select_move(&board, Color::Dark);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Color};
use crate::config::{CachePolicy, PassRule, SearchConfig};
use crate::eval::compute_utility;
use crate::rules::has_legal_move;

use super::cache::{Bound, CacheKey, CacheStats};
use super::ordering::ordered_children;
use super::{SearchResult, SearchStats, TranspositionCache, INF};

/// Alpha-beta searcher.
///
/// The searcher owns its transposition cache and keeps it across calls to
/// [`Searcher::select_move`]. For a new game, call `clear_cache()`.
#[derive(Debug, Clone)]
pub struct Searcher {
    cache: TranspositionCache,
    limit: u8,
    pass_rule: PassRule,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with an empty cache keyed per `config.cache_policy`.
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_cache(config, TranspositionCache::new(config.cache_policy))
    }

    /// Create a searcher around an existing cache. The cache keeps its own
    /// policy; `config.cache_policy` is ignored.
    #[must_use]
    pub fn with_cache(config: &SearchConfig, cache: TranspositionCache) -> Self {
        Self {
            cache,
            limit: config.limit,
            pass_rule: config.pass_rule,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn limit(&self) -> u8 {
        self.limit
    }

    /// Change the ply limit. Entries keyed by remaining depth stay valid;
    /// depth-oblivious entries from a shallower search may be reused.
    pub fn set_limit(&mut self, limit: u8) {
        self.limit = limit;
    }

    pub fn set_pass_rule(&mut self, pass_rule: PassRule) {
        self.pass_rule = pass_rule;
    }

    #[inline]
    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    #[inline]
    pub fn cache_mut(&mut self) -> &mut TranspositionCache {
        &mut self.cache
    }

    /// Get statistics about the transposition cache.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Clear the transposition cache.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Select the best move for `color`.
    ///
    /// Root moves are tried in static order, each with the full window, and
    /// the strictly greatest value wins, so the first of several equally good
    /// moves in that order is chosen. Returns a pass result without searching
    /// when `color` has no legal move.
    #[must_use]
    pub fn select_move(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let children = ordered_children(board, color);
        if children.is_empty() {
            return SearchResult::pass();
        }

        let mut best_move = None;
        let mut best_score = -INF;

        for (mv, child) in children {
            let score = self.alpha_beta(&child, color, false, -INF, INF, 0);
            let key = self.cache.key(&child, color, color.opponent(), self.limit);
            self.store(key, score, -INF, INF);
            log::debug!("alphabeta {} {} -> {} ({} nodes)", color.name(), mv, score, self.nodes);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
            stats: self.stats,
        }
    }

    /// Cache `value`, searched over `(alpha, beta)`, for `key`.
    #[inline]
    fn store(&mut self, key: CacheKey, value: i32, alpha: i32, beta: i32) {
        let bound = match self.cache.policy() {
            CachePolicy::DepthKeyed => Bound::classify(value, alpha, beta),
            CachePolicy::BoardOnly => Bound::Exact,
            CachePolicy::Disabled => return,
        };
        self.stats.cache_stores += 1;
        self.cache.store_bound(key, value, bound);
    }

    /// Alpha-beta over the subtree at `board`.
    ///
    /// # Arguments
    ///
    /// * `perspective` - Root player; every value is measured for this color
    /// * `maximizing` - Whether `perspective` is to move here
    /// * `alpha`, `beta` - Search window
    /// * `level` - Plies below the root move
    fn alpha_beta(
        &mut self,
        board: &Board,
        perspective: Color,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        level: u8,
    ) -> i32 {
        self.nodes += 1;

        let to_move = if maximizing { perspective } else { perspective.opponent() };
        let key = self.cache.key(board, perspective, to_move, self.limit.saturating_sub(level));

        self.stats.cache_probes += 1;
        if let Some(value) = self.cache.probe(&key, alpha, beta) {
            self.stats.cache_hits += 1;
            return value;
        }

        if level >= self.limit {
            self.stats.horizon_leaves += 1;
            return compute_utility(board, perspective);
        }

        let children = ordered_children(board, to_move);

        if children.is_empty() {
            if self.pass_rule == PassRule::PassAndContinue && has_legal_move(board, to_move.opponent()) {
                self.stats.passes += 1;
                return self.alpha_beta(board, perspective, !maximizing, alpha, beta, level + 1);
            }

            self.stats.terminals += 1;
            let utility = compute_utility(board, perspective);
            self.store(key, utility, -INF, INF);
            return utility;
        }

        let child_remaining = self.limit.saturating_sub(level + 1);
        let mut best = if maximizing { -INF } else { INF };

        for (i, (_, child)) in children.iter().enumerate() {
            let value = self.alpha_beta(child, perspective, !maximizing, alpha, beta, level + 1);
            let child_key = self.cache.key(child, perspective, to_move.opponent(), child_remaining);
            self.store(child_key, value, alpha, beta);

            if maximizing {
                best = best.max(value);
                if best >= beta {
                    self.record_cutoff(i);
                    return best;
                }
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                if best <= alpha {
                    self.record_cutoff(i);
                    return best;
                }
                beta = beta.min(best);
            }
        }

        best
    }

    #[inline]
    fn record_cutoff(&mut self, child_index: usize) {
        self.stats.cutoffs += 1;
        if child_index == 0 {
            self.stats.first_move_cutoffs += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use crate::rules::{apply_move, legal_moves};
    use crate::search::MinimaxSearcher;
    use proptest::prelude::*;

    fn config(limit: u8, cache_policy: CachePolicy) -> SearchConfig {
        SearchConfig {
            limit,
            cache_policy,
            ..SearchConfig::default()
        }
    }

    /// Compare alpha-beta against limited minimax with both caches off.
    fn assert_matches_minimax(board: &Board, color: Color, limit: u8) {
        let mut searcher = Searcher::new(&config(limit, CachePolicy::Disabled));
        let mut minimax = MinimaxSearcher::with_limit(Some(limit), PassRule::PassAndContinue);
        let mut cache = TranspositionCache::disabled();

        let ab = searcher.select_move(board, color);
        let mm = minimax.select_move(board, color, &mut cache);
        assert_eq!(ab.best_move.is_none(), mm.best_move.is_none());
        let Some(ab_move) = ab.best_move else {
            return;
        };
        assert_eq!(ab.score, mm.score, "root value differs on\n{board}");

        // Value of each root move as minimax sees it
        let root_values: Vec<(Move, i32)> = legal_moves(board, color)
            .into_iter()
            .map(|mv| {
                let child = apply_move(board, color, mv);
                (mv, -minimax.value(&child, color.opponent(), &mut cache))
            })
            .collect();

        let chosen = root_values.iter().find(|(mv, _)| *mv == ab_move).unwrap().1;
        assert_eq!(chosen, mm.score, "alpha-beta picked a worse move on\n{board}");

        let best_count = root_values.iter().filter(|(_, v)| *v == mm.score).count();
        if best_count == 1 {
            assert_eq!(ab.best_move, mm.best_move);
        }
    }

    #[test]
    fn test_opening_move_is_legal() {
        let mut searcher = Searcher::new(&SearchConfig::default());
        let board = Board::standard();

        let result = searcher.select_move(&board, Color::Dark);
        let expected = [Move::new(2, 3), Move::new(3, 2), Move::new(4, 5), Move::new(5, 4)];
        assert!(expected.contains(&result.best_move.unwrap()));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_deterministic_on_fresh_cache() {
        let board = apply_move(&Board::standard(), Color::Dark, Move::new(2, 3));

        let first = Searcher::new(&config(4, CachePolicy::DepthKeyed)).select_move(&board, Color::Light);
        let second = Searcher::new(&config(4, CachePolicy::DepthKeyed)).select_move(&board, Color::Light);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_transparent_on_repeat() {
        let board = apply_move(&Board::standard(), Color::Dark, Move::new(3, 2));
        let mut searcher = Searcher::new(&config(4, CachePolicy::DepthKeyed));

        let cold = searcher.select_move(&board, Color::Light);
        assert!(!searcher.cache().is_empty());
        let warm = searcher.select_move(&board, Color::Light);

        assert_eq!(cold.best_move, warm.best_move);
        assert_eq!(cold.score, warm.score);
        assert!(warm.nodes < cold.nodes);
        assert!(warm.stats.cache_hits > 0);
    }

    #[test]
    fn test_matches_minimax_opening() {
        assert_matches_minimax(&Board::standard(), Color::Dark, 3);
        let board = apply_move(&Board::standard(), Color::Dark, Move::new(4, 5));
        assert_matches_minimax(&board, Color::Light, 3);
    }

    #[test]
    fn test_matches_minimax_small_boards() {
        assert_matches_minimax(&Board::new(6).unwrap(), Color::Dark, 4);
        // Deep enough to reach the end of every 4x4 game
        assert_matches_minimax(&Board::new(4).unwrap(), Color::Dark, 16);
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let board = Board::new(6).unwrap();
        let mut searcher = Searcher::new(&config(4, CachePolicy::Disabled));
        let mut minimax = MinimaxSearcher::with_limit(Some(4), PassRule::PassAndContinue);
        let mut cache = TranspositionCache::disabled();

        let ab = searcher.select_move(&board, Color::Dark);
        let mm = minimax.select_move(&board, Color::Dark, &mut cache);
        assert!(ab.nodes < mm.nodes);
        assert!(ab.stats.cutoffs > 0);
    }

    #[test]
    fn test_pass_returns_none_without_search() {
        let board = Board::from_ascii(
            "
            XXXX
            XXXX
            XXXX
            XXX.
            ",
        )
        .unwrap();
        let mut searcher = Searcher::new(&SearchConfig::default());

        let result = searcher.select_move(&board, Color::Light);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
        assert!(searcher.cache().is_empty());
    }

    #[test]
    fn test_continues_through_pass() {
        // Whichever capture Dark makes, Light must pass and Dark takes the other
        let board = Board::from_ascii(
            "
            XO...
            .....
            .....
            .....
            XO...
            ",
        )
        .unwrap();

        let mut searcher = Searcher::new(&config(3, CachePolicy::Disabled));
        let result = searcher.select_move(&board, Color::Dark);
        assert_eq!(result.best_move, Some(Move::new(0, 2)));
        assert_eq!(result.score, 6);
        assert!(result.stats.passes > 0);
    }

    #[test]
    fn test_terminal_rule_stops_at_pass() {
        let board = Board::from_ascii(
            "
            XO...
            .....
            .....
            .....
            XO...
            ",
        )
        .unwrap();
        let mut searcher = Searcher::new(&SearchConfig { limit: 3, ..SearchConfig::legacy() });

        // Light cannot answer either capture, so the board is scored right there
        let result = searcher.select_move(&board, Color::Dark);
        assert_eq!(result.best_move, Some(Move::new(0, 2)));
        assert_eq!(result.score, 3);
        assert_eq!(result.stats.passes, 0);
        assert!(result.stats.terminals > 0);

        let mut continuing = Searcher::new(&config(3, CachePolicy::BoardOnly));
        assert!(continuing.select_move(&board, Color::Dark).score > result.score);
    }

    #[test]
    fn test_board_only_reuses_shallow_value() {
        let board = Board::standard();
        let child = apply_move(&board, Color::Dark, Move::new(5, 4));

        for limit in [0, 3] {
            let mut searcher = Searcher::new(&SearchConfig { limit, ..SearchConfig::legacy() });
            let key = searcher.cache().key(&child, Color::Dark, Color::Light, 0);
            searcher.cache_mut().store(key, 60);

            // The stored value answers before the ply cutoff is checked
            let result = searcher.select_move(&board, Color::Dark);
            assert_eq!(result.best_move, Some(Move::new(5, 4)));
            assert_eq!(result.score, 60);
            assert!(result.stats.cache_hits > 0);
        }
    }

    #[test]
    fn test_depth_keyed_ignores_other_depths() {
        let board = Board::standard();
        let child = apply_move(&board, Color::Dark, Move::new(5, 4));
        let mut searcher = Searcher::new(&config(3, CachePolicy::DepthKeyed));

        let key = searcher.cache().key(&child, Color::Dark, Color::Light, 1);
        searcher.cache_mut().store(key, 60);

        let result = searcher.select_move(&board, Color::Dark);
        assert!(result.score < 60);
    }

    #[test]
    fn test_depth_keyed_matches_uncached_through_game() {
        // One searcher keeps its cache for a whole game
        let mut cached = Searcher::new(&config(4, CachePolicy::DepthKeyed));
        let mut board = Board::standard();
        let mut color = Color::Dark;

        for _ in 0..24 {
            let warm = cached.select_move(&board, color);
            let cold = Searcher::new(&config(4, CachePolicy::Disabled)).select_move(&board, color);
            assert_eq!(warm.best_move, cold.best_move, "move differs on\n{board}");
            assert_eq!(warm.score, cold.score, "value differs on\n{board}");

            match warm.best_move {
                Some(mv) => board = apply_move(&board, color, mv),
                None if !has_legal_move(&board, color.opponent()) => break,
                None => {}
            }
            color = color.opponent();
        }
    }

    #[test]
    fn test_legacy_config_selects_legal_move() {
        let board = Board::standard();
        let mut searcher = Searcher::new(&SearchConfig { limit: 3, ..SearchConfig::legacy() });

        let result = searcher.select_move(&board, Color::Dark);
        assert!(legal_moves(&board, Color::Dark).contains(&result.best_move.unwrap()));
        assert_eq!(searcher.cache().policy(), CachePolicy::BoardOnly);
    }

    #[test]
    fn test_cache_stats_after_search() {
        let mut searcher = Searcher::new(&config(3, CachePolicy::DepthKeyed));
        let result = searcher.select_move(&Board::standard(), Color::Dark);

        let stats = searcher.cache_stats();
        assert!(stats.entries > 0);
        assert_eq!(stats.stores, result.stats.cache_stores);
    }

    #[test]
    fn test_clear_cache() {
        let mut searcher = Searcher::new(&config(3, CachePolicy::DepthKeyed));
        let _ = searcher.select_move(&Board::standard(), Color::Dark);
        assert!(searcher.cache_stats().entries > 0);

        searcher.clear_cache();
        assert_eq!(searcher.cache_stats().entries, 0);
    }

    #[test]
    fn test_disabled_cache_never_hits() {
        let mut searcher = Searcher::new(&config(3, CachePolicy::Disabled));
        let result = searcher.select_move(&Board::standard(), Color::Dark);
        assert_eq!(result.stats.cache_hits, 0);
        assert_eq!(result.stats.cache_stores, 0);
    }

    /// Reach a midgame position by following `picks` through the legal
    /// move lists, passing when needed.
    fn playout(size: usize, picks: &[u8]) -> (Board, Color) {
        let mut board = Board::new(size).unwrap();
        let mut color = Color::Dark;
        for &pick in picks {
            let moves = legal_moves(&board, color);
            if moves.is_empty() {
                if !has_legal_move(&board, color.opponent()) {
                    break;
                }
            } else {
                board = apply_move(&board, color, moves[pick as usize % moves.len()]);
            }
            color = color.opponent();
        }
        (board, color)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_matches_minimax_midgame(picks in proptest::collection::vec(any::<u8>(), 0..16)) {
            let (board, color) = playout(6, &picks);
            assert_matches_minimax(&board, color, 3);
        }

        #[test]
        fn prop_depth_keyed_matches_uncached(picks in proptest::collection::vec(any::<u8>(), 12..24)) {
            let (board, color) = playout(8, &picks);

            let mut cached = Searcher::new(&config(4, CachePolicy::DepthKeyed));
            let warm = cached.select_move(&board, color);
            let cold = Searcher::new(&config(4, CachePolicy::Disabled)).select_move(&board, color);
            prop_assert_eq!(warm.best_move, cold.best_move);
            prop_assert_eq!(warm.score, cold.score);

            // A repeat answers from the cache without changing the result
            let again = cached.select_move(&board, color);
            prop_assert_eq!(again.best_move, cold.best_move);
            prop_assert_eq!(again.score, cold.score);
        }
    }
}
