//! Exhaustive minimax search
//!
//! Max nodes play the root player's moves, min nodes play the opponent's,
//! and every leaf is scored from the root player's perspective. Without a
//! ply limit the recursion runs to the end of the game, which is only
//! practical on small boards or late positions.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Color};
//! use othello::search::{MinimaxSearcher, TranspositionCache};
//! use othello::PassRule;
//!
//! let board = Board::new(4).unwrap();
//! let mut minimax = MinimaxSearcher::new(PassRule::PassAndContinue);
//! let mut cache = TranspositionCache::disabled();
//!
//! let result = minimax.select_move(&board, Color::Dark, &mut cache);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Color};
use crate::config::{CachePolicy, PassRule};
use crate::eval::compute_utility;
use crate::rules::{apply_move, has_legal_move, legal_moves};

use super::{SearchResult, SearchStats, TranspositionCache, INF};

/// Minimax searcher. Holds per-search counters only; the cache is borrowed
/// per call so the engine can share its alpha-beta cache.
#[derive(Debug, Clone)]
pub struct MinimaxSearcher {
    limit: Option<u8>,
    pass_rule: PassRule,
    nodes: u64,
    stats: SearchStats,
}

impl MinimaxSearcher {
    /// Unbounded minimax.
    #[must_use]
    pub fn new(pass_rule: PassRule) -> Self {
        Self::with_limit(None, pass_rule)
    }

    /// Minimax cut off at `limit` plies below each root move, scored with
    /// the same level convention as the alpha-beta searcher.
    #[must_use]
    pub fn with_limit(limit: Option<u8>, pass_rule: PassRule) -> Self {
        Self {
            limit,
            pass_rule,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn limit(&self) -> Option<u8> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<u8>) {
        self.limit = limit;
    }

    pub fn set_pass_rule(&mut self, pass_rule: PassRule) {
        self.pass_rule = pass_rule;
    }

    /// Pick the root move with the strictly greatest min-node value.
    ///
    /// Moves are tried in row-major order, so the first of several equally
    /// good moves wins. Returns a pass result without searching when `color`
    /// has no legal move.
    pub fn select_move(
        &mut self,
        board: &Board,
        color: Color,
        cache: &mut TranspositionCache,
    ) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return SearchResult::pass();
        }

        let mut best_move = None;
        let mut best_score = -INF;

        for mv in moves {
            let child = apply_move(board, color, mv);
            let score = self.minimax(&child, color, false, 0, cache);
            log::debug!("minimax {} {} -> {} ({} nodes)", color.name(), mv, score, self.nodes);

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

    /// Minimax value of `board` with `color` to move, measured for `color`.
    pub fn value(&mut self, board: &Board, color: Color, cache: &mut TranspositionCache) -> i32 {
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.minimax(board, color, true, 0, cache)
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    fn remaining(&self, level: u8) -> u8 {
        self.limit.map_or(u8::MAX, |limit| limit.saturating_sub(level))
    }

    fn minimax(
        &mut self,
        board: &Board,
        perspective: Color,
        maximizing: bool,
        level: u8,
        cache: &mut TranspositionCache,
    ) -> i32 {
        self.nodes += 1;

        if self.limit.is_some_and(|limit| level >= limit) {
            self.stats.horizon_leaves += 1;
            return compute_utility(board, perspective);
        }

        let to_move = if maximizing { perspective } else { perspective.opponent() };
        let moves = legal_moves(board, to_move);

        if moves.is_empty() {
            if self.pass_rule == PassRule::PassAndContinue && has_legal_move(board, to_move.opponent()) {
                self.stats.passes += 1;
                return self.minimax(board, perspective, !maximizing, level.saturating_add(1), cache);
            }

            self.stats.terminals += 1;
            let utility = compute_utility(board, perspective);
            let key = cache.key(board, perspective, to_move, self.remaining(level));
            if cache.policy() != CachePolicy::Disabled {
                self.stats.cache_stores += 1;
            }
            cache.store(key, utility);
            return utility;
        }

        let mut best = if maximizing { -INF } else { INF };
        for mv in moves {
            let child = apply_move(board, to_move, mv);
            let value = self.minimax(&child, perspective, !maximizing, level.saturating_add(1), cache);
            if maximizing {
                best = best.max(value);
            } else {
                best = best.min(value);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    /// Game-theoretic value by plain enumeration, written independently of
    /// the searcher: the side to move maximizes its own differential.
    fn brute_force(board: &Board, to_move: Color) -> i32 {
        let moves = legal_moves(board, to_move);
        if moves.is_empty() {
            if !has_legal_move(board, to_move.opponent()) {
                return compute_utility(board, to_move);
            }
            return -brute_force(board, to_move.opponent());
        }
        moves
            .into_iter()
            .map(|mv| -brute_force(&apply_move(board, to_move, mv), to_move.opponent()))
            .max()
            .unwrap()
    }

    #[test]
    fn test_matches_brute_force_on_4x4() {
        let board = Board::new(4).unwrap();
        let mut searcher = MinimaxSearcher::new(PassRule::PassAndContinue);
        let mut cache = TranspositionCache::disabled();

        let result = searcher.select_move(&board, Color::Dark, &mut cache);
        let expected = brute_force(&board, Color::Dark);
        assert_eq!(result.score, expected);

        // The chosen move must realize that value
        let mv = result.best_move.unwrap();
        let child = apply_move(&board, Color::Dark, mv);
        assert_eq!(-brute_force(&child, Color::Light), expected);
    }

    #[test]
    fn test_value_matches_brute_force_midgame_4x4() {
        let board = Board::from_ascii(
            "
            .X..
            .XX.
            .XO.
            ....
            ",
        )
        .unwrap();
        let mut searcher = MinimaxSearcher::new(PassRule::PassAndContinue);
        let mut cache = TranspositionCache::disabled();
        for color in [Color::Dark, Color::Light] {
            assert_eq!(searcher.value(&board, color, &mut cache), brute_force(&board, color));
        }
    }

    #[test]
    fn test_pass_returns_none_without_search() {
        let board = Board::from_ascii(
            "
            OX..
            ....
            ....
            ....
            ",
        )
        .unwrap();
        let mut searcher = MinimaxSearcher::new(PassRule::PassAndContinue);
        let mut cache = TranspositionCache::disabled();

        let result = searcher.select_move(&board, Color::Dark, &mut cache);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_first_move_wins_ties() {
        // Mirror-image moves: either one leads to Dark taking the whole row
        let board = Board::from_ascii(
            "
            .OXO.
            .....
            .....
            .....
            .....
            ",
        )
        .unwrap();
        assert_eq!(legal_moves(&board, Color::Dark), vec![Move::new(0, 0), Move::new(0, 4)]);

        let mut searcher = MinimaxSearcher::new(PassRule::PassAndContinue);
        let mut cache = TranspositionCache::disabled();
        let result = searcher.select_move(&board, Color::Dark, &mut cache);
        assert_eq!(result.score, 5);
        assert_eq!(result.best_move, Some(Move::new(0, 0)));
    }

    #[test]
    fn test_terminal_rule_stops_at_pass() {
        // Light to move has nothing, Dark could still play (0,2)
        let board = Board::from_ascii(
            "
            XO..
            ....
            ....
            ....
            ",
        )
        .unwrap();
        let mut cache = TranspositionCache::disabled();

        let mut faithful = MinimaxSearcher::new(PassRule::Terminal);
        assert_eq!(faithful.value(&board, Color::Light, &mut cache), 0);

        let mut proper = MinimaxSearcher::new(PassRule::PassAndContinue);
        // Light passes, Dark captures: Dark 3 vs Light 0
        assert_eq!(proper.value(&board, Color::Light, &mut cache), -3);
    }

    #[test]
    fn test_depth_limit_scores_horizon() {
        let board = Board::standard();
        let mut searcher = MinimaxSearcher::with_limit(Some(0), PassRule::PassAndContinue);
        let mut cache = TranspositionCache::disabled();

        // Limit 0: each root child is scored statically, every opening move gives +3
        let result = searcher.select_move(&board, Color::Dark, &mut cache);
        assert_eq!(result.score, 3);
        assert_eq!(result.best_move, Some(Move::new(2, 3)));
        assert_eq!(result.stats.horizon_leaves, 4);
    }

    #[test]
    fn test_writes_terminal_utilities() {
        let board = Board::new(4).unwrap();
        let mut searcher = MinimaxSearcher::new(PassRule::PassAndContinue);
        let mut cache = TranspositionCache::new(CachePolicy::BoardOnly);

        let result = searcher.select_move(&board, Color::Dark, &mut cache);
        assert!(!cache.is_empty());
        assert_eq!(cache.stats().stores, result.stats.cache_stores);
    }
}
