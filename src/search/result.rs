//! Search results and diagnostics shared by both strategies

use crate::board::{Move, MAX_CELLS};

/// Infinity score for alpha-beta bounds. Utilities never exceed the number
/// of squares, so one past that is out of reach.
pub const INF: i32 = MAX_CELLS as i32 + 1;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Beta or alpha cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first child tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Cache probes
    pub cache_probes: u64,
    /// Probes that returned a value
    pub cache_hits: u64,
    /// Values written to the cache
    pub cache_stores: u64,
    /// Nodes where the side to move passed and the search continued
    pub passes: u64,
    /// Nodes scored because neither side (or, under `PassRule::Terminal`,
    /// the side to move) could play
    pub terminals: u64,
    /// Nodes scored at the ply limit
    pub horizon_leaves: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }

    /// Cache hit rate in percent
    pub fn cache_hit_rate(&self) -> f64 {
        if self.cache_probes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.cache_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the side to move has to pass
    pub best_move: Option<Move>,
    /// Value of the best move from the mover's perspective
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    /// Result for a side with no legal move. No search is run.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.best_move.is_none()
    }
}
