//! Search for Othello
//!
//! Contains:
//! - Transposition cache for memoizing node values
//! - Static move ordering
//! - Exhaustive minimax (reference strategy)
//! - Depth-limited alpha-beta with ordering and caching

pub mod alphabeta;
pub mod cache;
pub mod minimax;
pub mod ordering;
pub mod result;

pub use alphabeta::Searcher;
pub use cache::{Bound, CacheKey, CacheStats, TranspositionCache};
pub use minimax::MinimaxSearcher;
pub use ordering::ordered_children;
pub use result::{SearchResult, SearchStats, INF};
