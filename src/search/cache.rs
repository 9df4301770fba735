//! Transposition cache for memoizing node values
//!
//! The cache maps a board (and, depending on the policy, the context the
//! board was searched in) to the value the search computed for it. It is an
//! owned object threaded through the searchers rather than process-wide
//! state: whoever owns the engine owns the cache, and dropping the engine
//! drops it.
//!
//! Each entry records whether its value is exact or only a bound left by a
//! cutoff. [`TranspositionCache::probe`] answers from a bound only when it
//! already decides the caller's window.
//!
//! Entries are never evicted. `store` always overwrites, so the last value
//! written for a key wins even if an earlier one came from a deeper search.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Color};
//! use othello::search::{Bound, TranspositionCache};
//! use othello::CachePolicy;
//!
//! let mut cache = TranspositionCache::new(CachePolicy::DepthKeyed);
//! let board = Board::standard();
//!
//! let key = cache.key(&board, Color::Dark, Color::Light, 3);
//! cache.store(key, 4);
//! assert_eq!(cache.lookup(&key), Some(4));
//!
//! // Same board searched with a different remaining depth is a different entry
//! let deeper = cache.key(&board, Color::Dark, Color::Light, 5);
//! assert_eq!(cache.lookup(&deeper), None);
//!
//! // A lower bound of 6 settles a window whose beta is 6 or less
//! cache.store_bound(deeper, 6, Bound::Lower);
//! assert_eq!(cache.probe(&deeper, 0, 5), Some(6));
//! assert_eq!(cache.probe(&deeper, 0, 10), None);
//! ```

use std::collections::HashMap;

use crate::board::{Board, Color};
use crate::config::CachePolicy;

/// Search context folded into the key by `CachePolicy::DepthKeyed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Scope {
    perspective: Color,
    to_move: Color,
    remaining: u8,
}

/// Cache key. Build one with [`TranspositionCache::key`] so it matches the
/// cache's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    board: Board,
    scope: Option<Scope>,
}

impl CacheKey {
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// How a stored value relates to the node's true value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The search finished inside its window
    Exact,
    /// True value >= stored value (beta cutoff)
    Lower,
    /// True value <= stored value (fail-low)
    Upper,
}

impl Bound {
    /// Classify a value returned by a search over `(alpha, beta)`.
    #[inline]
    #[must_use]
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    value: i32,
    bound: Bound,
}

/// Board-keyed memo table for node values.
#[derive(Debug, Clone)]
pub struct TranspositionCache {
    entries: HashMap<CacheKey, Entry>,
    policy: CachePolicy,
    stores: u64,
}

impl TranspositionCache {
    /// Create an empty cache with the given keying policy.
    #[must_use]
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            stores: 0,
        }
    }

    /// A cache that never hits and never stores.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(CachePolicy::Disabled)
    }

    #[inline]
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Switch keying policy. Existing entries were keyed under the old policy,
    /// so they are dropped.
    pub fn set_policy(&mut self, policy: CachePolicy) {
        if policy != self.policy {
            log::trace!("cache policy {} -> {}, dropping {} entries", self.policy, policy, self.entries.len());
            self.policy = policy;
            self.clear();
        }
    }

    /// Build the key for a node.
    ///
    /// # Arguments
    ///
    /// * `board` - Board at the node
    /// * `perspective` - Color the node's value is measured for (the root player)
    /// * `to_move` - Side to move at the node
    /// * `remaining` - Plies left before the cutoff
    #[inline]
    #[must_use]
    pub fn key(&self, board: &Board, perspective: Color, to_move: Color, remaining: u8) -> CacheKey {
        let scope = match self.policy {
            CachePolicy::DepthKeyed => Some(Scope {
                perspective,
                to_move,
                remaining,
            }),
            CachePolicy::BoardOnly | CachePolicy::Disabled => None,
        };
        CacheKey {
            board: *board,
            scope,
        }
    }

    #[inline]
    fn entry(&self, key: &CacheKey) -> Option<Entry> {
        if self.policy == CachePolicy::Disabled {
            return None;
        }
        self.entries.get(key).copied()
    }

    /// Exact value stored for `key`, if any.
    #[inline]
    #[must_use]
    pub fn lookup(&self, key: &CacheKey) -> Option<i32> {
        self.entry(key).filter(|e| e.bound == Bound::Exact).map(|e| e.value)
    }

    /// Value usable for a search over `(alpha, beta)`.
    ///
    /// Exact entries always answer. A lower bound answers once it reaches
    /// `beta`, an upper bound once it drops to `alpha`.
    #[inline]
    #[must_use]
    pub fn probe(&self, key: &CacheKey, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entry(key)?;
        match entry.bound {
            Bound::Exact => Some(entry.value),
            Bound::Lower if entry.value >= beta => Some(entry.value),
            Bound::Upper if entry.value <= alpha => Some(entry.value),
            _ => None,
        }
    }

    /// Store an exact value, overwriting any previous entry for the key.
    #[inline]
    pub fn store(&mut self, key: CacheKey, value: i32) {
        self.store_bound(key, value, Bound::Exact);
    }

    /// Store a value with its bound kind, overwriting any previous entry.
    #[inline]
    pub fn store_bound(&mut self, key: CacheKey, value: i32, bound: Bound) {
        if self.policy == CachePolicy::Disabled {
            return;
        }
        self.stores += 1;
        self.entries.insert(key, Entry { value, bound });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get statistics about cache usage.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            policy: self.policy,
            entries: self.entries.len(),
            stores: self.stores,
        }
    }
}

impl Default for TranspositionCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub policy: CachePolicy,
    /// Distinct keys currently held
    pub entries: usize,
    /// Total writes, including overwrites
    pub stores: u64,
}
