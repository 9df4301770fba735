//! Search configuration
//!
//! Every knob the engine exposes lives here. The defaults reproduce the
//! classic setup (alpha-beta, five plies below the root move) with
//! depth-keyed, bound-aware caching and proper passes switched on.
//! `CachePolicy::BoardOnly` together with `PassRule::Terminal` restores the
//! classic depth-oblivious, pass-as-terminal behavior.

use std::fmt;
use std::str::FromStr;

use crate::error::OthelloError;

/// Default alpha-beta ply limit for an 8x8 board
pub const DEFAULT_LIMIT: u8 = 5;

/// Which search selects the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Exhaustive minimax, optionally capped by `minimax_limit`
    Minimax,
    /// Depth-limited alpha-beta with move ordering and caching
    #[default]
    AlphaBeta,
}

/// How the transposition cache keys its entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Board only: a value computed near the cutoff can answer a later,
    /// deeper lookup
    BoardOnly,
    /// Board plus perspective, side to move and remaining depth. Alpha-beta
    /// values outside their window are kept as bounds.
    #[default]
    DepthKeyed,
    /// Never read or write
    Disabled,
}

/// What happens when the side to move has no legal placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassRule {
    /// Stop and score the board, even if the opponent could still move
    Terminal,
    /// The opponent moves next on the same board; the node is terminal only
    /// when neither side can move
    #[default]
    PassAndContinue,
}

/// Engine configuration.
///
/// # Example
///
/// ```
/// use othello::{CachePolicy, SearchConfig};
///
/// let config = SearchConfig {
///     limit: 3,
///     cache_policy: CachePolicy::Disabled,
///     ..SearchConfig::default()
/// };
/// assert_eq!(config.limit, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Alpha-beta ply limit below each root move
    pub limit: u8,
    /// Strategy used by `OthelloEngine::get_move`
    pub strategy: Strategy,
    pub cache_policy: CachePolicy,
    pub pass_rule: PassRule,
    /// Optional ply limit for minimax; `None` searches to the end of the game
    pub minimax_limit: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            strategy: Strategy::default(),
            cache_policy: CachePolicy::default(),
            pass_rule: PassRule::default(),
            minimax_limit: None,
        }
    }
}

impl SearchConfig {
    /// Classic settings: board-only cache and pass-as-terminal.
    ///
    /// Move ordering is not part of this: equally scored moves still keep
    /// ascending row-major order, so on the 8x8 opening this plays (2,3)
    /// where the classic engine, which sorted ties by descending
    /// coordinates, played (5,4).
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            cache_policy: CachePolicy::BoardOnly,
            pass_rule: PassRule::Terminal,
            ..Self::default()
        }
    }
}

fn unknown(kind: &'static str, value: &str) -> OthelloError {
    OthelloError::UnknownOption {
        kind,
        value: value.to_string(),
    }
}

impl FromStr for Strategy {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Strategy::AlphaBeta),
            _ => Err(unknown("strategy", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

impl FromStr for CachePolicy {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "board" | "board-only" => Ok(CachePolicy::BoardOnly),
            "depth" | "depth-keyed" => Ok(CachePolicy::DepthKeyed),
            "off" | "none" | "disabled" => Ok(CachePolicy::Disabled),
            _ => Err(unknown("cache policy", s)),
        }
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CachePolicy::BoardOnly => write!(f, "board-only"),
            CachePolicy::DepthKeyed => write!(f, "depth-keyed"),
            CachePolicy::Disabled => write!(f, "disabled"),
        }
    }
}

impl FromStr for PassRule {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "terminal" => Ok(PassRule::Terminal),
            "pass" | "continue" | "pass-and-continue" => Ok(PassRule::PassAndContinue),
            _ => Err(unknown("pass rule", s)),
        }
    }
}

impl fmt::Display for PassRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassRule::Terminal => write!(f, "terminal"),
            PassRule::PassAndContinue => write!(f, "pass-and-continue"),
        }
    }
}
