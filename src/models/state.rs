//! Dynamic-programming cell.

use serde::{Deserialize, Serialize};

/// Best achievable reward over a sorted prefix.
///
/// One state exists per position `i` of the ordered sequence and covers
/// intervals `0..=i`. States are computed once, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalState {
    /// Maximum total reward using only positions `0..=i`.
    pub best_reward: i64,
    /// Position this state was derived from. `None` ends the chain.
    pub predecessor: Option<usize>,
    /// Whether the interval at this position is part of `best_reward`.
    pub included: bool,
}

impl OptimalState {
    /// State that takes the interval at this position.
    pub fn include(best_reward: i64, predecessor: Option<usize>) -> Self {
        Self {
            best_reward,
            predecessor,
            included: true,
        }
    }

    /// State that skips the interval at this position and inherits from
    /// position `previous`.
    pub fn exclude(best_reward: i64, previous: usize) -> Self {
        Self {
            best_reward,
            predecessor: Some(previous),
            included: false,
        }
    }
}
