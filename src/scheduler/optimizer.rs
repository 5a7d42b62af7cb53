//! Maximum-reward interval selection.
//!
//! # Algorithm
//!
//! 1. Order intervals by `(end, id)` ([`OrderedIntervals`]).
//! 2. For each position `i`, find the latest compatible predecessor `p`.
//! 3. `best[i] = max(best[i-1], reward[i] + best[p])`, ties include `i`.
//! 4. Walk back-pointers from the last position, collecting included
//!    intervals, then reverse.
//!
//! # Complexity
//! O(n log n) time, O(n) space.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1:
//! Weighted Interval Scheduling

use tracing::{debug, trace};

use super::OrderedIntervals;
use crate::models::{Interval, OptimalState, Selection};

/// Sorts `intervals` and returns an optimal selection.
///
/// Total over any input, including the empty one (`max_reward = 0`).
/// Reward sums saturate at the `i64` bounds; the result is exact as long
/// as the absolute rewards sum to at most `i64::MAX`, which
/// [`parse_intervals`](crate::io::parse_intervals) enforces.
pub fn optimize(intervals: &[Interval]) -> Selection {
    let ordered = OrderedIntervals::from_unordered(intervals.iter().copied());
    RewardOptimizer::new().solve(&ordered)
}

/// Dynamic-programming solver for weighted interval scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardOptimizer;

impl RewardOptimizer {
    /// Creates a new optimizer.
    pub fn new() -> Self {
        Self
    }

    /// Solves an ordered sequence.
    pub fn solve(&self, ordered: &OrderedIntervals) -> Selection {
        if ordered.is_empty() {
            debug!("no intervals, returning empty selection");
            return Selection::empty();
        }

        let table = self.build_table(ordered);
        let selected_ids = self.reconstruct(ordered, &table);
        let max_reward = table
            .last()
            .map(|state| state.best_reward)
            .unwrap_or_default();

        debug!(
            intervals = ordered.len(),
            selected = selected_ids.len(),
            max_reward,
            "reward optimization finished"
        );

        Selection::new(max_reward, selected_ids)
    }

    /// Computes one [`OptimalState`] per position, left to right.
    pub fn build_table(&self, ordered: &OrderedIntervals) -> Vec<OptimalState> {
        let mut table: Vec<OptimalState> = Vec::with_capacity(ordered.len());

        for (i, interval) in ordered.iter().enumerate() {
            if i == 0 {
                table.push(OptimalState::include(interval.reward, None));
                continue;
            }

            let p = ordered.latest_compatible_predecessor(i);
            let excluding = table[i - 1].best_reward;
            let including = interval
                .reward
                .saturating_add(p.map_or(0, |p| table[p].best_reward));

            let state = if excluding > including {
                OptimalState::exclude(excluding, i - 1)
            } else {
                OptimalState::include(including, p)
            };

            trace!(
                position = i,
                id = interval.id,
                predecessor = ?p,
                excluding,
                including,
                included = state.included,
                "dp step"
            );

            table.push(state);
        }

        table
    }

    /// Follows back-pointers from the last state and returns the IDs of
    /// included intervals in increasing position order.
    pub fn reconstruct(&self, ordered: &OrderedIntervals, table: &[OptimalState]) -> Vec<i64> {
        let mut ids = Vec::new();
        let mut current = table.len().checked_sub(1);

        while let Some(position) = current {
            let state = &table[position];
            if state.included {
                ids.push(ordered[position].id);
            }
            current = state.predecessor;
        }

        ids.reverse();
        ids
    }
}
