//! Brute-force reference solver.
//!
//! Enumerates every subset of intervals and keeps the best pairwise
//! non-overlapping one. Exponential; intended for cross-checking the
//! dynamic-programming optimizer on small inputs.
//!
//! # Complexity
//! O(2^n * n^2).

use thiserror::Error;

use crate::models::Interval;

/// Largest input [`exhaustive_max_reward`] accepts.
pub const EXHAUSTIVE_LIMIT: usize = 20;

/// Errors from the exhaustive solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExhaustiveError {
    #[error("exhaustive search supports at most {limit} intervals, got {actual}")]
    TooManyIntervals { limit: usize, actual: usize },
}

/// Maximum reward over all pairwise compatible subsets.
///
/// The empty subset is always feasible, so the result is never negative.
pub fn exhaustive_max_reward(intervals: &[Interval]) -> Result<i64, ExhaustiveError> {
    let n = intervals.len();
    if n > EXHAUSTIVE_LIMIT {
        return Err(ExhaustiveError::TooManyIntervals {
            limit: EXHAUSTIVE_LIMIT,
            actual: n,
        });
    }

    let mut best = 0i64;
    for mask in 0u32..(1u32 << n) {
        let chosen = |i: usize| mask & (1 << i) != 0;

        let reward: i64 = (0..n)
            .filter(|&i| chosen(i))
            .map(|i| intervals[i].reward)
            .sum();
        if reward <= best {
            continue;
        }

        let feasible = (0..n).filter(|&i| chosen(i)).all(|i| {
            (i + 1..n)
                .filter(|&j| chosen(j))
                .all(|j| intervals[i].is_compatible_with(&intervals[j]))
        });
        if feasible {
            best = reward;
        }
    }

    Ok(best)
}

/// Whether the intervals named by `selected_ids` are pairwise compatible.
///
/// Each ID resolves to the first interval carrying it. An ID that is not
/// present in `intervals` makes the selection infeasible.
pub fn is_feasible(intervals: &[Interval], selected_ids: &[i64]) -> bool {
    let mut chosen = Vec::with_capacity(selected_ids.len());
    for id in selected_ids {
        match intervals.iter().find(|iv| iv.id == *id) {
            Some(iv) => chosen.push(iv),
            None => return false,
        }
    }

    chosen
        .iter()
        .enumerate()
        .all(|(i, a)| chosen[i + 1..].iter().all(|b| a.is_compatible_with(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(exhaustive_max_reward(&[]), Ok(0));
    }

    #[test]
    fn test_adjacent_pair() {
        let trains = [
            Interval::new(4, 0, 5, 60),
            Interval::new(5, 0, 5, 50),
            Interval::new(6, 5, 5, 11),
        ];
        assert_eq!(exhaustive_max_reward(&trains), Ok(71));
    }

    #[test]
    fn test_negative_rewards_skipped() {
        let trains = [Interval::new(1, 0, 5, -3), Interval::new(2, 6, 1, -1)];
        assert_eq!(exhaustive_max_reward(&trains), Ok(0));
    }

    #[test]
    fn test_too_many_intervals() {
        let trains: Vec<Interval> = (0..21).map(|i| Interval::new(i, i, 1, 1)).collect();
        assert_eq!(
            exhaustive_max_reward(&trains),
            Err(ExhaustiveError::TooManyIntervals {
                limit: 20,
                actual: 21
            })
        );
    }

    #[test]
    fn test_feasibility() {
        let trains = [
            Interval::new(1, 0, 5, 1),
            Interval::new(2, 5, 5, 1),
            Interval::new(3, 4, 2, 1),
        ];
        assert!(is_feasible(&trains, &[1, 2]));
        assert!(!is_feasible(&trains, &[1, 3]));
        assert!(!is_feasible(&trains, &[99]));
        assert!(is_feasible(&trains, &[]));
    }
}
