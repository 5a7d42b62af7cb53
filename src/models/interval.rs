//! Interval (train unloading request) model.
//!
//! An interval is the half-open window `[start, start + duration)` during
//! which a train occupies the unloading dock, together with the reward
//! earned if the train is accepted.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use serde::{Deserialize, Serialize};

/// A train unloading request.
///
/// Immutable once created. The optimizer assumes `start >= 0` and
/// `duration > 0`; see [`crate::validation`] for an explicit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// External train identifier.
    pub id: i64,
    /// Arrival time.
    pub start: i64,
    /// Time needed to unload the train.
    pub duration: i64,
    /// Reward for unloading the train.
    pub reward: i64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(id: i64, start: i64, duration: i64, reward: i64) -> Self {
        Self {
            id,
            start,
            duration,
            reward,
        }
    }

    /// Completion (departure) time: `start + duration`.
    ///
    /// Saturates at `i64::MAX`; [`crate::validation`] reports such intervals.
    #[inline]
    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.duration)
    }

    /// Whether the two windows share any instant.
    ///
    /// Touching endpoints do not overlap: a train may arrive exactly
    /// when the previous one departs.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start.max(other.start) < self.end().min(other.end())
    }

    /// Whether both intervals can be selected together.
    #[inline]
    pub fn is_compatible_with(&self, other: &Interval) -> bool {
        !self.overlaps(other)
    }
}
