//! Completion-time ordering of intervals.
//!
//! # Algorithm
//!
//! 1. Stable sort by the composite key `(end, id)` ascending.
//! 2. Each interval's position in the result is its dense 0-based index.
//!
//! Because `end` is non-decreasing along the sequence, the latest
//! compatible predecessor of any position can be found by binary search.
//!
//! # Complexity
//! O(n log n) to build, O(log i) per predecessor query.

use std::ops::Index;
use std::slice;

use crate::models::Interval;

/// Intervals sorted by `(end, id)` ascending.
///
/// For any positions `i < j`: `end[i] < end[j]`, or `end[i] == end[j]`
/// and `id[i] <= id[j]`. The only constructor sorts, so the invariant
/// always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedIntervals {
    items: Vec<Interval>,
}

impl OrderedIntervals {
    /// Sorts an arbitrary-order collection of intervals.
    pub fn from_unordered(intervals: impl IntoIterator<Item = Interval>) -> Self {
        let mut items: Vec<Interval> = intervals.into_iter().collect();
        items.sort_by_key(|iv| (iv.end(), iv.id));
        Self { items }
    }

    /// Number of intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Interval at `position`, if any.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&Interval> {
        self.items.get(position)
    }

    /// The sorted intervals.
    #[inline]
    pub fn as_slice(&self) -> &[Interval] {
        &self.items
    }

    /// Iterates in sorted order.
    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.items.iter()
    }

    /// Consumes the sequence, returning the sorted intervals.
    pub fn into_inner(self) -> Vec<Interval> {
        self.items
    }

    /// Greatest position `p < i` whose interval ends no later than
    /// interval `i` starts, or `None` if there is none.
    ///
    /// Binary search over `[0, i)`: `low` is always compatible (or the
    /// virtual position -1), `high` is always incompatible (or `i`).
    /// Positions are shifted by one so the virtual -1 becomes 0.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn latest_compatible_predecessor(&self, i: usize) -> Option<usize> {
        let arrival = self.items[i].start;
        let mut low = 0usize;
        let mut high = i + 1;

        while low + 1 < high {
            let mid = low + (high - low) / 2;
            if self.items[mid - 1].end() <= arrival {
                low = mid;
            } else {
                high = mid;
            }
        }

        low.checked_sub(1)
    }
}

impl Index<usize> for OrderedIntervals {
    type Output = Interval;

    fn index(&self, position: usize) -> &Interval {
        &self.items[position]
    }
}

impl<'a> IntoIterator for &'a OrderedIntervals {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Interval> for OrderedIntervals {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self::from_unordered(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(seq: &OrderedIntervals) -> Vec<i64> {
        seq.iter().map(|iv| iv.id).collect()
    }

    #[test]
    fn test_empty_sequence() {
        let seq = OrderedIntervals::from_unordered(Vec::new());
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.get(0).is_none());
    }

    #[test]
    fn test_sorted_by_end() {
        let seq = OrderedIntervals::from_unordered(vec![
            Interval::new(1, 0, 10, 1),
            Interval::new(2, 0, 3, 1),
            Interval::new(3, 5, 1, 1),
        ]);
        assert_eq!(ids(&seq), vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_end_sorted_by_id() {
        let seq = OrderedIntervals::from_unordered(vec![
            Interval::new(3, 0, 5, 30),
            Interval::new(1, 0, 5, 10),
            Interval::new(2, 0, 5, 20),
            Interval::new(5, 0, 5, 50),
            Interval::new(4, 0, 5, 40),
        ]);
        assert_eq!(ids(&seq), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ordering_invariant_holds() {
        let seq: OrderedIntervals = vec![
            Interval::new(9, 2, 2, 1),
            Interval::new(8, 1, 3, 1),
            Interval::new(7, 0, 9, 1),
            Interval::new(6, 3, 1, 1),
        ]
        .into_iter()
        .collect();

        for pair in seq.as_slice().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.end() < b.end() || (a.end() == b.end() && a.id <= b.id));
        }
    }

    #[test]
    fn test_predecessor_first_position_is_none() {
        let seq = OrderedIntervals::from_unordered(vec![Interval::new(1, 0, 2, 100)]);
        assert_eq!(seq.latest_compatible_predecessor(0), None);
    }

    #[test]
    fn test_predecessor_touching_is_compatible() {
        let seq = OrderedIntervals::from_unordered(vec![
            Interval::new(4, 0, 5, 60),
            Interval::new(6, 5, 5, 11),
        ]);
        assert_eq!(seq.latest_compatible_predecessor(1), Some(0));
    }

    #[test]
    fn test_predecessor_none_when_all_overlap() {
        let seq = OrderedIntervals::from_unordered(vec![
            Interval::new(1, 0, 5, 1),
            Interval::new(2, 1, 5, 1),
            Interval::new(3, 2, 5, 1),
        ]);
        assert_eq!(seq.latest_compatible_predecessor(1), None);
        assert_eq!(seq.latest_compatible_predecessor(2), None);
    }

    #[test]
    fn test_predecessor_picks_latest() {
        // Sorted ends: 1, 2, 3, 6, 8
        let seq = OrderedIntervals::from_unordered(vec![
            Interval::new(1, 0, 1, 1),
            Interval::new(2, 0, 2, 1),
            Interval::new(3, 1, 2, 1),
            Interval::new(4, 3, 3, 1),
            Interval::new(5, 3, 5, 1),
        ]);
        assert_eq!(ids(&seq), vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.latest_compatible_predecessor(3), Some(2));
        assert_eq!(seq.latest_compatible_predecessor(4), Some(2));
        assert_eq!(seq.latest_compatible_predecessor(2), Some(0));
    }

    #[test]
    fn test_predecessor_matches_linear_scan() {
        let seq = OrderedIntervals::from_unordered(vec![
            Interval::new(10, 0, 5, 2),
            Interval::new(11, 0, 6, 2),
            Interval::new(22, 5, 7, 1),
            Interval::new(30, 13, 4, 3),
            Interval::new(41, 18, 2, 3),
            Interval::new(50, 20, 3, 5),
            Interval::new(52, 19, 3, 5),
        ]);
        for i in 0..seq.len() {
            let expected = (0..i).rev().find(|&p| seq[p].end() <= seq[i].start);
            assert_eq!(seq.latest_compatible_predecessor(i), expected, "position {i}");
        }
    }
}
