//! Selection quality metrics (KPIs).
//!
//! Computes dock-level indicators for a selection against the full set
//! of offered trains.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Captured Reward | Sum of selected rewards |
//! | Capture Rate | Captured / offered reward |
//! | Busy Time | Sum of selected durations |
//! | Horizon | Latest end - earliest start over all trains |
//! | Utilization | Busy time / horizon |

use crate::models::{Interval, Selection};

/// Selection performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionKpi {
    /// Number of accepted trains.
    pub selected_count: usize,
    /// Number of rejected trains.
    pub rejected_count: usize,
    /// Sum of rewards over all offered trains.
    pub offered_reward: i64,
    /// Sum of rewards over accepted trains.
    pub captured_reward: i64,
    /// Fraction of offered reward captured (0.0..1.0 for non-negative rewards).
    pub capture_rate: f64,
    /// Total time the dock is occupied.
    pub busy_time: i64,
    /// Span from the earliest arrival to the latest departure.
    pub horizon: i64,
    /// Fraction of the horizon the dock is occupied (0.0..1.0).
    pub utilization: f64,
}

impl SelectionKpi {
    /// Computes KPIs from the offered intervals and a selection.
    ///
    /// Selected IDs resolve to the first interval carrying them; IDs not
    /// present in `intervals` are ignored.
    pub fn calculate(intervals: &[Interval], selection: &Selection) -> Self {
        let selected: Vec<&Interval> = selection
            .selected_ids
            .iter()
            .filter_map(|id| intervals.iter().find(|iv| iv.id == *id))
            .collect();

        let offered_reward = intervals
            .iter()
            .fold(0i64, |acc, iv| acc.saturating_add(iv.reward));
        let captured_reward = selected
            .iter()
            .fold(0i64, |acc, iv| acc.saturating_add(iv.reward));
        let busy_time = selected
            .iter()
            .fold(0i64, |acc, iv| acc.saturating_add(iv.duration));

        let horizon = match (
            intervals.iter().map(|iv| iv.start).min(),
            intervals.iter().map(|iv| iv.end()).max(),
        ) {
            (Some(first), Some(last)) => last.saturating_sub(first),
            _ => 0,
        };

        let capture_rate = if offered_reward <= 0 {
            1.0
        } else {
            captured_reward as f64 / offered_reward as f64
        };

        let utilization = if horizon <= 0 {
            0.0
        } else {
            busy_time as f64 / horizon as f64
        };

        Self {
            selected_count: selected.len(),
            rejected_count: intervals.len().saturating_sub(selected.len()),
            offered_reward,
            captured_reward,
            capture_rate,
            busy_time,
            horizon,
            utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::optimize;

    #[test]
    fn test_kpi_basic() {
        let trains = vec![
            Interval::new(4, 0, 5, 60),
            Interval::new(5, 0, 5, 50),
            Interval::new(6, 5, 5, 11),
        ];
        let sel = optimize(&trains);
        let kpi = SelectionKpi::calculate(&trains, &sel);

        assert_eq!(kpi.selected_count, 2);
        assert_eq!(kpi.rejected_count, 1);
        assert_eq!(kpi.offered_reward, 121);
        assert_eq!(kpi.captured_reward, 71);
        assert_eq!(kpi.busy_time, 10);
        assert_eq!(kpi.horizon, 10);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
        assert!((kpi.capture_rate - 71.0 / 121.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SelectionKpi::calculate(&[], &Selection::empty());
        assert_eq!(kpi.selected_count, 0);
        assert_eq!(kpi.rejected_count, 0);
        assert_eq!(kpi.horizon, 0);
        assert_eq!(kpi.utilization, 0.0);
        assert_eq!(kpi.capture_rate, 1.0);
    }

    #[test]
    fn test_kpi_partial_utilization() {
        let trains = vec![Interval::new(1, 0, 2, 5), Interval::new(2, 8, 2, 5)];
        let sel = optimize(&trains);
        let kpi = SelectionKpi::calculate(&trains, &sel);

        assert_eq!(kpi.busy_time, 4);
        assert_eq!(kpi.horizon, 10);
        assert!((kpi.utilization - 0.4).abs() < 1e-10);
        assert!((kpi.capture_rate - 1.0).abs() < 1e-10);
    }
}
