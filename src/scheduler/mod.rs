//! Reward optimization over unloading intervals.
//!
//! Provides the completion-time ordering, the dynamic-programming
//! optimizer, a brute-force reference solver and selection metrics.
//!
//! # Algorithm
//!
//! `RewardOptimizer` solves weighted interval scheduling exactly:
//! sort by completion time, binary-search each interval's latest
//! compatible predecessor, fill a one-pass DP table and walk its
//! back-pointers.
//!
//! # KPI
//!
//! `SelectionKpi` reports captured reward, capture rate and dock
//! utilization for a selection.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

pub mod exhaustive;
mod kpi;
mod optimizer;
mod ordering;

pub use kpi::SelectionKpi;
pub use optimizer::{optimize, RewardOptimizer};
pub use ordering::OrderedIntervals;
