//! Interval scheduling domain models.
//!
//! Provides the data types for representing an unloading problem and
//! its solution.
//!
//! # Domain Mappings
//!
//! | u-unload | Rail Yard | Manufacturing | Healthcare |
//! |----------|-----------|---------------|------------|
//! | Interval | Train unloading | Job on a single machine | Operating room booking |
//! | Selection | Accepted trains | Accepted orders | Accepted bookings |
//! | OptimalState | DP cell | DP cell | DP cell |

mod interval;
mod selection;
mod state;

pub use interval::Interval;
pub use selection::Selection;
pub use state::OptimalState;
