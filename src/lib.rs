//! Weighted interval scheduling for train unloading.
//!
//! Given a set of trains, each occupying the unloading dock for
//! `[start, start + duration)` and paying a fixed reward, selects a
//! pairwise non-overlapping subset with maximum total reward.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interval`, `Selection`, `OptimalState`
//! - **`scheduler`**: Ordering, the reward optimizer, an exhaustive
//!   verifier and selection KPIs
//! - **`validation`**: Optional input integrity checks (duplicate IDs,
//!   negative times, overflow)
//! - **`io`**: Text input parsing and text/JSON result rendering
//! - **`app`**: Stream-to-stream runner used by the binary
//!
//! # Usage
//!
//! ```
//! use u_unload::models::Interval;
//! use u_unload::scheduler::optimize;
//!
//! let trains = vec![
//!     Interval::new(4, 0, 5, 60),
//!     Interval::new(5, 0, 5, 50),
//!     Interval::new(6, 5, 5, 11),
//! ];
//! let selection = optimize(&trains);
//! assert_eq!(selection.max_reward, 71);
//! assert_eq!(selection.selected_ids, vec![4, 6]);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

pub mod app;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;
