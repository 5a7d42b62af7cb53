//! Selection (solution) model.
//!
//! The optimizer's answer: the maximum total reward and one subset of
//! trains achieving it.

use serde::{Deserialize, Serialize};

/// An optimal set of accepted trains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Sum of rewards of the selected trains.
    pub max_reward: i64,
    /// Selected train IDs, in increasing `(end, id)` order.
    pub selected_ids: Vec<i64>,
}

impl Selection {
    /// Creates a selection.
    pub fn new(max_reward: i64, selected_ids: Vec<i64>) -> Self {
        Self {
            max_reward,
            selected_ids,
        }
    }

    /// The selection for an empty problem: reward 0, no trains.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of selected trains.
    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    /// Whether no train was selected.
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Whether the train with `id` was selected.
    pub fn contains(&self, id: i64) -> bool {
        self.selected_ids.contains(&id)
    }
}
