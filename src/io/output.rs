//! Result rendering.

use crate::models::Selection;

/// Renders the reward on the first line and the bracketed, comma-separated
/// train IDs on the second, e.g. `"71\n[4, 6]\n"`.
pub fn render_text(selection: &Selection) -> String {
    let ids: Vec<String> = selection
        .selected_ids
        .iter()
        .map(|id| id.to_string())
        .collect();
    format!("{}\n[{}]\n", selection.max_reward, ids.join(", "))
}

/// Renders the selection as a single-line JSON object.
pub fn render_json(selection: &Selection) -> serde_json::Result<String> {
    serde_json::to_string(selection)
}
