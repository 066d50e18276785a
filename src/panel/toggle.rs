//! Visibility toggling, independent of any drag session

use tracing::debug;

use super::list_model::ListModel;

/// Flip visibility for `id` and schedule a save. Returns the new value, or
/// `None` if the id is unknown.
pub fn toggle_visibility(model: &mut ListModel, id: &str) -> Option<bool> {
    let visible = model.toggle(id)?;
    debug!(id, visible, "Toggled element visibility");
    Some(visible)
}
