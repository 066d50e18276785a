//! Row projection and per-row drag styling
//!
//! `project` is only rerun when the model revision changes; mid-gesture the
//! GUI asks `row_highlight` for styling and nothing else.

use crate::config::TitlebarElement;
use crate::config::display::label_for;

use super::drag::{DragState, Indicator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub id: String,
    pub label: String,
    pub visible: bool,
}

/// Styling a row carries during a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    Idle,
    /// The row being dragged
    Dragging,
    /// Insertion line above this row
    DropAbove,
    /// Insertion line below this row (the last sibling)
    DropBelow,
}

/// One row per element, in sequence order
pub fn project(elements: &[TitlebarElement]) -> Vec<RowView> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| RowView {
            index,
            id: element.id.clone(),
            label: label_for(&element.id).to_string(),
            visible: element.visible,
        })
        .collect()
}

pub fn row_highlight(index: usize, len: usize, state: &DragState) -> RowHighlight {
    let DragState::Dragging {
        source_index,
        indicator,
    } = *state
    else {
        return RowHighlight::Idle;
    };

    if index == source_index {
        return RowHighlight::Dragging;
    }

    match indicator {
        Some(Indicator::Above(target)) if target == index => RowHighlight::DropAbove,
        Some(Indicator::BelowLast) if Some(index) == last_sibling(source_index, len) => {
            RowHighlight::DropBelow
        }
        _ => RowHighlight::Idle,
    }
}

fn last_sibling(source_index: usize, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    if last == source_index {
        last.checked_sub(1)
    } else {
        Some(last)
    }
}
