//! Pointer-driven row reordering
//!
//! The gesture is a two-state machine (`Idle` / `Dragging`). Geometry and
//! index arithmetic are pure functions so the GUI layer only has to feed
//! pointer events in and reflect `DragState` back out.

use tracing::debug;

use super::list_model::ListModel;

/// Insertion boundary implied by the pointer during a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Drop above the row at this sequence index
    Above(usize),
    /// Drop below the last row
    BelowLast,
}

impl Indicator {
    /// Pre-removal insertion index; "below last" is one past the end
    pub fn target_index(self, len: usize) -> usize {
        match self {
            Indicator::Above(index) => index,
            Indicator::BelowLast => len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source_index: usize,
        indicator: Option<Indicator>,
    },
}

/// Where a pointer-down landed within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    RowBody,
    /// The visibility control swallows the press
    VisibilityToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing changed and nothing was saved
    Abandoned,
    Moved { from: usize, to: usize },
}

/// Vertical extent of a rendered row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBounds {
    pub index: usize,
    pub top: f32,
    pub height: f32,
}

impl RowBounds {
    pub fn midpoint(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Midpoint of a row other than the dragged one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiblingMidpoint {
    pub index: usize,
    pub y: f32,
}

/// First sibling (in order) whose midpoint is below the pointer wins; past all
/// of them the drop goes below the last. `None` only when there are no siblings.
pub fn compute_indicator(pointer_y: f32, siblings: &[SiblingMidpoint]) -> Option<Indicator> {
    if siblings.is_empty() {
        return None;
    }
    let indicator = siblings
        .iter()
        .find(|sibling| pointer_y < sibling.y)
        .map(|sibling| Indicator::Above(sibling.index))
        .unwrap_or(Indicator::BelowLast);
    Some(indicator)
}

/// Index the source ends up at once it has been removed and reinserted.
///
/// Removing the source shifts every later index down by one, so a downward
/// move lands one short of `to_index`.
pub fn compute_landing_index(source_index: usize, to_index: usize, len: usize) -> usize {
    let landing = if source_index < to_index {
        to_index - 1
    } else {
        to_index
    };
    landing.min(len.saturating_sub(1))
}

/// Siblings of `source_index` in row order
pub fn sibling_midpoints(source_index: usize, rows: &[RowBounds]) -> Vec<SiblingMidpoint> {
    rows.iter()
        .filter(|row| row.index != source_index)
        .map(|row| SiblingMidpoint {
            index: row.index,
            y: row.midpoint(),
        })
        .collect()
}

/// Owner of the single drag session
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start a session on the row at `index`. Presses on the visibility
    /// control never start one. Returns true if a session began.
    pub fn pointer_down(&mut self, index: usize, target: PointerTarget) -> bool {
        if target == PointerTarget::VisibilityToggle {
            return false;
        }
        self.state = DragState::Dragging {
            source_index: index,
            indicator: None,
        };
        true
    }

    /// Re-evaluate the indicator from scratch. Ignored while idle.
    pub fn pointer_move(&mut self, pointer_y: f32, rows: &[RowBounds]) -> Option<Indicator> {
        let DragState::Dragging {
            source_index,
            indicator,
        } = &mut self.state
        else {
            return None;
        };

        *indicator = compute_indicator(pointer_y, &sibling_midpoints(*source_index, rows));
        *indicator
    }

    /// End the session, committing the reorder when the indicator allows it
    pub fn pointer_up(&mut self, model: &mut ListModel) -> DropOutcome {
        let DragState::Dragging {
            source_index,
            indicator,
        } = std::mem::take(&mut self.state)
        else {
            return DropOutcome::Abandoned;
        };

        let Some(indicator) = indicator else {
            return DropOutcome::Abandoned;
        };
        if indicator == Indicator::Above(source_index) {
            return DropOutcome::Abandoned;
        }

        let len = model.len();
        if source_index >= len {
            return DropOutcome::Abandoned;
        }

        let to_index = indicator.target_index(len);
        let landing = compute_landing_index(source_index, to_index, len);
        if !model.move_element(source_index, landing) {
            return DropOutcome::Abandoned;
        }

        debug!(from = source_index, to = landing, ?indicator, "Committed drag reorder");
        DropOutcome::Moved {
            from: source_index,
            to: landing,
        }
    }

    /// Drop the session without committing
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
