//! GUI-specific constants for layout and drag styling

use egui;

/// Settings window dimensions
pub const WINDOW_WIDTH: f32 = 360.0;
pub const WINDOW_HEIGHT: f32 = 420.0;
pub const WINDOW_MIN_WIDTH: f32 = 300.0;
pub const WINDOW_MIN_HEIGHT: f32 = 260.0;

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const ROW_SPACING: f32 = 4.0;
pub const ROW_PADDING: f32 = 6.0;

/// Insertion line drawn while dragging
pub const INDICATOR_WIDTH: f32 = 2.0;

/// Fill alpha applied to the row being dragged
pub const DRAGGING_ALPHA: f32 = 0.35;

pub const DRAG_HANDLE: &str = "\u{2630}";

pub const EMPTY_LIST_TEXT: &str = "(No titlebar elements configured)";

pub const HINT_COLOR: egui::Color32 = egui::Color32::from_gray(140);
