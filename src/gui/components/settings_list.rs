//! Reorderable titlebar element list
//!
//! Pure plumbing: pointer input goes to the drag controller, checkbox changes
//! go to the toggle controller, and drag state comes back as row styling.

use eframe::egui;

use crate::gui::constants::*;
use crate::panel::rows::{self, RowHighlight, RowView};
use crate::panel::toggle::toggle_visibility;
use crate::panel::{DragController, DropOutcome, ListModel, PointerTarget, RowBounds};

/// State for the settings list UI
pub struct SettingsListState {
    drag: DragController,
    rows: Vec<RowView>,
    rows_revision: Option<u64>,
    row_rects: Vec<egui::Rect>,
    toggle_rects: Vec<egui::Rect>,
}

impl SettingsListState {
    pub fn new() -> Self {
        Self {
            drag: DragController::new(),
            rows: Vec::new(),
            rows_revision: None,
            row_rects: Vec::new(),
            toggle_rects: Vec::new(),
        }
    }

    /// Re-project only when the model changed, never mid-gesture
    fn sync_rows(&mut self, model: &ListModel) {
        if self.rows_revision != Some(model.revision()) {
            // A reload under an active drag would leave a stale source index
            if self.drag.is_dragging() && self.rows.len() != model.len() {
                self.drag.cancel();
            }
            self.rows = rows::project(model.elements());
            self.rows_revision = Some(model.revision());
        }
    }

    fn row_bounds(&self) -> Vec<RowBounds> {
        self.row_rects
            .iter()
            .enumerate()
            .map(|(index, rect)| RowBounds {
                index,
                top: rect.top(),
                height: rect.height(),
            })
            .collect()
    }

    fn pointer_target(&self, pos: egui::Pos2) -> Option<(usize, PointerTarget)> {
        let index = self.row_rects.iter().position(|rect| rect.contains(pos))?;
        let target = if self.toggle_rects[index].contains(pos) {
            PointerTarget::VisibilityToggle
        } else {
            PointerTarget::RowBody
        };
        Some((index, target))
    }
}

impl Default for SettingsListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the element list and returns true if the model was changed
pub fn ui(ui: &mut egui::Ui, model: &mut ListModel, state: &mut SettingsListState) -> bool {
    let mut changed = false;
    let mut toggled: Option<String> = None;

    state.sync_rows(model);
    state.row_rects.clear();
    state.toggle_rects.clear();

    let drag_state = *state.drag.state();
    let len = state.rows.len();

    ui.group(|ui| {
        ui.label(egui::RichText::new("Titlebar Elements").strong());
        ui.label(
            egui::RichText::new("Drag rows to reorder, use the checkbox to show or hide")
                .small()
                .color(HINT_COLOR),
        );
        ui.add_space(ITEM_SPACING);

        if model.is_empty() {
            ui.label(egui::RichText::new(EMPTY_LIST_TEXT).italics().weak());
        }

        for row in &state.rows {
            let highlight = rows::row_highlight(row.index, len, &drag_state);
            let fill = match highlight {
                RowHighlight::Dragging => ui.visuals().selection.bg_fill.gamma_multiply(DRAGGING_ALPHA),
                _ => ui.visuals().faint_bg_color,
            };

            let mut toggle_rect = egui::Rect::NOTHING;
            let response = egui::Frame::default()
                .inner_margin(ROW_PADDING)
                .fill(fill)
                .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(DRAG_HANDLE).weak());
                        ui.label(&row.label);

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mut visible = row.visible;
                            let toggle = ui.checkbox(&mut visible, "");
                            if toggle.changed() {
                                toggled = Some(row.id.clone());
                            }
                            toggle_rect = toggle.rect;
                        });
                    });
                })
                .response;

            state.row_rects.push(response.rect);
            state.toggle_rects.push(toggle_rect);
            ui.add_space(ROW_SPACING);
        }
    });

    let (pressed, released, press_pos, latest_pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.press_origin(),
            i.pointer.latest_pos(),
        )
    });

    if pressed
        && let Some(pos) = press_pos
        && let Some((index, target)) = state.pointer_target(pos)
    {
        state.drag.pointer_down(index, target);
    }

    // Tracked anywhere in the window, not just over the list
    if state.drag.is_dragging()
        && let Some(pos) = latest_pos
    {
        let bounds = state.row_bounds();
        state.drag.pointer_move(pos.y, &bounds);
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    }

    paint_indicator(ui, state);

    if released && state.drag.is_dragging() {
        if let DropOutcome::Moved { .. } = state.drag.pointer_up(model) {
            changed = true;
        }
    }

    if let Some(id) = toggled
        && toggle_visibility(model, &id).is_some()
    {
        changed = true;
    }

    ui.add_space(ITEM_SPACING / 2.0);
    ui.label(
        egui::RichText::new(format!("{} element(s)", model.len()))
            .small()
            .weak(),
    );

    changed
}

fn paint_indicator(ui: &egui::Ui, state: &SettingsListState) {
    let drag_state = state.drag.state();
    let len = state.row_rects.len();
    let stroke = egui::Stroke::new(INDICATOR_WIDTH, ui.visuals().selection.stroke.color);

    for (index, rect) in state.row_rects.iter().enumerate() {
        match rows::row_highlight(index, len, drag_state) {
            RowHighlight::DropAbove => {
                ui.painter().hline(rect.x_range(), rect.top() - ROW_SPACING / 2.0, stroke);
            }
            RowHighlight::DropBelow => {
                ui.painter().hline(rect.x_range(), rect.bottom() + ROW_SPACING / 2.0, stroke);
            }
            RowHighlight::Idle | RowHighlight::Dragging => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::SaveQueue;
    use crate::test_utils::{MemoryStore, ids_of, settings_of};
    use std::sync::Arc;

    fn model_with(ids: &[&str]) -> (ListModel, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let mut model = ListModel::new(SaveQueue::spawn(store.clone()).unwrap());
        model.load(settings_of(ids));
        (model, store)
    }

    fn rect(left: f32, top: f32, right: f32, bottom: f32) -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(left, top), egui::pos2(right, bottom))
    }

    fn run_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
        model: &mut ListModel,
        state: &mut SettingsListState,
    ) -> bool {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut changed = false;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = super::ui(ui, model, state);
            });
        });
        changed
    }

    fn primary(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_rows_cached_during_drag() {
        let (model, _store) = model_with(&["A", "B", "C"]);
        let mut state = SettingsListState::new();
        state.sync_rows(&model);
        assert!(state.drag.pointer_down(0, PointerTarget::RowBody));

        // Marker survives only if the rows are not rebuilt
        state.rows[0].label = "marker".into();
        state.sync_rows(&model);

        assert_eq!(state.rows[0].label, "marker");
        assert_eq!(state.rows.len(), 3);
        assert!(state.drag.is_dragging());
    }

    #[test]
    fn test_length_change_cancels_drag() {
        let (mut model, _store) = model_with(&["A", "B", "C"]);
        let mut state = SettingsListState::new();
        state.sync_rows(&model);
        state.drag.pointer_down(2, PointerTarget::RowBody);

        model.load(settings_of(&["A", "B"]));
        state.sync_rows(&model);

        assert!(!state.drag.is_dragging());
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn test_same_length_change_keeps_drag() {
        let (mut model, _store) = model_with(&["A", "B", "C"]);
        let mut state = SettingsListState::new();
        state.sync_rows(&model);
        state.drag.pointer_down(0, PointerTarget::RowBody);

        model.toggle("B");
        state.sync_rows(&model);

        assert!(state.drag.is_dragging());
        assert!(!state.rows[1].visible);
    }

    #[test]
    fn test_pointer_target_excludes_checkbox() {
        let mut state = SettingsListState::new();
        state.row_rects = vec![rect(0.0, 0.0, 200.0, 30.0), rect(0.0, 34.0, 200.0, 64.0)];
        state.toggle_rects = vec![rect(170.0, 5.0, 190.0, 25.0), rect(170.0, 39.0, 190.0, 59.0)];

        assert_eq!(
            state.pointer_target(egui::pos2(180.0, 15.0)),
            Some((0, PointerTarget::VisibilityToggle))
        );
        assert_eq!(
            state.pointer_target(egui::pos2(20.0, 15.0)),
            Some((0, PointerTarget::RowBody))
        );
        assert_eq!(
            state.pointer_target(egui::pos2(180.0, 50.0)),
            Some((1, PointerTarget::VisibilityToggle))
        );
        assert_eq!(state.pointer_target(egui::pos2(20.0, 100.0)), None);
    }

    #[test]
    fn test_checkbox_press_never_drags() {
        let mut state = SettingsListState::new();
        state.row_rects = vec![rect(0.0, 0.0, 200.0, 30.0)];
        state.toggle_rects = vec![rect(170.0, 5.0, 190.0, 25.0)];

        let (index, target) = state.pointer_target(egui::pos2(180.0, 15.0)).unwrap();
        assert!(!state.drag.pointer_down(index, target));
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn test_ui_reports_committed_drop() {
        let (mut model, store) = model_with(&["A", "B", "C"]);
        let mut state = SettingsListState::new();
        let ctx = egui::Context::default();

        assert!(!run_frame(&ctx, Vec::new(), &mut model, &mut state));
        assert_eq!(state.row_rects.len(), 3);

        let first = state.row_rects[0];
        let grab = egui::pos2(first.left() + 4.0, first.center().y);
        let press = vec![egui::Event::PointerMoved(grab), primary(grab, true)];
        assert!(!run_frame(&ctx, press, &mut model, &mut state));
        assert!(state.drag.is_dragging());

        let below = egui::pos2(grab.x, state.row_rects[2].bottom() + 2.0);
        let release = vec![egui::Event::PointerMoved(below), primary(below, false)];
        assert!(run_frame(&ctx, release, &mut model, &mut state));
        assert!(!state.drag.is_dragging());
        assert_eq!(ids_of(&model.snapshot()), ["B", "C", "A"]);

        model.shutdown();
        assert_eq!(ids_of(&store.last_saved().unwrap()), ["B", "C", "A"]);
    }
}
