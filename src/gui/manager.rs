//! Settings window implemented with egui/eframe

use std::sync::Arc;

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::info;

use super::components::settings_list::{self, SettingsListState};
use super::constants::*;
use crate::config::SettingsStore;
use crate::panel::ListModel;
use crate::persistence::SaveQueue;

struct SettingsApp {
    model: ListModel,
    list_state: SettingsListState,
    store_location: String,
}

impl SettingsApp {
    fn new(_cc: &CreationContext<'_>, model: ListModel, store_location: String) -> Self {
        info!("Initializing egui settings panel");
        Self {
            model,
            list_state: SettingsListState::new(),
            store_location,
        }
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.heading("Titlebar Settings");
            ui.add_space(SECTION_SPACING);

            // Show a committed drop or toggle without waiting for more input
            if settings_list::ui(ui, &mut self.model, &mut self.list_state) {
                ctx.request_repaint();
            }

            ui.add_space(SECTION_SPACING);
            ui.separator();
            ui.label(
                egui::RichText::new(format!("Saved to {}", self.store_location))
                    .small()
                    .weak(),
            );
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.model.shutdown();
        info!("Settings panel exiting");
    }
}

/// Load settings from `store` and open the settings window
pub fn run_gui(store: Arc<dyn SettingsStore>, store_location: String) -> Result<()> {
    let saver = SaveQueue::spawn(Arc::clone(&store))?;
    let mut model = ListModel::new(saver);
    model.load_from(&*store);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Titlebar Settings"),
        ..Default::default()
    };

    eframe::run_native(
        "Titlebar Settings",
        options,
        Box::new(move |cc| Ok(Box::new(SettingsApp::new(cc, model, store_location)))),
    )
    .map_err(|err| anyhow!("Failed to launch settings panel: {err}"))
}
