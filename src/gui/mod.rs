//! egui/eframe front end for the settings panel

pub mod components;
pub mod constants;
mod manager;

pub use manager::run_gui;
