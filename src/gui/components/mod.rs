//! Reusable GUI components

pub mod settings_list;
