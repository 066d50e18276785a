//! Configuration management for the titlebar settings panel
//!
//! This module provides:
//! - **display**: the ordered element list and its JSON shape
//! - **store**: the settings store client that reads and writes it

pub mod display;
pub mod store;

// Re-export commonly used types
pub use display::{DisplaySettings, TitlebarElement};
pub use store::{JsonFileStore, SettingsStore};
