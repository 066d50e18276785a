//! Shared test doubles.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};

use crate::config::{DisplaySettings, SettingsStore, TitlebarElement};

/// In-memory settings store that records every successful save
#[derive(Default)]
pub struct MemoryStore {
    initial: Option<DisplaySettings>,
    fail_loads: bool,
    fail_saves: bool,
    saves: Mutex<Vec<DisplaySettings>>,
    attempts: AtomicUsize,
}

impl MemoryStore {
    pub fn with_settings(settings: DisplaySettings) -> Self {
        Self {
            initial: Some(settings),
            ..Self::default()
        }
    }

    pub fn failing_loads() -> Self {
        Self {
            fail_loads: true,
            ..Self::default()
        }
    }

    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> Vec<DisplaySettings> {
        self.saves.lock().unwrap().clone()
    }

    pub fn last_saved(&self) -> Option<DisplaySettings> {
        self.saves.lock().unwrap().last().cloned()
    }

    pub fn save_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl SettingsStore for MemoryStore {
    fn get_display_settings(&self) -> Result<DisplaySettings> {
        if self.fail_loads {
            return Err(anyhow!("store unreachable"));
        }
        Ok(self.initial.clone().unwrap_or_default())
    }

    fn set_display_settings(&self, settings: &DisplaySettings) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            return Err(anyhow!("store rejected write"));
        }
        self.saves.lock().unwrap().push(settings.clone());
        Ok(())
    }
}

/// Settings with the given ids, all visible
pub fn settings_of(ids: &[&str]) -> DisplaySettings {
    DisplaySettings {
        elements: ids.iter().map(|id| TitlebarElement::new(*id, true)).collect(),
    }
}

/// Ids of `settings` in order
pub fn ids_of(settings: &DisplaySettings) -> Vec<String> {
    settings.elements.iter().map(|e| e.id.clone()).collect()
}
