//! In-memory ordered element list, the single source of truth for the panel
//!
//! Every mutation hands the full snapshot to the save queue. Nothing here ever
//! waits on persistence.

use tracing::{debug, info, warn};

use crate::config::{DisplaySettings, SettingsStore, TitlebarElement};
use crate::persistence::SaveQueue;

pub struct ListModel {
    elements: Vec<TitlebarElement>,
    revision: u64,
    saver: SaveQueue,
}

impl ListModel {
    pub fn new(saver: SaveQueue) -> Self {
        Self {
            elements: Vec::new(),
            revision: 0,
            saver,
        }
    }

    /// Replace the sequence wholesale. Does not save.
    pub fn load(&mut self, snapshot: DisplaySettings) {
        self.elements = snapshot.sanitized().elements;
        self.revision += 1;
        info!(elements = self.elements.len(), "Loaded titlebar elements");
    }

    /// Startup read; a failing store leaves the list empty
    pub fn load_from(&mut self, store: &dyn SettingsStore) {
        match store.get_display_settings() {
            Ok(snapshot) => self.load(snapshot),
            Err(err) => {
                warn!(error = ?err, "Failed to load display settings, starting empty");
                self.load(DisplaySettings::empty());
            }
        }
    }

    pub fn elements(&self) -> &[TitlebarElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TitlebarElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Bumped on every load and mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> DisplaySettings {
        DisplaySettings {
            elements: self.elements.clone(),
        }
    }

    /// Set the flag for `id`. Returns false when no such element exists.
    pub fn set_visible(&mut self, id: &str, value: bool) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        element.visible = value;
        debug!(id, visible = value, "Set element visibility");
        self.changed();
        true
    }

    /// Flip the flag for `id`, returning its new value
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let value = !self.get(id)?.visible;
        self.set_visible(id, value);
        Some(value)
    }

    /// Move the element at `from` so it sits at `to` in the resulting sequence.
    /// Returns false (and saves nothing) for identity or out-of-range moves.
    pub fn move_element(&mut self, from: usize, to: usize) -> bool {
        let len = self.elements.len();
        if from == to || from >= len || to >= len {
            return false;
        }

        let element = self.elements.remove(from);
        self.elements.insert(to, element);
        debug!(from, to, "Moved titlebar element");
        self.changed();
        true
    }

    /// Flush pending saves and stop the save worker
    pub fn shutdown(&mut self) {
        self.saver.shutdown();
    }

    fn changed(&mut self) {
        self.revision += 1;
        self.saver.schedule(self.snapshot());
    }
}
