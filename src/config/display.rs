//! Display settings: the ordered list of titlebar elements
//!
//! Position is implicit in the index within `elements`; nothing else stores it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::constants::elements::LABELS;

/// One optional titlebar feature, identified by a stable id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlebarElement {
    pub id: String,
    pub visible: bool,
}

impl TitlebarElement {
    pub fn new(id: impl Into<String>, visible: bool) -> Self {
        Self {
            id: id.into(),
            visible,
        }
    }
}

/// Full ordered configuration exchanged with the settings store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub elements: Vec<TitlebarElement>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            elements: LABELS
                .iter()
                .map(|(id, _)| TitlebarElement::new(*id, true))
                .collect(),
        }
    }
}

impl DisplaySettings {
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Drop repeated ids, keeping the first occurrence of each
    pub fn sanitized(self) -> Self {
        let mut seen = HashSet::with_capacity(self.elements.len());
        let elements = self
            .elements
            .into_iter()
            .filter(|element| {
                let fresh = seen.insert(element.id.clone());
                if !fresh {
                    warn!(id = %element.id, "Dropping duplicate titlebar element");
                }
                fresh
            })
            .collect();
        Self { elements }
    }
}

/// Human-readable label for an element id; unknown ids are shown verbatim
pub fn label_for(id: &str) -> &str {
    LABELS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, label)| *label)
        .unwrap_or(id)
}
