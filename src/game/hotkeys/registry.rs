// Runtime hotkey bindings and queries

use super::catalog::{default_hotkeys, CatalogEntry};
use super::event::{HotKeyCategory, HotKeyEvent};
use super::HotKeyError;
use crate::engine::input::{Key, KeyState};
use std::collections::HashSet;

/// Binding record of a single hotkey event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotKeyInfo {
    /// Section of the hotkey file the event is listed under
    pub category: HotKeyCategory,

    /// Unique name, used as the key in the hotkey file
    pub name: &'static str,

    /// Key from the catalog
    pub default_key: Key,

    /// Currently bound key
    pub key: Key,
}

/// Current key binding for every hotkey event.
///
/// Holds one record per [`HotKeyEvent`], in catalog order.
#[derive(Debug, Clone)]
pub struct HotKeys {
    events: Vec<HotKeyInfo>,
}

impl HotKeys {
    /// Build the bindings from the default catalog
    pub fn new() -> Result<Self, HotKeyError> {
        Self::from_catalog(default_hotkeys())
    }

    /// Build the bindings from catalog entries.
    ///
    /// Every event needs exactly one entry with a non-empty unique name, and the
    /// events of a category must follow each other in catalog order.
    pub fn from_catalog(entries: Vec<CatalogEntry>) -> Result<Self, HotKeyError> {
        let mut slots: Vec<Option<HotKeyInfo>> = vec![None; HotKeyEvent::COUNT];
        let mut names = HashSet::new();

        for (event, category, name, key) in entries {
            if name.is_empty() {
                return Err(HotKeyError::EmptyName(event));
            }
            if !names.insert(name) {
                return Err(HotKeyError::DuplicateName(name.to_string()));
            }

            let slot = &mut slots[event.index()];
            if slot.is_some() {
                return Err(HotKeyError::DuplicateEvent(event));
            }
            *slot = Some(HotKeyInfo {
                category,
                name,
                default_key: key,
                key,
            });
        }

        let mut events = Vec::with_capacity(HotKeyEvent::COUNT);
        for (event, slot) in HotKeyEvent::ALL.iter().zip(slots) {
            events.push(slot.ok_or(HotKeyError::MissingEvent(*event))?);
        }

        let mut finished: HashSet<HotKeyCategory> = HashSet::new();
        for pair in events.windows(2) {
            if pair[0].category != pair[1].category {
                finished.insert(pair[0].category);
                if finished.contains(&pair[1].category) {
                    return Err(HotKeyError::SplitCategory(pair[1].category.name()));
                }
            }
        }

        Ok(Self { events })
    }

    /// Binding record of an event
    pub fn info(&self, event: HotKeyEvent) -> &HotKeyInfo {
        &self.events[event.index()]
    }

    /// Key currently bound to an event
    pub fn get(&self, event: HotKeyEvent) -> Key {
        self.info(event).key
    }

    /// Bind an event to a key. `Key::None` removes the key trigger
    pub fn set(&mut self, event: HotKeyEvent, key: Key) {
        self.events[event.index()].key = key;
    }

    /// Persisted name of an event
    pub fn name(&self, event: HotKeyEvent) -> &'static str {
        self.info(event).name
    }

    /// Category of an event
    pub fn category(&self, event: HotKeyEvent) -> HotKeyCategory {
        self.info(event).category
    }

    /// Find an event by its exact persisted name
    pub fn event_by_name(&self, name: &str) -> Option<HotKeyEvent> {
        self.events
            .iter()
            .position(|info| info.name == name)
            .and_then(HotKeyEvent::from_index)
    }

    /// Restore every event to its catalog key
    pub fn reset_to_defaults(&mut self) {
        for info in &mut self.events {
            info.key = info.default_key;
        }
    }

    /// All events with their binding records, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (HotKeyEvent, &HotKeyInfo)> {
        HotKeyEvent::ALL.iter().copied().zip(self.events.iter())
    }

    /// Check if the event's key was pressed this frame.
    /// Events without a key never fire.
    pub fn is_pressed<S: KeyState>(&self, event: HotKeyEvent, input: &S) -> bool {
        let key = self.get(event);
        key != Key::None && input.key_press() && input.key_value() == key
    }

    /// Check if the event's key is held down
    pub fn is_held<S: KeyState>(&self, event: HotKeyEvent, input: &S) -> bool {
        let key = self.get(event);
        key != Key::None && input.key_hold() && input.key_value() == key
    }

    /// Uppercase name of the event's key, for on-screen hints
    pub fn key_name(&self, event: HotKeyEvent) -> String {
        self.get(event).upper_name()
    }
}
