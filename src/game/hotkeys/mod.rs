// Hotkey registry
//
// Maps every user-triggerable action to a key, keeps user customizations in a
// hotkey file and answers "was this action's key pressed" queries.
//
// ## Architecture
//
// - `event`: Hotkey event identifiers and their categories
// - `catalog`: Default name, category and key of every event
// - `registry`: Current bindings and per-frame queries
// - `file`: Loading and saving the hotkey file
// - `filter`: System hotkeys handled straight from the event dispatcher
//
// ## Usage Example
//
// ```rust
// use game::hotkeys::{load_hotkeys, HotKeyEvent};
//
// let mut hotkeys = load_hotkeys(&key_file, &settings)?;
//
// // In the event loop
// hotkeys.keyboard_global_filter(key_code, modifiers, &mut display, &mut settings);
//
// if hotkeys.is_pressed(HotKeyEvent::EndTurn, &input_frame) {
//     // End the turn
// }
// ```

pub mod catalog;
pub mod event;
pub mod file;
pub mod filter;
pub mod registry;

pub use catalog::{default_hotkeys, CatalogEntry};
pub use event::{HotKeyCategory, HotKeyEvent};
pub use registry::{HotKeyInfo, HotKeys};

use crate::engine::settings::Settings;
use std::path::Path;

/// Hotkey catalog errors
///
/// These only come from a broken built-in catalog and are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum HotKeyError {
    #[error("Hotkey event {0:?} has an empty name")]
    EmptyName(HotKeyEvent),

    #[error("Hotkey name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("Hotkey event {0:?} is listed more than once")]
    DuplicateEvent(HotKeyEvent),

    #[error("Hotkey event {0:?} is missing from the catalog")]
    MissingEvent(HotKeyEvent),

    #[error("Hotkey category '{0}' is split into several sections")]
    SplitCategory(&'static str),
}

/// Build the hotkey bindings and apply the user's hotkey file.
///
/// If `filename` cannot be loaded the default bindings are written to the
/// hotkey file in the settings directory. Only an invalid built-in catalog is
/// reported as an error.
pub fn load_hotkeys<P: AsRef<Path>>(filename: P, settings: &Settings) -> Result<HotKeys, HotKeyError> {
    let mut hotkeys = HotKeys::new()?;
    hotkeys.load_or_regenerate(filename, settings);
    Ok(hotkeys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Key;

    #[test]
    fn test_hotkey_error_display() {
        let err = HotKeyError::DuplicateName("end turn".to_string());
        assert_eq!(err.to_string(), "Hotkey name 'end turn' is used more than once");
    }

    #[test]
    fn test_load_hotkeys_applies_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path());
        let path = dir.path().join("fheroes2.key");
        std::fs::write(&path, "next hero = Tab\n").unwrap();

        let hotkeys = load_hotkeys(&path, &settings).unwrap();
        assert_eq!(hotkeys.get(HotKeyEvent::NextHero), Key::Tab);
        assert_eq!(hotkeys.get(HotKeyEvent::EndTurn), Key::E);
    }
}
