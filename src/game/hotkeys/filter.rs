// System hotkeys handled outside the per-frame queries

use super::event::HotKeyEvent;
use super::registry::HotKeys;
use crate::engine::display::DisplayEngine;
use crate::engine::input::Key;
use crate::engine::settings::Settings;
use log::{info, warn};
use winit::keyboard::{KeyCode, ModifiersState};

impl HotKeys {
    /// Handle system hotkeys for a raw key press.
    ///
    /// Called by the event dispatcher for every key press, even while a dialog
    /// owns normal input. The fullscreen key toggles the display mode unless Alt
    /// or Ctrl is held, and the new mode is saved right away. Returns true if the
    /// display mode was toggled.
    pub fn keyboard_global_filter<D: DisplayEngine>(
        &self,
        key_code: KeyCode,
        modifiers: ModifiersState,
        display: &mut D,
        settings: &mut Settings,
    ) -> bool {
        let fullscreen_key = self.get(HotKeyEvent::SystemFullscreen);
        if fullscreen_key == Key::None || Key::from_key_code(key_code) != fullscreen_key {
            return false;
        }
        if modifiers.alt_key() || modifiers.control_key() {
            return false;
        }

        display.toggle_fullscreen();
        display.render();

        settings.set_fullscreen(display.is_fullscreen());
        if let Err(e) = settings.save() {
            warn!("Failed to save display mode: {}", e);
        }

        info!("Fullscreen {}", if settings.fullscreen() { "on" } else { "off" });
        true
    }
}
