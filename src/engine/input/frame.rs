// Per-frame keyboard state fed from winit events

use super::key::Key;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{ModifiersState, PhysicalKey};

/// Read access to the keyboard state of the current frame.
///
/// Hotkey queries are generic over this so they can run against a real
/// [`InputFrame`] or a hand-built state in tests.
pub trait KeyState {
    /// A key went down this frame (key repeats do not count)
    fn key_press(&self) -> bool;

    /// The last pressed key is still held down
    fn key_hold(&self) -> bool;

    /// The key the press/hold flags refer to
    fn key_value(&self) -> Key;
}

/// Keyboard state for the current frame
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Most recently pressed key
    key: Key,

    /// A fresh press happened this frame
    pressed: bool,

    /// `key` has not been released yet
    held: bool,

    /// Modifier keys currently held
    modifiers: ModifiersState,
}

impl InputFrame {
    /// Create an empty input frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let key = Key::from_key_code(key_code);
            match event.state {
                ElementState::Pressed => {
                    if !event.repeat {
                        self.press(key);
                    }
                }
                ElementState::Released => self.release(key),
            }
        }
    }

    /// Record the modifier state reported by winit
    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Modifier keys currently held
    pub fn modifiers(&self) -> ModifiersState {
        self.modifiers
    }

    /// Register a key press
    pub fn press(&mut self, key: Key) {
        self.key = key;
        self.pressed = true;
        self.held = true;
    }

    /// Register a key release
    pub fn release(&mut self, key: Key) {
        if self.key == key {
            self.held = false;
        }
    }

    /// Update state for a new frame.
    /// Call this once per frame after all events were handled
    pub fn update(&mut self) {
        self.pressed = false;
    }
}

impl KeyState for InputFrame {
    fn key_press(&self) -> bool {
        self.pressed
    }

    fn key_hold(&self) -> bool {
        self.held
    }

    fn key_value(&self) -> Key {
        self.key
    }
}
