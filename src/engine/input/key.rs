// Keyboard keys known to the game and their display names

use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Every key the game can bind an action to.
///
/// `Key::None` is a legal binding and means "this action has no key trigger".
/// Left and right variants of modifier keys collapse onto a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    #[default]
    None,

    // Editing and navigation
    Backspace,
    Tab,
    Return,
    Escape,
    Space,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    PrintScreen,
    Pause,
    CapsLock,

    // Punctuation
    Minus,
    Equals,
    LeftBracket,
    RightBracket,
    Backslash,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    Backquote,

    // Digits
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Keypad
    Kp0,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    KpPeriod,
    KpDivide,
    KpMultiply,
    KpMinus,
    KpPlus,
    KpEnter,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Modifiers
    Shift,
    Control,
    Alt,
    Super,
}

impl Key {
    /// All representable keys, `Key::None` first
    pub const ALL: [Key; 98] = [
        Key::None,
        Key::Backspace,
        Key::Tab,
        Key::Return,
        Key::Escape,
        Key::Space,
        Key::Delete,
        Key::Insert,
        Key::Home,
        Key::End,
        Key::PageUp,
        Key::PageDown,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::PrintScreen,
        Key::Pause,
        Key::CapsLock,
        Key::Minus,
        Key::Equals,
        Key::LeftBracket,
        Key::RightBracket,
        Key::Backslash,
        Key::Semicolon,
        Key::Quote,
        Key::Comma,
        Key::Period,
        Key::Slash,
        Key::Backquote,
        Key::Key0,
        Key::Key1,
        Key::Key2,
        Key::Key3,
        Key::Key4,
        Key::Key5,
        Key::Key6,
        Key::Key7,
        Key::Key8,
        Key::Key9,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::Kp0,
        Key::Kp1,
        Key::Kp2,
        Key::Kp3,
        Key::Kp4,
        Key::Kp5,
        Key::Kp6,
        Key::Kp7,
        Key::Kp8,
        Key::Kp9,
        Key::KpPeriod,
        Key::KpDivide,
        Key::KpMultiply,
        Key::KpMinus,
        Key::KpPlus,
        Key::KpEnter,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::Shift,
        Key::Control,
        Key::Alt,
        Key::Super,
    ];

    /// Display name of the key, as shown to players
    pub fn name(self) -> &'static str {
        match self {
            Key::None => "None",
            Key::Backspace => "Backspace",
            Key::Tab => "Tab",
            Key::Return => "Return",
            Key::Escape => "Escape",
            Key::Space => "Space",
            Key::Delete => "Delete",
            Key::Insert => "Insert",
            Key::Home => "Home",
            Key::End => "End",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::PrintScreen => "PrintScreen",
            Key::Pause => "Pause",
            Key::CapsLock => "CapsLock",
            Key::Minus => "-",
            Key::Equals => "=",
            Key::LeftBracket => "[",
            Key::RightBracket => "]",
            Key::Backslash => "\\",
            Key::Semicolon => ";",
            Key::Quote => "'",
            Key::Comma => ",",
            Key::Period => ".",
            Key::Slash => "/",
            Key::Backquote => "`",
            Key::Key0 => "0",
            Key::Key1 => "1",
            Key::Key2 => "2",
            Key::Key3 => "3",
            Key::Key4 => "4",
            Key::Key5 => "5",
            Key::Key6 => "6",
            Key::Key7 => "7",
            Key::Key8 => "8",
            Key::Key9 => "9",
            Key::A => "a",
            Key::B => "b",
            Key::C => "c",
            Key::D => "d",
            Key::E => "e",
            Key::F => "f",
            Key::G => "g",
            Key::H => "h",
            Key::I => "i",
            Key::J => "j",
            Key::K => "k",
            Key::L => "l",
            Key::M => "m",
            Key::N => "n",
            Key::O => "o",
            Key::P => "p",
            Key::Q => "q",
            Key::R => "r",
            Key::S => "s",
            Key::T => "t",
            Key::U => "u",
            Key::V => "v",
            Key::W => "w",
            Key::X => "x",
            Key::Y => "y",
            Key::Z => "z",
            Key::Kp0 => "Keypad 0",
            Key::Kp1 => "Keypad 1",
            Key::Kp2 => "Keypad 2",
            Key::Kp3 => "Keypad 3",
            Key::Kp4 => "Keypad 4",
            Key::Kp5 => "Keypad 5",
            Key::Kp6 => "Keypad 6",
            Key::Kp7 => "Keypad 7",
            Key::Kp8 => "Keypad 8",
            Key::Kp9 => "Keypad 9",
            Key::KpPeriod => "Keypad .",
            Key::KpDivide => "Keypad /",
            Key::KpMultiply => "Keypad *",
            Key::KpMinus => "Keypad -",
            Key::KpPlus => "Keypad +",
            Key::KpEnter => "Keypad Enter",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::Shift => "Shift",
            Key::Control => "Ctrl",
            Key::Alt => "Alt",
            Key::Super => "Super",
        }
    }

    /// Canonical uppercase name, the form written to and matched in hotkey files
    pub fn upper_name(self) -> String {
        self.name().to_uppercase()
    }

    /// Convert a winit physical key code into a game key.
    /// Codes the game does not know about map to `Key::None`.
    pub fn from_key_code(code: KeyCode) -> Key {
        match code {
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Enter => Key::Return,
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,
            KeyCode::Delete => Key::Delete,
            KeyCode::Insert => Key::Insert,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::ArrowUp => Key::Up,
            KeyCode::ArrowDown => Key::Down,
            KeyCode::ArrowLeft => Key::Left,
            KeyCode::ArrowRight => Key::Right,
            KeyCode::PrintScreen => Key::PrintScreen,
            KeyCode::Pause => Key::Pause,
            KeyCode::CapsLock => Key::CapsLock,
            KeyCode::Minus => Key::Minus,
            KeyCode::Equal => Key::Equals,
            KeyCode::BracketLeft => Key::LeftBracket,
            KeyCode::BracketRight => Key::RightBracket,
            KeyCode::Backslash => Key::Backslash,
            KeyCode::Semicolon => Key::Semicolon,
            KeyCode::Quote => Key::Quote,
            KeyCode::Comma => Key::Comma,
            KeyCode::Period => Key::Period,
            KeyCode::Slash => Key::Slash,
            KeyCode::Backquote => Key::Backquote,
            KeyCode::Digit0 => Key::Key0,
            KeyCode::Digit1 => Key::Key1,
            KeyCode::Digit2 => Key::Key2,
            KeyCode::Digit3 => Key::Key3,
            KeyCode::Digit4 => Key::Key4,
            KeyCode::Digit5 => Key::Key5,
            KeyCode::Digit6 => Key::Key6,
            KeyCode::Digit7 => Key::Key7,
            KeyCode::Digit8 => Key::Key8,
            KeyCode::Digit9 => Key::Key9,
            KeyCode::KeyA => Key::A,
            KeyCode::KeyB => Key::B,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyE => Key::E,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyH => Key::H,
            KeyCode::KeyI => Key::I,
            KeyCode::KeyJ => Key::J,
            KeyCode::KeyK => Key::K,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyN => Key::N,
            KeyCode::KeyO => Key::O,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyT => Key::T,
            KeyCode::KeyU => Key::U,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,
            KeyCode::Numpad0 => Key::Kp0,
            KeyCode::Numpad1 => Key::Kp1,
            KeyCode::Numpad2 => Key::Kp2,
            KeyCode::Numpad3 => Key::Kp3,
            KeyCode::Numpad4 => Key::Kp4,
            KeyCode::Numpad5 => Key::Kp5,
            KeyCode::Numpad6 => Key::Kp6,
            KeyCode::Numpad7 => Key::Kp7,
            KeyCode::Numpad8 => Key::Kp8,
            KeyCode::Numpad9 => Key::Kp9,
            KeyCode::NumpadDecimal => Key::KpPeriod,
            KeyCode::NumpadDivide => Key::KpDivide,
            KeyCode::NumpadMultiply => Key::KpMultiply,
            KeyCode::NumpadSubtract => Key::KpMinus,
            KeyCode::NumpadAdd => Key::KpPlus,
            KeyCode::NumpadEnter => Key::KpEnter,
            KeyCode::F1 => Key::F1,
            KeyCode::F2 => Key::F2,
            KeyCode::F3 => Key::F3,
            KeyCode::F4 => Key::F4,
            KeyCode::F5 => Key::F5,
            KeyCode::F6 => Key::F6,
            KeyCode::F7 => Key::F7,
            KeyCode::F8 => Key::F8,
            KeyCode::F9 => Key::F9,
            KeyCode::F10 => Key::F10,
            KeyCode::F11 => Key::F11,
            KeyCode::F12 => Key::F12,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
            KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
            KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
            KeyCode::SuperLeft | KeyCode::SuperRight => Key::Super,
            _ => Key::None,
        }
    }
}

/// Reverse lookup from canonical uppercase key name to key.
///
/// Built once by enumerating every representable key, so it always agrees
/// with [`Key::upper_name`].
#[derive(Debug, Clone)]
pub struct KeyNameTable {
    by_name: HashMap<String, Key>,
}

impl KeyNameTable {
    /// Build the table from `Key::ALL`
    pub fn new() -> Self {
        let mut by_name = HashMap::with_capacity(Key::ALL.len());
        for key in Key::ALL {
            by_name.entry(key.upper_name()).or_insert(key);
        }
        Self { by_name }
    }

    /// Find a key by name. The lookup is case-insensitive.
    pub fn find(&self, name: &str) -> Option<Key> {
        self.by_name.get(&name.to_uppercase()).copied()
    }
}

impl Default for KeyNameTable {
    fn default() -> Self {
        Self::new()
    }
}
