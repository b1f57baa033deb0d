// Hotkey registry for a turn-based strategy game
//
// `engine` holds the keyboard, configuration and settings plumbing; `game`
// holds the hotkey catalog, the hotkey file and the queries built on them.

pub mod engine;
pub mod game;

pub use engine::settings::Settings;
pub use game::hotkeys::{load_hotkeys, HotKeyEvent, HotKeys};
