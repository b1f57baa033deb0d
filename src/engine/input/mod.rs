// Keyboard input
//
// ## Architecture
//
// - `key`: The keys the game knows about, their names and winit conversion
// - `frame`: Keyboard state of the current frame, fed from winit events
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputFrame, Key, KeyState};
//
// let mut frame = InputFrame::new();
//
// // In your event loop, process keyboard events
// frame.process_keyboard_event(&key_event);
//
// if frame.key_press() && frame.key_value() == Key::Escape {
//     // Escape went down this frame
// }
//
// // At the end of each frame
// frame.update();
// ```

pub mod frame;
pub mod key;

pub use frame::{InputFrame, KeyState};
pub use key::{Key, KeyNameTable};
