// Display mode control

/// The part of the display engine hotkeys are allowed to touch
pub trait DisplayEngine {
    /// Switch between windowed and fullscreen mode
    fn toggle_fullscreen(&mut self);

    /// Whether the display is currently fullscreen
    fn is_fullscreen(&self) -> bool;

    /// Present the current frame again after a mode change
    fn render(&mut self);
}
