use anyhow::Result;
use heroes_hotkeys::engine::display::DisplayEngine;
use heroes_hotkeys::engine::input::InputFrame;
use heroes_hotkeys::{load_hotkeys, HotKeyEvent, Settings};
use log::info;
use std::path::PathBuf;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowBuilder},
};

/// Display control backed by the game window
struct WindowDisplay<'a> {
    window: &'a Window,
}

impl DisplayEngine for WindowDisplay<'_> {
    fn toggle_fullscreen(&mut self) {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
        } else {
            self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn render(&mut self) {
        self.window.request_redraw();
    }
}

/// Events reported when they fire, to show the bindings at work
const REPORTED_EVENTS: [HotKeyEvent; 6] = [
    HotKeyEvent::DefaultReady,
    HotKeyEvent::DefaultExit,
    HotKeyEvent::EndTurn,
    HotKeyEvent::NextHero,
    HotKeyEvent::CastSpell,
    HotKeyEvent::SaveGame,
];

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting hotkey demo...");

    let mut settings = Settings::load();
    let key_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.hotkey_file());

    let hotkeys = load_hotkeys(&key_file, &settings)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Hotkeys")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 480))
        .build(&event_loop)?;

    if settings.fullscreen() {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    info!(
        "Press {} to toggle fullscreen, {} to quit",
        hotkeys.key_name(HotKeyEvent::SystemFullscreen),
        hotkeys.key_name(HotKeyEvent::DefaultExit)
    );

    let mut frame = InputFrame::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::ModifiersChanged(modifiers),
                ..
            } => {
                frame.set_modifiers(modifiers.state());
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if event.state == ElementState::Pressed && !event.repeat {
                        let mut display = WindowDisplay { window: &window };
                        hotkeys.keyboard_global_filter(
                            key_code,
                            frame.modifiers(),
                            &mut display,
                            &mut settings,
                        );
                    }
                }
                frame.process_keyboard_event(&event);
            }
            Event::AboutToWait => {
                for hotkey in REPORTED_EVENTS {
                    if hotkeys.is_pressed(hotkey, &frame) {
                        info!("{}", hotkeys.name(hotkey));
                    }
                }
                if hotkeys.is_pressed(HotKeyEvent::DefaultExit, &frame) {
                    elwt.exit();
                }
                frame.update();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
