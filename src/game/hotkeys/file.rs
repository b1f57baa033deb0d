// Hotkey file loading and saving
//
// The hotkey file is a `name = KEY` config file. Event names are matched
// exactly, key names case-insensitively. Anything that cannot be understood is
// skipped so a broken file never keeps the game from starting.

use super::event::HotKeyEvent;
use super::registry::HotKeys;
use crate::engine::config::KeyValueConfig;
use crate::engine::input::KeyNameTable;
use crate::engine::settings::{Settings, APP_NAME};
use crate::engine::system;
use log::{debug, info, warn};
use std::fmt::Write as _;
use std::path::Path;

impl HotKeys {
    /// Render the bindings in hotkey file format
    pub fn file_content(&self, version: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {} hotkey file (saved by version {})", APP_NAME, version);
        out.push('\n');

        let mut current = None;
        for (_, info) in self.iter() {
            if current != Some(info.category) {
                if current.is_some() {
                    out.push('\n');
                }
                current = Some(info.category);
                let _ = writeln!(out, "# {}:", info.category.name());
            }

            let _ = writeln!(out, "{} = {}", info.name, info.key.upper_name());
        }

        out
    }

    /// Write the current bindings to a hotkey file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.file_content(Settings::version()))
    }

    /// Apply the bindings found in a parsed hotkey file.
    ///
    /// Events missing from the file and values that name no known key keep their
    /// current binding. Returns the number of events that were rebound.
    pub fn apply_config(&mut self, config: &KeyValueConfig, keys: &KeyNameTable) -> usize {
        let mut applied = 0;

        for event in HotKeyEvent::ALL {
            let name = self.name(event);
            let value = config.str_param(name);
            if value.is_empty() {
                continue;
            }

            let Some(key) = keys.find(value) else {
                debug!("Event '{}' has unknown key '{}'", name, value);
                continue;
            };

            self.set(event, key);
            applied += 1;
            debug!("Event '{}' has key '{}'", name, key.upper_name());
        }

        applied
    }

    /// Load bindings from a hotkey file.
    /// Returns false if the file is missing or could not be read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        if !system::is_file(path) {
            return false;
        }

        let mut config = KeyValueConfig::new('=', '#');
        if let Err(e) = config.load(path) {
            warn!("Failed to read hotkey file {}: {}", path.display(), e);
            return false;
        }

        let applied = self.apply_config(&config, &KeyNameTable::new());
        info!("Loaded {} hotkeys from {}", applied, path.display());
        true
    }

    /// Load bindings from `filename`, or write the current bindings to the
    /// default hotkey file when it cannot be loaded.
    pub fn load_or_regenerate<P: AsRef<Path>>(&mut self, filename: P, settings: &Settings) {
        if self.load_file(filename) {
            return;
        }

        let path = settings.hotkey_file();
        if let Err(e) = std::fs::create_dir_all(settings.config_dir()) {
            warn!("Cannot create {}: {}", settings.config_dir().display(), e);
            return;
        }

        match self.save(&path) {
            Ok(()) => info!("Wrote default hotkey file {}", path.display()),
            Err(e) => warn!("Cannot write hotkey file {}: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::load_hotkeys;
    use super::*;
    use crate::engine::input::Key;
    use std::fs;

    fn hotkeys() -> HotKeys {
        HotKeys::new().expect("default catalog is valid")
    }

    fn parsed(text: &str) -> KeyValueConfig {
        let mut config = KeyValueConfig::new('=', '#');
        config.parse(text);
        config
    }

    #[test]
    fn test_file_content_header() {
        let content = hotkeys().file_content("1.2.3");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("# fheroes2 hotkey file (saved by version 1.2.3)"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("# Main Menu:"));
        assert_eq!(lines.next(), Some("new game = N"));
    }

    #[test]
    fn test_file_content_category_sections() {
        let content = hotkeys().file_content("1.0");

        assert!(content.contains("descendants campaign = 4\n\n# Default actions:\ndefault okay event = RETURN\n"));
        assert!(content.contains("left selection = NONE\n"));
        assert!(content.contains("toggle fullscreen = F4\n\n# Battle:\n"));
        assert!(content.contains("scroll down = KEYPAD 2\n\n# Monster:\n"));
        assert!(content.ends_with("buy all monsters in well = M\n"));
    }

    #[test]
    fn test_file_content_one_header_per_category() {
        let content = hotkeys().file_content("1.0");
        let headers: Vec<&str> = content
            .lines()
            .skip(1)
            .filter(|line| line.starts_with('#'))
            .collect();

        assert_eq!(
            headers,
            vec![
                "# Main Menu:",
                "# Default actions:",
                "# Battle:",
                "# World Map:",
                "# Monster:",
                "# Castle:",
            ]
        );
    }

    #[test]
    fn test_file_content_one_line_per_event() {
        let content = hotkeys().file_content("1.0");
        let bindings = content.lines().filter(|line| line.contains(" = ")).count();
        assert_eq!(bindings, HotKeyEvent::COUNT);
    }

    #[test]
    fn test_apply_config_case_insensitive() {
        let keys = KeyNameTable::new();

        let mut lower = hotkeys();
        lower.apply_config(&parsed("move left = down\n"), &keys);

        let mut upper = hotkeys();
        upper.apply_config(&parsed("move left = DOWN\n"), &keys);

        assert_eq!(lower.get(HotKeyEvent::MoveLeft), Key::Down);
        assert_eq!(upper.get(HotKeyEvent::MoveLeft), Key::Down);
    }

    #[test]
    fn test_apply_config_event_names_are_exact() {
        let mut hotkeys = hotkeys();
        let applied = hotkeys.apply_config(&parsed("MOVE LEFT = DOWN\n"), &KeyNameTable::new());

        assert_eq!(applied, 0);
        assert_eq!(hotkeys.get(HotKeyEvent::MoveLeft), Key::Left);
    }

    #[test]
    fn test_apply_config_skips_unknown_key() {
        let mut hotkeys = hotkeys();
        let applied = hotkeys.apply_config(
            &parsed("move left = NOTAKEY\nmove right = keypad 6\n"),
            &KeyNameTable::new(),
        );

        assert_eq!(applied, 1);
        assert_eq!(hotkeys.get(HotKeyEvent::MoveLeft), Key::Left);
        assert_eq!(hotkeys.get(HotKeyEvent::MoveRight), Key::Kp6);
    }

    #[test]
    fn test_apply_config_none_unbinds() {
        let mut hotkeys = hotkeys();
        hotkeys.apply_config(&parsed("end turn = None\n"), &KeyNameTable::new());
        assert_eq!(hotkeys.get(HotKeyEvent::EndTurn), Key::None);
    }

    #[test]
    fn test_round_trip_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fheroes2.key");
        hotkeys().save(&path).unwrap();

        let mut loaded = hotkeys();
        // Scramble first so the file has to restore everything
        for event in HotKeyEvent::ALL {
            loaded.set(event, Key::F12);
        }
        assert!(loaded.load_file(&path));

        let defaults = hotkeys();
        for event in HotKeyEvent::ALL {
            assert_eq!(loaded.get(event), defaults.get(event), "{:?}", event);
        }
    }

    #[test]
    fn test_round_trip_custom_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.key");

        let mut custom = hotkeys();
        custom.set(HotKeyEvent::EndTurn, Key::Return);
        custom.set(HotKeyEvent::SystemFullscreen, Key::F11);
        custom.set(HotKeyEvent::CastSpell, Key::None);
        custom.save(&path).unwrap();

        let mut loaded = hotkeys();
        assert!(loaded.load_file(&path));
        assert_eq!(loaded.get(HotKeyEvent::EndTurn), Key::Return);
        assert_eq!(loaded.get(HotKeyEvent::SystemFullscreen), Key::F11);
        assert_eq!(loaded.get(HotKeyEvent::CastSpell), Key::None);
    }

    #[test]
    fn test_load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut hotkeys = hotkeys();
        assert!(!hotkeys.load_file(dir.path().join("absent.key")));
    }

    #[test]
    fn test_load_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.key");
        fs::write(&path, "# only one binding\nend turn = t\n").unwrap();

        let mut hotkeys = hotkeys();
        assert!(hotkeys.load_file(&path));
        assert_eq!(hotkeys.get(HotKeyEvent::EndTurn), Key::T);
        assert_eq!(hotkeys.get(HotKeyEvent::NextHero), Key::H);
    }

    #[test]
    fn test_missing_file_regenerates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path().join("config"));

        let hotkeys = load_hotkeys(dir.path().join("absent.key"), &settings).unwrap();

        let written = fs::read_to_string(settings.hotkey_file()).unwrap();
        assert_eq!(written, hotkeys.file_content(Settings::version()));
        assert!(!dir.path().join("absent.key").exists());
    }

    #[test]
    fn test_latin1_comment_keeps_user_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path());
        let path = settings.hotkey_file();
        let content = b"# mes touches pr\xe9f\xe9r\xe9es\nend turn = q\n";
        fs::write(&path, content).unwrap();

        let hotkeys = load_hotkeys(&path, &settings).unwrap();

        assert_eq!(hotkeys.get(HotKeyEvent::EndTurn), Key::Q);
        // The user's file is left alone
        assert_eq!(fs::read(&path).unwrap(), content.to_vec());
    }

    #[test]
    fn test_non_utf8_value_skips_only_that_binding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.key");
        fs::write(&path, b"move left = \xe9\nend turn = q\n").unwrap();

        let mut hotkeys = hotkeys();
        assert!(hotkeys.load_file(&path));
        assert_eq!(hotkeys.get(HotKeyEvent::MoveLeft), Key::Left);
        assert_eq!(hotkeys.get(HotKeyEvent::EndTurn), Key::Q);
    }

    #[test]
    fn test_diagonal_move_uses_persisted_name() {
        let mut hotkeys = hotkeys();
        let applied = hotkeys.apply_config(&parsed("move top bottom = Q\n"), &KeyNameTable::new());

        assert_eq!(applied, 1);
        assert_eq!(hotkeys.get(HotKeyEvent::MoveTopLeft), Key::Q);
    }

    #[test]
    fn test_broken_line_does_not_stop_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.key");
        fs::write(&path, "move left = NOTAKEY\nthis line is broken\nend turn = q\n").unwrap();

        let mut hotkeys = hotkeys();
        assert!(hotkeys.load_file(&path));
        assert_eq!(hotkeys.get(HotKeyEvent::MoveLeft), Key::Left);
        assert_eq!(hotkeys.get(HotKeyEvent::EndTurn), Key::Q);
    }

    #[test]
    fn test_existing_file_is_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path().join("config"));
        let path = dir.path().join("user.key");
        fs::write(&path, "end turn = q\n").unwrap();

        let hotkeys = load_hotkeys(&path, &settings).unwrap();

        assert_eq!(hotkeys.get(HotKeyEvent::EndTurn), Key::Q);
        assert_eq!(fs::read_to_string(&path).unwrap(), "end turn = q\n");
        assert!(!settings.hotkey_file().exists());
    }

    #[test]
    fn test_unwritable_location_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the config directory should be
        let blocker = dir.path().join("config");
        fs::write(&blocker, "").unwrap();
        let settings = Settings::new(&blocker);

        let hotkeys = load_hotkeys(dir.path().join("absent.key"), &settings).unwrap();
        assert_eq!(hotkeys.get(HotKeyEvent::EndTurn), Key::E);
    }
}
