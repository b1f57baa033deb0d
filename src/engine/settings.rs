// Persistent application settings

use super::config::{ConfigError, KeyValueConfig};
use super::system;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Application name, used for the config directory and file names
pub const APP_NAME: &str = "fheroes2";

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to write settings: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application settings that outlive a single run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the settings and hotkey files
    config_dir: PathBuf,

    /// Whether the game runs fullscreen
    fullscreen: bool,
}

impl Settings {
    /// Create default settings stored under `config_dir`
    pub fn new<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
            fullscreen: false,
        }
    }

    /// Load settings from the platform config directory.
    /// A missing or broken settings file leaves the defaults in place.
    pub fn load() -> Self {
        Self::load_from(system::config_directory(APP_NAME))
    }

    /// Load settings stored under `config_dir`
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Self {
        let mut settings = Self::new(config_dir);
        let path = settings.config_file();
        if !system::is_file(&path) {
            return settings;
        }

        let mut config = KeyValueConfig::new('=', '#');
        match config.load(&path) {
            Ok(()) => {
                settings.fullscreen = config.str_param("fullscreen") == "on";
                info!("Loaded settings from {}", path.display());
            }
            Err(e) => warn!("Ignoring settings file {}: {}", path.display(), e),
        }

        settings
    }

    /// Version string of the running build
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Directory holding the settings and hotkey files
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the settings file
    pub fn config_file(&self) -> PathBuf {
        system::concat_path(&self.config_dir, &format!("{}.cfg", APP_NAME))
    }

    /// Path the hotkey file is regenerated to
    pub fn hotkey_file(&self) -> PathBuf {
        system::concat_path(&self.config_dir, &format!("{}.key", APP_NAME))
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    /// Write settings to the settings file
    pub fn save(&self) -> Result<(), SettingsError> {
        std::fs::create_dir_all(&self.config_dir)?;

        let mut config = KeyValueConfig::new('=', '#');
        config.set_param("fullscreen", if self.fullscreen { "on" } else { "off" });
        config.save(self.config_file())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new("/tmp/fheroes2");
        assert!(!settings.fullscreen());
        assert_eq!(settings.hotkey_file(), PathBuf::from("/tmp/fheroes2/fheroes2.key"));
        assert_eq!(settings.config_file(), PathBuf::from("/tmp/fheroes2/fheroes2.cfg"));
    }

    #[test]
    fn test_version_not_empty() {
        assert!(!Settings::version().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("nested");

        let mut settings = Settings::new(&config_dir);
        settings.set_fullscreen(true);
        settings.save().unwrap();

        let loaded = Settings::load_from(&config_dir);
        assert!(loaded.fullscreen());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(dir.path());
        assert!(!loaded.fullscreen());
    }

    #[test]
    fn test_load_malformed_line_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fheroes2.cfg"), "fullscreen on\n").unwrap();

        let loaded = Settings::load_from(dir.path());
        assert!(!loaded.fullscreen());
    }
}
