// Line-oriented `name = value` configuration files

use log::debug;
use std::fs;
use std::path::Path;

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A simple key/value configuration.
///
/// Each line holds `name <separator> value`. Lines starting with the comment
/// character, blank lines and lines without a separator are ignored. Names and
/// values are trimmed; a name that appears twice keeps its last value.
#[derive(Debug, Clone)]
pub struct KeyValueConfig {
    separator: char,
    comment: char,

    /// Parameters in the order they were first seen
    params: Vec<(String, String)>,
}

impl KeyValueConfig {
    /// Create an empty configuration
    pub fn new(separator: char, comment: char) -> Self {
        Self {
            separator,
            comment,
            params: Vec::new(),
        }
    }

    /// Load parameters from a file, replacing the current ones.
    /// Bytes that are not UTF-8 are replaced, so only an IO failure fails the load
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let bytes = fs::read(path)?;
        self.parse(&String::from_utf8_lossy(&bytes));
        Ok(())
    }

    /// Parse parameters from text, replacing the current ones
    pub fn parse(&mut self, text: &str) {
        self.params.clear();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(self.comment) {
                continue;
            }

            match line.split_once(self.separator) {
                Some((name, value)) => self.set_param(name.trim(), value.trim()),
                None => debug!("Skipping line {} without '{}'", index + 1, self.separator),
            }
        }
    }

    /// Get a parameter value, or an empty string if it is absent
    pub fn str_param(&self, name: &str) -> &str {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Set a parameter, overwriting an existing value
    pub fn set_param(&mut self, name: &str, value: &str) {
        match self.params.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.params.push((name.to_string(), value.to_string())),
        }
    }

    /// Check if a parameter is present
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|(n, _)| n == name)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render all parameters as text, one per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.params {
            out.push_str(&format!("{} {} {}\n", name, self.separator, value));
        }
        out
    }

    /// Write all parameters to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.render())?;
        Ok(())
    }
}
