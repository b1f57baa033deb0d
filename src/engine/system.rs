// Filesystem helpers

use std::path::{Path, PathBuf};

/// Check if a path points to an existing regular file
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Join a directory and a file name
pub fn concat_path<P: AsRef<Path>>(dir: P, name: &str) -> PathBuf {
    dir.as_ref().join(name)
}

/// Configuration directory for an application.
///
/// Uses the platform config directory when there is one, otherwise falls back
/// to a dot-directory in the working directory.
pub fn config_directory(app: &str) -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(app),
        None => PathBuf::from(format!(".{}", app)),
    }
}
