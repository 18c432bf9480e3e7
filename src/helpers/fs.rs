//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "merabestie", APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/bestie-gui/` or `$XDG_CONFIG_HOME/bestie-gui/`
/// - **macOS**: `~/Library/Application Support/com.merabestie.bestie-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\merabestie\bestie-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (logs live here)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/bestie-gui/`
/// - **macOS**: `~/Library/Application Support/com.merabestie.bestie-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\merabestie\bestie-gui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
