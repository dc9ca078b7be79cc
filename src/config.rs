//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory name under the user config dir
pub const APP_DIR: &str = "task-cli";

/// File name of the task list
pub const STORAGE_FILE: &str = "tasklist.json";

/// Get the task-cli config directory
/// - macOS: ~/Library/Application Support/task-cli/
/// - Linux: ~/.config/task-cli/ (or $XDG_CONFIG_HOME/task-cli/)
/// - Windows: %APPDATA%/task-cli/
pub fn app_config_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join(APP_DIR))
}

/// Get the path of the task list file, preferring an explicit override
pub fn storage_file(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(app_config_dir()?.join(STORAGE_FILE)),
    }
}
