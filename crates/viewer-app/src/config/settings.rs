//! Settings loading from `<config_dir>/media-viewer/config.toml`

use std::path::{Path, PathBuf};

use viewer_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "media-viewer";
const CONFIG_FILENAME: &str = "config.toml";

/// The per-user config directory, if the platform has one
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Load settings from `config_dir/config.toml`, falling back to defaults
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default `config.toml` when none exists
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Media Viewer Configuration

[behavior]
# Text files larger than this (bytes) ask before loading
large_file_threshold = 1048576
# Scroll text back to the top after each load
scroll_text_to_top = true
# "suppress": resetting controls never marks the session modified
#             (resetting one group keeps other edits marked)
# "track": every control a reset changes counts as a modification
reset_guard = "suppress"

[startup]
controls = false
force_dark = false
reverse = false

# Preset overrides, by control id
[presets]
# "filter-blur" = 0
# "media-speed" = 1
# "text-font-family" = "monospace"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
