//! Configuration file parsing for the viewer
//!
//! Supports:
//! - `<config_dir>/media-viewer/config.toml` - Global settings and preset overrides

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings};
pub use types::*;
