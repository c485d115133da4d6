//! Configuration types for the viewer
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `BehaviorSettings` - Loading policy and the reset guard policy
//! - `StartupSettings` - Boot-time flags applied to the menu entries

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use viewer_core::{Value, FILE_SIZE_MAX_SAFE};

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub startup: StartupSettings,

    /// Entry id -> preset override
    #[serde(default)]
    pub presets: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Text files above this many bytes need confirmation
    #[serde(default = "default_large_file_threshold")]
    pub large_file_threshold: u64,

    /// Scroll the text view back to the top after each load
    #[serde(default = "default_true")]
    pub scroll_text_to_top: bool,

    /// Whether control resets mark the session modified
    #[serde(default)]
    pub reset_guard: ResetGuardPolicy,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            large_file_threshold: default_large_file_threshold(),
            scroll_text_to_top: true,
            reset_guard: ResetGuardPolicy::default(),
        }
    }
}

fn default_large_file_threshold() -> u64 {
    FILE_SIZE_MAX_SAFE
}

fn default_true() -> bool {
    true
}

/// How "reset controls" and snapshot imports interact with the
/// modification guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetGuardPolicy {
    /// Suppress around the reset; resets never mark the session modified.
    /// A full reset ends clean; a single-group reset keeps earlier edits
    /// marked.
    #[default]
    Suppress,
    /// Leave the guard active; each entry the reset changes notifies once
    Track,
}

/// Boot-time flags, each mapped to one menu entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StartupSettings {
    /// Start with the controls panel open
    #[serde(default)]
    pub controls: bool,

    /// Force dark presentation
    #[serde(default)]
    pub force_dark: bool,

    /// Reverse layout
    #[serde(default)]
    pub reverse: bool,
}

impl StartupSettings {
    /// CLI flags only ever switch a flag on
    pub fn merge(self, other: StartupSettings) -> Self {
        Self {
            controls: self.controls || other.controls,
            force_dark: self.force_dark || other.force_dark,
            reverse: self.reverse || other.reverse,
        }
    }
}
