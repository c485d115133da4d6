//! Output keys: the fixed set of render surfaces the engine addresses

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifies one render surface.
///
/// The first six keys are views (at most one is live at a time). `Root` is the
/// shared output container that carries style variables, and `Shell` is the
/// application chrome around it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputKey {
    #[default]
    Nul,
    Text,
    Image,
    Audio,
    Video,
    Frame,
    Root,
    Shell,
}

impl OutputKey {
    /// Every key, views first
    pub const ALL: [OutputKey; 8] = [
        OutputKey::Nul,
        OutputKey::Text,
        OutputKey::Image,
        OutputKey::Audio,
        OutputKey::Video,
        OutputKey::Frame,
        OutputKey::Root,
        OutputKey::Shell,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKey::Nul => "nul",
            OutputKey::Text => "text",
            OutputKey::Image => "image",
            OutputKey::Audio => "audio",
            OutputKey::Video => "video",
            OutputKey::Frame => "frame",
            OutputKey::Root => "root",
            OutputKey::Shell => "shell",
        }
    }

    /// Whether this key names a view the state machine can activate
    pub fn is_view(&self) -> bool {
        !matches!(self, OutputKey::Root | OutputKey::Shell)
    }

    /// Views whose content is a revocable resource handle
    pub fn holds_resource(&self) -> bool {
        matches!(
            self,
            OutputKey::Image | OutputKey::Audio | OutputKey::Video | OutputKey::Frame
        )
    }

    /// Views with playback (rate, loop, seek)
    pub fn is_playable(&self) -> bool {
        matches!(self, OutputKey::Audio | OutputKey::Video)
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unknown_output(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_keys() {
        let views: Vec<_> = OutputKey::ALL.into_iter().filter(|k| k.is_view()).collect();
        assert_eq!(views.len(), 6);
        assert!(!OutputKey::Root.is_view());
        assert!(!OutputKey::Shell.is_view());
    }

    #[test]
    fn test_resource_and_playable_keys() {
        assert!(OutputKey::Frame.holds_resource());
        assert!(!OutputKey::Text.holds_resource());
        assert!(!OutputKey::Nul.holds_resource());
        assert!(OutputKey::Video.is_playable());
        assert!(!OutputKey::Image.is_playable());
    }

    #[test]
    fn test_parse_round_trip() {
        for key in OutputKey::ALL {
            assert_eq!(key.as_str().parse::<OutputKey>().unwrap(), key);
        }
        assert!("canvas".parse::<OutputKey>().is_err());
    }

    #[test]
    fn test_default_is_nul() {
        assert_eq!(OutputKey::default(), OutputKey::Nul);
    }
}
