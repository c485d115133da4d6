//! Stdin commands for headless mode
//!
//! Each line is either a JSON object tagged by `cmd`
//! (`{"cmd":"input","id":"filter-blur","value":2}`) or one of the bare-word
//! shortcuts (`q`, `close`, `y`, `n`, ...).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use viewer_app::{EntryGroup, Message, ResourceHandle};
use viewer_core::prelude::*;
use viewer_core::{FileCandidate, OutputKey, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Offer files from disk; `index` picks the one to show
    Load {
        paths: Vec<PathBuf>,
        #[serde(default)]
        index: usize,
    },
    Url {
        url: String,
    },
    Input {
        id: String,
        value: Value,
    },
    Change {
        id: String,
        value: Value,
    },
    /// Without a group: every control
    Reset {
        #[serde(default)]
        group: Option<EntryGroup>,
    },
    Export,
    Import {
        values: BTreeMap<String, Value>,
    },
    Confirm,
    Decline,
    Open,
    Close,
    Properties,
    Dismiss,
    Seek {
        seconds: f64,
    },
    ScanStart {
        factor: f64,
    },
    ScanEnd,

    // Media element feedback; `handle` echoes the one from `resource_created`
    Metadata {
        view: OutputKey,
        handle: ResourceHandle,
    },
    MediaError {
        view: OutputKey,
        handle: ResourceHandle,
        error: String,
    },
    Rate {
        view: OutputKey,
        rate: f64,
    },
    Time {
        view: OutputKey,
        seconds: f64,
    },

    Quit,
}

impl Command {
    /// Parse one stdin line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if line.starts_with('{') {
            return Ok(Some(serde_json::from_str(line)?));
        }

        let cmd = match line {
            "q" | "quit" => Command::Quit,
            "y" | "confirm" => Command::Confirm,
            "n" | "decline" => Command::Decline,
            "o" | "open" => Command::Open,
            "close" => Command::Close,
            "reset" => Command::Reset { group: None },
            "export" => Command::Export,
            "properties" => Command::Properties,
            "dismiss" => Command::Dismiss,
            "scan_end" => Command::ScanEnd,
            other => {
                return Err(Error::unknown_command(other));
            }
        };
        Ok(Some(cmd))
    }

    /// Turn the command into an engine message.
    ///
    /// `load` stats every path up front; the first unreadable path fails the
    /// whole command.
    pub fn into_message(self) -> Result<Message> {
        let msg = match self {
            Command::Load { paths, index } => {
                let candidates = paths
                    .iter()
                    .map(FileCandidate::from_path)
                    .collect::<Result<Vec<_>>>()?;
                Message::LoadFiles { candidates, index }
            }
            Command::Url { url } => Message::LoadUrl { url },
            Command::Input { id, value } => Message::EntryInput { id, value },
            Command::Change { id, value } => Message::EntryChange { id, value },
            Command::Reset { group: None } => Message::ResetControls,
            Command::Reset { group: Some(group) } => Message::ResetGroup(group),
            Command::Export => Message::ExportControls,
            Command::Import { values } => Message::ImportControls(values),
            Command::Confirm => Message::ConfirmLargeFile,
            Command::Decline => Message::DeclineLargeFile,
            Command::Open => Message::RequestLoad,
            Command::Close => Message::Close,
            Command::Properties => Message::ShowProperties,
            Command::Dismiss => Message::DismissNotice,
            Command::Seek { seconds } => Message::Seek { seconds },
            Command::ScanStart { factor } => Message::ScanStart { factor },
            Command::ScanEnd => Message::ScanEnd,
            Command::Metadata { view, handle } => Message::MediaMetadataLoaded { key: view, handle },
            Command::MediaError {
                view,
                handle,
                error,
            } => Message::MediaLoadFailed {
                key: view,
                handle,
                error,
            },
            Command::Rate { view, rate } => Message::MediaRateChanged { key: view, rate },
            Command::Time { view, seconds } => Message::MediaTimeUpdate { key: view, seconds },
            Command::Quit => Message::Quit,
        };
        Ok(msg)
    }
}
