//! Headless mode - NDJSON host for the viewer engine
//!
//! The headless host renders nothing. It reads commands from stdin, feeds
//! them to the engine, and writes one JSON event per engine event to stdout.
//! It also plays the media element's part: a playable resource reports its
//! metadata as soon as it is assigned.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","title":"Viewer","timestamp":1704700001000}
//! {"event":"resource_created","view":"image","handle":1,"url":"blob:viewer/1","source":"/tmp/a.png","timestamp":1704700002000}
//! {"event":"view_changed","from":"nul","to":"image","timestamp":1704700002000}
//! ```

pub mod command;
pub mod runner;

use std::collections::BTreeMap;
use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;
use viewer_app::{AppState, EngineEvent, ResourceHandle};
use viewer_core::{Location, OutputKey, Value, DATA_TYPE};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Boot pass finished
    Ready { title: String, timestamp: i64 },

    ViewChanged {
        from: OutputKey,
        to: OutputKey,
        timestamp: i64,
    },

    TitleChanged { title: String, timestamp: i64 },

    /// `source` is the path or address behind the handle. Media feedback
    /// commands echo `handle` back.
    ResourceCreated {
        view: OutputKey,
        handle: ResourceHandle,
        url: String,
        source: Option<String>,
        timestamp: i64,
    },

    ResourceRevoked {
        view: OutputKey,
        handle: ResourceHandle,
        timestamp: i64,
    },

    /// Text view finished rendering
    TextRendered {
        bytes: usize,
        content: String,
        timestamp: i64,
    },

    /// File-selection control enabled/disabled
    SourceEnabled { enabled: bool, timestamp: i64 },

    Modified { modified: bool, timestamp: i64 },

    Notice { message: String, timestamp: i64 },

    /// Answer with `confirm` or `decline`
    ConfirmRequested {
        title: String,
        message: String,
        timestamp: i64,
    },

    ControlsSnapshot {
        data_type: String,
        values: BTreeMap<String, Value>,
        timestamp: i64,
    },

    FilePickerRequested { timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(title: &str) -> Self {
        Self::Ready {
            title: title.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event, reading rendered text and resource sources
    /// from the state the event was emitted for.
    pub fn from_engine(event: EngineEvent, state: &AppState) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::ViewChanged { from, to } => Self::ViewChanged {
                from,
                to,
                timestamp,
            },
            EngineEvent::TitleChanged { title } => Self::TitleChanged { title, timestamp },
            EngineEvent::TextRendered { bytes } => Self::TextRendered {
                bytes,
                content: state
                    .registry
                    .output(OutputKey::Text)
                    .surface
                    .content()
                    .text()
                    .unwrap_or_default()
                    .to_string(),
                timestamp,
            },
            EngineEvent::ResourceCreated { key, handle } => Self::ResourceCreated {
                view: key,
                handle,
                url: handle.to_string(),
                source: state
                    .view
                    .resources()
                    .resolve(handle)
                    .map(|file| match &file.location {
                        Location::Path(path) => path.display().to_string(),
                        Location::Url(url) => url.clone(),
                    }),
                timestamp,
            },
            EngineEvent::ResourceRevoked { key, handle } => Self::ResourceRevoked {
                view: key,
                handle,
                timestamp,
            },
            EngineEvent::SourceEnabled { enabled } => Self::SourceEnabled { enabled, timestamp },
            EngineEvent::ModifiedChanged { modified } => Self::Modified {
                modified,
                timestamp,
            },
            EngineEvent::Notice { message } => Self::Notice { message, timestamp },
            EngineEvent::ConfirmRequested { title, message } => Self::ConfirmRequested {
                title,
                message,
                timestamp,
            },
            EngineEvent::ControlsSnapshot { values } => Self::ControlsSnapshot {
                data_type: DATA_TYPE.to_string(),
                values,
                timestamp,
            },
            EngineEvent::FilePickerRequested => Self::FilePickerRequested { timestamp },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}
