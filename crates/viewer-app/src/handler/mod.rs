//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `controls`: Entry edits, resets, snapshots and the boot pass
//! - `ingest`: File ingestion pipeline and large-file confirmation
//! - `media`: Media feedback from the host, seek and scan
//! - `session`: Close, properties and notices

pub(crate) mod controls;
pub(crate) mod ingest;
pub(crate) mod media;
pub(crate) mod session;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use viewer_core::FileCandidate;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Read a text candidate in the background; answers with
    /// `TextReadCompleted` or `TextReadFailed` carrying the same ticket
    ReadText {
        ticket: u64,
        candidate: FileCandidate,
    },

    /// Ask the host to show its file picker
    OpenFilePicker,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
