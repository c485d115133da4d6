//! Message types for the engine (TEA pattern)

use std::collections::BTreeMap;

use viewer_core::{FileCandidate, OutputKey, Value};

use crate::config::StartupSettings;
use crate::entry::EntryGroup;
use crate::output::ResourceHandle;

/// All possible messages/actions in the engine
#[derive(Debug, Clone)]
pub enum Message {
    /// Suppressed boot pass: reset, update, `nul` view, startup flags, resume
    Boot(StartupSettings),

    /// Signal handler or host asked to exit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Control Messages
    // ─────────────────────────────────────────────────────────
    /// Continuous edit of an entry (slider drag, keystroke)
    EntryInput { id: String, value: Value },

    /// Discrete commit of an entry (toggle, blur)
    EntryChange { id: String, value: Value },

    /// Reset every non-menu control group to presets
    ResetControls,

    /// Reset a single control group to presets
    ResetGroup(EntryGroup),

    /// Snapshot the controls (entry id -> safe value)
    ExportControls,

    /// Restore a snapshot; missing ids fall back to presets
    ImportControls(BTreeMap<String, Value>),

    // ─────────────────────────────────────────────────────────
    // Loading Messages
    // ─────────────────────────────────────────────────────────
    /// Files picked or dropped; `index` selects the one to load
    LoadFiles {
        candidates: Vec<FileCandidate>,
        index: usize,
    },

    /// Load a page by address into the frame
    LoadUrl { url: String },

    /// Load button pressed: ask the host for its file picker
    RequestLoad,

    /// Large-file prompt accepted
    ConfirmLargeFile,

    /// Large-file prompt declined
    DeclineLargeFile,

    /// Asynchronous text read finished
    TextReadCompleted { ticket: u64, content: String },

    /// Asynchronous text read failed
    TextReadFailed { ticket: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Media Messages (host feedback)
    // ─────────────────────────────────────────────────────────
    /// Media element has its metadata for `handle`
    MediaMetadataLoaded {
        key: OutputKey,
        handle: ResourceHandle,
    },

    /// Media element could not load `handle`
    MediaLoadFailed {
        key: OutputKey,
        handle: ResourceHandle,
        error: String,
    },

    /// Playback rate changed natively (keyboard shortcut, context menu)
    MediaRateChanged { key: OutputKey, rate: f64 },

    /// Playback position report
    MediaTimeUpdate { key: OutputKey, seconds: f64 },

    /// Relative seek on the active media view
    Seek { seconds: f64 },

    /// Scan (scrub) button pressed: multiply the speed
    ScanStart { factor: f64 },

    /// Scan button released: restore the speed
    ScanEnd,

    // ─────────────────────────────────────────────────────────
    // Session Messages
    // ─────────────────────────────────────────────────────────
    /// Close/eject the resident file
    Close,

    /// Show the resident file's properties
    ShowProperties,

    /// Clear the current notice
    DismissNotice,
}
