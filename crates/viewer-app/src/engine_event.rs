//! Domain events emitted by the Engine for hosts
//!
//! The engine renders nothing itself. A host subscribes via
//! `Engine::subscribe()` and redraws from these events plus the surface
//! models in `AppState`.

use std::collections::BTreeMap;

use viewer_core::{OutputKey, Value};

use crate::output::ResourceHandle;

/// Domain events emitted by the Engine.
///
/// Events are broadcast after each message processing cycle, so subscribers
/// see a consistent view of state changes.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // View Lifecycle
    // ─────────────────────────────────────────────────────────
    /// The active view changed
    ViewChanged { from: OutputKey, to: OutputKey },

    /// Window title changed
    TitleChanged { title: String },

    /// A text load finished rendering
    TextRendered { bytes: usize },

    /// A resource handle was revoked; it is never referenced again
    ResourceRevoked {
        key: OutputKey,
        handle: ResourceHandle,
    },

    /// A resource handle was created and assigned to an output
    ResourceCreated {
        key: OutputKey,
        handle: ResourceHandle,
    },

    // ─────────────────────────────────────────────────────────
    // Session State
    // ─────────────────────────────────────────────────────────
    /// File-selection control enabled or disabled
    SourceEnabled { enabled: bool },

    /// Session dirty flag changed
    ModifiedChanged { modified: bool },

    /// A user-visible notice
    Notice { message: String },

    /// Blocking confirmation needed; answer with `ConfirmLargeFile` or
    /// `DeclineLargeFile`
    ConfirmRequested { title: String, message: String },

    /// Controls snapshot produced by `ExportControls`
    ControlsSnapshot { values: BTreeMap<String, Value> },

    /// Host should open its file picker
    FilePickerRequested,

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Get a short label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ViewChanged { .. } => "view_changed",
            Self::TitleChanged { .. } => "title_changed",
            Self::TextRendered { .. } => "text_rendered",
            Self::ResourceRevoked { .. } => "resource_revoked",
            Self::ResourceCreated { .. } => "resource_created",
            Self::SourceEnabled { .. } => "source_enabled",
            Self::ModifiedChanged { .. } => "modified_changed",
            Self::Notice { .. } => "notice",
            Self::ConfirmRequested { .. } => "confirm_requested",
            Self::ControlsSnapshot { .. } => "controls_snapshot",
            Self::FilePickerRequested => "file_picker_requested",
            Self::Shutdown => "shutdown",
        }
    }
}
