//! Application state (Model in TEA pattern)

use std::collections::BTreeMap;

use viewer_core::prelude::*;
use viewer_core::{FileCandidate, Value};

use crate::binder::Binder;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::guard::ModificationGuard;
use crate::registry::Registry;
use crate::view::ViewState;

/// Asynchronous text read the pipeline is waiting on
#[derive(Debug, Clone)]
pub struct PendingRead {
    pub ticket: u64,
    pub candidate: FileCandidate,
}

/// Complete engine state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Entries and outputs
    pub registry: Registry,

    /// Entry -> output wiring, fixed after construction
    pub binder: Binder,

    /// Modification guard ("anesthesia")
    pub guard: ModificationGuard,

    /// Active view, resident file, resource handles
    pub view: ViewState,

    /// Loaded settings
    pub settings: Settings,

    /// Blocking confirmation shown to the user, if any
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Candidate waiting on the large-file confirmation
    pub pending_load: Option<FileCandidate>,

    /// Text read in flight
    pub pending_read: Option<PendingRead>,

    next_ticket: u64,

    /// Latest user-visible notice
    pub notice: Option<String>,

    // Counters the engine diffs to emit events
    pub notice_count: u64,
    pub confirm_count: u64,
    pub export_count: u64,
    pub text_rendered: u64,

    /// Byte length of the last rendered text
    pub last_text_bytes: usize,

    /// Most recent controls snapshot
    pub last_export: Option<BTreeMap<String, Value>>,

    quitting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Build state for the viewer catalogue with config preset overrides applied
    pub fn with_settings(settings: Settings) -> Self {
        let mut registry = Registry::viewer();
        registry.apply_presets(&settings.presets);

        Self::with_parts(registry, Binder::viewer(), settings)
    }

    /// Build state around a custom registry
    pub fn with_parts(registry: Registry, binder: Binder, settings: Settings) -> Self {
        Self {
            registry,
            binder,
            guard: ModificationGuard::new(),
            view: ViewState::new(),
            settings,
            confirm_dialog_state: None,
            pending_load: None,
            pending_read: None,
            next_ticket: 0,
            notice: None,
            notice_count: 0,
            confirm_count: 0,
            export_count: 0,
            text_rendered: 0,
            last_text_bytes: 0,
            last_export: None,
            quitting: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    /// Raise a user-visible notice
    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("Notice: {}", message);
        self.notice = Some(message);
        self.notice_count += 1;
    }

    /// Show a blocking confirmation
    pub fn show_confirm(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog_state = Some(dialog);
        self.confirm_count += 1;
    }

    pub fn next_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    /// Whether the file-selection control accepts a load
    pub fn source_enabled(&self) -> bool {
        self.registry.source().is_enabled()
    }

    pub fn set_source_enabled(&mut self, enabled: bool) {
        if self.source_enabled() != enabled {
            debug!("File control {}", if enabled { "enabled" } else { "disabled" });
        }
        self.registry.source_mut().set_enabled(enabled);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
