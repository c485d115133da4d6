//! View state machine and resource lifetimes
//!
//! Exactly zero or one output carries the active class. Every transition
//! unloads the current view before loading the next, and the
//! [`ResourceTable`] is the only place resource handles are created or
//! revoked.

use std::collections::BTreeMap;

use serde::Serialize;
use viewer_core::prelude::*;
use viewer_core::{window_title, FileCandidate, OutputKey, Value, TITLE};

use crate::guard::ModificationGuard;
use crate::output::{Content, ResourceHandle, ACTIVE_CLASS};
use crate::registry::Registry;

/// Lifecycle record of one resource handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceEvent {
    Created { key: OutputKey, handle: ResourceHandle },
    Revoked { key: OutputKey, handle: ResourceHandle },
}

/// Live revocable handles, keyed to the file bytes they stand for
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    next_id: u64,
    live: BTreeMap<ResourceHandle, FileCandidate>,
    /// Creates/revokes not yet handed to the engine
    pending: Vec<ResourceEvent>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn create(&mut self, key: OutputKey, candidate: &FileCandidate) -> ResourceHandle {
        self.next_id += 1;
        let handle = ResourceHandle(self.next_id);
        self.live.insert(handle, candidate.clone());
        self.pending.push(ResourceEvent::Created { key, handle });
        debug!("Created {} for {}", handle, candidate.name);
        handle
    }

    /// Revoke a handle. Unknown or already revoked handles are a no-op.
    fn revoke(&mut self, key: OutputKey, handle: ResourceHandle) -> bool {
        if self.live.remove(&handle).is_none() {
            debug!("Ignoring revoke of unknown handle {}", handle);
            return false;
        }
        self.pending.push(ResourceEvent::Revoked { key, handle });
        debug!("Revoked {}", handle);
        true
    }

    /// The file behind a live handle
    pub fn resolve(&self, handle: ResourceHandle) -> Option<&FileCandidate> {
        self.live.get(&handle)
    }

    pub fn is_live(&self, handle: ResourceHandle) -> bool {
        self.live.contains_key(&handle)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Creates/revokes since the last call, in order
    pub fn take_events(&mut self) -> Vec<ResourceEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    current: OutputKey,
    resident: Option<FileCandidate>,
    title: String,
    resources: ResourceTable,
    /// Speed to restore when a scan (scrub) ends
    pub scan_base_speed: Option<f64>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            current: OutputKey::Nul,
            resident: None,
            title: TITLE.to_string(),
            resources: ResourceTable::new(),
            scan_base_speed: None,
        }
    }

    pub fn current(&self) -> OutputKey {
        self.current
    }

    /// The single authoritative "a document is open" reference
    pub fn resident(&self) -> Option<&FileCandidate> {
        self.resident.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    /// Drain resource lifecycle events for the engine to publish
    pub fn take_resource_events(&mut self) -> Vec<ResourceEvent> {
        self.resources.take_events()
    }

    /// Record the resident file and decorate the title with its name
    pub fn set_resident(&mut self, candidate: FileCandidate) {
        self.title = window_title(Some(&candidate.name));
        self.resident = Some(candidate);
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    /// Tear down the current view. Unloading `nul` only clears decoration.
    pub fn unload(&mut self, registry: &mut Registry, guard: &mut ModificationGuard) {
        let key = self.current;
        let output = registry.output_mut(key);

        if key.holds_resource() {
            if let Some(handle) = output.resource() {
                self.resources.revoke(key, handle);
            }
            output.surface.set_content(Content::Empty);
        }

        if key == OutputKey::Frame {
            output.surface.set_attached(false);
            guard.disarm_unload_guard();
        }

        if key == OutputKey::Text {
            output.surface.set_content(Content::Empty);
        }

        self.title = TITLE.to_string();
        output.surface.set_class(ACTIVE_CLASS, false);
        self.resident = None;
    }

    /// Activate `key`. Only valid right after [`ViewState::unload`].
    pub fn load(&mut self, registry: &mut Registry, guard: &mut ModificationGuard, key: OutputKey) {
        let output = registry.output_mut(key);
        output.surface.set_class(ACTIVE_CLASS, true);

        if key == OutputKey::Frame {
            output.surface.set_attached(true);
            guard.arm_unload_guard();
        }

        for key in OutputKey::ALL {
            registry.output_mut(key).surface.set_focused(false);
        }
        registry.output_mut(key).surface.set_focused(true);

        self.current = key;
    }

    /// Unload the current view, then load `key`
    pub fn transition(&mut self, registry: &mut Registry, guard: &mut ModificationGuard, key: OutputKey) {
        let from = self.current;
        self.unload(registry, guard);
        self.load(registry, guard, key);
        info!("View {} -> {}", from, key);
    }

    // ─────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────

    /// Give `key` a fresh handle for the candidate's bytes, revoking any
    /// handle it still holds first.
    pub fn attach_resource(
        &mut self,
        registry: &mut Registry,
        key: OutputKey,
        candidate: &FileCandidate,
    ) -> ResourceHandle {
        let output = registry.output_mut(key);
        if let Some(previous) = output.resource() {
            self.resources.revoke(key, previous);
            output.surface.set_content(Content::Empty);
        }

        let handle = self.resources.create(key, candidate);
        output.surface.set_content(Content::Resource(handle));

        // A new media source starts at the native rate
        if key.is_playable() {
            output.surface.set_property("playbackRate", Value::Number(1.0));
            output.surface.set_property("currentTime", Value::Number(0.0));
        }
        handle
    }

    /// Point the frame at an address. URLs are not revocable.
    pub fn attach_url(&mut self, registry: &mut Registry, url: &str) {
        registry
            .output_mut(OutputKey::Frame)
            .surface
            .set_content(Content::Url(url.to_string()));
    }

    pub fn render_text(&mut self, registry: &mut Registry, text: String, scroll_to_top: bool) {
        let surface = &mut registry.output_mut(OutputKey::Text).surface;
        surface.set_content(Content::Text(text));
        if scroll_to_top {
            surface.set_scroll_top(0);
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
