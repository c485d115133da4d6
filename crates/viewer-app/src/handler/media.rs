//! Media handlers: host feedback from audio/video surfaces, seek and scan

use viewer_core::prelude::*;
use viewer_core::{OutputKey, Value};

use crate::entry::Signal;
use crate::output::ResourceHandle;
use crate::registry::ids;
use crate::state::AppState;

use super::{controls, UpdateResult};

const CURRENT_TIME: &str = "currentTime";
const PLAYBACK_RATE: &str = "playbackRate";

/// Feedback counts only for the resource the active view still shows
fn is_current_resource(state: &AppState, key: OutputKey, handle: ResourceHandle) -> bool {
    key.is_playable()
        && key == state.view.current()
        && state.registry.output(key).resource() == Some(handle)
}

pub(crate) fn handle_metadata_loaded(
    state: &mut AppState,
    key: OutputKey,
    handle: ResourceHandle,
) -> UpdateResult {
    if !is_current_resource(state, key, handle) {
        debug!("Ignoring metadata for stale {} on {}", handle, key);
        return UpdateResult::none();
    }
    state.set_source_enabled(true);
    UpdateResult::none()
}

pub(crate) fn handle_load_failed(
    state: &mut AppState,
    key: OutputKey,
    handle: ResourceHandle,
    error: &str,
) -> UpdateResult {
    if !is_current_resource(state, key, handle) {
        debug!("Ignoring load failure for stale {} on {}: {}", handle, key, error);
        return UpdateResult::none();
    }
    let name = state
        .view
        .resident()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    state.notify(Error::file_read(name, error).to_string());
    state
        .view
        .transition(&mut state.registry, &mut state.guard, OutputKey::Nul);
    state.set_source_enabled(true);
    UpdateResult::none()
}

/// Native rate change (keyboard shortcut, context menu). Written back into
/// the speed entry only when it differs, so the rebroadcast stops here.
pub(crate) fn handle_rate_changed(state: &mut AppState, key: OutputKey, rate: f64) -> UpdateResult {
    if !key.is_playable() || !rate.is_finite() {
        return UpdateResult::none();
    }
    // Mirror the element's actual rate so write-if-changed compares to it
    state
        .registry
        .output_mut(key)
        .surface
        .set_property(PLAYBACK_RATE, Value::Number(rate));

    let Some(entry) = state.registry.entry_mut(ids::MEDIA_SPEED) else {
        return UpdateResult::none();
    };
    let rate = entry.kind().clamp(rate);
    if entry.peek_safe_value().as_number() == Some(rate) {
        return UpdateResult::none();
    }
    entry.set_value(rate);
    controls::dispatch(state, ids::MEDIA_SPEED, Signal::Input);
    UpdateResult::none()
}

pub(crate) fn handle_time_update(state: &mut AppState, key: OutputKey, seconds: f64) -> UpdateResult {
    if key.is_playable() && seconds.is_finite() {
        state
            .registry
            .output_mut(key)
            .surface
            .set_property(CURRENT_TIME, Value::Number(seconds.max(0.0)));
    }
    UpdateResult::none()
}

pub(crate) fn handle_seek(state: &mut AppState, seconds: f64) -> UpdateResult {
    let key = state.view.current();
    if !key.is_playable() || !seconds.is_finite() {
        return UpdateResult::none();
    }
    let surface = &mut state.registry.output_mut(key).surface;
    let now = surface
        .property(CURRENT_TIME)
        .and_then(Value::as_number)
        .unwrap_or(0.0);
    surface.set_property(CURRENT_TIME, Value::Number((now + seconds).max(0.0)));
    UpdateResult::none()
}

pub(crate) fn handle_scan_start(state: &mut AppState, factor: f64) -> UpdateResult {
    if !factor.is_finite() || factor <= 0.0 {
        warn!("Ignoring scan factor {}", factor);
        return UpdateResult::none();
    }
    let Some(entry) = state.registry.entry_mut(ids::MEDIA_SPEED) else {
        return UpdateResult::none();
    };
    let current = entry.safe_value().as_number().unwrap_or(1.0);
    let base = *state.view.scan_base_speed.get_or_insert(current);

    entry.set_value(entry.kind().clamp(base * factor));
    controls::dispatch(state, ids::MEDIA_SPEED, Signal::Input);
    UpdateResult::none()
}

pub(crate) fn handle_scan_end(state: &mut AppState) -> UpdateResult {
    let Some(base) = state.view.scan_base_speed.take() else {
        return UpdateResult::none();
    };
    if let Some(entry) = state.registry.entry_mut(ids::MEDIA_SPEED) {
        entry.set_value(base);
    }
    controls::dispatch(state, ids::MEDIA_SPEED, Signal::Input);
    UpdateResult::none()
}
