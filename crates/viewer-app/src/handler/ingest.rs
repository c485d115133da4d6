//! File ingestion pipeline
//!
//! The file-selection control is disabled for the whole of a load and
//! re-enabled on every exit path: immediately for image/frame, on metadata
//! for audio/video, after rendering for text, and on any failure or decline.

use viewer_core::prelude::*;
use viewer_core::{FileCandidate, OutputKey, Value};

use crate::confirm_dialog::ConfirmDialogState;
use crate::registry::ids;
use crate::state::{AppState, PendingRead};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_load_files(
    state: &mut AppState,
    candidates: Vec<FileCandidate>,
    index: usize,
) -> UpdateResult {
    if !state.source_enabled() {
        debug!("Ignoring load request while a load is in progress");
        return UpdateResult::none();
    }
    state.set_source_enabled(false);
    state
        .registry
        .source_mut()
        .set_value(Value::Files(candidates.clone()));

    let Some(candidate) = candidates.into_iter().nth(index) else {
        state.notify(Error::NothingToLoad.to_string());
        state.set_source_enabled(true);
        return UpdateResult::none();
    };

    let threshold = state.settings.behavior.large_file_threshold;
    if candidate.view() == OutputKey::Text && candidate.size > threshold {
        debug!(
            "{} is {} bytes, above {}; asking first",
            candidate.name, candidate.size, threshold
        );
        state.show_confirm(ConfirmDialogState::large_file(&candidate, threshold));
        state.pending_load = Some(candidate);
        return UpdateResult::none();
    }

    begin_load(state, candidate)
}

/// Switch to the candidate's view and start loading it
fn begin_load(state: &mut AppState, candidate: FileCandidate) -> UpdateResult {
    let key = candidate.view();
    info!(
        "Loading {} ({}) into {}",
        candidate.name,
        candidate.type_label(),
        key
    );

    state
        .view
        .transition(&mut state.registry, &mut state.guard, key);
    state.view.set_resident(candidate.clone());

    match key {
        OutputKey::Image | OutputKey::Frame => {
            state
                .view
                .attach_resource(&mut state.registry, key, &candidate);
            state.set_source_enabled(true);
            UpdateResult::none()
        }
        OutputKey::Audio | OutputKey::Video => {
            state
                .view
                .attach_resource(&mut state.registry, key, &candidate);
            // Keep an adjusted speed across loads
            if let Err(e) = state.binder.propagate(&mut state.registry, ids::MEDIA_SPEED) {
                warn!("Could not propagate playback speed: {}", e);
            }
            UpdateResult::none()
        }
        OutputKey::Text => {
            let ticket = state.next_ticket();
            state.pending_read = Some(PendingRead {
                ticket,
                candidate: candidate.clone(),
            });
            UpdateResult::action(UpdateAction::ReadText { ticket, candidate })
        }
        _ => {
            // classify() never yields the other keys
            state.set_source_enabled(true);
            UpdateResult::none()
        }
    }
}

pub(crate) fn handle_confirm(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog_state = None;
    match state.pending_load.take() {
        Some(candidate) => begin_load(state, candidate),
        None => {
            debug!("No pending load to confirm");
            UpdateResult::none()
        }
    }
}

pub(crate) fn handle_decline(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog_state = None;
    if let Some(candidate) = state.pending_load.take() {
        debug!("Load of {} declined", candidate.name);
        state.set_source_enabled(true);
    }
    UpdateResult::none()
}

pub(crate) fn handle_text_read_completed(
    state: &mut AppState,
    ticket: u64,
    content: String,
) -> UpdateResult {
    if state.pending_read.as_ref().map(|p| p.ticket) != Some(ticket) {
        debug!("Ignoring stale text read #{}", ticket);
        return UpdateResult::none();
    }
    state.pending_read = None;

    let bytes = content.len();
    let scroll_to_top = state.settings.behavior.scroll_text_to_top;
    state
        .view
        .render_text(&mut state.registry, content, scroll_to_top);

    state.last_text_bytes = bytes;
    state.text_rendered += 1;
    state.set_source_enabled(true);
    UpdateResult::none()
}

pub(crate) fn handle_text_read_failed(state: &mut AppState, ticket: u64, error: &str) -> UpdateResult {
    if state.pending_read.as_ref().map(|p| p.ticket) != Some(ticket) {
        debug!("Ignoring stale text read failure #{}", ticket);
        return UpdateResult::none();
    }
    let Some(pending) = state.pending_read.take() else {
        return UpdateResult::none();
    };

    state.notify(Error::file_read(&pending.candidate.name, error).to_string());
    state
        .view
        .transition(&mut state.registry, &mut state.guard, OutputKey::Nul);
    state.set_source_enabled(true);
    UpdateResult::none()
}

pub(crate) fn handle_load_url(state: &mut AppState, input: &str) -> UpdateResult {
    if !state.source_enabled() {
        debug!("Ignoring URL while a load is in progress");
        return UpdateResult::none();
    }

    let url = match url::Url::parse(input.trim()) {
        Ok(url) => url,
        Err(e) => {
            debug!("Rejected URL {:?}: {}", input, e);
            state.notify(Error::invalid_url(input).to_string());
            return UpdateResult::none();
        }
    };

    info!("Loading {} into frame", url);
    state
        .view
        .transition(&mut state.registry, &mut state.guard, OutputKey::Frame);
    state.view.set_resident(FileCandidate::from_url(url.as_str()));
    state.view.attach_url(&mut state.registry, url.as_str());
    UpdateResult::none()
}

pub(crate) fn handle_request_load(state: &mut AppState) -> UpdateResult {
    if !state.source_enabled() {
        debug!("Ignoring load button while a load is in progress");
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::OpenFilePicker)
}
