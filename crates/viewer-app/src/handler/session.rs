//! Session handlers: close/eject and the properties inspector

use chrono::SecondsFormat;
use viewer_core::prelude::*;
use viewer_core::{messages, FileCandidate, OutputKey};

use crate::state::AppState;

use super::UpdateResult;

pub(crate) fn handle_close(state: &mut AppState) -> UpdateResult {
    if let Some(resident) = state.view.resident() {
        info!("Closing {}", resident.name);
    }
    state
        .view
        .transition(&mut state.registry, &mut state.guard, OutputKey::Nul);
    state.pending_read = None;
    state.pending_load = None;
    state.confirm_dialog_state = None;
    state.set_source_enabled(true);
    UpdateResult::none()
}

pub(crate) fn handle_show_properties(state: &mut AppState) -> UpdateResult {
    let text = match state.view.resident() {
        Some(candidate) => properties(candidate),
        None => messages::FILE_NUL.to_string(),
    };
    state.notify(text);
    UpdateResult::none()
}

fn properties(candidate: &FileCandidate) -> String {
    let modified = candidate
        .last_modified
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "Name: {}\nType: {}\nSize: {} bytes\nLast modified: {}",
        candidate.name,
        candidate.type_label(),
        candidate.size,
        modified
    )
}
