//! Main update function - handles state transitions (TEA pattern)

use crate::entry::{EntryGroup, Signal};
use crate::message::Message;
use crate::state::AppState;

use super::{controls, ingest, media, session, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Boot(startup) => controls::handle_boot(state, startup),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Control Messages
        // ─────────────────────────────────────────────────────────
        Message::EntryInput { id, value } => {
            controls::handle_entry(state, &id, value, Signal::Input)
        }
        Message::EntryChange { id, value } => {
            controls::handle_entry(state, &id, value, Signal::Change)
        }
        Message::ResetControls => controls::handle_reset(state, &EntryGroup::CONTROLS),
        Message::ResetGroup(group) => controls::handle_reset_group(state, group),
        Message::ExportControls => controls::handle_export(state),
        Message::ImportControls(values) => controls::handle_import(state, values),

        // ─────────────────────────────────────────────────────────
        // Loading Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadFiles { candidates, index } => {
            ingest::handle_load_files(state, candidates, index)
        }
        Message::LoadUrl { url } => ingest::handle_load_url(state, &url),
        Message::RequestLoad => ingest::handle_request_load(state),
        Message::ConfirmLargeFile => ingest::handle_confirm(state),
        Message::DeclineLargeFile => ingest::handle_decline(state),
        Message::TextReadCompleted { ticket, content } => {
            ingest::handle_text_read_completed(state, ticket, content)
        }
        Message::TextReadFailed { ticket, error } => {
            ingest::handle_text_read_failed(state, ticket, &error)
        }

        // ─────────────────────────────────────────────────────────
        // Media Messages
        // ─────────────────────────────────────────────────────────
        Message::MediaMetadataLoaded { key, handle } => {
            media::handle_metadata_loaded(state, key, handle)
        }
        Message::MediaLoadFailed { key, handle, error } => {
            media::handle_load_failed(state, key, handle, &error)
        }
        Message::MediaRateChanged { key, rate } => media::handle_rate_changed(state, key, rate),
        Message::MediaTimeUpdate { key, seconds } => {
            media::handle_time_update(state, key, seconds)
        }
        Message::Seek { seconds } => media::handle_seek(state, seconds),
        Message::ScanStart { factor } => media::handle_scan_start(state, factor),
        Message::ScanEnd => media::handle_scan_end(state),

        // ─────────────────────────────────────────────────────────
        // Session Messages
        // ─────────────────────────────────────────────────────────
        Message::Close => session::handle_close(state),
        Message::ShowProperties => session::handle_show_properties(state),
        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}
