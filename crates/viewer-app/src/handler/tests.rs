//! Tests for handler module

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use viewer_core::{FileCandidate, Location, OutputKey, Value};

use super::*;
use crate::config::{ResetGuardPolicy, Settings, StartupSettings};
use crate::entry::EntryGroup;
use crate::message::Message;
use crate::output::{Content, ResourceHandle};
use crate::registry::ids;
use crate::state::AppState;
use crate::view::ResourceEvent;

fn candidate(name: &str, content_type: Option<&str>, size: u64) -> FileCandidate {
    FileCandidate {
        name: name.to_string(),
        content_type: content_type.map(str::to_string),
        size,
        last_modified: None,
        location: Location::Path(name.into()),
    }
}

fn booted_with(settings: Settings) -> AppState {
    let mut state = AppState::with_settings(settings);
    update(&mut state, Message::Boot(StartupSettings::default()));
    state
}

fn booted() -> AppState {
    booted_with(Settings::default())
}

fn load(state: &mut AppState, candidate: FileCandidate) -> UpdateResult {
    update(
        state,
        Message::LoadFiles {
            candidates: vec![candidate],
            index: 0,
        },
    )
}

fn input(state: &mut AppState, id: &str, value: impl Into<Value>) {
    update(
        state,
        Message::EntryInput {
            id: id.to_string(),
            value: value.into(),
        },
    );
}

fn active_count(state: &AppState) -> usize {
    state.registry.outputs().iter().filter(|o| o.is_active()).count()
}

fn media_handle(state: &AppState, key: OutputKey) -> ResourceHandle {
    state.registry.output(key).resource().expect("media resource")
}

fn read_ticket(result: &UpdateResult) -> u64 {
    match &result.action {
        Some(UpdateAction::ReadText { ticket, .. }) => *ticket,
        other => panic!("expected ReadText, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Boot and guard
// ─────────────────────────────────────────────────────────

#[test]
fn test_boot_leaves_session_clean_and_guard_active() {
    let state = booted();

    assert!(!state.guard.is_suppressed());
    assert!(!state.guard.is_modified());
    assert_eq!(state.guard.notifications(), 0);
    assert_eq!(state.view.current(), OutputKey::Nul);
    assert!(state.registry.output(OutputKey::Nul).is_active());
    assert!(state.source_enabled());
}

#[test]
fn test_boot_populates_outputs_from_presets() {
    let state = booted();

    let root = &state.registry.output(OutputKey::Root).surface;
    assert_eq!(root.style_variable("--viewer-filter-brightness"), Some("1"));
    assert_eq!(root.style_variable("--viewer-text-font-size"), Some("1em"));
    assert_eq!(root.style_variable("--viewer-position-align"), Some("center"));
    assert!(state
        .registry
        .output(OutputKey::Shell)
        .surface
        .has_class("no-panels"));
    assert_eq!(
        state.registry.output(OutputKey::Video).surface.property("playbackRate"),
        Some(&Value::Number(1.0))
    );
}

#[test]
fn test_boot_flags_apply_without_marking_modified() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::Boot(StartupSettings {
            controls: true,
            force_dark: true,
            reverse: false,
        }),
    );

    let shell = &state.registry.output(OutputKey::Shell).surface;
    assert!(shell.has_class("dark"));
    assert!(!shell.has_class("no-panels"));
    assert!(!shell.has_class("reverse"));
    assert!(!state.guard.is_modified());
}

#[test]
fn test_entry_input_marks_modified_once() {
    let mut state = booted();

    input(&mut state, ids::FILTER_BLUR, 3.0);
    input(&mut state, ids::FILTER_BLUR, 3.0);

    assert!(state.guard.is_modified());
    assert!(state.guard.is_unload_guard_armed());
    assert_eq!(state.guard.notifications(), 1);
    assert_eq!(
        state
            .registry
            .output(OutputKey::Root)
            .surface
            .style_variable("--viewer-filter-blur"),
        Some("3px")
    );
}

#[test]
fn test_partial_numeric_input_keeps_last_known_good() {
    let mut state = booted();

    input(&mut state, ids::TRANSFORM_SCALE, 2.0);
    input(&mut state, ids::TRANSFORM_SCALE, "");
    input(&mut state, ids::TRANSFORM_SCALE, "-");

    assert_eq!(state.guard.notifications(), 1);
    assert_eq!(
        state
            .registry
            .output(OutputKey::Root)
            .surface
            .style_variable("--viewer-transform-scale"),
        Some("2")
    );
}

#[test]
fn test_unknown_entry_is_ignored() {
    let mut state = booted();
    input(&mut state, "filter-glow", 1.0);
    assert_eq!(state.guard.notifications(), 0);
}

#[test]
fn test_reset_while_suppressed_never_notifies() {
    let mut state = booted();
    input(&mut state, ids::FILTER_SEPIA, 50.0);
    input(&mut state, ids::TRANSFORM_ROTATE, 90.0);
    let before = state.guard.notifications();

    for _ in 0..3 {
        update(&mut state, Message::ResetControls);
    }

    assert_eq!(state.guard.notifications(), before);
    assert!(!state.guard.is_modified());
    assert!(!state.guard.is_suppressed());
    assert_eq!(
        state.registry.entry(ids::FILTER_SEPIA).unwrap().value(),
        &Value::Number(0.0)
    );
}

#[test]
fn test_reset_tracked_notifies_once_per_changed_entry() {
    let mut settings = Settings::default();
    settings.behavior.reset_guard = ResetGuardPolicy::Track;
    let mut state = booted_with(settings);

    input(&mut state, ids::FILTER_SEPIA, 50.0);
    input(&mut state, ids::TRANSFORM_ROTATE, 90.0);
    input(&mut state, ids::MEDIA_SPEED, 2.0);
    let before = state.guard.notifications();

    update(&mut state, Message::ResetControls);
    assert_eq!(state.guard.notifications(), before + 3);

    // Nothing left to change
    update(&mut state, Message::ResetControls);
    assert_eq!(state.guard.notifications(), before + 3);
}

#[test]
fn test_reset_group_only_touches_that_group() {
    let mut state = booted();
    input(&mut state, ids::FILTER_BLUR, 5.0);
    input(&mut state, ids::TEXT_LINE_HEIGHT, 2.0);

    update(&mut state, Message::ResetGroup(EntryGroup::Filter));

    assert_eq!(
        state.registry.entry(ids::FILTER_BLUR).unwrap().value(),
        &Value::Number(0.0)
    );
    assert_eq!(
        state.registry.entry(ids::TEXT_LINE_HEIGHT).unwrap().value(),
        &Value::Number(2.0)
    );
}

#[test]
fn test_reset_group_keeps_other_edits_modified() {
    let mut state = booted();
    input(&mut state, ids::TEXT_LINE_HEIGHT, 2.0);
    assert!(state.guard.is_modified());

    update(&mut state, Message::ResetGroup(EntryGroup::Filter));

    assert!(state.guard.is_modified());
    assert!(state.guard.is_unload_guard_armed());
    assert!(!state.guard.is_suppressed());
    assert_eq!(
        state.registry.entry(ids::TEXT_LINE_HEIGHT).unwrap().value(),
        &Value::Number(2.0)
    );

    // A full reset still ends clean
    update(&mut state, Message::ResetControls);
    assert!(!state.guard.is_modified());
}

#[test]
fn test_reset_group_keeps_frame_unload_guard() {
    let mut state = booted();
    load(&mut state, candidate("doc.pdf", Some("application/pdf"), 10));
    assert!(state.guard.is_unload_guard_armed());

    update(&mut state, Message::ResetGroup(EntryGroup::Filter));

    assert!(state.guard.is_unload_guard_armed());
}

#[test]
fn test_reset_group_on_clean_session_stays_clean() {
    let mut state = booted();

    update(&mut state, Message::ResetGroup(EntryGroup::Media));

    assert!(!state.guard.is_modified());
    assert!(!state.guard.is_unload_guard_armed());
}

#[test]
fn test_reset_controls_leaves_menu_alone() {
    let mut state = booted();
    update(
        &mut state,
        Message::EntryChange {
            id: ids::MENU_FORCE_DARK.to_string(),
            value: Value::Bool(true),
        },
    );

    update(&mut state, Message::ResetControls);

    assert!(state
        .registry
        .output(OutputKey::Shell)
        .surface
        .has_class("dark"));
}

#[test]
fn test_export_then_import() {
    let mut state = booted();
    input(&mut state, ids::FILTER_INVERT, 100.0);
    update(&mut state, Message::ExportControls);

    let snapshot = state.last_export.clone().unwrap();
    assert_eq!(state.export_count, 1);
    assert_eq!(snapshot[ids::FILTER_INVERT], Value::Number(100.0));

    update(&mut state, Message::ResetControls);
    update(&mut state, Message::ImportControls(snapshot));

    assert_eq!(
        state
            .registry
            .output(OutputKey::Root)
            .surface
            .style_variable("--viewer-filter-invert"),
        Some("100%")
    );
    assert!(!state.guard.is_modified());
}

#[test]
fn test_import_missing_ids_fall_back_to_presets() {
    let mut state = booted();
    input(&mut state, ids::FILTER_BLUR, 8.0);

    update(&mut state, Message::ImportControls(BTreeMap::new()));

    assert_eq!(
        state.registry.entry(ids::FILTER_BLUR).unwrap().value(),
        &Value::Number(0.0)
    );
}

// ─────────────────────────────────────────────────────────
// Ingestion
// ─────────────────────────────────────────────────────────

#[test]
fn test_load_image() {
    let mut state = booted();

    let result = load(&mut state, candidate("cat.png", Some("image/png"), 10_240));

    assert!(result.action.is_none());
    assert_eq!(state.view.current(), OutputKey::Image);
    let handle = state.registry.output(OutputKey::Image).resource().unwrap();
    assert!(state.view.resources().is_live(handle));
    assert!(state.source_enabled());
    assert_eq!(state.view.resident().unwrap().name, "cat.png");
    assert_eq!(state.view.title(), "cat.png - Viewer");
    assert_eq!(active_count(&state), 1);
}

#[test]
fn test_large_text_declined() {
    let mut state = booted();

    load(&mut state, candidate("big.log", Some("text/plain"), 2_097_152));

    assert!(state.confirm_dialog_state.is_some());
    assert!(!state.source_enabled());
    assert_eq!(state.view.current(), OutputKey::Nul);

    let result = update(&mut state, Message::DeclineLargeFile);

    assert!(result.action.is_none());
    assert!(state.confirm_dialog_state.is_none());
    assert_eq!(state.view.current(), OutputKey::Nul);
    assert!(state.view.resident().is_none());
    assert!(state.source_enabled());
}

#[test]
fn test_large_text_confirmed_starts_read() {
    let mut state = booted();
    load(&mut state, candidate("big.log", Some("text/plain"), 2_097_152));

    let result = update(&mut state, Message::ConfirmLargeFile);

    read_ticket(&result);
    assert_eq!(state.view.current(), OutputKey::Text);
    assert!(!state.source_enabled());
}

#[test]
fn test_text_at_threshold_needs_no_confirmation() {
    let mut state = booted();
    let result = load(&mut state, candidate("edge.txt", Some("text/plain"), 1_048_576));
    read_ticket(&result);
    assert!(state.confirm_dialog_state.is_none());
}

#[test]
fn test_configured_threshold() {
    let mut settings = Settings::default();
    settings.behavior.large_file_threshold = 100;
    let mut state = booted_with(settings);

    load(&mut state, candidate("small.txt", Some("text/plain"), 101));

    assert!(state.confirm_dialog_state.is_some());
}

#[test]
fn test_untyped_file_reads_as_text() {
    let mut state = booted();

    let result = load(&mut state, candidate("README", None, 200));

    read_ticket(&result);
    assert_eq!(state.view.current(), OutputKey::Text);
    assert!(state.pending_read.is_some());
    assert!(!state.source_enabled());
}

#[test]
fn test_text_read_completes() {
    let mut state = booted();
    state
        .registry
        .output_mut(OutputKey::Text)
        .surface
        .set_scroll_top(400);
    let ticket = read_ticket(&load(&mut state, candidate("a.txt", Some("text/plain"), 5)));

    update(
        &mut state,
        Message::TextReadCompleted {
            ticket,
            content: "hello".to_string(),
        },
    );

    let surface = &state.registry.output(OutputKey::Text).surface;
    assert_eq!(surface.content(), &Content::Text("hello".to_string()));
    assert_eq!(surface.scroll_top(), 0);
    assert!(state.source_enabled());
    assert_eq!(state.text_rendered, 1);
    assert_eq!(state.last_text_bytes, 5);
}

#[test]
fn test_stale_text_read_is_ignored() {
    let mut state = booted();
    let ticket = read_ticket(&load(&mut state, candidate("a.txt", Some("text/plain"), 5)));
    update(&mut state, Message::Close);
    load(&mut state, candidate("cat.png", Some("image/png"), 10));

    update(
        &mut state,
        Message::TextReadCompleted {
            ticket,
            content: "late".to_string(),
        },
    );

    assert_eq!(state.view.current(), OutputKey::Image);
    assert!(state
        .registry
        .output(OutputKey::Text)
        .surface
        .content()
        .is_empty());
    assert_eq!(state.text_rendered, 0);
}

#[test]
fn test_text_read_failure_returns_to_nul() {
    let mut state = booted();
    let ticket = read_ticket(&load(&mut state, candidate("a.txt", Some("text/plain"), 5)));

    update(
        &mut state,
        Message::TextReadFailed {
            ticket,
            error: "permission denied".to_string(),
        },
    );

    assert_eq!(state.view.current(), OutputKey::Nul);
    assert!(state.view.resident().is_none());
    assert!(state.source_enabled());
    assert_eq!(
        state.notice.as_deref(),
        Some("Failed to read a.txt: permission denied")
    );
}

#[test]
fn test_load_ignored_while_in_progress() {
    let mut state = booted();
    load(&mut state, candidate("a.txt", Some("text/plain"), 5));

    let result = load(&mut state, candidate("cat.png", Some("image/png"), 10));

    assert!(result.action.is_none());
    assert_eq!(state.view.current(), OutputKey::Text);
    assert_eq!(state.notice_count, 0);
}

#[test]
fn test_empty_candidate_list() {
    let mut state = booted();

    update(
        &mut state,
        Message::LoadFiles {
            candidates: Vec::new(),
            index: 0,
        },
    );

    assert_eq!(state.notice.as_deref(), Some("Nothing to load."));
    assert!(state.source_enabled());
    assert_eq!(state.view.current(), OutputKey::Nul);
}

#[test]
fn test_index_selects_candidate() {
    let mut state = booted();

    update(
        &mut state,
        Message::LoadFiles {
            candidates: vec![
                candidate("a.png", Some("image/png"), 1),
                candidate("b.pdf", Some("application/pdf"), 1),
            ],
            index: 1,
        },
    );

    assert_eq!(state.view.current(), OutputKey::Frame);
    assert_eq!(state.view.resident().unwrap().name, "b.pdf");
}

#[test]
fn test_index_out_of_range_is_nothing_to_load() {
    let mut state = booted();

    update(
        &mut state,
        Message::LoadFiles {
            candidates: vec![candidate("a.png", Some("image/png"), 1)],
            index: 3,
        },
    );

    assert_eq!(state.notice.as_deref(), Some("Nothing to load."));
    assert!(state.source_enabled());
}

#[test]
fn test_video_replacement_revokes_before_assigning() {
    let mut state = booted();

    load(&mut state, candidate("a.webm", Some("video/webm"), 10));
    let h1 = media_handle(&state, OutputKey::Video);
    update(
        &mut state,
        Message::MediaMetadataLoaded { key: OutputKey::Video, handle: h1 },
    );
    load(&mut state, candidate("b.webm", Some("video/webm"), 10));
    let h2 = media_handle(&state, OutputKey::Video);

    assert_ne!(h1, h2);
    assert!(!state.view.resources().is_live(h1));
    assert_eq!(
        state.view.take_resource_events(),
        vec![
            ResourceEvent::Created { key: OutputKey::Video, handle: h1 },
            ResourceEvent::Revoked { key: OutputKey::Video, handle: h1 },
            ResourceEvent::Created { key: OutputKey::Video, handle: h2 },
        ]
    );
}

#[test]
fn test_media_waits_for_metadata() {
    let mut state = booted();
    load(&mut state, candidate("song.ogg", Some("audio/ogg"), 10));
    let handle = media_handle(&state, OutputKey::Audio);
    assert!(!state.source_enabled());

    // Metadata for another view changes nothing
    update(
        &mut state,
        Message::MediaMetadataLoaded { key: OutputKey::Video, handle },
    );
    assert!(!state.source_enabled());

    update(
        &mut state,
        Message::MediaMetadataLoaded { key: OutputKey::Audio, handle },
    );
    assert!(state.source_enabled());
}

#[test]
fn test_late_failure_for_replaced_video_is_ignored() {
    let mut state = booted();

    load(&mut state, candidate("a.webm", Some("video/webm"), 10));
    let first = media_handle(&state, OutputKey::Video);
    update(&mut state, Message::Close);
    load(&mut state, candidate("b.webm", Some("video/webm"), 10));
    let second = media_handle(&state, OutputKey::Video);
    update(
        &mut state,
        Message::MediaMetadataLoaded { key: OutputKey::Video, handle: second },
    );
    let notices = state.notice_count;

    update(
        &mut state,
        Message::MediaLoadFailed {
            key: OutputKey::Video,
            handle: first,
            error: "aborted".to_string(),
        },
    );

    assert_eq!(state.view.current(), OutputKey::Video);
    assert_eq!(state.view.resident().map(|f| f.name.as_str()), Some("b.webm"));
    assert_eq!(state.registry.output(OutputKey::Video).resource(), Some(second));
    assert!(state.view.resources().is_live(second));
    assert_eq!(state.notice_count, notices);
}

#[test]
fn test_late_metadata_for_replaced_audio_keeps_source_disabled() {
    let mut state = booted();

    load(&mut state, candidate("one.ogg", Some("audio/ogg"), 10));
    let first = media_handle(&state, OutputKey::Audio);
    update(
        &mut state,
        Message::MediaMetadataLoaded { key: OutputKey::Audio, handle: first },
    );
    load(&mut state, candidate("two.ogg", Some("audio/ogg"), 10));
    assert!(!state.source_enabled());

    update(
        &mut state,
        Message::MediaMetadataLoaded { key: OutputKey::Audio, handle: first },
    );
    assert!(!state.source_enabled());

    let second = media_handle(&state, OutputKey::Audio);
    update(
        &mut state,
        Message::MediaMetadataLoaded { key: OutputKey::Audio, handle: second },
    );
    assert!(state.source_enabled());
}

#[test]
fn test_speed_persists_across_loads() {
    let mut state = booted();
    input(&mut state, ids::MEDIA_SPEED, 2.0);

    load(&mut state, candidate("song.ogg", Some("audio/ogg"), 10));

    assert_eq!(
        state.registry.output(OutputKey::Audio).surface.property("playbackRate"),
        Some(&Value::Number(2.0))
    );
}

#[test]
fn test_media_load_failure() {
    let mut state = booted();
    load(&mut state, candidate("broken.mp4", Some("video/mp4"), 10));
    let handle = media_handle(&state, OutputKey::Video);

    update(
        &mut state,
        Message::MediaLoadFailed {
            key: OutputKey::Video,
            handle,
            error: "unsupported codec".to_string(),
        },
    );

    assert_eq!(state.view.current(), OutputKey::Nul);
    assert!(state.source_enabled());
    assert_eq!(state.view.resources().live_count(), 0);
    assert!(state.notice.as_deref().unwrap().contains("unsupported codec"));
}

#[test]
fn test_close_frame() {
    let mut state = booted();
    load(&mut state, candidate("doc.pdf", Some("application/pdf"), 10));
    assert!(state.registry.output(OutputKey::Frame).surface.is_attached());
    assert!(state.guard.is_unload_guard_armed());

    update(&mut state, Message::Close);

    assert!(!state.registry.output(OutputKey::Frame).surface.is_attached());
    assert!(!state.guard.is_unload_guard_armed());
    assert_eq!(state.view.current(), OutputKey::Nul);
    assert!(state.view.resident().is_none());
    assert_eq!(state.view.resources().live_count(), 0);
    assert_eq!(state.view.title(), "Viewer");
}

#[test]
fn test_load_url() {
    let mut state = booted();

    update(
        &mut state,
        Message::LoadUrl {
            url: "https://example.com/page".to_string(),
        },
    );

    assert_eq!(state.view.current(), OutputKey::Frame);
    assert_eq!(
        state.registry.output(OutputKey::Frame).surface.content(),
        &Content::Url("https://example.com/page".to_string())
    );
    assert_eq!(state.view.resources().live_count(), 0);
    assert_eq!(state.view.resident().unwrap().type_label(), "text/html");
    assert!(state.source_enabled());
}

#[test]
fn test_load_bad_url() {
    let mut state = booted();

    update(
        &mut state,
        Message::LoadUrl {
            url: "not a url".to_string(),
        },
    );

    assert_eq!(state.notice.as_deref(), Some("Bad URL: not a url"));
    assert_eq!(state.view.current(), OutputKey::Nul);
}

#[test]
fn test_request_load() {
    let mut state = booted();
    let result = update(&mut state, Message::RequestLoad);
    assert!(matches!(result.action, Some(UpdateAction::OpenFilePicker)));

    load(&mut state, candidate("a.txt", Some("text/plain"), 1));
    let result = update(&mut state, Message::RequestLoad);
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// Media controls
// ─────────────────────────────────────────────────────────

#[test]
fn test_rate_changed_writes_back_once() {
    let mut state = booted();
    load(&mut state, candidate("a.webm", Some("video/webm"), 10));

    update(
        &mut state,
        Message::MediaRateChanged {
            key: OutputKey::Video,
            rate: 1.5,
        },
    );
    assert_eq!(
        state.registry.entry(ids::MEDIA_SPEED).unwrap().value(),
        &Value::Number(1.5)
    );
    let after_first = state.guard.notifications();

    // Echo of our own write
    update(
        &mut state,
        Message::MediaRateChanged {
            key: OutputKey::Video,
            rate: 1.5,
        },
    );
    assert_eq!(state.guard.notifications(), after_first);
}

#[test]
fn test_seek_clamps_at_zero() {
    let mut state = booted();
    load(&mut state, candidate("a.webm", Some("video/webm"), 10));
    update(
        &mut state,
        Message::MediaTimeUpdate {
            key: OutputKey::Video,
            seconds: 12.0,
        },
    );

    update(&mut state, Message::Seek { seconds: 5.0 });
    assert_eq!(
        state.registry.output(OutputKey::Video).surface.property("currentTime"),
        Some(&Value::Number(17.0))
    );

    update(&mut state, Message::Seek { seconds: -20.0 });
    assert_eq!(
        state.registry.output(OutputKey::Video).surface.property("currentTime"),
        Some(&Value::Number(0.0))
    );
}

#[test]
fn test_seek_ignored_outside_media() {
    let mut state = booted();
    load(&mut state, candidate("cat.png", Some("image/png"), 10));
    update(&mut state, Message::Seek { seconds: 5.0 });
    assert!(state
        .registry
        .output(OutputKey::Image)
        .surface
        .property("currentTime")
        .is_none());
}

#[test]
fn test_scan_restores_base_speed() {
    let mut state = booted();
    input(&mut state, ids::MEDIA_SPEED, 1.5);

    update(&mut state, Message::ScanStart { factor: 4.0 });
    assert_eq!(
        state.registry.entry(ids::MEDIA_SPEED).unwrap().value(),
        &Value::Number(6.0)
    );

    // A second press keeps the original base
    update(&mut state, Message::ScanStart { factor: 2.0 });
    assert_eq!(
        state.registry.entry(ids::MEDIA_SPEED).unwrap().value(),
        &Value::Number(3.0)
    );

    update(&mut state, Message::ScanEnd);
    assert_eq!(
        state.registry.entry(ids::MEDIA_SPEED).unwrap().value(),
        &Value::Number(1.5)
    );
    assert!(state.view.scan_base_speed.is_none());
}

#[test]
fn test_scan_clamps_to_entry_bounds() {
    let mut state = booted();
    update(&mut state, Message::ScanStart { factor: 100.0 });
    assert_eq!(
        state.registry.entry(ids::MEDIA_SPEED).unwrap().value(),
        &Value::Number(16.0)
    );
}

// ─────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────

#[test]
fn test_properties_without_file() {
    let mut state = booted();
    update(&mut state, Message::ShowProperties);
    assert_eq!(state.notice.as_deref(), Some("No file."));
}

#[test]
fn test_properties_with_file() {
    let mut state = booted();
    let mut file = candidate("cat.png", Some("image/png"), 10_240);
    file.last_modified = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap());
    load(&mut state, file);

    update(&mut state, Message::ShowProperties);

    assert_eq!(
        state.notice.as_deref(),
        Some("Name: cat.png\nType: image/png\nSize: 10240 bytes\nLast modified: 2024-03-01T12:30:00Z")
    );

    update(&mut state, Message::DismissNotice);
    assert!(state.notice.is_none());
}

#[test]
fn test_quit() {
    let mut state = booted();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}
