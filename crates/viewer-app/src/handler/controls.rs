//! Control handlers: entry edits, resets, snapshots and the boot pass

use std::collections::BTreeMap;

use viewer_core::prelude::*;
use viewer_core::{OutputKey, Value};

use crate::config::{ResetGuardPolicy, StartupSettings};
use crate::entry::{EntryGroup, Signal};
use crate::registry::ids;
use crate::state::AppState;

use super::UpdateResult;

/// Dispatch one entry signal through the binder. Unknown ids are logged.
pub(crate) fn dispatch(state: &mut AppState, id: &str, signal: Signal) {
    if let Err(e) = state
        .binder
        .dispatch(&mut state.registry, &mut state.guard, id, signal)
    {
        warn!("Dispatch failed: {}", e);
    }
}

/// Re-dispatch each entry's commit signal so outputs reflect current values
pub(crate) fn update_entries(state: &mut AppState, ids: &[String]) {
    for id in ids {
        let Some(signal) = state.registry.entry(id).map(|e| e.commit_signal()) else {
            continue;
        };
        dispatch(state, id, signal);
    }
}

/// Run a bulk programmatic update under the configured reset policy
fn guarded(state: &mut AppState, f: impl FnOnce(&mut AppState)) {
    match state.settings.behavior.reset_guard {
        ResetGuardPolicy::Suppress => {
            state.guard.suppress();
            f(state);
            state.guard.resume();
        }
        ResetGuardPolicy::Track => f(state),
    }
}

pub(crate) fn handle_entry(
    state: &mut AppState,
    id: &str,
    value: Value,
    signal: Signal,
) -> UpdateResult {
    let Some(entry) = state.registry.entry_mut(id) else {
        warn!("{}", Error::unknown_entry(id));
        return UpdateResult::none();
    };
    if !entry.is_enabled() {
        debug!("Ignoring edit of disabled entry {}", id);
        return UpdateResult::none();
    }
    entry.set_value(value);
    dispatch(state, id, signal);
    UpdateResult::none()
}

/// Reset one group. Edits elsewhere still count, so the session's dirty
/// state is kept even when the reset itself runs suppressed.
pub(crate) fn handle_reset_group(state: &mut AppState, group: EntryGroup) -> UpdateResult {
    let mark = state.guard.mark();
    let result = handle_reset(state, &[group]);
    state.guard.restore(mark);
    result
}

pub(crate) fn handle_reset(state: &mut AppState, groups: &[EntryGroup]) -> UpdateResult {
    let ids = state.registry.ids_in(groups);
    debug!("Resetting {} entries", ids.len());
    guarded(state, |state| {
        state.registry.reset(groups);
        update_entries(state, &ids);
    });
    UpdateResult::none()
}

pub(crate) fn handle_export(state: &mut AppState) -> UpdateResult {
    let snapshot = state.registry.preserve();
    debug!("Exported {} control values", snapshot.len());
    state.last_export = Some(snapshot);
    state.export_count += 1;
    UpdateResult::none()
}

pub(crate) fn handle_import(state: &mut AppState, values: BTreeMap<String, Value>) -> UpdateResult {
    let ids = state.registry.all_ids();
    guarded(state, |state| {
        state.registry.populate(&values);
        update_entries(state, &ids);
    });
    UpdateResult::none()
}

/// Startup: populate every output from presets while suppressed, show the
/// empty view, apply boot flags, then leave suppression for good.
pub(crate) fn handle_boot(state: &mut AppState, startup: StartupSettings) -> UpdateResult {
    state.guard.suppress();

    state.registry.reset_all();
    let ids = state.registry.all_ids();
    update_entries(state, &ids);

    state
        .view
        .transition(&mut state.registry, &mut state.guard, OutputKey::Nul);

    for (id, flag) in [
        (ids::MENU_CONTROLS, startup.controls),
        (ids::MENU_FORCE_DARK, startup.force_dark),
        (ids::MENU_REVERSE, startup.reverse),
    ] {
        if flag {
            if let Some(entry) = state.registry.entry_mut(id) {
                entry.set_value(true);
            }
            dispatch(state, id, Signal::Change);
        }
    }

    state.set_source_enabled(true);
    state.guard.resume();
    info!("Viewer ready");
    UpdateResult::none()
}
