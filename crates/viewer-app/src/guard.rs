//! Modification guard ("anesthesia")
//!
//! Suppresses dirty-marking while bulk programmatic updates run (startup,
//! resets, snapshot imports). Bindings consult it read-only; only
//! [`ModificationGuard::suppress`] and [`ModificationGuard::resume`] toggle it.

use viewer_core::prelude::*;

/// Dirty state saved across a suppressed pass that must not discard it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyMark {
    modified: bool,
    unload_guard_armed: bool,
}

#[derive(Debug, Clone)]
pub struct ModificationGuard {
    suppressed: bool,
    modified: bool,
    /// The unsaved-changes navigation listener
    unload_guard_armed: bool,
    notifications: u64,
}

impl ModificationGuard {
    /// Starts suppressed: startup population must not mark the session dirty
    pub fn new() -> Self {
        Self {
            suppressed: true,
            modified: false,
            unload_guard_armed: false,
            notifications: 0,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_unload_guard_armed(&self) -> bool {
        self.unload_guard_armed
    }

    /// Number of after-modify notifications delivered this session
    pub fn notifications(&self) -> u64 {
        self.notifications
    }

    /// Enter suppression: clears the dirty flag and detaches the unload guard
    pub fn suppress(&mut self) {
        if !self.suppressed {
            debug!("Modification guard suppressed");
        }
        self.suppressed = true;
        self.modified = false;
        self.unload_guard_armed = false;
    }

    /// Leave suppression. Does not re-arm the unload guard; the next real
    /// modification does.
    pub fn resume(&mut self) {
        if self.suppressed {
            debug!("Modification guard resumed");
        }
        self.suppressed = false;
    }

    /// After-modify hook. Callers only invoke it for a mutation that changed
    /// state while not suppressed.
    pub fn after_modify(&mut self, entry_id: &str) {
        if self.suppressed {
            trace!("Ignoring modification of {} while suppressed", entry_id);
            return;
        }
        trace!("Entry {} modified the session", entry_id);
        self.notifications += 1;
        self.modified = true;
        self.unload_guard_armed = true;
    }

    pub fn mark(&self) -> DirtyMark {
        DirtyMark {
            modified: self.modified,
            unload_guard_armed: self.unload_guard_armed,
        }
    }

    /// Put back dirty state cleared by [`Self::suppress`]. Anything marked
    /// since stays marked.
    pub fn restore(&mut self, mark: DirtyMark) {
        self.modified |= mark.modified;
        self.unload_guard_armed |= mark.unload_guard_armed;
    }

    pub fn arm_unload_guard(&mut self) {
        self.unload_guard_armed = true;
    }

    pub fn disarm_unload_guard(&mut self) {
        self.unload_guard_armed = false;
    }
}

impl Default for ModificationGuard {
    fn default() -> Self {
        Self::new()
    }
}
