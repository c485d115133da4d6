//! Entries: user-editable controls with preset and last-known-good values
//!
//! Raw values may be in flight (a half-typed number), so consumers read
//! [`Entry::safe_value`], which always lies in the kind's valid domain.

use std::fmt;

use serde::Deserialize;
use viewer_core::prelude::*;
use viewer_core::Value;

/// Signals an entry emits towards its bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Continuous edit (slider drag, keystroke)
    Input,
    /// Discrete commit (checkbox toggle, file picked, field blurred)
    Change,
}

/// Control panel sections; resets and snapshots work per group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryGroup {
    Filter,
    Media,
    Position,
    Text,
    Transform,
    Menu,
    Source,
}

impl EntryGroup {
    /// Groups covered by "reset all controls"
    pub const CONTROLS: [EntryGroup; 5] = [
        EntryGroup::Filter,
        EntryGroup::Media,
        EntryGroup::Position,
        EntryGroup::Text,
        EntryGroup::Transform,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryGroup::Filter => "filter",
            EntryGroup::Media => "media",
            EntryGroup::Position => "position",
            EntryGroup::Text => "text",
            EntryGroup::Transform => "transform",
            EntryGroup::Menu => "menu",
            EntryGroup::Source => "source",
        }
    }
}

impl fmt::Display for EntryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared kind of an entry, which defines its valid domain
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Boolean,
    Numeric { min: Option<f64>, max: Option<f64> },
    Text,
    Enumerated { options: Vec<String> },
    FileList,
}

impl EntryKind {
    pub fn numeric() -> Self {
        EntryKind::Numeric {
            min: None,
            max: None,
        }
    }

    pub fn bounded(min: f64, max: f64) -> Self {
        EntryKind::Numeric {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: f64) -> Self {
        EntryKind::Numeric {
            min: Some(min),
            max: None,
        }
    }

    pub fn enumerated(options: &[&str]) -> Self {
        EntryKind::Enumerated {
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// Validate a raw value, returning its normalized form when valid.
    ///
    /// Numeric text (`"1.5"`) normalizes to a number; empty or partial text
    /// (`""`, `"-"`, `"1e"`) is invalid.
    pub fn validate(&self, value: &Value) -> Option<Value> {
        match (self, value) {
            (EntryKind::Boolean, Value::Bool(_)) => Some(value.clone()),
            (EntryKind::Numeric { min, max }, Value::Number(n)) => {
                in_bounds(*n, *min, *max).then(|| Value::Number(*n))
            }
            (EntryKind::Numeric { min, max }, Value::Text(s)) => {
                let n = s.trim().parse::<f64>().ok()?;
                in_bounds(n, *min, *max).then_some(Value::Number(n))
            }
            (EntryKind::Text, Value::Text(_)) => Some(value.clone()),
            (EntryKind::Enumerated { options }, Value::Text(s)) => {
                options.iter().any(|o| o == s).then(|| value.clone())
            }
            (EntryKind::FileList, Value::Files(_)) => Some(value.clone()),
            _ => None,
        }
    }

    /// Clamp a number into this kind's bounds (numeric kinds only)
    pub fn clamp(&self, n: f64) -> f64 {
        match self {
            EntryKind::Numeric { min, max } => {
                let n = min.map_or(n, |lo| n.max(lo));
                max.map_or(n, |hi| n.min(hi))
            }
            _ => n,
        }
    }

    /// Signal `update()` re-dispatches for this kind
    pub fn commit_signal(&self) -> Signal {
        match self {
            EntryKind::Boolean | EntryKind::FileList => Signal::Change,
            _ => Signal::Input,
        }
    }
}

fn in_bounds(n: f64, min: Option<f64>, max: Option<f64>) -> bool {
    n.is_finite() && min.map_or(true, |lo| n >= lo) && max.map_or(true, |hi| n <= hi)
}

/// One user-editable control
#[derive(Debug, Clone)]
pub struct Entry {
    id: String,
    group: EntryGroup,
    kind: EntryKind,
    value: Value,
    preset: Value,
    last_known_good: Value,
    enabled: bool,
}

impl Entry {
    /// Create an entry; its value starts at the preset.
    ///
    /// An invalid preset is a registry bug and is logged; the entry still
    /// works, but `safe_value` can only ever return that preset until a
    /// valid value is recorded.
    pub fn new(id: impl Into<String>, group: EntryGroup, kind: EntryKind, preset: Value) -> Self {
        let id = id.into();
        if kind.validate(&preset).is_none() {
            warn!("Entry {} has a preset outside its domain: {:?}", id, preset);
        }
        Self {
            id,
            group,
            kind,
            value: preset.clone(),
            last_known_good: preset.clone(),
            preset,
            enabled: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group(&self) -> EntryGroup {
        self.group
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// Raw, possibly in-flight value
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn preset(&self) -> &Value {
        &self.preset
    }

    pub fn last_known_good(&self) -> &Value {
        &self.last_known_good
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Placeholder text for numeric fields, seeded from the preset
    pub fn placeholder(&self) -> Option<String> {
        matches!(self.kind, EntryKind::Numeric { .. }).then(|| self.preset.to_string())
    }

    /// Assign a raw value. Returns whether the raw value changed.
    pub fn set_value(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// The current value if valid (recording it as last-known-good),
    /// otherwise the last-known-good value.
    pub fn safe_value(&mut self) -> Value {
        match self.kind.validate(&self.value) {
            Some(valid) => {
                self.last_known_good = valid.clone();
                valid
            }
            None => {
                trace!(
                    "Entry {} holds invalid {} value, using last known good",
                    self.id,
                    self.value.type_name()
                );
                self.last_known_good.clone()
            }
        }
    }

    /// Like [`Entry::safe_value`] without recording anything
    pub fn peek_safe_value(&self) -> Value {
        self.kind
            .validate(&self.value)
            .unwrap_or_else(|| self.last_known_good.clone())
    }

    /// Return to the preset
    pub fn reset(&mut self) {
        self.value = self.preset.clone();
        self.last_known_good = self.preset.clone();
    }

    /// Replace the preset (config overrides). Rejects values outside the domain.
    pub fn set_preset(&mut self, preset: Value) -> Result<()> {
        let valid = self.kind.validate(&preset).ok_or_else(|| {
            Error::config(format!(
                "preset for {} is not a valid {:?} value: {}",
                self.id, self.kind, preset
            ))
        })?;
        self.preset = valid;
        Ok(())
    }

    pub fn commit_signal(&self) -> Signal {
        self.kind.commit_signal()
    }
}
