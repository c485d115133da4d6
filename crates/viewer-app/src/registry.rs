//! Registry of entries and outputs
//!
//! The engine only addresses controls and surfaces by id/key; the concrete
//! catalogue comes from [`Registry::viewer`].

use std::collections::BTreeMap;

use viewer_core::prelude::*;
use viewer_core::{OutputKey, Value};

use crate::entry::{Entry, EntryGroup, EntryKind};
use crate::output::Output;

/// Entry ids of the viewer catalogue
pub mod ids {
    pub const FILTER_BLUR: &str = "filter-blur";
    pub const FILTER_BRIGHTNESS: &str = "filter-brightness";
    pub const FILTER_CONTRAST: &str = "filter-contrast";
    pub const FILTER_GRAYSCALE: &str = "filter-grayscale";
    pub const FILTER_HUE_ROTATE: &str = "filter-hue-rotate";
    pub const FILTER_INVERT: &str = "filter-invert";
    pub const FILTER_SATURATE: &str = "filter-saturate";
    pub const FILTER_SEPIA: &str = "filter-sepia";

    pub const MEDIA_AUTOPLAY: &str = "media-autoplay";
    pub const MEDIA_REPEAT: &str = "media-repeat";
    pub const MEDIA_WITH_PITCH: &str = "media-with-pitch";
    pub const MEDIA_SPEED: &str = "media-speed";

    pub const POSITION_ALIGN: &str = "position-align";
    pub const POSITION_JUSTIFY: &str = "position-justify";

    pub const TEXT_FONT_FAMILY: &str = "text-font-family";
    pub const TEXT_FONT_SIZE: &str = "text-font-size";
    pub const TEXT_LINE_HEIGHT: &str = "text-line-height";
    pub const TEXT_RIGHT_TO_LEFT: &str = "text-right-to-left";
    pub const TEXT_WORD_WRAP: &str = "text-word-wrap";

    pub const TRANSFORM_REVERSE: &str = "transform-reverse";
    pub const TRANSFORM_ROTATE: &str = "transform-rotate";
    pub const TRANSFORM_SCALE: &str = "transform-scale";

    pub const MENU_CONTROLS: &str = "menu-controls";
    pub const MENU_FORCE_DARK: &str = "menu-force-dark";
    pub const MENU_REVERSE: &str = "menu-reverse";

    /// The file-selection control
    pub const SOURCE: &str = "file";
}

const PLACEMENTS: &[&str] = &["start", "center", "end"];

/// Entries, the file-selection control, and every output surface
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry>,
    source: Entry,
    outputs: Vec<Output>,
}

impl Registry {
    /// Empty registry: no entries, every output present
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            source: Entry::new(
                ids::SOURCE,
                EntryGroup::Source,
                EntryKind::FileList,
                Value::Files(Vec::new()),
            ),
            outputs: OutputKey::ALL.into_iter().map(Output::new).collect(),
        }
    }

    /// The viewer's control catalogue
    pub fn viewer() -> Self {
        use EntryGroup::*;

        let mut registry = Self::new();
        let mut add = |id: &str, group, kind, preset: Value| {
            registry.push(Entry::new(id, group, kind, preset));
        };

        add(ids::FILTER_BLUR, Filter, EntryKind::at_least(0.0), 0.0.into());
        add(ids::FILTER_BRIGHTNESS, Filter, EntryKind::at_least(0.0), 1.0.into());
        add(ids::FILTER_CONTRAST, Filter, EntryKind::at_least(0.0), 1.0.into());
        add(ids::FILTER_GRAYSCALE, Filter, EntryKind::bounded(0.0, 100.0), 0.0.into());
        add(ids::FILTER_HUE_ROTATE, Filter, EntryKind::numeric(), 0.0.into());
        add(ids::FILTER_INVERT, Filter, EntryKind::bounded(0.0, 100.0), 0.0.into());
        add(ids::FILTER_SATURATE, Filter, EntryKind::at_least(0.0), 1.0.into());
        add(ids::FILTER_SEPIA, Filter, EntryKind::bounded(0.0, 100.0), 0.0.into());

        add(ids::MEDIA_AUTOPLAY, Media, EntryKind::Boolean, false.into());
        add(ids::MEDIA_REPEAT, Media, EntryKind::Boolean, false.into());
        add(ids::MEDIA_WITH_PITCH, Media, EntryKind::Boolean, true.into());
        add(ids::MEDIA_SPEED, Media, EntryKind::bounded(0.0625, 16.0), 1.0.into());

        add(ids::POSITION_ALIGN, Position, EntryKind::enumerated(PLACEMENTS), "center".into());
        add(ids::POSITION_JUSTIFY, Position, EntryKind::enumerated(PLACEMENTS), "center".into());

        add(ids::TEXT_FONT_FAMILY, Text, EntryKind::Text, "monospace".into());
        add(ids::TEXT_FONT_SIZE, Text, EntryKind::at_least(0.1), 1.0.into());
        add(ids::TEXT_LINE_HEIGHT, Text, EntryKind::at_least(0.0), 1.2.into());
        add(ids::TEXT_RIGHT_TO_LEFT, Text, EntryKind::Boolean, false.into());
        add(ids::TEXT_WORD_WRAP, Text, EntryKind::Boolean, false.into());

        add(ids::TRANSFORM_REVERSE, Transform, EntryKind::Boolean, false.into());
        add(ids::TRANSFORM_ROTATE, Transform, EntryKind::numeric(), 0.0.into());
        add(ids::TRANSFORM_SCALE, Transform, EntryKind::at_least(0.0), 1.0.into());

        add(ids::MENU_CONTROLS, Menu, EntryKind::Boolean, false.into());
        add(ids::MENU_FORCE_DARK, Menu, EntryKind::Boolean, false.into());
        add(ids::MENU_REVERSE, Menu, EntryKind::Boolean, false.into());

        registry
    }

    /// Register an entry. Ids are unique; a duplicate replaces the earlier one.
    pub fn push(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|e| e.id() == entry.id()) {
            Some(existing) => {
                warn!("Duplicate entry id {}, replacing", entry.id());
                *existing = entry;
            }
            None => self.entries.push(entry),
        }
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn entry_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Ids of the entries belonging to any of `groups`, in registration order
    pub fn ids_in(&self, groups: &[EntryGroup]) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| groups.contains(&e.group()))
            .map(|e| e.id().to_string())
            .collect()
    }

    pub fn all_ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id().to_string()).collect()
    }

    /// The file-selection control
    pub fn source(&self) -> &Entry {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut Entry {
        &mut self.source
    }

    pub fn output(&self, key: OutputKey) -> &Output {
        &self.outputs[key as usize]
    }

    pub fn output_mut(&mut self, key: OutputKey) -> &mut Output {
        &mut self.outputs[key as usize]
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Reset the entries of `groups` to their presets
    pub fn reset(&mut self, groups: &[EntryGroup]) {
        self.entries
            .iter_mut()
            .filter(|e| groups.contains(&e.group()))
            .for_each(Entry::reset);
    }

    pub fn reset_all(&mut self) {
        self.entries.iter_mut().for_each(Entry::reset);
    }

    /// Set every entry from `values`, falling back to its preset
    pub fn populate(&mut self, values: &BTreeMap<String, Value>) {
        for entry in &mut self.entries {
            let value = values
                .get(entry.id())
                .cloned()
                .unwrap_or_else(|| entry.preset().clone());
            entry.set_value(value);
        }
        for id in values.keys().filter(|id| self.entry(id).is_none()) {
            debug!("Ignoring snapshot value for unknown entry {}", id);
        }
    }

    /// Snapshot of every entry's safe value. Opposite of [`Registry::populate`].
    pub fn preserve(&mut self) -> BTreeMap<String, Value> {
        self.entries
            .iter_mut()
            .map(|e| (e.id().to_string(), e.safe_value()))
            .collect()
    }

    /// Override presets (from config). Returns the ids that were rejected.
    pub fn apply_presets(&mut self, presets: &BTreeMap<String, Value>) -> Vec<String> {
        let mut rejected = Vec::new();
        for (id, preset) in presets {
            let result = match self.entry_mut(id) {
                Some(entry) => entry.set_preset(preset.clone()),
                None => Err(Error::unknown_entry(id.as_str())),
            };
            if let Err(e) = result {
                warn!("Ignoring preset override: {}", e);
                rejected.push(id.clone());
            }
        }
        rejected
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
