//! Outputs: render surface models the host draws from
//!
//! The engine never touches a real widget. Each [`Output`] owns a [`Surface`]
//! describing what the host should show (classes, properties, style
//! variables, content). Every mutator is write-if-changed and reports
//! whether anything changed, so bindings never echo redundant writes back
//! into host listeners.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use viewer_core::{OutputKey, Value};

/// Class word marking the live view
pub const ACTIVE_CLASS: &str = "active";

/// Transient, revocable reference to file-backed content (an object URL).
///
/// Hosts echo the handle back with media feedback so late reports about a
/// replaced resource can be told apart from the live one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResourceHandle(pub(crate) u64);

impl ResourceHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blob:viewer/{}", self.0)
    }
}

/// What a surface currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    /// File bytes behind a revocable handle
    Resource(ResourceHandle),
    /// A page loaded by address (not revocable)
    Url(String),
    /// Inline text
    Text(String),
}

impl Content {
    pub fn resource(&self) -> Option<ResourceHandle> {
        match self {
            Content::Resource(handle) => Some(*handle),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }
}

/// Renderable state of one output
#[derive(Debug, Clone, Default)]
pub struct Surface {
    classes: BTreeSet<String>,
    properties: BTreeMap<String, Value>,
    style: BTreeMap<String, String>,
    content: Content,
    /// Whether the node is in the render tree (only the frame detaches)
    attached: bool,
    scroll_top: u64,
    focused: bool,
}

impl Surface {
    fn new(attached: bool) -> Self {
        Self {
            attached,
            ..Self::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Add or remove a class word
    pub fn set_class(&mut self, class: &str, on: bool) -> bool {
        if on {
            self.classes.insert(class.to_string())
        } else {
            self.classes.remove(class)
        }
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn set_property(&mut self, name: &str, value: Value) -> bool {
        if self.properties.get(name) == Some(&value) {
            return false;
        }
        self.properties.insert(name.to_string(), value);
        true
    }

    pub fn style_variable(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    pub fn style_variables(&self) -> &BTreeMap<String, String> {
        &self.style
    }

    pub fn set_style_variable(&mut self, name: &str, value: String) -> bool {
        if self.style.get(name) == Some(&value) {
            return false;
        }
        self.style.insert(name.to_string(), value);
        true
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn set_content(&mut self, content: Content) -> bool {
        if self.content == content {
            return false;
        }
        self.content = content;
        true
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn set_attached(&mut self, attached: bool) -> bool {
        std::mem::replace(&mut self.attached, attached) != attached
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn set_scroll_top(&mut self, scroll_top: u64) -> bool {
        std::mem::replace(&mut self.scroll_top, scroll_top) != scroll_top
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

/// A render surface identified by key, optionally holding one resource handle
#[derive(Debug, Clone)]
pub struct Output {
    key: OutputKey,
    pub surface: Surface,
}

impl Output {
    pub fn new(key: OutputKey) -> Self {
        // The frame node starts detached until a frame view is loaded
        let attached = key != OutputKey::Frame;
        Self {
            key,
            surface: Surface::new(attached),
        }
    }

    pub fn key(&self) -> OutputKey {
        self.key
    }

    pub fn is_active(&self) -> bool {
        self.surface.has_class(ACTIVE_CLASS)
    }

    /// The live resource handle, if the content is one
    pub fn resource(&self) -> Option<ResourceHandle> {
        self.surface.content().resource()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_toggle_is_write_if_changed() {
        let mut surface = Surface::default();
        assert!(surface.set_class("word-wrap", true));
        assert!(!surface.set_class("word-wrap", true));
        assert!(surface.has_class("word-wrap"));
        assert!(surface.set_class("word-wrap", false));
        assert!(!surface.set_class("word-wrap", false));
    }

    #[test]
    fn test_property_is_write_if_changed() {
        let mut surface = Surface::default();
        assert!(surface.set_property("playbackRate", Value::Number(1.5)));
        assert!(!surface.set_property("playbackRate", Value::Number(1.5)));
        assert!(surface.set_property("playbackRate", Value::Number(2.0)));
        assert_eq!(surface.property("playbackRate"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_style_variable_is_write_if_changed() {
        let mut surface = Surface::default();
        assert!(surface.set_style_variable("--viewer-filter-blur", "2px".into()));
        assert!(!surface.set_style_variable("--viewer-filter-blur", "2px".into()));
        assert_eq!(surface.style_variable("--viewer-filter-blur"), Some("2px"));
    }

    #[test]
    fn test_frame_starts_detached() {
        assert!(!Output::new(OutputKey::Frame).surface.is_attached());
        assert!(Output::new(OutputKey::Image).surface.is_attached());
    }

    #[test]
    fn test_active_tracks_class() {
        let mut output = Output::new(OutputKey::Text);
        assert!(!output.is_active());
        output.surface.set_class(ACTIVE_CLASS, true);
        assert!(output.is_active());
    }

    #[test]
    fn test_resource_from_content() {
        let mut output = Output::new(OutputKey::Image);
        assert!(output.resource().is_none());
        output
            .surface
            .set_content(Content::Resource(ResourceHandle(7)));
        assert_eq!(output.resource(), Some(ResourceHandle(7)));
        assert_eq!(ResourceHandle(7).to_string(), "blob:viewer/7");
    }
}
