//! Binder: wiring from entries to output mutations
//!
//! Bindings are registered once at setup and addressed by entry id. A
//! dispatch reads the entry's safe value, applies every matching binding
//! write-if-changed, and calls the guard's after-modify hook at most once,
//! only when something changed and the guard is not suppressing.

use viewer_core::prelude::*;
use viewer_core::{style_variable, OutputKey, Value};

use crate::entry::Signal;
use crate::guard::ModificationGuard;
use crate::registry::{ids, Registry};

/// What a binding does to its output
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Named boolean attribute set to the (optionally inverted) value
    BooleanProperty { output: OutputKey, property: String },
    /// Class word present iff the (optionally inverted) value is truthy
    ClassToggle { output: OutputKey, class: String },
    /// Named property assigned the value, formatted when a suffix is set
    Property { output: OutputKey, property: String },
    /// Style variable on the shared root surface
    StyleVariable { name: String },
}

impl Mutation {
    pub fn output(&self) -> OutputKey {
        match self {
            Mutation::BooleanProperty { output, .. }
            | Mutation::ClassToggle { output, .. }
            | Mutation::Property { output, .. } => *output,
            Mutation::StyleVariable { .. } => OutputKey::Root,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindOptions {
    pub invert: bool,
    /// React to continuous `Input` signals as well as `Change`
    pub coalesce: bool,
    /// Unit appended to numeric values (`px`, `deg`, `%`, `em`)
    pub suffix: Option<String>,
}

impl BindOptions {
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    pub fn coalesced(mut self) -> Self {
        self.coalesce = true;
        self
    }

    pub fn suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }

    fn reacts_to(&self, signal: Signal) -> bool {
        signal == Signal::Change || self.coalesce
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub entry_id: String,
    pub mutation: Mutation,
    pub options: BindOptions,
}

/// Result of dispatching one entry signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Bindings that reacted to the signal
    pub applied: usize,
    /// Whether any binding altered its output
    pub changed: bool,
    /// Whether the after-modify hook fired
    pub notified: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Binder {
    bindings: Vec<Binding>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings of the viewer's control catalogue
    pub fn viewer() -> Self {
        let mut binder = Self::new();
        let coalesced = || BindOptions::default().coalesced();

        for (id, suffix) in [
            (ids::FILTER_BLUR, Some("px")),
            (ids::FILTER_BRIGHTNESS, None),
            (ids::FILTER_CONTRAST, None),
            (ids::FILTER_GRAYSCALE, Some("%")),
            (ids::FILTER_HUE_ROTATE, Some("deg")),
            (ids::FILTER_INVERT, Some("%")),
            (ids::FILTER_SATURATE, None),
            (ids::FILTER_SEPIA, Some("%")),
            (ids::POSITION_ALIGN, None),
            (ids::POSITION_JUSTIFY, None),
            (ids::TEXT_FONT_FAMILY, None),
            (ids::TEXT_FONT_SIZE, Some("em")),
            (ids::TEXT_LINE_HEIGHT, None),
            (ids::TRANSFORM_ROTATE, Some("deg")),
            (ids::TRANSFORM_SCALE, None),
        ] {
            let options = match suffix {
                Some(s) => coalesced().suffix(s),
                None => coalesced(),
            };
            binder.style_variable(id, options);
        }

        for media in [OutputKey::Audio, OutputKey::Video] {
            binder.boolean_property(ids::MEDIA_AUTOPLAY, media, "autoplay", BindOptions::default());
            binder.boolean_property(ids::MEDIA_REPEAT, media, "loop", BindOptions::default());
            binder.boolean_property(
                ids::MEDIA_WITH_PITCH,
                media,
                "preservesPitch",
                coalesced().inverted(),
            );
            binder.property(ids::MEDIA_SPEED, media, "playbackRate", coalesced());
        }

        binder.class_toggle(ids::TEXT_RIGHT_TO_LEFT, OutputKey::Text, "right-to-left", coalesced());
        binder.class_toggle(ids::TEXT_WORD_WRAP, OutputKey::Text, "word-wrap", coalesced());
        binder.class_toggle(ids::TRANSFORM_REVERSE, OutputKey::Root, "reverse", coalesced());

        binder.class_toggle(
            ids::MENU_CONTROLS,
            OutputKey::Shell,
            "no-panels",
            BindOptions::default().inverted(),
        );
        binder.class_toggle(ids::MENU_FORCE_DARK, OutputKey::Shell, "dark", BindOptions::default());
        binder.class_toggle(ids::MENU_REVERSE, OutputKey::Shell, "reverse", BindOptions::default());

        binder
    }

    // ─────────────────────────────────────────────────────────
    // Constructors
    // ─────────────────────────────────────────────────────────

    pub fn bind(&mut self, entry_id: &str, mutation: Mutation, options: BindOptions) {
        self.bindings.push(Binding {
            entry_id: entry_id.to_string(),
            mutation,
            options,
        });
    }

    pub fn boolean_property(
        &mut self,
        entry_id: &str,
        output: OutputKey,
        property: &str,
        options: BindOptions,
    ) {
        let property = property.to_string();
        self.bind(entry_id, Mutation::BooleanProperty { output, property }, options);
    }

    pub fn class_toggle(&mut self, entry_id: &str, output: OutputKey, class: &str, options: BindOptions) {
        let class = class.to_string();
        self.bind(entry_id, Mutation::ClassToggle { output, class }, options);
    }

    pub fn property(&mut self, entry_id: &str, output: OutputKey, property: &str, options: BindOptions) {
        let property = property.to_string();
        self.bind(entry_id, Mutation::Property { output, property }, options);
    }

    /// Style variable named after the entry (`--viewer-<id>`) on the root surface
    pub fn style_variable(&mut self, entry_id: &str, options: BindOptions) {
        let name = style_variable(entry_id);
        self.bind(entry_id, Mutation::StyleVariable { name }, options);
    }

    // ─────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn bindings_for<'a>(&'a self, entry_id: &'a str) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |b| b.entry_id == entry_id)
    }

    /// Apply the entry's bindings that react to `signal`
    pub fn dispatch(
        &self,
        registry: &mut Registry,
        guard: &mut ModificationGuard,
        entry_id: &str,
        signal: Signal,
    ) -> Result<DispatchOutcome> {
        let value = registry
            .entry_mut(entry_id)
            .ok_or_else(|| Error::unknown_entry(entry_id))?
            .safe_value();

        let mut outcome = DispatchOutcome::default();
        for binding in self
            .bindings_for(entry_id)
            .filter(|b| b.options.reacts_to(signal))
        {
            outcome.applied += 1;
            outcome.changed |= apply(registry, binding, &value);
        }

        if outcome.changed && !guard.is_suppressed() {
            guard.after_modify(entry_id);
            outcome.notified = true;
        } else if outcome.applied > 0 && !outcome.changed {
            trace!("Entry {} unchanged, no mutation", entry_id);
        }
        Ok(outcome)
    }

    /// Apply every binding of the entry without notifying the guard.
    /// Used to push current values onto freshly loaded media.
    pub fn propagate(&self, registry: &mut Registry, entry_id: &str) -> Result<bool> {
        let value = registry
            .entry_mut(entry_id)
            .ok_or_else(|| Error::unknown_entry(entry_id))?
            .safe_value();

        let mut changed = false;
        for binding in self.bindings_for(entry_id) {
            changed |= apply(registry, binding, &value);
        }
        Ok(changed)
    }
}

/// Apply one binding write-if-changed. Returns whether the output changed.
fn apply(registry: &mut Registry, binding: &Binding, value: &Value) -> bool {
    let options = &binding.options;
    let surface = &mut registry.output_mut(binding.mutation.output()).surface;

    match &binding.mutation {
        Mutation::BooleanProperty { property, .. } => {
            surface.set_property(property, Value::Bool(value.truthy() != options.invert))
        }
        Mutation::ClassToggle { class, .. } => {
            surface.set_class(class, value.truthy() != options.invert)
        }
        Mutation::Property { property, .. } => {
            let value = match (value, options.suffix.as_deref(), options.invert) {
                (Value::Bool(b), _, true) => Value::Bool(!b),
                (Value::Number(_), Some(_), _) => Value::Text(format_value(value, options)),
                _ => value.clone(),
            };
            surface.set_property(property, value)
        }
        Mutation::StyleVariable { name } => {
            surface.set_style_variable(name, format_value(value, options))
        }
    }
}

/// Numbers get the unit suffix; everything else renders as-is
fn format_value(value: &Value, options: &BindOptions) -> String {
    match (value, options.suffix.as_deref()) {
        (Value::Number(n), Some(suffix)) => format!("{}{}", n, suffix),
        (Value::Bool(b), _) if options.invert => (!b).to_string(),
        _ => value.to_string(),
    }
}
