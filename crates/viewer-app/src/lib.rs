//! viewer-app - Control/output engine and view lifecycle for the media viewer
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: entries bound to output surfaces, the modification guard, the
//! view state machine, the file ingestion pipeline, the Engine abstraction and
//! configuration loading.

pub mod actions;
pub mod binder;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod engine_event;
pub mod entry;
pub mod guard;
pub mod handler;
pub mod message;
pub mod output;
pub mod process;
pub mod registry;
pub mod state;
pub mod view;

// Re-export primary types
pub use binder::{BindOptions, Binder, Binding, DispatchOutcome, Mutation};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use entry::{Entry, EntryGroup, EntryKind, Signal};
pub use guard::{DirtyMark, ModificationGuard};
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use output::{Content, Output, ResourceHandle, Surface};
pub use registry::{ids, Registry};
pub use state::AppState;
pub use view::{ResourceEvent, ResourceTable, ViewState};
