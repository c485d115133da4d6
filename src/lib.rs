//! Media Viewer Library
//!
//! A single-file media and document viewer driven over stdin/stdout.

pub mod headless;

// Re-export main entry points
pub use headless::runner::{run_headless, HeadlessOptions};
pub use headless::HeadlessEvent;
