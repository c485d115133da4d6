//! # viewer-core - Core Domain Types
//!
//! Foundation crate for the media viewer. Provides the error type, logging
//! setup, control values, output keys and file classification.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Value`] - A control value (boolean, number, text, file list)
//! - [`OutputKey`] - Render surface identifiers (`nul`, `text`, `image`, ...)
//! - [`FileCandidate`] - A file offered for loading, with declared type and size
//! - [`classify()`] - Content type to view mapping
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use viewer_core::prelude::*;
//! ```

pub mod constants;
pub mod error;
pub mod file;
pub mod logging;
pub mod types;
pub mod value;

/// Prelude for common imports used throughout all viewer crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use constants::{
    format_size, large_file_prompt, messages, style_variable, window_title, DATA_TYPE,
    FILE_SIZE_MAX_SAFE, TITLE,
};
pub use error::{Error, Result, ResultExt};
pub use file::{classify, guess_content_type, FileCandidate, Location, FRAME_TYPES};
pub use types::OutputKey;
pub use value::Value;
