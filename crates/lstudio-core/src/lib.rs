//! # lstudio-core - Core Domain Types
//!
//! Foundation crate for Lesson Studio. Provides the strategy catalog, view
//! and explanation types, the line-based content renderer, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ViewState`] - Which panel the content area shows
//! - [`Language`] - Output language for prompts and user-facing messages
//! - [`RequestKind`] - The three kinds of generation request
//!
//! ### Strategy Catalog (`strategy`)
//! - [`Strategy`] - One pedagogical strategy (id, names, description, icon)
//! - [`TEACHING_STRATEGIES`] - The fixed, ordered catalog
//! - [`find_strategy()`] - Lookup by id
//!
//! ### Explanations (`explanation`)
//! - [`InteractiveExplanation`] - Text or step sequence produced by one request
//! - [`InteractiveStep`] - A titled, icon-tagged content step
//! - [`StepIcon`] - Closed set of step icon tags with a default fallback
//!
//! ### Content Rendering (`content`)
//! - [`ContentBlock`] - A typed display block
//! - [`render_content()`] - Classify loosely formatted text line by line
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
//! use lstudio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod explanation;
pub mod logging;
pub mod strategy;
pub mod types;

/// Prelude for common imports used throughout all Lesson Studio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{render_content, ContentBlock};
pub use error::{Error, Result, ResultExt};
pub use explanation::{ExplanationBody, InteractiveExplanation, InteractiveStep, StepIcon};
pub use strategy::{find_strategy, CatalogIcon, Strategy, TEACHING_STRATEGIES};
pub use types::{Language, RequestKind, ViewState};
