//! # lstudio-gen - Generation Client
//!
//! Request/response boundary to the external generative model. Builds the
//! instructions, sends them through a [`GenerationService`], and turns the
//! replies into text or a validated [`lstudio_core::InteractiveExplanation`].
//!
//! Depends on [`lstudio_core`] for domain types.
//!
//! ## Public API
//!
//! ### Operations
//! - [`Generator`] - `generate_plan`, `explain_strategy`, `explain_interactively`
//!
//! ### Service Boundary
//! - [`GenerationService`] - Async trait for anything that can generate text
//! - [`ServiceRequest`] - Instruction plus the structured-output flag
//! - [`GeminiClient`], [`GeminiConfig`] - Gemini REST implementation
//!
//! ### Parsing
//! - [`parse_interactive()`] - Strict validation of structured replies
//!
//! ### Errors
//! - [`GenerationError`] - Transport, service and parsing failures

pub mod error;
pub mod gemini;
pub mod generator;
pub mod parse;
pub mod prompt;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use error::GenerationError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use generator::Generator;
pub use parse::parse_interactive;
pub use service::{GenerationService, LocalGenerationService, ServiceRequest};
