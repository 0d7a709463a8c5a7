//! Generation service boundary
//!
//! One operation: turn a natural-language instruction into text, optionally
//! constrained to structured (JSON) output. [`crate::GeminiClient`] is the
//! production implementation; tests use the scripted service from
//! `test_utils`.

use crate::error::GenerationError;

/// A single instruction sent to the generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    pub prompt: String,
    /// Ask the service for a JSON-only reply
    pub json: bool,
}

impl ServiceRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json: false,
        }
    }

    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json: true,
        }
    }
}

/// Generates content from an instruction
#[trait_variant::make(GenerationService: Send)]
pub trait LocalGenerationService {
    /// Submit the instruction and return the raw reply text
    async fn generate(&self, request: ServiceRequest) -> Result<String, GenerationError>;

    /// Model identifier, for logging
    fn model(&self) -> &str;
}
