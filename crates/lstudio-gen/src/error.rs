//! Generation failure types

use thiserror::Error;

/// Why a generation call failed
///
/// Every variant is surfaced to the user as one localized message; the
/// detail only goes to the log.
#[derive(Debug, Error)]
pub enum GenerationError {
    // ─────────────────────────────────────────────────────────────
    // Transport
    // ─────────────────────────────────────────────────────────────
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Invalid client configuration: {0}")]
    Config(String),

    // ─────────────────────────────────────────────────────────────
    // Service replies
    // ─────────────────────────────────────────────────────────────
    #[error("Service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Service returned no content")]
    EmptyResponse,

    #[error("Request blocked by the service: {reason}")]
    Blocked { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Structured output
    // ─────────────────────────────────────────────────────────────
    #[error("Response is not a JSON object")]
    NotAnObject,

    #[error("Malformed JSON response: {0}")]
    MalformedJson(String),

    #[error("Unexpected response shape: {0}")]
    InvalidShape(String),
}

impl GenerationError {
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }

    /// Whether a later identical request could plausibly succeed
    ///
    /// Nothing retries automatically; this only shapes the log line.
    pub fn is_transient(&self) -> bool {
        match self {
            GenerationError::Transport(_) | GenerationError::Timeout { .. } => true,
            GenerationError::Service { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<GenerationError> for lstudio_core::Error {
    fn from(err: GenerationError) -> Self {
        lstudio_core::Error::generation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GenerationError::Transport("reset".into()).is_transient());
        assert!(GenerationError::Timeout { secs: 60 }.is_transient());
        assert!(GenerationError::service(503, "unavailable").is_transient());
        assert!(GenerationError::service(429, "quota").is_transient());
        assert!(!GenerationError::service(400, "bad request").is_transient());
        assert!(!GenerationError::NotAnObject.is_transient());
        assert!(!GenerationError::EmptyResponse.is_transient());
    }

    #[test]
    fn test_converts_into_core_error() {
        let err: lstudio_core::Error = GenerationError::service(500, "boom").into();
        assert!(matches!(err, lstudio_core::Error::Generation { .. }));
        assert!(err.to_string().contains("HTTP 500"));
    }
}
