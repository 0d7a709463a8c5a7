//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("API credential not set: export {var} before starting")]
    MissingCredential { var: String },

    // ─────────────────────────────────────────────────────────────
    // Input Validation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid input: {message}")]
    Validation { message: String },

    #[error("Unknown strategy id: {id}")]
    UnknownStrategy { id: String },

    // ─────────────────────────────────────────────────────────────
    // Generation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Generation failed: {message}")]
    Generation { message: String },

    // ─────────────────────────────────────────────────────────────
    // Export Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Export failed for {path}: {message}")]
    Export { path: PathBuf, message: String },

    #[error("Export is only available for the lesson plan view")]
    ExportUnavailable,

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing_credential(var: impl Into<String>) -> Self {
        Self::MissingCredential { var: var.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unknown_strategy(id: impl Into<String>) -> Self {
        Self::UnknownStrategy { id: id.into() }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn export(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are surfaced to the user (as an error message or a
    /// notice) and the application keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Generation { .. }
                | Error::Export { .. }
                | Error::ExportUnavailable
                | Error::Validation { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should stop the application at startup
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MissingCredential { .. } | Error::TerminalInit(_) | Error::UnknownStrategy { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::generation("service unavailable");
        assert_eq!(err.to_string(), "Generation failed: service unavailable");

        let err = Error::missing_credential("GEMINI_API_KEY");
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::missing_credential("API_KEY").is_fatal());
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::unknown_strategy("nope").is_fatal());
        assert!(!Error::generation("boom").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::generation("boom").is_recoverable());
        assert!(Error::export("/tmp/x.md", "denied").is_recoverable());
        assert!(Error::ExportUnavailable.is_recoverable());
        assert!(!Error::missing_credential("API_KEY").is_recoverable());
    }

    #[test]
    fn test_export_error_mentions_path() {
        let err = Error::export("/tmp/plan.md", "permission denied");
        let text = err.to_string();
        assert!(text.contains("/tmp/plan.md"));
        assert!(text.contains("permission denied"));
    }

    #[test]
    fn test_context_passes_error_through() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "nope",
        ));
        let err = res.context("writing export").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
