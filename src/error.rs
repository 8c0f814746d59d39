//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.
//! Note that "input is not a reference" and "unknown book" are expected
//! outcomes modeled as values (see [`crate::bible::Lookup`]), never errors.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Supabase REST error with status context
    #[error("Supabase error: {message}")]
    Supabase {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Response parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create a Supabase error with optional status and hint
    #[allow(dead_code)]
    pub fn supabase(message: impl Into<String>) -> Self {
        Self::Supabase {
            message: message.into(),
            status: None,
            hint: None,
        }
    }

    /// Create a Supabase error with HTTP status
    pub fn supabase_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 => Some("Check SUPABASE_URL and SUPABASE_ANON_KEY environment variables"),
            403 => Some("Your anon key may lack row-level security access to this table"),
            404 => Some("The requested table or row was not found"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Supabase server error - try again later"),
            _ => None,
        };
        Self::Supabase {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a response parsing error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

// Convenience conversions
impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}
