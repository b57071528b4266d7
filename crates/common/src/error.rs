//! Error types for torrecon
//!
//! Transport failures are carried as values up to the first caller, which
//! collapses them into absence of evidence.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Body decode error: {0}")]
    Body(String),
}

/// Result type alias for torrecon operations
pub type ReconResult<T> = Result<T, ReconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_reason() {
        let e = ReconError::Timeout("operation timed out".into());
        assert_eq!(e.to_string(), "Timeout error: operation timed out");

        let e = ReconError::Config("timeout must be non-zero".into());
        assert!(e.to_string().starts_with("Configuration error"));
    }
}
