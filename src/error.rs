//! Error types for the Enigma engine.

use thiserror::Error;

/// Errors produced by the Enigma engine.
///
/// Every variant is a caller configuration or input error. The engine never
/// retries and never recovers silently; each failure is returned synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// A substitution is not a bijection, or breaks the involution,
    /// fixed-point or pairing rules required by its component.
    #[error("Invalid wiring: {0}")]
    InvalidWiring(String),
    /// A machine configuration is structurally invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// An input character is not part of the configured alphabet.
    #[error("Unsupported letter {0:?}")]
    UnsupportedLetter(char),
}

impl EnigmaError {
    pub(crate) fn wiring(msg: impl Into<String>) -> Self {
        EnigmaError::InvalidWiring(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        EnigmaError::InvalidConfig(msg.into())
    }
}
