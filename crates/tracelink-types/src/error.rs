use thiserror::Error;

/// Errors produced when parsing trace or span identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid hex length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
