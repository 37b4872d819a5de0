//! Error type shared by the whole crate.

use thiserror::Error;

/// Errors raised by organism construction, genetic operators and configuration.
///
/// All variants describe caller mistakes detected at construction time or at
/// the start of an operation. None of them are retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvolveError {
    /// A genome or population length of zero.
    #[error("invalid length: {what} must be at least 1")]
    InvalidLength { what: &'static str },

    /// Two genomes that must agree in length do not.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An alphabet with no symbols.
    #[error("degenerate alphabet: at least one symbol is required")]
    DegenerateAlphabet,

    /// A configuration value outside its domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EvolveError>;
