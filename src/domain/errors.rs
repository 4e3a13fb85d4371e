//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided symbol is empty.
    EmptySymbol,

    /// The provided symbol cannot be translated to an EDGAR ticker.
    InvalidSymbol(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySymbol => write!(f, "symbol cannot be empty"),
            Self::InvalidSymbol(symbol) => write!(f, "invalid symbol: {}", symbol),
        }
    }
}

impl std::error::Error for ValidationError {}
