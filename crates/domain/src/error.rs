//! Unified error types for the domain layer
//!
//! Provides a common error type for validation and parsing so adapters do not
//! have to fall back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a value is outside what the domain accepts, such as an
    /// empty character name or a negative hit point amount.
    ///
    /// # Example
    /// ```
    /// use hpkeeper_domain::DomainError;
    ///
    /// let err = DomainError::validation("healAmount must be non-negative");
    /// assert_eq!(err.to_string(), "Validation failed: healAmount must be non-negative");
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
