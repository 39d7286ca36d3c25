//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input that is neither `L` nor `R` (or their long forms).
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// A validation error in domain logic, such as a malformed story book.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error (file access, decoding).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_direction_message_quotes_input() {
        let err = DomainError::InvalidDirection("up".to_owned());
        assert_eq!(err.to_string(), "invalid direction: \"up\"");
    }

    #[test]
    fn test_validation_message() {
        let err = DomainError::Validation("no endings".to_owned());
        assert_eq!(err.to_string(), "validation error: no endings");
    }
}
