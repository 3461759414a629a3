//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown vote choice: {0}. Valid: appropriate, revision, inappropriate")]
    UnknownChoice(String),

    #[error("Unknown moderation status: {0}")]
    UnknownStatus(String),

    #[error("Invalid content id: {0}")]
    InvalidContentId(String),

    #[error("Invalid account email: {0}")]
    InvalidEmail(String),
}

impl DomainError {
    /// Check if this error was caused by malformed caller input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownChoice(_)
                | DomainError::InvalidContentId(_)
                | DomainError::InvalidEmail(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_choice_display() {
        let error = DomainError::UnknownChoice("spam".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown vote choice: spam. Valid: appropriate, revision, inappropriate"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(DomainError::UnknownChoice("x".to_string()).is_input_error());
        assert!(DomainError::InvalidEmail(String::new()).is_input_error());
        assert!(!DomainError::UnknownStatus("x".to_string()).is_input_error());
    }
}
