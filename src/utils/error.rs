use crate::domain::model::RecordKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Invalid book ID format: {id}")]
    InvalidFormat { id: String },

    #[error("{kind} not found: {key}")]
    NotFound { kind: RecordKind, key: String },

    #[error("No {kind}s recorded")]
    EmptyCollection { kind: RecordKind },

    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LibraryError {
    /// 可在選單層回報後繼續執行的錯誤
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. }
                | Self::NotFound { .. }
                | Self::EmptyCollection { .. }
                | Self::InvalidInput { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "Use one letter followed by four digits, e.g. A1234",
            Self::NotFound { .. } => "Check the spelling or list the records first",
            Self::EmptyCollection { .. } => "Add a record from the menu first",
            Self::InvalidInput { .. } => "Enter a whole number",
            Self::InputClosed => "Run the program from an interactive terminal",
            Self::IoError(_) => "Check that the terminal is still attached",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_recoverable() {
        let err = LibraryError::InvalidFormat {
            id: "A12".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid book ID format: A12");

        let err = LibraryError::NotFound {
            kind: RecordKind::Book,
            key: "Z9999".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "book not found: Z9999");

        let err = LibraryError::EmptyCollection {
            kind: RecordKind::Borrower,
        };
        assert_eq!(err.to_string(), "No borrowers recorded");
    }

    #[test]
    fn test_io_and_config_errors_are_fatal() {
        assert!(!LibraryError::InputClosed.is_recoverable());

        let err = LibraryError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(
            err.recovery_suggestion(),
            "Fix the configuration file or the command line flags"
        );
    }
}
