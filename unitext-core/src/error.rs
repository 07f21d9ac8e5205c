//! Error types for unitext operations

use thiserror::Error;

/// Error type for unitext operations
///
/// Classification, filtering and collapsing are total functions and never
/// fail. Only operations that take a caller-supplied name (language tag,
/// filter mode) can reject their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unrecognized language tag or mode name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Embedded language table could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for unitext operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::InvalidArgument("Unsupported language: fr".to_string());
        assert_eq!(err.to_string(), "Invalid argument: Unsupported language: fr");
    }

    #[test]
    fn test_configuration_display() {
        let err = Error::Configuration("missing table".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing table");
    }
}
