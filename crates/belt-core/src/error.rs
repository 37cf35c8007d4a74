//! Error types for Utility Belt

use crate::utility::UtilityError;
use thiserror::Error;

/// Result type alias for Utility Belt operations
pub type BeltResult<T> = Result<T, BeltError>;

/// Main error type for Utility Belt
#[derive(Error, Debug)]
pub enum BeltError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A utility failed during execution.
    ///
    /// The session loop does not catch these; they terminate the session
    /// and surface through the binary with a non-zero exit status.
    #[error("Utility '{name}' failed: {source}")]
    Utility {
        name: String,
        #[source]
        source: UtilityError,
    },

    /// IO errors (console reads, config file reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl BeltError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Wrap a utility failure with the utility's display name
    pub fn utility<S: Into<String>>(name: S, source: UtilityError) -> Self {
        Self::Utility {
            name: name.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utility_error_carries_name() {
        let err = BeltError::utility("Cat Fact", UtilityError::Other("boom".to_string()));
        assert_eq!(err.to_string(), "Utility 'Cat Fact' failed: boom");
    }

    #[test]
    fn config_error_display() {
        let err = BeltError::config("missing webhook");
        assert_eq!(err.to_string(), "Configuration error: missing webhook");
    }
}
