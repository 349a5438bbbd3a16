use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarmupError {
    #[error("Type error: argument `{argument}` must be {expected}, got {found}")]
    TypeError {
        argument: String,
        expected: String,
        found: String,
    },

    #[error("Range error: argument `{argument}` = {value}: {reason}")]
    RangeError {
        argument: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in `{field}`: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Argument has the wrong kind.
    Type,
    /// Argument has the right kind but an out-of-domain value.
    Range,
    Config,
    Io,
}

impl WarmupError {
    pub fn type_error(argument: &str, expected: &str, found: &str) -> Self {
        WarmupError::TypeError {
            argument: argument.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn range_error(argument: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        WarmupError::RangeError {
            argument: argument.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn config_error(field: &str, message: impl Into<String>) -> Self {
        WarmupError::ConfigError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            WarmupError::TypeError { .. } => ErrorCategory::Type,
            WarmupError::RangeError { .. } => ErrorCategory::Range,
            WarmupError::ConfigError { .. } | WarmupError::SerializationError(_) => {
                ErrorCategory::Config
            }
            WarmupError::IoError(_) => ErrorCategory::Io,
        }
    }

    /// True for the two argument failures the problem functions raise.
    pub fn is_validation(&self) -> bool {
        matches!(self.category(), ErrorCategory::Type | ErrorCategory::Range)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WarmupError::TypeError {
                argument, expected, ..
            } => format!("`{}` has the wrong type, expected {}", argument, expected),
            WarmupError::RangeError {
                argument, reason, ..
            } => format!("`{}` is out of range: {}", argument, reason),
            WarmupError::ConfigError { field, message } => {
                format!("Invalid configuration `{}`: {}", field, message)
            }
            WarmupError::IoError(e) => format!("Could not access file: {}", e),
            WarmupError::SerializationError(e) => format!("Malformed JSON: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Type => "Pass an argument of the documented kind; values are not coerced",
            ErrorCategory::Range => "Pass a value inside the accepted domain",
            ErrorCategory::Config => "Check the batch file against the documented format",
            ErrorCategory::Io => "Make sure the path exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, WarmupError>;
