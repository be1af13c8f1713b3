use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Serialization,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::SerializationError(_) => ErrorCategory::Serialization,
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::IoError(_) => ErrorSeverity::Critical,
            CalcError::SerializationError(_) => ErrorSeverity::High,
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::IoError(_) => {
                "Check that the file paths exist and are writable".to_string()
            }
            CalcError::SerializationError(_) => {
                "Report output could not be serialized; re-run with --verbose for details"
                    .to_string()
            }
            CalcError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the configuration file", field)
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("File operation failed: {}", e),
            CalcError::SerializationError(e) => format!("Could not write report: {}", e),
            CalcError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            CalcError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' has an invalid value ({}): {}", field, value, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
