use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid code {raw}")]
    InvalidScanFormat { raw: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScanError {
    /// Returns the raw scan that failed to decode, if this is a decode error.
    pub fn raw_input(&self) -> Option<&str> {
        match self {
            ScanError::InvalidScanFormat { raw } => Some(raw),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ScanError::InvalidScanFormat { .. } => ErrorCategory::Input,
            ScanError::ConfigError { .. }
            | ScanError::ConfigValidationError { .. }
            | ScanError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ScanError::IoError(_) | ScanError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScanError::InvalidScanFormat { .. } => {
                "Scan a 13-digit weight label or a GS1-128 label carrying AI 310x"
            }
            ScanError::ConfigError { .. } => "Check the --config path",
            ScanError::ConfigValidationError { .. } => {
                "Check that the configuration file is valid TOML"
            }
            ScanError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the configuration file or command line"
            }
            ScanError::IoError(_) => "Check that the file exists and is readable",
            ScanError::SerializationError(_) => "Retry with --format text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScanError::InvalidScanFormat { raw } => {
                format!("Unrecognized barcode: '{}'", raw)
            }
            ScanError::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
