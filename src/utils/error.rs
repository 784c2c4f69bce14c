use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Cannot read {what} {path}: {reason}")]
    InputFileError {
        what: &'static str,
        path: String,
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

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::ConfigError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ValidationError { .. }
            | AppError::InputFileError { .. } => ErrorSeverity::High,
            AppError::CsvError(_) | AppError::SerializationError(_) => ErrorSeverity::High,
            AppError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            AppError::ConfigError { message } | AppError::ValidationError { message } => {
                message.clone()
            }
            AppError::InputFileError { what, path, reason } => {
                format!("Cannot read {} {}: {}", what, path, reason)
            }
            AppError::IoError(e) => format!("Could not read or write a file: {}", e),
            AppError::CsvError(e) => format!("Could not write CSV output: {}", e),
            AppError::SerializationError(e) => format!("Could not write JSON output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::MissingConfigError { .. } => {
                "Pass the value as a flag, set it in the environment, or add it to the config file"
            }
            AppError::InvalidConfigValueError { .. } | AppError::ValidationError { .. } => {
                "Check the flag or config file value and try again"
            }
            AppError::ConfigError { .. } => "Check the config file syntax",
            AppError::InputFileError { .. } => "Check that the path exists and is readable",
            AppError::IoError(_) => "Check that the path exists and is writable",
            AppError::CsvError(_) | AppError::SerializationError(_) => {
                "Try another output format"
            }
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures of the text-generation service.
///
/// These never leave the variation generator: it converts every one of them
/// into an error sentinel and a notification on the error channel.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("API server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid request ({status}): {message}")]
    InvalidRequest { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ServiceError {
    /// Maps a non-success HTTP status and the service's error message to a variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ServiceError::Authentication(message),
            400 if message.to_ascii_lowercase().contains("api key") => {
                ServiceError::Authentication(message)
            }
            429 => ServiceError::RateLimited(message),
            500..=599 => ServiceError::Server { status, message },
            _ => ServiceError::InvalidRequest { status, message },
        }
    }
}
