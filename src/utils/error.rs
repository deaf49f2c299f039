use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Submission delivery failed: {message}")]
    DeliveryError { message: String },

    #[error("Submission rejected: {invalid_count} field(s) failed validation")]
    SubmissionRejected { invalid_count: usize },
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
    Serialization,
    Configuration,
    Delivery,
    Validation,
}

impl FormError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::DeliveryError { .. } => ErrorSeverity::Medium,
            // Malformed form input is expected, ordinary input.
            Self::SubmissionRejected { .. } => ErrorSeverity::Low,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::DeliveryError { .. } => ErrorCategory::Delivery,
            Self::SubmissionRejected { .. } => ErrorCategory::Validation,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check filesystem permissions and free space".to_string(),
            Self::SerializationError(_) => {
                "Inspect the submission payload for non-serializable content".to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("Fix the '{field}' entry in your configuration and retry")
            }
            Self::DeliveryError { .. } => {
                "The delivery sink failed; retry once the sink is reachable".to_string()
            }
            Self::SubmissionRejected { .. } => {
                "Correct the highlighted fields and submit again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::SubmissionRejected { invalid_count } => format!(
                "{invalid_count} field(s) need attention before the form can be sent"
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
