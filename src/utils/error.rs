use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Model artifact is corrupt: {0}")]
    ArtifactDecodeError(#[from] bincode::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Incomplete input, fields not provided: {}", .missing.join(", "))]
    IncompleteInput { missing: Vec<&'static str> },

    #[error("Unknown {field} code: {code}")]
    UnknownCategory { field: &'static str, code: u8 },

    #[error("Prediction failed: {message}")]
    PredictionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// User can fix it and resubmit (incomplete form input).
    Low,
    /// Bad configuration or request shape.
    Medium,
    /// Prediction pipeline failure.
    High,
    /// Process cannot continue (artifact unavailable/corrupt).
    Critical,
}

impl PriceError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PriceError::IncompleteInput { .. } => ErrorSeverity::Low,
            PriceError::ConfigError { .. }
            | PriceError::InvalidConfigValueError { .. }
            | PriceError::UnknownCategory { .. } => ErrorSeverity::Medium,
            PriceError::CsvError(_)
            | PriceError::SerializationError(_)
            | PriceError::PredictionError { .. } => ErrorSeverity::High,
            PriceError::IoError(_) | PriceError::ArtifactDecodeError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PriceError::IncompleteInput { missing } => {
                format!("Please fill in all fields first ({})", missing.join(", "))
            }
            PriceError::UnknownCategory { field, code } => {
                format!("'{}' is not a valid {} code", code, field)
            }
            PriceError::ArtifactDecodeError(_) => {
                "The trained model artifact could not be read".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PriceError::IncompleteInput { .. } => {
                "Enter a non-zero value for every numeric field and submit again"
            }
            PriceError::UnknownCategory { .. } => {
                "Pick a code from the registry listing (see --help)"
            }
            PriceError::ConfigError { .. } | PriceError::InvalidConfigValueError { .. } => {
                "Check the configuration values and retry"
            }
            PriceError::IoError(_) | PriceError::ArtifactDecodeError(_) => {
                "Verify the model artifact path points to a valid trained model"
            }
            PriceError::CsvError(_) => "Check that the dataset file is well-formed CSV",
            _ => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, PriceError>;
