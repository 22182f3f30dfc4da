use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Dataset error in {file}: {message}")]
    DatasetError { file: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnalyticsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::DatasetError { .. } => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_) | Self::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {e}"),
            Self::CsvError(e) => format!("A dataset file could not be parsed: {e}"),
            Self::DatasetError { file, message } => format!("Dataset '{file}' is invalid: {message}"),
            Self::InvalidConfigValueError { field, value, .. } => {
                format!("Setting '{field}' has an invalid value '{value}'")
            }
            Self::MissingConfigError { field } => format!("Setting '{field}' is required"),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the paths exist and are writable",
            ErrorCategory::Data => {
                "Check the CSV headers (students: name,score,course; products: name,category,price,stock; books: title,author,pages,price; employees: name,department,salary,age)"
            }
            ErrorCategory::Configuration => "Review the command line flags or the TOML configuration file",
            ErrorCategory::Processing => "Re-run with --verbose for more details",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
