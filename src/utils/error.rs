use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("住所を入力してください / Please enter an address")]
    EmptyAddress,

    #[error("Port catalog request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Port catalog error: {message}")]
    CatalogError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Data,
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

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::EmptyAddress => ErrorCategory::Input,
            CheckError::ApiError(_) => ErrorCategory::Network,
            CheckError::CsvError(_)
            | CheckError::SerializationError(_)
            | CheckError::CatalogError { .. } => ErrorCategory::Data,
            CheckError::IoError(_) => ErrorCategory::System,
            CheckError::ConfigValidationError { .. }
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::EmptyAddress => self.to_string(),
            CheckError::ApiError(_) => "Could not reach the port catalog server".to_string(),
            CheckError::CatalogError { .. } => "The port catalog data is malformed".to_string(),
            CheckError::IoError(e) => format!("File access failed: {}", e),
            CheckError::CsvError(_) | CheckError::SerializationError(_) => {
                "Failed to write the check results".to_string()
            }
            _ => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Pass at least one non-blank address, e.g. 神奈川県横浜市鶴見区大黒ふ頭",
            ErrorCategory::Network => "Check the --ports URL and your network connection",
            ErrorCategory::Data => "Make sure the catalog is a JSON array of {name, code, lat, lng}",
            ErrorCategory::Configuration => "Review the TOML config file and command-line flags",
            ErrorCategory::System => "Check file permissions and free disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
