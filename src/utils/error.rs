use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Missing credential: environment variable {variable} is not set")]
    MissingCredential { variable: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{provider} returned HTTP {status} for {url}")]
    HttpStatus {
        provider: String,
        status: u16,
        url: String,
    },

    #[error("Unexpected {provider} response from {url}: {source}")]
    ResponseParseError {
        provider: String,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Critical,
}

impl StatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::MissingCredential { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. }
            | StatsError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            StatsError::ApiError(_) | StatsError::HttpStatus { .. } => ErrorCategory::Network,
            StatsError::ResponseParseError { .. } => ErrorCategory::Data,
            StatsError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::MissingCredential { variable } => {
                format!("API key is missing, set {} in the environment or .env", variable)
            }
            StatsError::HttpStatus {
                provider, status, ..
            } => format!("{} rejected the request with status {}", provider, status),
            StatsError::ApiError(e) if e.is_timeout() => {
                "The job board did not answer in time".to_string()
            }
            StatsError::ApiError(_) => "Could not reach the job board API".to_string(),
            StatsError::ResponseParseError { provider, .. } => {
                format!("{} answered with an unexpected payload", provider)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the CLI flags, the config file and SJ_API_KEY",
            ErrorCategory::Network => "Check the network connection and the API key, then rerun",
            ErrorCategory::Data => "The provider API may have changed; rerun with --verbose",
            ErrorCategory::System => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
