use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Remote returned {status} for table '{table}': {body}")]
    RemoteStatus {
        table: String,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

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

    #[error("Unknown {kind} '{value}'")]
    UnknownFilterValue { kind: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ApiError(_) => ErrorCategory::Network,
            CatalogError::RemoteStatus { .. } => ErrorCategory::Remote,
            CatalogError::SerializationError(_) => ErrorCategory::Data,
            CatalogError::IoError(_) => ErrorCategory::System,
            CatalogError::UrlError(_)
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::UnknownFilterValue { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Data | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::ApiError(_) => "Could not reach the data service".to_string(),
            CatalogError::RemoteStatus { table, status, .. } => {
                format!("The data service rejected the '{}' query ({})", table, status)
            }
            CatalogError::SerializationError(_) => {
                "The data service returned rows in an unexpected shape".to_string()
            }
            CatalogError::IoError(e) => format!("File system error: {}", e),
            CatalogError::UrlError(e) => format!("Invalid service URL: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            CatalogError::UnknownFilterValue { kind, value } => {
                format!("'{}' is not a known {}", value, kind)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the remote URL",
            ErrorCategory::Remote => "Verify the API key and that the table exists",
            ErrorCategory::Data => "Check that the remote schema matches the expected columns",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Input => "Run with --help to list the accepted filter values",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

impl ErrorSeverity {
    /// 依嚴重程度決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,   // 可重試的錯誤
            ErrorSeverity::High => 1,     // 輸入或處理錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
