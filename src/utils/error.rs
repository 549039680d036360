use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Tenant identifier {value:?} cannot be sent as a header: {reason}")]
    InvalidTenant { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Response,
    Request,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RecipeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecipeError::Transport(_) => ErrorCategory::Network,
            RecipeError::Status { .. } | RecipeError::MalformedBody(_) => ErrorCategory::Response,
            RecipeError::InvalidTenant { .. } => ErrorCategory::Request,
            RecipeError::IoError(_) => ErrorCategory::System,
            RecipeError::ConfigError { .. }
            | RecipeError::ConfigValidationError { .. }
            | RecipeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Response | ErrorCategory::Request => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否為逾時錯誤
    pub fn is_timeout(&self) -> bool {
        matches!(self, RecipeError::Transport(e) if e.is_timeout())
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RecipeError::Transport(e) if e.is_timeout() => {
                "The backend did not answer in time; raise timeout_seconds or check the backend load".to_string()
            }
            RecipeError::Transport(_) => {
                "Check that the backend is running and API_BASE_URL points at it".to_string()
            }
            RecipeError::Status { status, .. } if *status >= 500 => {
                "The backend failed while serving this tenant; check the backend logs".to_string()
            }
            RecipeError::Status { .. } => {
                "Check the tenant identifier and the configured path suffix".to_string()
            }
            RecipeError::MalformedBody(_) => {
                "The backend did not return JSON; verify the base URL targets the recipe API".to_string()
            }
            RecipeError::InvalidTenant { .. } => {
                "Remove control characters from the subdomain".to_string()
            }
            RecipeError::IoError(_) => "Check that the file exists and is readable".to_string(),
            RecipeError::ConfigError { .. }
            | RecipeError::ConfigValidationError { .. }
            | RecipeError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the recipe backend ({})", self),
            ErrorCategory::Response => format!("The recipe backend returned an unusable answer ({})", self),
            ErrorCategory::Request => format!("The request could not be built ({})", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
