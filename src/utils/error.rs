use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Content file error: {0}")]
    ContentFileError(#[from] toml::de::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("No {kind} found for slug '{slug}'")]
    ContentNotFound { kind: String, slug: String },

    #[error("Content API returned errors: {message}")]
    GraphqlError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Content,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ApiError(_) | SiteError::GraphqlError { .. } => ErrorCategory::Network,
            SiteError::ContentNotFound { .. }
            | SiteError::ContentFileError(_)
            | SiteError::TemplateError(_)
            | SiteError::SerializationError(_) => ErrorCategory::Content,
            SiteError::MissingConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::UrlError(_) => ErrorCategory::Configuration,
            SiteError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Content => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ApiError(_) => "A remote content service could not be reached".to_string(),
            SiteError::ContentNotFound { kind, slug } => {
                format!("The {} '{}' does not exist in the content source", kind, slug)
            }
            SiteError::ContentFileError(_) => "A content file could not be parsed".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the API endpoints and your network connection",
            ErrorCategory::Content => "Fix the content source and rebuild",
            ErrorCategory::Configuration => "Review the command-line arguments",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
