use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpusError>;

#[derive(Error, Debug)]
pub enum OpusError {
    #[error("Response content is of type '{observed}'. Must be '{expected}'")]
    ContentTypeError { observed: String, expected: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl OpusError {
    pub fn content_type(observed: Option<&str>, expected: impl Into<String>) -> Self {
        OpusError::ContentTypeError {
            observed: observed.unwrap_or("none").to_string(),
            expected: expected.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        OpusError::ConfigError(msg.into())
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        OpusError::ValidationError(msg.into())
    }

    pub fn api_error(msg: impl Into<String>) -> Self {
        OpusError::ApiError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        OpusError::InternalError(msg.into())
    }
}
