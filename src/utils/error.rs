use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Remote backend error: {message}")]
    RemoteError { message: String },

    #[error("Image upload failed: {message}")]
    UploadError { message: String },

    #[error("Authentication failed: {message}")]
    AuthError { message: String },
}

impl CmsError {
    pub fn validation(message: impl Into<String>) -> Self {
        CmsError::ValidationError {
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        CmsError::RemoteError {
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        CmsError::AuthError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CmsError>;
