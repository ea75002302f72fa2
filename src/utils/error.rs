use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Config file parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid configuration for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidFieldError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, IntakeError>;
