use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("not initialized: run 'sprinova init'")]
    NotInitialized,

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unknown content type: {0}")]
    UnknownContentType(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Shorthand for field-level validation failures.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SiteError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
