use crate::common::validation::MAX_UPLOAD_MB;

/// Rejection raised before any controller state is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a valid image file (JPG, PNG, GIF, WEBP, BMP, TIFF)")]
    UnsupportedMediaType(Option<String>),
    #[error("File size must be less than {}MB", MAX_UPLOAD_MB)]
    TooLarge { size: u64 },
}

/// Failures of the classify round trip or of local file work.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Network failure, timeout or an unreadable response body.
    #[error("{0}")]
    Transport(String),
    /// The server answered but reported a failure.
    #[error("{0}")]
    Server(String),
    #[error("{0}")]
    Io(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Transport(format!("malformed response: {}", err))
    }
}
