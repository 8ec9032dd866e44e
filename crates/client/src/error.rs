use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Session expired or not authorized")]
    Unauthorized,

    #[error("Resource not found")]
    NotFound,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Session storage error: {0}")]
    Session(#[from] std::io::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("round {round} was left with a stray score record {score}; delete it manually")]
    PartialState { round: i64, score: i64 },
}

impl ClientError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, ClientError::PartialState { .. })
    }
}
