use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostsClientError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[cfg(feature = "http")]
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Not found")]
    NotFound,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PostsClientError {
    /// Maps a non-2xx response onto the error taxonomy.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 404 {
            Self::NotFound
        } else {
            Self::Http { status, message }
        }
    }
}
