use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} request to {path} returned {status}")]
    Service {
        method: &'static str,
        path: String,
        status: u16,
    },

    #[error("Failed to parse response: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Create response did not contain an id field")]
    MissingId,
}

pub type Result<T> = std::result::Result<T, Error>;
