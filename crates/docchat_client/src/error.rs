//! Client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Connection or body read failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    #[error("invalid document id: {0}")]
    InvalidDocumentId(String),

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Error::Status {
            status,
            body: body.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
