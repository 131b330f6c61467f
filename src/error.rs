use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid question '{id}': {reason}")]
    InvalidQuestion { id: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Interview not found: {0}")]
    InterviewNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
