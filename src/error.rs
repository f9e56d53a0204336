use thiserror::Error;

#[derive(Error, Debug)]
pub enum PilotError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for PilotError {
    fn from(e: rusqlite::Error) -> Self {
        PilotError::Storage(format!("SQLite error: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, PilotError>;
