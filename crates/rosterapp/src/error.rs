use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Student id already registered: {0}")]
    DuplicateKey(String),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Record {index}: {source}")]
    InvalidRecord {
        index: usize,
        source: ValidationError,
    },

    #[error("Invalid format: {0}")]
    Format(String),

    #[error("Failed to persist roster: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
