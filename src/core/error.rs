//! Error types for the application

use crate::core::EntityId;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("{kind} #{id} not found")]
    NotFound { kind: &'static str, id: EntityId },
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
