//! Error types for the stagehand library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all stagehand operations.
#[derive(Error, Debug)]
pub enum StagehandError {
    /// Session store connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Input rejected by the strict DD.MM.YYYY date parser
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
    /// Document rendering failures
    #[error("Render error: {message}")]
    Render { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StagehandError {
    /// Creates a database error with a message and an underlying cause.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates a date validation error for a rejected input string.
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a render error with a message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StagehandError::database(message, e))
    }
}

/// Result type alias for stagehand operations
pub type Result<T> = std::result::Result<T, StagehandError>;
