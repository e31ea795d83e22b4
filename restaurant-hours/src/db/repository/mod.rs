//! Repository Module
//!
//! Raw parameterized SQL against the SQLite schema. Every function takes a
//! `&mut SqliteConnection`, so callers decide whether it runs on a pooled
//! connection or inside a transaction.

pub mod menu_item;
pub mod open_hours;
pub mod restaurant;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
