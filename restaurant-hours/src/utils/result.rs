//! Unified Result Types

use super::AppError;

/// Application-level Result type
///
/// Used by services, the database layer entry points, and the CLI
pub type AppResult<T> = Result<T, AppError>;
