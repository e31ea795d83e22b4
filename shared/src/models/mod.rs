//! Data models
//!
//! Shared between the CSV snapshot and the database backends.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod menu_item;
pub mod open_hours;
pub mod restaurant;
pub mod schedule;

// Re-exports
pub use menu_item::*;
pub use open_hours::*;
pub use restaurant::*;
pub use schedule::*;
