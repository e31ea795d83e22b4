//! Shared types for the restaurant hours workspace
//!
//! Domain models and the open-hours rule, used by every backend
//! (CSV snapshot, raw SQL, query builder).

pub mod hours;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use hours::{OpenHoursPredicate, ScheduleParseError, is_open, parse_schedule};
pub use models::{MenuItem, MenuItemCreate, OpenHours, OpenHoursRow, Restaurant, RestaurantRecord, Schedule};
