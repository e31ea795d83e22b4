//! Open-hours rule
//!
//! One rule, two renderings:
//!
//! - [`is_open`] evaluates a [`Schedule`](crate::models::Schedule) directly.
//! - [`OpenHoursPredicate`] restates the same rule over the minute-encoded
//!   `open_hours` columns so database backends can push it into SQL.
//!
//! Both look back one day for windows that run past midnight and compare
//! both ends strictly, at minute resolution.

pub mod matcher;
pub mod parser;
pub mod predicate;
pub mod weekday;

pub use matcher::is_open;
pub use parser::{ScheduleParseError, parse_schedule, parse_time};
pub use predicate::OpenHoursPredicate;
pub use weekday::{day_name, parse_day_abbrev, parse_day_name};
