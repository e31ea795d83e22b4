//! Schedule string parser
//!
//! Format: `Mon,Tue,Wed|11:00-22:00;Fri,Sat|11:00-0:00`
//!
//! - `;` separates groups, `|` separates days from the window, `-` separates
//!   start from end
//! - unknown day tokens are skipped
//! - a group whose start equals its end is dropped, the rest are kept
//! - any syntax error fails the whole string; no partial schedule is returned

use std::str::FromStr;

use chrono::{NaiveTime, Weekday};

use super::weekday::parse_day_abbrev;
use crate::models::{OpenHours, Schedule};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleParseError {
    #[error("Schedule string is empty")]
    Empty,

    #[error("Malformed group '{0}': expected 'days|HH:MM-HH:MM'")]
    MalformedGroup(String),

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Schedule has no open days")]
    NoOpenDays,
}

/// Parse a full schedule string.
pub fn parse_schedule(input: &str) -> Result<Schedule, ScheduleParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScheduleParseError::Empty);
    }

    let mut schedule = Schedule::default();
    for group in input.split(';').map(str::trim).filter(|g| !g.is_empty()) {
        let Some((days, hours)) = parse_group(group)? else {
            tracing::debug!(group, "Dropping zero-length group");
            continue;
        };
        for day in days {
            schedule.insert(day, hours);
        }
    }

    if schedule.is_empty() {
        return Err(ScheduleParseError::NoOpenDays);
    }
    Ok(schedule)
}

/// `Ok(None)` for a well-formed group with a zero-length window.
fn parse_group(group: &str) -> Result<Option<(Vec<Weekday>, OpenHours)>, ScheduleParseError> {
    let malformed = || ScheduleParseError::MalformedGroup(group.to_string());

    let (days, window) = group.split_once('|').ok_or_else(malformed)?;
    let (start, end) = window.split_once('-').ok_or_else(malformed)?;
    let start = parse_time(start)?;
    let end = parse_time(end)?;

    let Some(hours) = OpenHours::new(start, end) else {
        return Ok(None);
    };

    let days = days
        .split(',')
        .map(str::trim)
        .filter_map(|token| {
            let day = parse_day_abbrev(token);
            if day.is_none() {
                tracing::debug!(token, "Skipping unknown day token");
            }
            day
        })
        .collect();
    Ok(Some((days, hours)))
}

/// 24-hour `H:MM` or `HH:MM`; `0:00` and `00:00` are both midnight.
pub fn parse_time(token: &str) -> Result<NaiveTime, ScheduleParseError> {
    let token = token.trim();
    let invalid = || ScheduleParseError::InvalidTime(token.to_string());

    // %M also takes a single digit, so pin the minutes to two
    if token.len() < 4 || token.as_bytes()[token.len() - 3] != b':' {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(token, "%H:%M").map_err(|_| invalid())
}

impl FromStr for Schedule {
    type Err = ScheduleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_schedule(s)
    }
}
