//! Open-hours matcher over an in-memory schedule

use chrono::{NaiveTime, Weekday};

use crate::models::{Schedule, minute_of_day};

/// Is the schedule open on `day` at `time`?
///
/// A window is open strictly between its start and end. A window that runs
/// past midnight is looked up again on the following day: from midnight until
/// its end it counts for that following day, not for the day it is stored
/// under. Seconds are ignored.
pub fn is_open(schedule: &Schedule, day: Weekday, time: NaiveTime) -> bool {
    let minute = minute_of_day(time);
    spills_into(schedule, day, minute) || open_same_day(schedule, day, minute)
}

/// Previous day's window runs past midnight and has not closed yet.
fn spills_into(schedule: &Schedule, day: Weekday, minute: i64) -> bool {
    schedule
        .get(day.pred())
        .is_some_and(|prev| prev.spans_midnight() && minute < prev.end_minute())
}

fn open_same_day(schedule: &Schedule, day: Weekday, minute: i64) -> bool {
    schedule
        .get(day)
        .is_some_and(|hours| hours.start_minute() < minute && minute < hours.end_minute())
}
