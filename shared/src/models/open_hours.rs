//! Open Hours Model

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes in a day; minute-of-day values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minute of day (0-1439), seconds are truncated.
pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// One contiguous open window within a reference day (营业时段)
///
/// `end <= start` means the window runs past midnight into the next
/// calendar day. A zero-length window cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OpenHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl OpenHours {
    /// Both ends are truncated to the minute; `None` when they then coincide.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        let (start, end) = (truncate_to_minute(start), truncate_to_minute(end));
        (start != end).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// End is at or before start on the clock, so the window ends tomorrow.
    pub fn spans_midnight(&self) -> bool {
        self.end_minute() <= self.start_minute()
    }

    pub fn start_minute(&self) -> i64 {
        minute_of_day(self.start)
    }

    pub fn end_minute(&self) -> i64 {
        minute_of_day(self.end)
    }
}

/// `open_hours` table row: one row per (restaurant, day)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OpenHoursRow {
    pub restaurant_id: i64,
    /// Upper-case English day name, e.g. `SATURDAY`
    pub day_of_week: String,
    pub start_minute_of_day: i64,
    pub end_minute_of_day: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(OpenHours::new(t(9, 0), t(9, 0)).is_none());
        assert!(OpenHours::new(t(0, 0), t(0, 0)).is_none());
    }

    #[test]
    fn test_seconds_truncated_on_construction() {
        let hms = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        // same minute once seconds are dropped
        assert!(OpenHours::new(hms(9, 0, 30), hms(9, 0, 0)).is_none());
        assert!(OpenHours::new(hms(9, 0, 0), hms(9, 0, 59)).is_none());

        let hours = OpenHours::new(hms(20, 0, 45), hms(4, 0, 10)).unwrap();
        assert_eq!((hours.start(), hours.end()), (t(20, 0), t(4, 0)));
        assert!(hours.spans_midnight());

        let hours = OpenHours::new(hms(9, 0, 59), hms(9, 1, 0)).unwrap();
        assert!(!hours.spans_midnight());
        assert_eq!((hours.start_minute(), hours.end_minute()), (540, 541));
    }

    #[test]
    fn test_spans_midnight() {
        assert!(!OpenHours::new(t(11, 0), t(22, 0)).unwrap().spans_midnight());
        assert!(OpenHours::new(t(20, 0), t(4, 0)).unwrap().spans_midnight());
        // closing at midnight belongs to the next day
        assert!(OpenHours::new(t(11, 0), t(0, 0)).unwrap().spans_midnight());
    }

    #[test]
    fn test_minute_encoding() {
        let hours = OpenHours::new(t(11, 30), t(0, 0)).unwrap();
        assert_eq!(hours.start_minute(), 690);
        assert_eq!(hours.end_minute(), 0);
        assert_eq!(minute_of_day(t(23, 59)), MINUTES_PER_DAY - 1);
        assert_eq!(minute_of_day(NaiveTime::from_hms_opt(3, 59, 59).unwrap()), 239);
    }
}
