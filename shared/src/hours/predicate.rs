//! Open-hours rule restated over `open_hours` rows
//!
//! For query minute `m` on day `d` a row matches when
//!
//! ```text
//! (day_of_week = d       AND start_minute_of_day < m AND end_minute_of_day > m)
//! OR
//! (day_of_week = prev(d) AND start_minute_of_day > end_minute_of_day AND end_minute_of_day > m)
//! ```
//!
//! `start > end` is how a row that runs past midnight is recognised without
//! looking at the schedule. Database backends render this exact disjunction
//! with bound parameters; [`OpenHoursPredicate::matches`] evaluates it in
//! memory so the three renderings can be checked against each other.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use super::weekday::day_name;
use crate::models::{OpenHoursRow, minute_of_day};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenHoursPredicate {
    day: Weekday,
    minute: i64,
}

impl OpenHoursPredicate {
    pub fn new(day: Weekday, time: NaiveTime) -> Self {
        Self {
            day,
            minute: minute_of_day(time),
        }
    }

    pub fn at(datetime: NaiveDateTime) -> Self {
        Self::new(datetime.weekday(), datetime.time())
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn previous_day(&self) -> Weekday {
        self.day.pred()
    }

    /// `day_of_week` value for the same-day branch
    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }

    /// `day_of_week` value for the spill branch
    pub fn previous_day_name(&self) -> &'static str {
        day_name(self.previous_day())
    }

    pub fn minute(&self) -> i64 {
        self.minute
    }

    pub fn matches(&self, row: &OpenHoursRow) -> bool {
        self.matches_same_day(row) || self.matches_spill(row)
    }

    pub fn matches_same_day(&self, row: &OpenHoursRow) -> bool {
        row.day_of_week == self.day_name()
            && row.start_minute_of_day < self.minute
            && row.end_minute_of_day > self.minute
    }

    pub fn matches_spill(&self, row: &OpenHoursRow) -> bool {
        row.day_of_week == self.previous_day_name()
            && row.start_minute_of_day > row.end_minute_of_day
            && row.end_minute_of_day > self.minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hours::weekday::WEEK;
    use crate::hours::{is_open, parse_schedule};
    use crate::models::{MINUTES_PER_DAY, OpenHours, Schedule};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn row(day: &str, start: i64, end: i64) -> OpenHoursRow {
        OpenHoursRow {
            restaurant_id: 1,
            day_of_week: day.to_string(),
            start_minute_of_day: start,
            end_minute_of_day: end,
        }
    }

    fn open_by_rows(schedule: &Schedule, day: Weekday, time: NaiveTime) -> bool {
        let predicate = OpenHoursPredicate::new(day, time);
        schedule.to_rows(1).iter().any(|r| predicate.matches(r))
    }

    #[test]
    fn test_branch_days() {
        let predicate = OpenHoursPredicate::new(Weekday::Mon, t(1, 0));
        assert_eq!(predicate.day_name(), "MONDAY");
        assert_eq!(predicate.previous_day_name(), "SUNDAY");
        assert_eq!(predicate.minute(), 60);
    }

    #[test]
    fn test_same_day_branch() {
        let predicate = OpenHoursPredicate::new(Weekday::Wed, t(21, 59));
        assert!(predicate.matches(&row("WEDNESDAY", 660, 1320)));
        assert!(!predicate.matches(&row("TUESDAY", 660, 1320)));

        let predicate = OpenHoursPredicate::new(Weekday::Wed, t(22, 0));
        assert!(!predicate.matches(&row("WEDNESDAY", 660, 1320)));
    }

    #[test]
    fn test_spill_branch_requires_spanning_row() {
        let predicate = OpenHoursPredicate::new(Weekday::Sun, t(3, 0));
        assert!(predicate.matches_spill(&row("SATURDAY", 1200, 240)));
        // previous day row that does not span midnight never spills
        assert!(!predicate.matches_spill(&row("SATURDAY", 60, 240)));
        assert!(!predicate.matches_spill(&row("SUNDAY", 1200, 240)));
    }

    #[test]
    fn test_closing_at_midnight_row() {
        // Sat 11:00-0:00: end_minute 0 is never greater than the query minute
        let sat = row("SATURDAY", 660, 0);
        assert!(!OpenHoursPredicate::new(Weekday::Sat, t(23, 59)).matches(&sat));
        assert!(!OpenHoursPredicate::new(Weekday::Sun, t(0, 1)).matches(&sat));

        // Sat 11:00-0:30
        let sat = row("SATURDAY", 660, 30);
        assert!(OpenHoursPredicate::new(Weekday::Sun, t(0, 1)).matches(&sat));
        assert!(!OpenHoursPredicate::new(Weekday::Sun, t(5, 0)).matches(&sat));
    }

    #[test]
    fn test_at_datetime() {
        // 2024-06-02 is a Sunday
        let at = chrono::NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(0, 1, 0)
            .unwrap();
        let predicate = OpenHoursPredicate::at(at);
        assert_eq!(predicate.day(), Weekday::Sun);
        assert_eq!(predicate.previous_day(), Weekday::Sat);
        assert_eq!(predicate.minute(), 1);
    }

    #[test]
    fn test_agrees_with_matcher_for_second_precision_windows() {
        let hms = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        let windows = [
            (hms(9, 0, 30), hms(9, 0, 0)),
            (hms(20, 0, 45), hms(4, 0, 10)),
            (hms(23, 59, 59), hms(0, 0, 1)),
            (hms(11, 0, 0), hms(11, 0, 30)),
        ];
        for (start, end) in windows {
            let schedule: Schedule = OpenHours::new(start, end)
                .map(|hours| (Weekday::Mon, hours))
                .into_iter()
                .collect();
            for row in schedule.to_rows(1) {
                assert_ne!(row.start_minute_of_day, row.end_minute_of_day, "{start}-{end}");
            }
            for day in [Weekday::Mon, Weekday::Tue] {
                for minute in 0..MINUTES_PER_DAY {
                    let time = t((minute / 60) as u32, (minute % 60) as u32);
                    assert_eq!(
                        is_open(&schedule, day, time),
                        open_by_rows(&schedule, day, time),
                        "{start}-{end} at {day} {time}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_agrees_with_matcher_every_minute_of_week() {
        let schedules = [
            "Mon,Tue,Wed,Thu,Sun|11:00-22:00; Fri,Sat|11:00-0:00",
            "Sat|20:00-04:00;Sun|10:00-14:00",
            "Sun|18:00-02:00;Mon|01:00-03:00",
            "Mon,Wed,Fri|0:00-23:59;Tue|23:59-0:00",
            "Thu|12:00-12:00;Fri|05:00-04:59",
        ];
        for text in schedules {
            let schedule = parse_schedule(text).unwrap();
            for day in WEEK {
                for minute in 0..MINUTES_PER_DAY {
                    let time = t((minute / 60) as u32, (minute % 60) as u32);
                    assert_eq!(
                        is_open(&schedule, day, time),
                        open_by_rows(&schedule, day, time),
                        "{text} at {day} {time}"
                    );
                }
            }
        }
    }
}
