//! Weekly Schedule Model

use chrono::Weekday;
use serde::Serialize;

use super::{OpenHours, OpenHoursRow};
use crate::hours::weekday::{WEEK, day_name};

/// Day-of-week → open window (每周营业时间表)
///
/// At most one window per day; a missing day is closed all day.
/// Built once by the parser (or `FromIterator`) and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    days: [Option<OpenHours>; 7],
}

impl Schedule {
    pub fn get(&self, day: Weekday) -> Option<&OpenHours> {
        self.days[day.num_days_from_monday() as usize].as_ref()
    }

    /// Later inserts for the same day replace earlier ones.
    pub(crate) fn insert(&mut self, day: Weekday, hours: OpenHours) {
        self.days[day.num_days_from_monday() as usize] = Some(hours);
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }

    /// Number of days with an open window
    pub fn len(&self) -> usize {
        self.days.iter().filter(|d| d.is_some()).count()
    }

    /// Scheduled days, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &OpenHours)> + '_ {
        WEEK.iter()
            .zip(self.days.iter())
            .filter_map(|(day, hours)| hours.as_ref().map(|h| (*day, h)))
    }

    /// Minute-encoded storage rows, one per scheduled day
    pub fn to_rows(&self, restaurant_id: i64) -> Vec<OpenHoursRow> {
        self.iter()
            .map(|(day, hours)| OpenHoursRow {
                restaurant_id,
                day_of_week: day_name(day).to_string(),
                start_minute_of_day: hours.start_minute(),
                end_minute_of_day: hours.end_minute(),
            })
            .collect()
    }
}

impl FromIterator<(Weekday, OpenHours)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (Weekday, OpenHours)>>(iter: I) -> Self {
        let mut schedule = Schedule::default();
        for (day, hours) in iter {
            schedule.insert(day, hours);
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hours(sh: u32, eh: u32) -> OpenHours {
        OpenHours::new(
            NaiveTime::from_hms_opt(sh, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.len(), 0);
        assert!(schedule.get(Weekday::Mon).is_none());
    }

    #[test]
    fn test_iter_is_monday_first() {
        let schedule: Schedule = [(Weekday::Sun, hours(10, 14)), (Weekday::Mon, hours(9, 17))]
            .into_iter()
            .collect();
        let days: Vec<Weekday> = schedule.iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Sun]);
    }

    #[test]
    fn test_later_entry_wins() {
        let schedule: Schedule = [(Weekday::Fri, hours(9, 17)), (Weekday::Fri, hours(11, 23))]
            .into_iter()
            .collect();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.get(Weekday::Fri), Some(&hours(11, 23)));
    }

    #[test]
    fn test_to_rows() {
        let schedule: Schedule = [(Weekday::Sat, hours(20, 4))].into_iter().collect();
        let rows = schedule.to_rows(7);
        assert_eq!(
            rows,
            vec![OpenHoursRow {
                restaurant_id: 7,
                day_of_week: "SATURDAY".to_string(),
                start_minute_of_day: 1200,
                end_minute_of_day: 240,
            }]
        );
    }
}
