//! Day-of-week encodings
//!
//! Schedule strings use three-letter abbreviations (`Mon`), storage uses
//! upper-case English names (`MONDAY`).

use chrono::Weekday;

/// Monday first, matching `Weekday::num_days_from_monday`.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// `Mon`..`Sun` (case-sensitive); anything else is `None`.
pub fn parse_day_abbrev(token: &str) -> Option<Weekday> {
    match token {
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        "Sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Storage name of a day (`day_of_week` column)
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

pub fn parse_day_name(name: &str) -> Option<Weekday> {
    WEEK.into_iter().find(|day| day_name(*day) == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbrev() {
        assert_eq!(parse_day_abbrev("Mon"), Some(Weekday::Mon));
        assert_eq!(parse_day_abbrev("Sun"), Some(Weekday::Sun));
        assert_eq!(parse_day_abbrev("mon"), None);
        assert_eq!(parse_day_abbrev("Monday"), None);
        assert_eq!(parse_day_abbrev(""), None);
    }

    #[test]
    fn test_name_roundtrip_covers_week() {
        for day in WEEK {
            assert_eq!(parse_day_name(day_name(day)), Some(day));
        }
        assert_eq!(parse_day_name("Monday"), None);
    }

    #[test]
    fn test_previous_day_wraps() {
        assert_eq!(Weekday::Mon.pred(), Weekday::Sun);
        assert_eq!(Weekday::Sun.pred(), Weekday::Sat);
    }
}
