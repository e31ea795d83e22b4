//! Restaurant Model

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::Schedule;
use crate::hours::is_open;

/// Restaurant with its weekly schedule (in-memory snapshot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub schedule: Schedule,
}

impl Restaurant {
    pub fn new(id: i64, name: impl Into<String>, schedule: Schedule) -> Self {
        Self {
            id,
            name: name.into(),
            schedule,
        }
    }

    pub fn is_open(&self, day: Weekday, time: NaiveTime) -> bool {
        is_open(&self.schedule, day, time)
    }

    pub fn record(&self) -> RestaurantRecord {
        RestaurantRecord {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// `restaurants` table row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantRecord {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json() {
        let restaurant = Restaurant::new(1, "Burger Bar", "Wed|11:00-22:00".parse().unwrap());
        let json = serde_json::to_value(restaurant.record()).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Burger Bar" }));
    }

    #[test]
    fn test_is_open_delegates_to_schedule() {
        let restaurant = Restaurant::new(1, "Burger Bar", "Wed|11:00-22:00".parse().unwrap());
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert!(restaurant.is_open(Weekday::Wed, at(21, 59)));
        assert!(!restaurant.is_open(Weekday::Wed, at(22, 0)));
        assert!(!restaurant.is_open(Weekday::Thu, at(12, 0)));
    }
}
