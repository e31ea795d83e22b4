//! CSV backend
//!
//! Rows are `name,schedule` without a header line, e.g.
//!
//! ```text
//! "Burger Bar","Mon,Tue,Wed,Thu,Sun|11:00-22:00;Fri,Sat|11:00-0:00"
//! ```
//!
//! A row that cannot become a restaurant is skipped with a warning. Only I/O
//! and CSV framing errors fail the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use async_trait::async_trait;
use chrono::{NaiveTime, Weekday};
use csv::{ReaderBuilder, StringRecord, Trim};
use shared::models::{MenuItemCreate, Restaurant, RestaurantRecord};
use shared::parse_schedule;

use super::OpenHoursBackend;
use crate::utils::{AppError, AppResult};

/// In-memory snapshot loaded once from CSV
#[derive(Debug, Clone, Default)]
pub struct CsvRestaurantService {
    restaurants: Vec<Restaurant>,
}

impl CsvRestaurantService {
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to open CSV file");
            AppError::Io(e)
        })?;
        let service = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            count = service.restaurants.len(),
            "Loaded restaurants from CSV"
        );
        Ok(service)
    }

    /// Ids are assigned 1..n in load order over accepted rows
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut restaurants = Vec::new();
        for result in reader.records() {
            let record = result?;
            let next_id = restaurants.len() as i64 + 1;
            if let Some(restaurant) = parse_record(&record, next_id) {
                restaurants.push(restaurant);
            }
        }
        Ok(Self { restaurants })
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn open(&self, day: Weekday, time: NaiveTime) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| r.is_open(day, time))
            .collect()
    }
}

/// One CSV row to a restaurant, or `None` when the row is excluded
pub fn parse_record(record: &StringRecord, id: i64) -> Option<Restaurant> {
    let line = record.position().map(|p| p.line());

    let (Some(name), Some(hours)) = (record.get(0), record.get(1)) else {
        tracing::warn!(?line, fields = record.len(), "Skipping row: expected name and schedule");
        return None;
    };
    if name.is_empty() {
        tracing::warn!(?line, "Skipping row: empty restaurant name");
        return None;
    }

    match parse_schedule(hours) {
        Ok(schedule) => Some(Restaurant::new(id, name, schedule)),
        Err(e) => {
            tracing::warn!(?line, restaurant = name, error = %e, "Skipping row: invalid schedule");
            None
        }
    }
}

/// Menu seed file: `restaurant_id,name,price_cents` with a header line
///
/// Unlike the hours file, any bad row fails the whole load.
pub fn load_menu_items(path: impl AsRef<Path>) -> AppResult<Vec<MenuItemCreate>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let items = reader
        .deserialize::<MenuItemCreate>()
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(path = %path.display(), count = items.len(), "Loaded menu items from CSV");
    Ok(items)
}

#[async_trait]
impl OpenHoursBackend for CsvRestaurantService {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn open_restaurants(
        &self,
        day: Weekday,
        time: NaiveTime,
    ) -> AppResult<Vec<RestaurantRecord>> {
        Ok(self.open(day, time).into_iter().map(Restaurant::record).collect())
    }
}
