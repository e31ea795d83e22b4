//! Raw SQL backend

use async_trait::async_trait;
use chrono::{NaiveTime, Weekday};
use shared::OpenHoursPredicate;
use shared::models::RestaurantRecord;

use super::{MenuBackend, OpenHoursBackend};
use crate::db::DbService;
use crate::db::repository::restaurant;
use crate::utils::AppResult;

#[derive(Clone)]
pub struct SqlRestaurantService {
    db: DbService,
}

impl SqlRestaurantService {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    pub async fn all_restaurants(&self) -> AppResult<Vec<RestaurantRecord>> {
        let mut conn = self.db.acquire().await?;
        Ok(restaurant::find_all(&mut conn).await?)
    }

    /// Unknown ids are ignored; an empty slice never touches the pool
    pub async fn restaurants_by_ids(&self, ids: &[i64]) -> AppResult<Vec<RestaurantRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.db.acquire().await?;
        Ok(restaurant::find_by_ids(&mut conn, ids).await?)
    }
}

#[async_trait]
impl OpenHoursBackend for SqlRestaurantService {
    fn name(&self) -> &'static str {
        "sql"
    }

    async fn open_restaurants(
        &self,
        day: Weekday,
        time: NaiveTime,
    ) -> AppResult<Vec<RestaurantRecord>> {
        let predicate = OpenHoursPredicate::new(day, time);
        tracing::debug!(?predicate, "Querying open restaurants");

        let mut conn = self.db.acquire().await?;
        Ok(restaurant::find_open(&mut conn, &predicate).await?)
    }
}

#[async_trait]
impl MenuBackend for SqlRestaurantService {
    async fn restaurants_with_menu_at_least(
        &self,
        min_items: i64,
    ) -> AppResult<Vec<RestaurantRecord>> {
        let mut conn = self.db.acquire().await?;
        Ok(restaurant::find_with_menu_at_least(&mut conn, min_items).await?)
    }
}
