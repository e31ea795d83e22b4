//! Query-builder backend
//!
//! Same rows as [`SqlRestaurantService`](super::SqlRestaurantService), but the
//! SQL is assembled from typed tables and columns instead of string constants.

use async_trait::async_trait;
use chrono::{NaiveTime, Weekday};
use shared::OpenHoursPredicate;
use shared::models::RestaurantRecord;

use super::{MenuBackend, OpenHoursBackend};
use crate::db::DbService;
use crate::utils::AppResult;
use crate::utils::query_builder::{BuiltQuery, Column, Condition, Expr, QueryBuilder, Table};

/// Same-day window contains the minute, OR the previous day's spanning
/// window has not closed yet
pub fn open_condition(predicate: &OpenHoursPredicate) -> Condition {
    let minute = predicate.minute();

    let same_day = Column::DayOfWeek
        .equals(predicate.day_name())
        .and(Column::StartMinuteOfDay.less_than(minute))
        .and(Column::EndMinuteOfDay.greater_than(minute));

    let spill = Column::DayOfWeek
        .equals(predicate.previous_day_name())
        .and(Column::StartMinuteOfDay.greater_than(Column::EndMinuteOfDay))
        .and(Column::EndMinuteOfDay.greater_than(minute));

    same_day.or(spill)
}

pub fn open_query(predicate: &OpenHoursPredicate) -> BuiltQuery {
    QueryBuilder::table(Table::Restaurants)
        .select(&[Column::RestaurantId, Column::RestaurantName])
        .distinct()
        .inner_join(
            Table::OpenHours,
            Column::OpenHoursRestaurantId.equals(Column::RestaurantId),
        )
        .filter(open_condition(predicate))
        .order_by(&[Column::RestaurantId])
        .build()
}

pub fn menu_query(min_items: i64) -> BuiltQuery {
    QueryBuilder::table(Table::Restaurants)
        .select(&[Column::RestaurantId, Column::RestaurantName])
        .left_join(
            Table::MenuItems,
            Column::MenuItemRestaurantId.equals(Column::RestaurantId),
        )
        .group_by(&[Column::RestaurantId, Column::RestaurantName])
        .having(Expr::count(Column::MenuItemId).at_least(min_items))
        .order_by(&[Column::RestaurantId])
        .build()
}

#[derive(Clone)]
pub struct BuilderRestaurantService {
    db: DbService,
}

impl BuilderRestaurantService {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: &BuiltQuery) -> AppResult<Vec<RestaurantRecord>> {
        tracing::debug!(sql = query.sql(), bindings = query.bindings().len(), "Running built query");
        let mut conn = self.db.acquire().await?;
        let rows = query
            .apply_bindings(sqlx::query_as::<_, RestaurantRecord>(query.sql()))
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl OpenHoursBackend for BuilderRestaurantService {
    fn name(&self) -> &'static str {
        "builder"
    }

    async fn open_restaurants(
        &self,
        day: Weekday,
        time: NaiveTime,
    ) -> AppResult<Vec<RestaurantRecord>> {
        self.fetch(&open_query(&OpenHoursPredicate::new(day, time)))
            .await
    }
}

#[async_trait]
impl MenuBackend for BuilderRestaurantService {
    async fn restaurants_with_menu_at_least(
        &self,
        min_items: i64,
    ) -> AppResult<Vec<RestaurantRecord>> {
        self.fetch(&menu_query(min_items)).await
    }
}
