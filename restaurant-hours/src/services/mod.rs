//! 服务层 - 三个营业时间查询后端
//!
//! # 服务列表
//!
//! - [`CsvRestaurantService`] - CSV 文件解析后的内存快照
//! - [`SqlRestaurantService`] - 手写 SQL 查询
//! - [`BuilderRestaurantService`] - 通过 [`QueryBuilder`](crate::utils::query_builder::QueryBuilder) 生成的查询
//!
//! All three answer [`OpenHoursBackend`] with the same rows for the same
//! data. The two database backends also implement [`MenuBackend`].

pub mod builder_service;
pub mod csv_service;
pub mod sql_service;

pub use builder_service::BuilderRestaurantService;
pub use csv_service::CsvRestaurantService;
pub use sql_service::SqlRestaurantService;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use shared::models::RestaurantRecord;

use crate::utils::AppResult;

/// "Which restaurants are open at this day and time?"
///
/// Results are de-duplicated and ordered by restaurant id.
#[async_trait]
pub trait OpenHoursBackend: Send + Sync {
    /// Backend name used in logs and CLI output
    fn name(&self) -> &'static str;

    async fn open_restaurants(
        &self,
        day: Weekday,
        time: NaiveTime,
    ) -> AppResult<Vec<RestaurantRecord>>;

    /// Split a wall-clock timestamp into weekday and time of day
    async fn open_restaurants_at(&self, at: NaiveDateTime) -> AppResult<Vec<RestaurantRecord>> {
        self.open_restaurants(at.weekday(), at.time()).await
    }
}

/// "Which restaurants have at least `min_items` menu items?"
///
/// Only database backends carry menu data.
#[async_trait]
pub trait MenuBackend: OpenHoursBackend {
    async fn restaurants_with_menu_at_least(
        &self,
        min_items: i64,
    ) -> AppResult<Vec<RestaurantRecord>>;
}
