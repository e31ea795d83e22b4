//! Restaurant Repository

use super::{RepoError, RepoResult};
use shared::models::RestaurantRecord;
use shared::OpenHoursPredicate;
use sqlx::SqliteConnection;

/// Same-day branch OR previous-day spill branch, see [`OpenHoursPredicate`].
const OPEN_RESTAURANTS_SQL: &str = "SELECT DISTINCT r.id, r.name FROM restaurants r \
     INNER JOIN open_hours o ON o.restaurant_id = r.id \
     WHERE (o.day_of_week = ? AND o.start_minute_of_day < ? AND o.end_minute_of_day > ?) \
     OR (o.day_of_week = ? AND o.start_minute_of_day > o.end_minute_of_day AND o.end_minute_of_day > ?) \
     ORDER BY r.id";

/// LEFT JOIN so that restaurants without menu items count as zero.
const MENU_AT_LEAST_SQL: &str = "SELECT r.id, r.name FROM restaurants r \
     LEFT JOIN menu_items m ON m.restaurant_id = r.id \
     GROUP BY r.id, r.name \
     HAVING COUNT(m.id) >= ? \
     ORDER BY r.id";

pub async fn find_open(
    conn: &mut SqliteConnection,
    predicate: &OpenHoursPredicate,
) -> RepoResult<Vec<RestaurantRecord>> {
    let rows = sqlx::query_as::<_, RestaurantRecord>(OPEN_RESTAURANTS_SQL)
        .bind(predicate.day_name())
        .bind(predicate.minute())
        .bind(predicate.minute())
        .bind(predicate.previous_day_name())
        .bind(predicate.minute())
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn find_with_menu_at_least(
    conn: &mut SqliteConnection,
    min_items: i64,
) -> RepoResult<Vec<RestaurantRecord>> {
    let rows = sqlx::query_as::<_, RestaurantRecord>(MENU_AT_LEAST_SQL)
        .bind(min_items)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn find_by_ids(
    conn: &mut SqliteConnection,
    ids: &[i64],
) -> RepoResult<Vec<RestaurantRecord>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT id, name FROM restaurants WHERE id IN ({placeholders}) ORDER BY id");

    let mut query = sqlx::query_as::<_, RestaurantRecord>(&sql);
    for id in ids {
        query = query.bind(*id);
    }
    Ok(query.fetch_all(conn).await?)
}

pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<RestaurantRecord>> {
    let rows = sqlx::query_as::<_, RestaurantRecord>("SELECT id, name FROM restaurants ORDER BY id")
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn count(conn: &mut SqliteConnection) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurants")
        .fetch_one(conn)
        .await?;
    Ok(count)
}

pub async fn create(conn: &mut SqliteConnection, data: &RestaurantRecord) -> RepoResult<()> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("Restaurant name cannot be empty".into()));
    }
    sqlx::query("INSERT INTO restaurants (id, name) VALUES (?, ?)")
        .bind(data.id)
        .bind(&data.name)
        .execute(conn)
        .await?;
    Ok(())
}
