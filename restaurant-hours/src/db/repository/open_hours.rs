//! Open Hours Repository

use super::{RepoError, RepoResult};
use shared::hours::parse_day_name;
use shared::models::{MINUTES_PER_DAY, OpenHoursRow};
use sqlx::SqliteConnection;

fn validate_row(row: &OpenHoursRow) -> RepoResult<()> {
    if parse_day_name(&row.day_of_week).is_none() {
        return Err(RepoError::Validation(format!(
            "Unknown day_of_week: {}",
            row.day_of_week
        )));
    }
    for minute in [row.start_minute_of_day, row.end_minute_of_day] {
        if !(0..MINUTES_PER_DAY).contains(&minute) {
            return Err(RepoError::Validation(format!(
                "Minute of day out of range: {minute}"
            )));
        }
    }
    if row.start_minute_of_day == row.end_minute_of_day {
        return Err(RepoError::Validation(
            "Open hours start and end cannot be equal".into(),
        ));
    }
    Ok(())
}

pub async fn create(conn: &mut SqliteConnection, row: &OpenHoursRow) -> RepoResult<()> {
    validate_row(row)?;
    sqlx::query(
        "INSERT INTO open_hours (restaurant_id, day_of_week, start_minute_of_day, end_minute_of_day) VALUES (?, ?, ?, ?)",
    )
    .bind(row.restaurant_id)
    .bind(&row.day_of_week)
    .bind(row.start_minute_of_day)
    .bind(row.end_minute_of_day)
    .execute(conn)
    .await?;
    Ok(())
}

#[cfg(test)]
pub async fn find_by_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> RepoResult<Vec<OpenHoursRow>> {
    let rows = sqlx::query_as::<_, OpenHoursRow>(
        "SELECT restaurant_id, day_of_week, start_minute_of_day, end_minute_of_day FROM open_hours WHERE restaurant_id = ? ORDER BY id",
    )
    .bind(restaurant_id)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::restaurant;
    use shared::models::RestaurantRecord;

    fn row(day: &str, start: i64, end: i64) -> OpenHoursRow {
        OpenHoursRow {
            restaurant_id: 1,
            day_of_week: day.to_string(),
            start_minute_of_day: start,
            end_minute_of_day: end,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let db = DbService::connect("sqlite::memory:", 1).await.unwrap();
        let mut conn = db.acquire().await.unwrap();
        restaurant::create(&mut conn, &RestaurantRecord { id: 1, name: "Night Owl".into() })
            .await
            .unwrap();

        create(&mut conn, &row("SATURDAY", 1200, 240)).await.unwrap();
        create(&mut conn, &row("SUNDAY", 600, 840)).await.unwrap();

        let rows = find_by_restaurant(&mut conn, 1).await.unwrap();
        assert_eq!(rows, vec![row("SATURDAY", 1200, 240), row("SUNDAY", 600, 840)]);
        assert!(find_by_restaurant(&mut conn, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_one_row_per_day() {
        let db = DbService::connect("sqlite::memory:", 1).await.unwrap();
        let mut conn = db.acquire().await.unwrap();
        restaurant::create(&mut conn, &RestaurantRecord { id: 1, name: "Night Owl".into() })
            .await
            .unwrap();

        create(&mut conn, &row("SATURDAY", 1200, 240)).await.unwrap();
        let err = create(&mut conn, &row("SATURDAY", 600, 840)).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));
    }

    #[test]
    fn test_validate_row() {
        assert!(validate_row(&row("MONDAY", 0, 1439)).is_ok());
        assert!(matches!(validate_row(&row("Mon", 0, 60)), Err(RepoError::Validation(_))));
        assert!(matches!(validate_row(&row("MONDAY", 0, 1440)), Err(RepoError::Validation(_))));
        assert!(matches!(validate_row(&row("MONDAY", -1, 60)), Err(RepoError::Validation(_))));
        assert!(matches!(validate_row(&row("MONDAY", 60, 60)), Err(RepoError::Validation(_))));
    }
}
