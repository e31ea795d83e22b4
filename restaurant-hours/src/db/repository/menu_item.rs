//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate};
use sqlx::SqliteConnection;

#[cfg(test)]
pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(
        "SELECT id, restaurant_id, name, price_cents FROM menu_items WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(item)
}

#[cfg(test)]
pub async fn find_by_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(
        "SELECT id, restaurant_id, name, price_cents FROM menu_items WHERE restaurant_id = ? ORDER BY id",
    )
    .bind(restaurant_id)
    .fetch_all(conn)
    .await?;
    Ok(items)
}

pub async fn create(conn: &mut SqliteConnection, data: MenuItemCreate) -> RepoResult<MenuItem> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("Menu item name cannot be empty".into()));
    }
    if data.price_cents < 0 {
        return Err(RepoError::Validation(format!(
            "Price cannot be negative: {}",
            data.price_cents
        )));
    }

    let item = sqlx::query_as::<_, MenuItem>(
        "INSERT INTO menu_items (restaurant_id, name, price_cents) VALUES (?, ?, ?) RETURNING id, restaurant_id, name, price_cents",
    )
    .bind(data.restaurant_id)
    .bind(data.name)
    .bind(data.price_cents)
    .fetch_one(conn)
    .await?;
    Ok(item)
}
