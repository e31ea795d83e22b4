//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity (菜品)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub price_cents: i64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant_id: i64,
    pub name: String,
    pub price_cents: i64,
}
