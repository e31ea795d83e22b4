//! Database Module
//!
//! Handles the SQLite connection pool, migrations, and seeding

pub mod repository;

use crate::utils::{AppError, AppResult};
use repository::{menu_item, open_hours, restaurant};
use shared::models::{MenuItem, MenuItemCreate, Restaurant};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Sqlite, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

/// Database service, owns the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the pool (WAL, foreign keys) and apply embedded migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(database_url, "Database connection established");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// One pooled connection for one logical operation; returned to the pool on drop
    pub async fn acquire(&self) -> AppResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .map_err(|e| AppError::database(format!("Failed to acquire connection: {e}")))
    }

    pub async fn restaurant_count(&self) -> AppResult<i64> {
        let mut conn = self.acquire().await?;
        Ok(restaurant::count(&mut conn).await?)
    }

    /// Write restaurants and their minute-encoded open hours in one transaction
    ///
    /// Restaurant ids are kept, so records match the in-memory snapshot.
    pub async fn import_restaurants(&self, restaurants: &[Restaurant]) -> AppResult<usize> {
        let mut tx = self.pool.begin().await?;

        for r in restaurants {
            restaurant::create(&mut tx, &r.record()).await?;
            for row in r.schedule.to_rows(r.id) {
                open_hours::create(&mut tx, &row).await?;
            }
        }

        tx.commit().await?;
        tracing::info!(count = restaurants.len(), "Imported restaurants");
        Ok(restaurants.len())
    }

    /// Insert menu items in one transaction
    pub async fn import_menu_items(&self, items: &[MenuItemCreate]) -> AppResult<usize> {
        let mut tx = self.pool.begin().await?;
        for item in items {
            menu_item::create(&mut tx, item.clone()).await?;
        }
        tx.commit().await?;
        tracing::info!(count = items.len(), "Imported menu items");
        Ok(items.len())
    }

    pub async fn insert_menu_item(&self, data: MenuItemCreate) -> AppResult<MenuItem> {
        let mut conn = self.acquire().await?;
        Ok(menu_item::create(&mut conn, data).await?)
    }
}
