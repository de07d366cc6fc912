use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, InMemoryRepository, Repository, Result, UpsertCounts};
use crate::modules::stock::models::StockLevel;

/// Record store for stock levels, with a batch write for inventory imports
#[async_trait]
pub trait StockLevelRepository: Repository<StockLevel, String> {
    /// Insert or overwrite every level in order as one unit; a later entry
    /// for the same category wins. On error nothing is written.
    async fn upsert_all(&self, levels: Vec<StockLevel>) -> Result<UpsertCounts>;
}

/// MySQL-backed stock level store, keyed by category
#[derive(Clone)]
pub struct MySqlStockLevelRepository {
    pool: MySqlPool,
}

impl MySqlStockLevelRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<StockLevel, String> for MySqlStockLevelRepository {
    async fn insert(&self, level: StockLevel) -> Result<StockLevel> {
        sqlx::query(
            r#"
            INSERT INTO stock_levels (category, current_stock, min_stock, optimal_stock)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&level.category)
        .bind(level.current_stock)
        .bind(level.min_stock)
        .bind(level.optimal_stock)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_write(e, format!("Stock level '{}' already exists", level.category))
        })?;

        Ok(level)
    }

    async fn replace(&self, category: &String, mut level: StockLevel) -> Result<Option<StockLevel>> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<String> =
            sqlx::query_scalar("SELECT category FROM stock_levels WHERE category = ? FOR UPDATE")
                .bind(category)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        sqlx::query(
            r#"
            UPDATE stock_levels
            SET current_stock = ?, min_stock = ?, optimal_stock = ?
            WHERE category = ?
            "#,
        )
        .bind(level.current_stock)
        .bind(level.min_stock)
        .bind(level.optimal_stock)
        .bind(category)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        level.category = category.clone();
        Ok(Some(level))
    }

    async fn get_all(&self) -> Result<Vec<StockLevel>> {
        let levels = sqlx::query_as::<_, StockLevel>(
            r#"
            SELECT category, current_stock, min_stock, optimal_stock
            FROM stock_levels
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(levels)
    }

    async fn get_by_id(&self, category: &String) -> Result<Option<StockLevel>> {
        let level = sqlx::query_as::<_, StockLevel>(
            r#"
            SELECT category, current_stock, min_stock, optimal_stock
            FROM stock_levels
            WHERE category = ?
            "#,
        )
        .bind(category)
        .fetch_optional(&self.pool)
        .await?;

        Ok(level)
    }

    async fn delete_by_id(&self, category: &String) -> Result<bool> {
        let result = sqlx::query("DELETE FROM stock_levels WHERE category = ?")
            .bind(category)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl StockLevelRepository for MySqlStockLevelRepository {
    async fn upsert_all(&self, levels: Vec<StockLevel>) -> Result<UpsertCounts> {
        // Rolled back on drop if any statement fails
        let mut tx = self.pool.begin().await?;
        let mut counts = UpsertCounts::default();

        for level in &levels {
            let exists: Option<String> = sqlx::query_scalar(
                "SELECT category FROM stock_levels WHERE category = ? FOR UPDATE",
            )
            .bind(&level.category)
            .fetch_optional(&mut *tx)
            .await?;

            if exists.is_some() {
                sqlx::query(
                    r#"
                    UPDATE stock_levels
                    SET current_stock = ?, min_stock = ?, optimal_stock = ?
                    WHERE category = ?
                    "#,
                )
                .bind(level.current_stock)
                .bind(level.min_stock)
                .bind(level.optimal_stock)
                .bind(&level.category)
                .execute(&mut *tx)
                .await?;
                counts.updated += 1;
            } else {
                sqlx::query(
                    r#"
                    INSERT INTO stock_levels (category, current_stock, min_stock, optimal_stock)
                    VALUES (?, ?, ?, ?)
                    "#,
                )
                .bind(&level.category)
                .bind(level.current_stock)
                .bind(level.min_stock)
                .bind(level.optimal_stock)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::from_write(e, format!("Stock level '{}' already exists", level.category))
                })?;
                counts.created += 1;
            }
        }

        tx.commit().await?;
        Ok(counts)
    }
}

#[async_trait]
impl StockLevelRepository for InMemoryRepository<StockLevel> {
    async fn upsert_all(&self, levels: Vec<StockLevel>) -> Result<UpsertCounts> {
        self.put_all(levels).await
    }
}
