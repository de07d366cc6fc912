use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, InMemoryRepository, Repository, Result};
use crate::modules::warehouses::models::Warehouse;

/// Record store for warehouses, with lookup by the unique code
#[async_trait]
pub trait WarehouseRepository: Repository<Warehouse, i64> {
    async fn find_by_code(&self, code: &str) -> Result<Option<Warehouse>>;
}

/// MySQL-backed warehouse store
#[derive(Clone)]
pub struct MySqlWarehouseRepository {
    pool: MySqlPool,
}

impl MySqlWarehouseRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Warehouse, i64> for MySqlWarehouseRepository {
    async fn insert(&self, mut warehouse: Warehouse) -> Result<Warehouse> {
        // A NULL id lets AUTO_INCREMENT pick the next value
        let result = sqlx::query(
            r#"
            INSERT INTO warehouses (
                id, code, name, zone_max_size, row_max_size, shelf_max_size, location
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(warehouse.id)
        .bind(&warehouse.code)
        .bind(&warehouse.name)
        .bind(warehouse.zone_max_size)
        .bind(warehouse.row_max_size)
        .bind(warehouse.shelf_max_size)
        .bind(&warehouse.location)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_write(e, format!("Warehouse '{}' already exists", warehouse.code))
        })?;

        if warehouse.id.is_none() {
            warehouse.id = Some(result.last_insert_id() as i64);
        }
        Ok(warehouse)
    }

    async fn replace(&self, id: &i64, mut warehouse: Warehouse) -> Result<Option<Warehouse>> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM warehouses WHERE id = ? FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        sqlx::query(
            r#"
            UPDATE warehouses
            SET code = ?, name = ?, zone_max_size = ?, row_max_size = ?,
                shelf_max_size = ?, location = ?
            WHERE id = ?
            "#,
        )
        .bind(&warehouse.code)
        .bind(&warehouse.name)
        .bind(warehouse.zone_max_size)
        .bind(warehouse.row_max_size)
        .bind(warehouse.shelf_max_size)
        .bind(&warehouse.location)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::from_write(e, format!("Warehouse '{}' already exists", warehouse.code))
        })?;

        tx.commit().await?;

        warehouse.id = Some(*id);
        Ok(Some(warehouse))
    }

    async fn get_all(&self) -> Result<Vec<Warehouse>> {
        let warehouses = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT id, code, name, zone_max_size, row_max_size, shelf_max_size, location
            FROM warehouses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(warehouses)
    }

    async fn get_by_id(&self, id: &i64) -> Result<Option<Warehouse>> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT id, code, name, zone_max_size, row_max_size, shelf_max_size, location
            FROM warehouses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(warehouse)
    }

    async fn delete_by_id(&self, id: &i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl WarehouseRepository for MySqlWarehouseRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Warehouse>> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT id, code, name, zone_max_size, row_max_size, shelf_max_size, location
            FROM warehouses
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(warehouse)
    }
}

#[async_trait]
impl WarehouseRepository for InMemoryRepository<Warehouse> {
    async fn find_by_code(&self, code: &str) -> Result<Option<Warehouse>> {
        Ok(self.find_by_natural_key(code).await)
    }
}
