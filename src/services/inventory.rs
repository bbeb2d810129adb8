use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::{InventoryItem, InventoryPayload, InventoryWithWarehouse};
use crate::validation;

/// Inventory CRUD orchestration. Every write runs the warehouse existence
/// check before touching the inventories table. The foreign-key constraint
/// remains the authoritative guard if the warehouse disappears between the
/// check and the write; the upfront check only turns the common case into a
/// clear client error.
#[derive(Clone)]
pub struct InventoryService {
    pool: PgPool,
}

impl InventoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<InventoryWithWarehouse>> {
        db::fetch_all_inventories(&self.pool).await
    }

    pub async fn get(&self, id: i32) -> AppResult<InventoryWithWarehouse> {
        db::fetch_inventory_by_id(&self.pool, id).await
    }

    pub async fn create(&self, payload: InventoryPayload) -> AppResult<InventoryItem> {
        let fields = validation::validate_inventory(&payload).map_err(AppError::Validation)?;
        self.ensure_warehouse_exists(fields.warehouse_id).await?;
        db::insert_inventory(&self.pool, &fields).await
    }

    /// Full-record replace: item must exist (404), payload must validate
    /// (400), and the referenced warehouse must exist (400) even when
    /// `warehouse_id` is unchanged.
    pub async fn replace(&self, id: i32, payload: InventoryPayload) -> AppResult<InventoryItem> {
        if !db::inventory_exists(&self.pool, id).await? {
            return Err(AppError::NotFound(format!("Inventory item {} not found", id)));
        }
        let fields = validation::validate_inventory(&payload).map_err(AppError::Validation)?;
        self.ensure_warehouse_exists(fields.warehouse_id).await?;
        db::update_inventory(&self.pool, id, &fields).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        db::delete_inventory(&self.pool, id).await
    }

    /// An absent *referenced* warehouse is a client error on the write, not
    /// a 404 for the inventory route itself.
    async fn ensure_warehouse_exists(&self, warehouse_id: i32) -> AppResult<()> {
        if !db::warehouse_exists(&self.pool, warehouse_id).await? {
            return Err(AppError::BadRequest(format!(
                "Warehouse with ID {} does not exist.",
                warehouse_id
            )));
        }
        Ok(())
    }
}
