use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::{InventoryItem, Warehouse, WarehousePayload};
use crate::validation;

/// Warehouse CRUD orchestration: validate, then persist. Holds its own pool
/// handle so it can be constructed once at composition time and cloned into
/// the router state.
#[derive(Clone)]
pub struct WarehouseService {
    pool: PgPool,
}

impl WarehouseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Warehouse>> {
        db::fetch_all_warehouses(&self.pool).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Warehouse> {
        db::fetch_warehouse_by_id(&self.pool, id).await
    }

    pub async fn create(&self, payload: WarehousePayload) -> AppResult<Warehouse> {
        let fields = validation::validate_warehouse(&payload).map_err(AppError::Validation)?;
        db::insert_warehouse(&self.pool, &fields).await
    }

    /// Full-record replace. Validation runs before the existence check so a
    /// bad payload is always reported the same way regardless of the id.
    pub async fn replace(&self, id: i32, payload: WarehousePayload) -> AppResult<Warehouse> {
        let fields = validation::validate_warehouse(&payload).map_err(AppError::Validation)?;
        db::update_warehouse(&self.pool, id, &fields).await
    }

    /// Dependent inventory items are removed by the storage-level cascade in
    /// the same statement; nothing to do here beyond deleting the row.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        db::delete_warehouse(&self.pool, id).await
    }

    /// All inventory items owned by the warehouse. An unknown warehouse is a
    /// 404; a known warehouse with no items is an empty list.
    pub async fn list_inventory_for(&self, id: i32) -> AppResult<Vec<InventoryItem>> {
        if !db::warehouse_exists(&self.pool, id).await? {
            return Err(AppError::NotFound(format!("Warehouse {} not found", id)));
        }
        db::fetch_inventories_for_warehouse(&self.pool, id).await
    }
}
