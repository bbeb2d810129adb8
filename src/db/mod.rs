use chrono::Utc;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::*;

// ── Warehouses ────────────────────────────────────────────────────────────────

pub async fn fetch_all_warehouses(pool: &PgPool) -> AppResult<Vec<Warehouse>> {
    let warehouses = sqlx::query_as::<_, Warehouse>(
        "SELECT id, warehouse_name, address, city, country, contact_name,
                contact_position, contact_phone, contact_email, created_at, updated_at
         FROM warehouses
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(warehouses)
}

pub async fn fetch_warehouse_by_id(pool: &PgPool, id: i32) -> AppResult<Warehouse> {
    sqlx::query_as::<_, Warehouse>(
        "SELECT id, warehouse_name, address, city, country, contact_name,
                contact_position, contact_phone, contact_email, created_at, updated_at
         FROM warehouses WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Warehouse {} not found", id)))
}

/// Existence probe used by the referential-integrity check. Kept separate
/// from `fetch_warehouse_by_id` so callers that only need yes/no don't pull
/// the whole row.
pub async fn warehouse_exists(pool: &PgPool, id: i32) -> AppResult<bool> {
    let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM warehouses WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn insert_warehouse(pool: &PgPool, fields: &NewWarehouse) -> AppResult<Warehouse> {
    let warehouse = sqlx::query_as::<_, Warehouse>(
        r#"
        INSERT INTO warehouses (warehouse_name, address, city, country,
                                contact_name, contact_position, contact_phone, contact_email)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, warehouse_name, address, city, country, contact_name,
                  contact_position, contact_phone, contact_email, created_at, updated_at
        "#,
    )
    .bind(&fields.warehouse_name)
    .bind(&fields.address)
    .bind(&fields.city)
    .bind(&fields.country)
    .bind(&fields.contact_name)
    .bind(&fields.contact_position)
    .bind(&fields.contact_phone)
    .bind(&fields.contact_email)
    .fetch_one(pool)
    .await?;

    Ok(warehouse)
}

/// Full-record update; every column is replaced and `updated_at` bumped.
pub async fn update_warehouse(pool: &PgPool, id: i32, fields: &NewWarehouse) -> AppResult<Warehouse> {
    sqlx::query_as::<_, Warehouse>(
        r#"
        UPDATE warehouses
        SET warehouse_name   = $1,
            address          = $2,
            city             = $3,
            country          = $4,
            contact_name     = $5,
            contact_position = $6,
            contact_phone    = $7,
            contact_email    = $8,
            updated_at       = $9
        WHERE id = $10
        RETURNING id, warehouse_name, address, city, country, contact_name,
                  contact_position, contact_phone, contact_email, created_at, updated_at
        "#,
    )
    .bind(&fields.warehouse_name)
    .bind(&fields.address)
    .bind(&fields.city)
    .bind(&fields.country)
    .bind(&fields.contact_name)
    .bind(&fields.contact_position)
    .bind(&fields.contact_phone)
    .bind(&fields.contact_email)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Warehouse {} not found", id)))
}

/// Deletes the warehouse row only; the `ON DELETE CASCADE` constraint on
/// `inventories.warehouse_id` removes dependent items in the same statement.
pub async fn delete_warehouse(pool: &PgPool, id: i32) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Warehouse {} not found", id)));
    }
    Ok(())
}

pub async fn fetch_inventories_for_warehouse(
    pool: &PgPool,
    warehouse_id: i32,
) -> AppResult<Vec<InventoryItem>> {
    let items = sqlx::query_as::<_, InventoryItem>(
        "SELECT id, warehouse_id, item_name, description, category, status,
                quantity, created_at, updated_at
         FROM inventories
         WHERE warehouse_id = $1
         ORDER BY id",
    )
    .bind(warehouse_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

// ── Inventories ───────────────────────────────────────────────────────────────

pub async fn fetch_all_inventories(pool: &PgPool) -> AppResult<Vec<InventoryWithWarehouse>> {
    let items = sqlx::query_as::<_, InventoryWithWarehouse>(
        r#"
        SELECT i.id, i.warehouse_id, w.warehouse_name, i.item_name, i.description,
               i.category, i.status, i.quantity, i.created_at, i.updated_at
        FROM inventories i
        JOIN warehouses w ON w.id = i.warehouse_id
        ORDER BY i.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(items)
}

pub async fn fetch_inventory_by_id(pool: &PgPool, id: i32) -> AppResult<InventoryWithWarehouse> {
    sqlx::query_as::<_, InventoryWithWarehouse>(
        r#"
        SELECT i.id, i.warehouse_id, w.warehouse_name, i.item_name, i.description,
               i.category, i.status, i.quantity, i.created_at, i.updated_at
        FROM inventories i
        JOIN warehouses w ON w.id = i.warehouse_id
        WHERE i.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))
}

pub async fn inventory_exists(pool: &PgPool, id: i32) -> AppResult<bool> {
    let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM inventories WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn insert_inventory(pool: &PgPool, fields: &NewInventoryItem) -> AppResult<InventoryItem> {
    let item = sqlx::query_as::<_, InventoryItem>(
        r#"
        INSERT INTO inventories (warehouse_id, item_name, description, category, status, quantity)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, warehouse_id, item_name, description, category, status,
                  quantity, created_at, updated_at
        "#,
    )
    .bind(fields.warehouse_id)
    .bind(&fields.item_name)
    .bind(&fields.description)
    .bind(&fields.category)
    .bind(&fields.status)
    .bind(fields.quantity)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

pub async fn update_inventory(
    pool: &PgPool,
    id: i32,
    fields: &NewInventoryItem,
) -> AppResult<InventoryItem> {
    sqlx::query_as::<_, InventoryItem>(
        r#"
        UPDATE inventories
        SET warehouse_id = $1,
            item_name    = $2,
            description  = $3,
            category     = $4,
            status       = $5,
            quantity     = $6,
            updated_at   = $7
        WHERE id = $8
        RETURNING id, warehouse_id, item_name, description, category, status,
                  quantity, created_at, updated_at
        "#,
    )
    .bind(fields.warehouse_id)
    .bind(&fields.item_name)
    .bind(&fields.description)
    .bind(&fields.category)
    .bind(&fields.status)
    .bind(fields.quantity)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))
}

pub async fn delete_inventory(pool: &PgPool, id: i32) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM inventories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Inventory item {} not found", id)));
    }
    Ok(())
}
