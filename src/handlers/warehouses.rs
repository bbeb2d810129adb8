use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::AppResult,
    models::{InventoryItem, Warehouse, WarehousePayload},
    AppState,
};

pub async fn list_warehouses(State(state): State<AppState>) -> AppResult<Json<Vec<Warehouse>>> {
    let warehouses = state.warehouses.list().await?;
    Ok(Json(warehouses))
}

pub async fn get_warehouse(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Warehouse>> {
    let warehouse = state.warehouses.get(id).await?;
    Ok(Json(warehouse))
}

pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(payload): Json<WarehousePayload>,
) -> AppResult<(StatusCode, Json<Warehouse>)> {
    let warehouse = state.warehouses.create(payload).await?;
    info!(id = warehouse.id, name = %warehouse.warehouse_name, "Created warehouse");
    Ok((StatusCode::CREATED, Json(warehouse)))
}

pub async fn update_warehouse(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<WarehousePayload>,
) -> AppResult<Json<Warehouse>> {
    let warehouse = state.warehouses.replace(id, payload).await?;
    info!(id = id, "Updated warehouse");
    Ok(Json(warehouse))
}

pub async fn delete_warehouse(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.warehouses.delete(id).await?;
    info!(id = id, "Deleted warehouse");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_warehouse_inventories(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = state.warehouses.list_inventory_for(id).await?;
    Ok(Json(items))
}
