use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::AppResult,
    models::{InventoryItem, InventoryPayload, InventoryWithWarehouse},
    AppState,
};

pub async fn list_inventories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InventoryWithWarehouse>>> {
    let items = state.inventories.list().await?;
    Ok(Json(items))
}

pub async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<InventoryWithWarehouse>> {
    let item = state.inventories.get(id).await?;
    Ok(Json(item))
}

pub async fn create_inventory(
    State(state): State<AppState>,
    Json(payload): Json<InventoryPayload>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let item = state.inventories.create(payload).await?;
    info!(
        id = item.id,
        warehouse_id = item.warehouse_id,
        name = %item.item_name,
        "Created inventory item"
    );
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<InventoryPayload>,
) -> AppResult<Json<InventoryItem>> {
    let item = state.inventories.replace(id, payload).await?;
    info!(id = id, "Updated inventory item");
    Ok(Json(item))
}

pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.inventories.delete(id).await?;
    info!(id = id, "Deleted inventory item");
    Ok(StatusCode::NO_CONTENT)
}
