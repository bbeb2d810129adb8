use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: i32,
    pub warehouse_id: i32,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inventory item joined with its owning warehouse's name for richer API
/// responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InventoryWithWarehouse {
    pub id: i32,
    pub warehouse_id: i32,
    pub warehouse_name: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw create/replace body. `warehouse_id` and `quantity` are kept as raw
/// JSON values so that a non-integer (or numeric string) is reported as a
/// field-level violation rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct InventoryPayload {
    pub warehouse_id: Option<Value>,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub quantity: Option<Value>,
}

/// Validated inventory fields, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventoryItem {
    pub warehouse_id: i32,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}
