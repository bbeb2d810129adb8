use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Warehouse row as stored. Timestamps are database-managed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Warehouse {
    pub id: i32,
    pub warehouse_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw create/replace body. Every field is optional at the wire level so the
/// validation layer can report each missing field by name instead of the JSON
/// decoder rejecting the whole body.
#[derive(Debug, Default, Deserialize)]
pub struct WarehousePayload {
    pub warehouse_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub contact_name: Option<String>,
    pub contact_position: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

/// A warehouse payload that passed validation: all fields present, trimmed,
/// email and phone in their expected shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWarehouse {
    pub warehouse_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_phone: String,
    pub contact_email: String,
}
