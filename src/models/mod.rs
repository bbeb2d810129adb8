pub mod inventory;
pub mod warehouse;

pub use inventory::{InventoryItem, InventoryPayload, InventoryWithWarehouse, NewInventoryItem};
pub use warehouse::{NewWarehouse, Warehouse, WarehousePayload};
