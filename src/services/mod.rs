pub mod inventory;
pub mod warehouse;

pub use inventory::InventoryService;
pub use warehouse::WarehouseService;
