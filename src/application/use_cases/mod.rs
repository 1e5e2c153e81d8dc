/// Use cases module containing application business logic orchestration
mod map_inventory;

pub use map_inventory::InventoryMapper;
