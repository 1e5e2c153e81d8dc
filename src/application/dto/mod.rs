/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod inventory_report;
mod inventory_request;
mod mapped_inventory;
mod reader_type;

pub use inventory_report::InventoryReport;
pub use inventory_request::InventoryRequest;
pub use mapped_inventory::MappedInventory;
pub use reader_type::ReaderType;
