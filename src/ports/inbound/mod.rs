/// Inbound ports (Driving ports) - Reader interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to read inventories through the application core.
pub mod inventory_reader;

pub use inventory_reader::InventoryReader;
