use crate::inventory_mapping::domain::ApplicationComponent;

/// MappedInventory - Result of mapping one inventory source
///
/// Only produced when every entry of the source mapped successfully.
#[derive(Debug, Clone)]
pub struct MappedInventory {
    pub components: Vec<ApplicationComponent>,
    pub component_count: usize,
    pub license_count: usize,
}

impl MappedInventory {
    pub fn new(
        components: Vec<ApplicationComponent>,
        component_count: usize,
        license_count: usize,
    ) -> Self {
        Self {
            components,
            component_count,
            license_count,
        }
    }
}
