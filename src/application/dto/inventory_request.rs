use crate::inventory_mapping::domain::{Application, UsagePattern};

/// InventoryRequest - Internal request DTO for the inventory mapping use case
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    /// Identifier of the inventory source
    pub source_url: String,
    /// Application the components belong to
    pub application: Application,
    /// Usage pattern attached to every component
    pub usage_pattern: UsagePattern,
    /// Repository type attached to every component
    pub repo_type: String,
}

impl InventoryRequest {
    pub fn new(
        source_url: impl Into<String>,
        application: Application,
        usage_pattern: UsagePattern,
        repo_type: impl Into<String>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            application,
            usage_pattern,
            repo_type: repo_type.into(),
        }
    }
}
