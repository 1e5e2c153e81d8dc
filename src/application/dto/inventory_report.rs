use crate::application::dto::ReaderType;
use crate::inventory_mapping::domain::ApplicationComponent;
use chrono::Utc;
use serde::Serialize;

/// InventoryReport - Serializable summary of one CLI run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub generated_at: String,
    pub reader_type: String,
    pub source: String,
    pub application: String,
    pub component_count: usize,
    pub license_count: usize,
    pub components: Vec<ApplicationComponent>,
}

impl InventoryReport {
    /// Builds a report stamped with the current time (RFC 3339)
    pub fn new(
        reader_type: ReaderType,
        source: &str,
        application: &str,
        components: Vec<ApplicationComponent>,
    ) -> Self {
        let license_count = components.iter().map(|c| c.raw_licenses.len()).sum();
        Self {
            generated_at: Utc::now().to_rfc3339(),
            reader_type: reader_type.to_string(),
            source: source.to_string(),
            application: application.to_string(),
            component_count: components.len(),
            license_count,
            components,
        }
    }

    pub fn to_json(&self) -> crate::shared::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize inventory report: {}", e))
    }
}
