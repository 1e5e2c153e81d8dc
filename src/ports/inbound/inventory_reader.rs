use crate::inventory_mapping::domain::{Application, UsagePattern};
use crate::shared::Result;
use std::collections::HashSet;

/// InventoryReader - Inbound port implemented by every reader
///
/// A reader is selected by one of its supported type tags and writes the
/// components it reads into its component sink.
pub trait InventoryReader {
    /// The type tags this reader is registered under
    fn supported_types(&self) -> HashSet<&'static str>;

    /// Reads one inventory source and commits its components
    ///
    /// # Arguments
    /// * `source_url` - Identifier of the source, resolved by the input stream factory
    /// * `application` - Application the components belong to
    /// * `usage_pattern` - Usage pattern attached to every component
    /// * `repo_type` - Repository type attached to every component (e.g. `maven`)
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or decoded, or if a
    /// coordinate cannot be resolved. Nothing is committed in that case.
    fn read_inventory(
        &mut self,
        source_url: &str,
        application: &Application,
        usage_pattern: UsagePattern,
        repo_type: &str,
    ) -> Result<()>;
}
