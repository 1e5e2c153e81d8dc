use crate::inventory_mapping::domain::DependencyEntry;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use std::io::{BufReader, Read};

/// SchemaDecoder service for the Gradle License Plugin JSON report
///
/// The report is a JSON array of dependency objects. Decoding is
/// permissive per field but strict on structure: a top level that is not
/// an array, an element that is not an object, or a field of the wrong
/// JSON type fails the whole decode.
pub struct SchemaDecoder;

impl SchemaDecoder {
    /// Decodes every entry of the report read from `reader`
    ///
    /// The reader is consumed and dropped before this returns, on both the
    /// success and the error path.
    ///
    /// # Errors
    /// Returns [`InventoryError::Ingestion`] carrying `source_url` and the
    /// underlying I/O or JSON error. No partial result is returned.
    pub fn decode<R: Read>(reader: R, source_url: &str) -> Result<Vec<DependencyEntry>> {
        serde_json::from_reader::<_, Vec<DependencyEntry>>(BufReader::new(reader))
            .map_err(|e| InventoryError::ingestion(source_url, e).into())
    }

    /// Decodes a report that is already held in memory
    pub fn decode_str(content: &str, source_url: &str) -> Result<Vec<DependencyEntry>> {
        Self::decode(content.as_bytes(), source_url)
    }
}
