use crate::shared::Result;
use std::io::Read;

/// InputStreamFactory port for acquiring the bytes of an inventory source
///
/// This port abstracts how a source identifier (a path, a `file:` URL, ...)
/// is turned into a readable stream. Stalled or endless streams are the
/// implementation's concern.
pub trait InputStreamFactory {
    /// Opens the source identified by `source_url`
    ///
    /// # Errors
    /// Returns an error if the source does not exist or cannot be opened.
    fn create_input_stream_for(&self, source_url: &str) -> Result<Box<dyn Read>>;
}
