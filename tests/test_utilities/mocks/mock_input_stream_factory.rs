use gradle_inventory::prelude::*;
use std::collections::HashMap;
use std::io::{Cursor, Read};

/// Mock InputStreamFactory serving in-memory sources
#[derive(Default)]
pub struct MockInputStreamFactory {
    pub sources: HashMap<String, String>,
}

impl MockInputStreamFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source_url: &str, content: &str) -> Self {
        self.sources
            .insert(source_url.to_string(), content.to_string());
        self
    }
}

impl InputStreamFactory for MockInputStreamFactory {
    fn create_input_stream_for(&self, source_url: &str) -> Result<Box<dyn Read>> {
        match self.sources.get(source_url) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            None => anyhow::bail!("Mock source not found: {}", source_url),
        }
    }
}
