/// In-memory compliance model
mod in_memory_component_sink;

pub use in_memory_component_sink::InMemoryComponentSink;
