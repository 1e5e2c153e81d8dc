/// Filesystem adapters for file I/O operations
mod file_input_stream_factory;
mod file_writer;

pub use file_input_stream_factory::FileSystemInputStreamFactory;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
