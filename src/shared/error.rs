use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed underlying cause carried by ingestion failures.
pub type ErrorCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the inventory was read and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable source, malformed inventory, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while reading a Gradle license inventory.
///
/// `Ingestion` and `MalformedCoordinate` abort the current read; nothing
/// is committed to the component sink when either is returned.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Could not read Gradle inventory source '{source_url}'\n\n💡 Hint: Please verify that the source is a JSON array produced by the Gradle License Plugin")]
    Ingestion {
        source_url: String,
        #[source]
        cause: ErrorCause,
    },

    #[error("Could not extract groupId, artifactId and version from dependency info: '{dependency}'\n\n💡 Hint: The 'gradle2' reader expects coordinates of the form group:artifact:version")]
    MalformedCoordinate { dependency: String },

    #[error("Unsupported reader type: '{reader_type}'\n\n💡 Hint: Supported types are: {supported}")]
    UnsupportedReaderType {
        reader_type: String,
        supported: String,
    },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl InventoryError {
    /// Wraps any failure that happened while acquiring or decoding a source.
    pub fn ingestion(source_url: &str, cause: impl Into<ErrorCause>) -> Self {
        InventoryError::Ingestion {
            source_url: source_url.to_string(),
            cause: cause.into(),
        }
    }
}
