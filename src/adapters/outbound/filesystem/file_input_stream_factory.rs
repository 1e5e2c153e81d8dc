use crate::ports::outbound::InputStreamFactory;
use crate::shared::error::InventoryError;
use crate::shared::security::validate_inventory_file;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use url::Url;

const FILE_URL_PREFIX: &str = "file:";

/// FileSystemInputStreamFactory adapter opening inventory sources on disk
///
/// Accepts plain paths and `file:` URLs. Absolute URLs
/// (`file:///abs/licenses.json`, `file://localhost/abs/licenses.json`) are
/// parsed as URLs; the relative form `file:build/licenses.json` is
/// percent-decoded and resolved against the optional base directory, or
/// the working directory if none is set.
#[derive(Debug, Clone, Default)]
pub struct FileSystemInputStreamFactory {
    base_dir: Option<PathBuf>,
}

impl FileSystemInputStreamFactory {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Maps a source identifier to the path it designates
    ///
    /// # Errors
    /// Returns [`InventoryError::FileReadError`] for a `file:` URL that does
    /// not name a local path (e.g. a remote host) or is not valid UTF-8
    /// once decoded.
    pub fn resolve_path(&self, source_url: &str) -> Result<PathBuf> {
        let path = match source_url.strip_prefix(FILE_URL_PREFIX) {
            Some(rest) if rest.starts_with('/') => Self::absolute_url_path(source_url)?,
            Some(rest) => urlencoding::decode(rest)
                .map(|decoded| PathBuf::from(decoded.into_owned()))
                .map_err(|e| Self::unresolvable(source_url, e.to_string()))?,
            None => PathBuf::from(source_url),
        };

        Ok(match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        })
    }

    fn absolute_url_path(source_url: &str) -> Result<PathBuf> {
        let url =
            Url::parse(source_url).map_err(|e| Self::unresolvable(source_url, e.to_string()))?;
        url.to_file_path().map_err(|_| {
            Self::unresolvable(source_url, "URL does not name a local file".to_string()).into()
        })
    }

    fn unresolvable(source_url: &str, details: String) -> InventoryError {
        InventoryError::FileReadError {
            path: PathBuf::from(source_url),
            details,
        }
    }
}

impl InputStreamFactory for FileSystemInputStreamFactory {
    fn create_input_stream_for(&self, source_url: &str) -> Result<Box<dyn Read>> {
        let path = self.resolve_path(source_url)?;

        validate_inventory_file(&path).map_err(|e| InventoryError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        let file = File::open(&path).map_err(|e| InventoryError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_all(factory: &FileSystemInputStreamFactory, source_url: &str) -> Result<String> {
        let mut content = String::new();
        factory
            .create_input_stream_for(source_url)?
            .read_to_string(&mut content)?;
        Ok(content)
    }

    fn resolve(factory: &FileSystemInputStreamFactory, source_url: &str) -> PathBuf {
        factory.resolve_path(source_url).unwrap()
    }

    #[test]
    fn test_resolve_plain_path() {
        let factory = FileSystemInputStreamFactory::new();
        assert_eq!(
            resolve(&factory, "build/licenses.json"),
            PathBuf::from("build/licenses.json")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_file_url() {
        let factory = FileSystemInputStreamFactory::new();
        assert_eq!(resolve(&factory, "file:licenses.json"), PathBuf::from("licenses.json"));
        assert_eq!(
            resolve(&factory, "file:///tmp/licenses.json"),
            PathBuf::from("/tmp/licenses.json")
        );
        assert_eq!(
            resolve(&factory, "file:/tmp/licenses.json"),
            PathBuf::from("/tmp/licenses.json")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_localhost_file_url() {
        let factory = FileSystemInputStreamFactory::new();
        assert_eq!(
            resolve(&factory, "file://localhost/tmp/licenses.json"),
            PathBuf::from("/tmp/licenses.json")
        );
    }

    #[test]
    fn test_resolve_remote_host_file_url_fails() {
        let factory = FileSystemInputStreamFactory::new();
        let err = factory
            .resolve_path("file://buildserver/tmp/licenses.json")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::FileReadError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_percent_encoded_file_url() {
        let factory = FileSystemInputStreamFactory::new();
        assert_eq!(
            resolve(&factory, "file:///tmp/my%20reports/licenses.json"),
            PathBuf::from("/tmp/my reports/licenses.json")
        );
        assert_eq!(
            resolve(&factory, "file:my%20reports/licenses.json"),
            PathBuf::from("my reports/licenses.json")
        );
    }

    #[test]
    fn test_resolve_relative_to_base_dir() {
        let factory = FileSystemInputStreamFactory::with_base_dir("/project");
        assert_eq!(
            resolve(&factory, "file:build/licenses.json"),
            PathBuf::from("/project/build/licenses.json")
        );
        assert_eq!(
            resolve(&factory, "/abs/licenses.json"),
            PathBuf::from("/abs/licenses.json")
        );
    }

    #[test]
    fn test_open_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("licenses.json"), "[]").unwrap();

        let factory = FileSystemInputStreamFactory::with_base_dir(temp_dir.path());
        assert_eq!(read_all(&factory, "file:licenses.json").unwrap(), "[]");
    }

    #[test]
    fn test_open_percent_encoded_absolute_url() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("my reports");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("licenses.json"), "[]").unwrap();

        let source_url = Url::from_file_path(dir.join("licenses.json"))
            .unwrap()
            .to_string();
        assert!(source_url.contains("my%20reports"));

        let factory = FileSystemInputStreamFactory::new();
        assert_eq!(read_all(&factory, &source_url).unwrap(), "[]");
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let factory = FileSystemInputStreamFactory::with_base_dir(temp_dir.path());

        let err = factory.create_input_stream_for("missing.json").err().unwrap();
        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_open_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let factory = FileSystemInputStreamFactory::new();

        let err = factory
            .create_input_stream_for(temp_dir.path().to_str().unwrap())
            .err()
            .unwrap();
        assert!(err.to_string().contains("not a regular file"));
    }
}
