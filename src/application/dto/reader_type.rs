use crate::application::readers::{GRADLE2_READER_TYPE, GRADLE_READER_TYPE};
use crate::shared::error::InventoryError;
use std::fmt;

/// Reader type tag as declared by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReaderType {
    /// `gradle` - deprecated legacy mapping
    Gradle,
    /// `gradle2` - current mapping
    #[default]
    Gradle2,
}

impl ReaderType {
    pub fn all() -> [ReaderType; 2] {
        [ReaderType::Gradle, ReaderType::Gradle2]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderType::Gradle => GRADLE_READER_TYPE,
            ReaderType::Gradle2 => GRADLE2_READER_TYPE,
        }
    }

    fn supported_list() -> String {
        Self::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::str::FromStr for ReaderType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InventoryError::UnsupportedReaderType {
                reader_type: s.to_string(),
                supported: Self::supported_list(),
            })
    }
}

impl fmt::Display for ReaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reader_types() {
        assert_eq!("gradle".parse::<ReaderType>().unwrap(), ReaderType::Gradle);
        assert_eq!("gradle2".parse::<ReaderType>().unwrap(), ReaderType::Gradle2);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Gradle2".parse::<ReaderType>().is_err());
    }

    #[test]
    fn test_parse_unsupported_lists_supported_types() {
        let err = "npm".parse::<ReaderType>().unwrap_err();
        let display = err.to_string();
        assert!(display.contains("'npm'"));
        assert!(display.contains("gradle, gradle2"));
    }

    #[test]
    fn test_default_is_current_reader() {
        assert_eq!(ReaderType::default(), ReaderType::Gradle2);
    }
}
