use crate::inventory_mapping::domain::{DependencyEntry, ResolvedCoordinate};
use crate::shared::error::InventoryError;
use crate::shared::Result;

/// CoordinateConvention policy for deriving Maven coordinates from a report entry
///
/// The plugin's report has been read under two incompatible conventions.
/// They are kept side by side as variants of one enum so the difference
/// stays visible in a single `match`.
///
/// - `Legacy`: groupId = `project`, artifactId = `dependency`,
///   version = `version`, verbatim. Never fails; absent fields become empty
///   strings and a colon-separated `dependency` is kept whole.
/// - `Current`: `dependency` must split on `:` into exactly three
///   non-empty parts (group, artifact, version).
///
/// Results of the two conventions must not be mixed in one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateConvention {
    Legacy,
    Current,
}

impl CoordinateConvention {
    /// Resolves the coordinate of a dependency entry
    ///
    /// # Errors
    /// `Current` returns [`InventoryError::MalformedCoordinate`] if the
    /// `dependency` field is absent or not of the form `group:artifact:version`.
    pub fn resolve(&self, entry: &DependencyEntry) -> Result<ResolvedCoordinate> {
        match self {
            CoordinateConvention::Legacy => Ok(Self::resolve_legacy(entry)),
            CoordinateConvention::Current => Self::resolve_current(entry),
        }
    }

    fn resolve_legacy(entry: &DependencyEntry) -> ResolvedCoordinate {
        ResolvedCoordinate::new(
            entry.project().unwrap_or_default().to_string(),
            entry.dependency().unwrap_or_default().to_string(),
            entry.version().unwrap_or_default().to_string(),
        )
    }

    fn resolve_current(entry: &DependencyEntry) -> Result<ResolvedCoordinate> {
        let raw = entry.dependency().unwrap_or_default();
        let parts: Vec<&str> = raw.split(':').collect();

        match parts.as_slice() {
            [group_id, artifact_id, version]
                if !group_id.is_empty() && !artifact_id.is_empty() && !version.is_empty() =>
            {
                Ok(ResolvedCoordinate::new(
                    group_id.to_string(),
                    artifact_id.to_string(),
                    version.to_string(),
                ))
            }
            _ => Err(InventoryError::MalformedCoordinate {
                dependency: raw.to_string(),
            }
            .into()),
        }
    }
}
