use serde::{Deserialize, Deserializer};

/// One license entry of a dependency as written by the Gradle License Plugin
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LicenseEntry {
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    license_url: Option<String>,
}

impl LicenseEntry {
    pub fn new(license: Option<String>, license_url: Option<String>) -> Self {
        Self {
            license,
            license_url,
        }
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn license_url(&self) -> Option<&str> {
        self.license_url.as_deref()
    }
}

/// One element of the plugin's JSON report.
///
/// Every field is optional: a missing key and an explicit `null` both
/// decode to `None`, so "absent" stays distinguishable from "empty".
/// Keys the plugin adds in newer releases (e.g. `developers`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DependencyEntry {
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    dependency: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    licenses: Vec<LicenseEntry>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<LicenseEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<LicenseEntry>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl DependencyEntry {
    pub fn new(
        project: Option<String>,
        version: Option<String>,
        url: Option<String>,
        year: Option<String>,
        dependency: Option<String>,
        licenses: Vec<LicenseEntry>,
    ) -> Self {
        Self {
            project,
            version,
            url,
            year,
            dependency,
            licenses,
        }
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn dependency(&self) -> Option<&str> {
        self.dependency.as_deref()
    }

    pub fn licenses(&self) -> &[LicenseEntry] {
        &self.licenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_entry() {
        let json = r#"{
            "project": "Guava",
            "version": "31.1-jre",
            "url": "https://github.com/google/guava",
            "year": "2010",
            "dependency": "com.google.guava:guava:31.1-jre",
            "licenses": [
                { "license": "Apache-2.0", "license_url": "https://www.apache.org/licenses/LICENSE-2.0" }
            ]
        }"#;

        let entry: DependencyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.project(), Some("Guava"));
        assert_eq!(entry.version(), Some("31.1-jre"));
        assert_eq!(entry.url(), Some("https://github.com/google/guava"));
        assert_eq!(entry.year(), Some("2010"));
        assert_eq!(entry.dependency(), Some("com.google.guava:guava:31.1-jre"));
        assert_eq!(entry.licenses().len(), 1);
        assert_eq!(entry.licenses()[0].license(), Some("Apache-2.0"));
    }

    #[test]
    fn test_deserialize_missing_keys_are_absent() {
        let entry: DependencyEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry.project(), None);
        assert_eq!(entry.dependency(), None);
        assert!(entry.licenses().is_empty());
    }

    #[test]
    fn test_deserialize_null_licenses_is_empty() {
        let entry: DependencyEntry =
            serde_json::from_str(r#"{ "dependency": "a:b:1", "licenses": null }"#).unwrap();
        assert!(entry.licenses().is_empty());
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let entry: DependencyEntry = serde_json::from_str(r#"{ "url": "" }"#).unwrap();
        assert_eq!(entry.url(), Some(""));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let entry: DependencyEntry = serde_json::from_str(
            r#"{ "dependency": "a:b:1", "developers": ["someone"], "description": "x" }"#,
        )
        .unwrap();
        assert_eq!(entry.dependency(), Some("a:b:1"));
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let result: Result<DependencyEntry, _> = serde_json::from_str(r#"{ "version": 3 }"#);
        assert!(result.is_err());
    }
}
