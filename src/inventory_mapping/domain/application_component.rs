use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The application whose inventory is being read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    name: String,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// How the application uses its components.
///
/// Attached verbatim to every component; the readers never interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsagePattern {
    #[default]
    DynamicLinking,
    StaticLinking,
    StandAloneProduct,
}

impl UsagePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsagePattern::DynamicLinking => "DYNAMIC_LINKING",
            UsagePattern::StaticLinking => "STATIC_LINKING",
            UsagePattern::StandAloneProduct => "STAND_ALONE_PRODUCT",
        }
    }
}

impl FromStr for UsagePattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "DYNAMIC_LINKING" => Ok(UsagePattern::DynamicLinking),
            "STATIC_LINKING" => Ok(UsagePattern::StaticLinking),
            "STAND_ALONE_PRODUCT" => Ok(UsagePattern::StandAloneProduct),
            _ => Err(format!(
                "Invalid usage pattern: {}. Please specify 'DYNAMIC_LINKING', 'STATIC_LINKING' or 'STAND_ALONE_PRODUCT'",
                s
            )),
        }
    }
}

impl fmt::Display for UsagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A license as declared by the inventory source, before any curation.
///
/// Both fields `None` is the explicit "unknown license" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLicense {
    pub declared_license: Option<String>,
    pub license_url: Option<String>,
    /// Source identifier the license was read from
    pub origin: String,
}

impl RawLicense {
    pub fn new(declared_license: Option<String>, license_url: Option<String>, origin: &str) -> Self {
        Self {
            declared_license,
            license_url,
            origin: origin.to_string(),
        }
    }

    pub fn unknown(origin: &str) -> Self {
        Self::new(None, None, origin)
    }

    pub fn is_unknown(&self) -> bool {
        self.declared_license.is_none() && self.license_url.is_none()
    }
}

/// A component of an application, as handed to the compliance model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationComponent {
    pub application: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub oss_homepage: Option<String>,
    pub usage_pattern: UsagePattern,
    pub repo_type: String,
    pub raw_licenses: Vec<RawLicense>,
}

impl ApplicationComponent {
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    pub fn add_raw_license(&mut self, license: RawLicense) {
        self.raw_licenses.push(license);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_pattern_from_str() {
        assert_eq!(
            "DYNAMIC_LINKING".parse::<UsagePattern>().unwrap(),
            UsagePattern::DynamicLinking
        );
        assert_eq!(
            "static-linking".parse::<UsagePattern>().unwrap(),
            UsagePattern::StaticLinking
        );
        assert_eq!(
            "stand_alone_product".parse::<UsagePattern>().unwrap(),
            UsagePattern::StandAloneProduct
        );
    }

    #[test]
    fn test_usage_pattern_from_str_invalid() {
        let err = "linked".parse::<UsagePattern>().unwrap_err();
        assert!(err.contains("Invalid usage pattern"));
    }

    #[test]
    fn test_usage_pattern_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&UsagePattern::StandAloneProduct).unwrap();
        assert_eq!(json, "\"STAND_ALONE_PRODUCT\"");
    }

    #[test]
    fn test_raw_license_unknown() {
        let license = RawLicense::unknown("licenses.json");
        assert!(license.is_unknown());
        assert_eq!(license.origin, "licenses.json");
    }

    #[test]
    fn test_component_coordinate() {
        let component = ApplicationComponent {
            application: "shop".to_string(),
            group_id: "com.acme".to_string(),
            artifact_id: "widget".to_string(),
            version: "1.2.3".to_string(),
            oss_homepage: None,
            usage_pattern: UsagePattern::default(),
            repo_type: "maven".to_string(),
            raw_licenses: vec![],
        };
        assert_eq!(component.coordinate(), "com.acme:widget:1.2.3");
    }
}
