use clap::Parser;
use std::path::PathBuf;

use gradle_inventory::application::dto::ReaderType;
use gradle_inventory::config::ConfigFile;
use gradle_inventory::inventory_mapping::domain::{Application, UsagePattern};
use gradle_inventory::shared::error::InventoryError;
use gradle_inventory::shared::Result;

const DEFAULT_REPO_TYPE: &str = "maven";

/// Read Gradle License Plugin reports into normalized component records
#[derive(Parser, Debug)]
#[command(name = "gradle-inventory")]
#[command(version)]
#[command(about = "Read Gradle License Plugin reports into normalized component records", long_about = None)]
pub struct Args {
    /// Reader type: gradle (deprecated) or gradle2 [default: gradle2]
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub reader_type: Option<ReaderType>,

    /// Inventory source: a path or file: URL of the plugin's JSON report
    #[arg(short, long, value_name = "SOURCE")]
    pub source: String,

    /// Name of the application the components belong to
    #[arg(short, long)]
    pub application: Option<String>,

    /// Usage pattern: DYNAMIC_LINKING, STATIC_LINKING or STAND_ALONE_PRODUCT [default: DYNAMIC_LINKING]
    #[arg(short, long)]
    pub usage_pattern: Option<UsagePattern>,

    /// Repository type attached to every component [default: maven]
    #[arg(short, long)]
    pub repo_type: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./gradle-inventory.config.yml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only print errors and warnings to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, Clone)]
pub struct Settings {
    pub reader_type: ReaderType,
    pub source: String,
    pub application: Application,
    pub usage_pattern: UsagePattern,
    pub repo_type: String,
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges arguments with `config`; command-line values win
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<Settings> {
        let config = config.unwrap_or_default();

        let reader_type = match self.reader_type {
            Some(t) => t,
            None => config.reader_type()?.unwrap_or_default(),
        };
        let usage_pattern = match self.usage_pattern {
            Some(p) => p,
            None => config.usage_pattern()?.unwrap_or_default(),
        };

        let application = self
            .application
            .or(config.application)
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| InventoryError::Validation {
                message: "An application name is required (--application or 'application' in the config file)".to_string(),
            })?;

        let repo_type = self
            .repo_type
            .or(config.repo_type)
            .unwrap_or_else(|| DEFAULT_REPO_TYPE.to_string());

        Ok(Settings {
            reader_type,
            source: self.source,
            application: Application::new(application),
            usage_pattern,
            repo_type,
            output: self.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["gradle-inventory", "-s", "licenses.json"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = args(&["-a", "shop"]).resolve(None).unwrap();
        assert_eq!(settings.reader_type, ReaderType::Gradle2);
        assert_eq!(settings.usage_pattern, UsagePattern::DynamicLinking);
        assert_eq!(settings.repo_type, "maven");
        assert_eq!(settings.application.name(), "shop");
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_parse_reader_type_and_usage_pattern() {
        let settings = args(&["-a", "shop", "-t", "gradle", "-u", "STAND_ALONE_PRODUCT"])
            .resolve(None)
            .unwrap();
        assert_eq!(settings.reader_type, ReaderType::Gradle);
        assert_eq!(settings.usage_pattern, UsagePattern::StandAloneProduct);
    }

    #[test]
    fn test_invalid_reader_type_rejected_by_parser() {
        let result = Args::try_parse_from(["gradle-inventory", "-s", "x.json", "-t", "maven"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_is_required() {
        assert!(Args::try_parse_from(["gradle-inventory", "-a", "shop"]).is_err());
    }

    #[test]
    fn test_config_values_used_when_args_absent() {
        let config = ConfigFile {
            reader_type: Some("gradle".to_string()),
            application: Some("from-config".to_string()),
            usage_pattern: Some("STATIC_LINKING".to_string()),
            repo_type: Some("npm".to_string()),
            ..Default::default()
        };

        let settings = args(&[]).resolve(Some(config)).unwrap();
        assert_eq!(settings.reader_type, ReaderType::Gradle);
        assert_eq!(settings.application.name(), "from-config");
        assert_eq!(settings.usage_pattern, UsagePattern::StaticLinking);
        assert_eq!(settings.repo_type, "npm");
    }

    #[test]
    fn test_args_override_config() {
        let config = ConfigFile {
            reader_type: Some("gradle".to_string()),
            application: Some("from-config".to_string()),
            ..Default::default()
        };

        let settings = args(&["-a", "from-cli", "-t", "gradle2"])
            .resolve(Some(config))
            .unwrap();
        assert_eq!(settings.reader_type, ReaderType::Gradle2);
        assert_eq!(settings.application.name(), "from-cli");
    }

    #[test]
    fn test_missing_application_is_validation_error() {
        let err = args(&[]).resolve(None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::Validation { .. })
        ));
    }
}
