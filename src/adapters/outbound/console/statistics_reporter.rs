use crate::inventory_mapping::domain::Application;
use crate::ports::outbound::StatisticsReporter;

/// StderrStatisticsReporter adapter printing one line per read source
#[derive(Debug, Default)]
pub struct StderrStatisticsReporter;

impl StderrStatisticsReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_read(
        source_url: &str,
        application: &Application,
        component_count: usize,
        license_count: usize,
    ) -> String {
        format!(
            "📊 Read {}: {} component(s), {} license(s) for application '{}'",
            source_url, component_count, license_count, application
        )
    }
}

impl StatisticsReporter for StderrStatisticsReporter {
    fn report_read(
        &self,
        source_url: &str,
        application: &Application,
        component_count: usize,
        license_count: usize,
    ) {
        eprintln!(
            "{}",
            Self::format_read(source_url, application, component_count, license_count)
        );
    }
}
