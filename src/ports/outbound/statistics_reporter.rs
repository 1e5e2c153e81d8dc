use crate::inventory_mapping::domain::Application;

/// StatisticsReporter port for read statistics
pub trait StatisticsReporter {
    /// Reports how many components and license associations were read
    /// from `source_url` for `application`
    fn report_read(
        &self,
        source_url: &str,
        application: &Application,
        component_count: usize,
        license_count: usize,
    );
}
