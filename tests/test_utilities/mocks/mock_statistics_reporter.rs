use gradle_inventory::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadStatistics {
    pub source_url: String,
    pub application: String,
    pub component_count: usize,
    pub license_count: usize,
}

/// Mock StatisticsReporter that captures every report
#[derive(Default, Clone)]
pub struct MockStatisticsReporter {
    pub reports: Arc<Mutex<Vec<ReadStatistics>>>,
}

impl MockStatisticsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_reports(&self) -> Vec<ReadStatistics> {
        self.reports.lock().unwrap().clone()
    }
}

impl StatisticsReporter for MockStatisticsReporter {
    fn report_read(
        &self,
        source_url: &str,
        application: &Application,
        component_count: usize,
        license_count: usize,
    ) {
        self.reports.lock().unwrap().push(ReadStatistics {
            source_url: source_url.to_string(),
            application: application.name().to_string(),
            component_count,
            license_count,
        });
    }
}
