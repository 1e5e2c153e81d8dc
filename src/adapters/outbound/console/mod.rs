/// Console adapters writing human-facing messages to stderr
mod deprecation_checker;
mod progress_reporter;
mod statistics_reporter;

pub use deprecation_checker::StderrDeprecationChecker;
pub use progress_reporter::StderrProgressReporter;
pub use statistics_reporter::StderrStatisticsReporter;
