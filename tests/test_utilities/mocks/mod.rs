/// Mock implementations for testing
mod mock_deprecation_checker;
mod mock_input_stream_factory;
mod mock_statistics_reporter;

pub use mock_deprecation_checker::MockDeprecationChecker;
pub use mock_input_stream_factory::MockInputStreamFactory;
pub use mock_statistics_reporter::{MockStatisticsReporter, ReadStatistics};
