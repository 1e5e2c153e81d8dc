/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, compliance model).
pub mod component_sink;
pub mod deprecation_checker;
pub mod input_stream_factory;
pub mod output_presenter;
pub mod progress_reporter;
pub mod statistics_reporter;

pub use component_sink::ComponentSink;
pub use deprecation_checker::DeprecationChecker;
pub use input_stream_factory::InputStreamFactory;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use statistics_reporter::StatisticsReporter;
