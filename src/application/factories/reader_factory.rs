use crate::application::dto::ReaderType;
use crate::application::readers::{GradleReader, GradleReader2};
use crate::ports::inbound::InventoryReader;
use crate::ports::outbound::{
    ComponentSink, DeprecationChecker, InputStreamFactory, StatisticsReporter,
};

/// Factory selecting the reader registered for a type tag
///
/// The deprecation checker is only handed to readers that use it.
pub struct ReaderFactory;

impl ReaderFactory {
    /// Creates the reader for `reader_type` with injected dependencies
    ///
    /// # Examples
    /// ```
    /// use gradle_inventory::prelude::*;
    ///
    /// let sink = InMemoryComponentSink::new();
    /// let reader = ReaderFactory::create(
    ///     ReaderType::Gradle2,
    ///     FileSystemInputStreamFactory::new(),
    ///     StderrStatisticsReporter::new(),
    ///     sink.clone(),
    ///     StderrDeprecationChecker::new(),
    /// );
    /// assert!(reader.supported_types().contains("gradle2"));
    /// ```
    pub fn create<ISF, STAT, SINK, DC>(
        reader_type: ReaderType,
        input_stream_factory: ISF,
        statistics_reporter: STAT,
        sink: SINK,
        deprecation_checker: DC,
    ) -> Box<dyn InventoryReader>
    where
        ISF: InputStreamFactory + 'static,
        STAT: StatisticsReporter + 'static,
        SINK: ComponentSink + 'static,
        DC: DeprecationChecker + 'static,
    {
        match reader_type {
            ReaderType::Gradle => Box::new(GradleReader::new(
                input_stream_factory,
                statistics_reporter,
                sink,
                deprecation_checker,
            )),
            ReaderType::Gradle2 => Box::new(GradleReader2::new(
                input_stream_factory,
                statistics_reporter,
                sink,
            )),
        }
    }
}
