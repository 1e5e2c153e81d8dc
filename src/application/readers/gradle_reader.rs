use crate::application::dto::InventoryRequest;
use crate::application::use_cases::InventoryMapper;
use crate::inventory_mapping::domain::{Application, UsagePattern};
use crate::inventory_mapping::policies::CoordinateConvention;
use crate::ports::inbound::InventoryReader;
use crate::ports::outbound::{
    ComponentSink, DeprecationChecker, InputStreamFactory, StatisticsReporter,
};
use crate::shared::Result;
use std::collections::HashSet;

/// Type tag of the legacy reader
pub const GRADLE_READER_TYPE: &str = "gradle";

/// Notice issued on every use of the legacy reader
pub const DEPRECATION_MESSAGE: &str = "Use of Reader of type 'gradle' is deprecated, use 'gradle2' instead. See https://github.com/devonfw/solicitor/issues/58";

/// GradleReader - legacy reader for Gradle License Plugin reports
///
/// Maps `project` to groupId and the whole `dependency` string to
/// artifactId, which is inconsistent with other Maven-style readers. Kept
/// for backward compatibility only; use [`GradleReader2`] instead.
///
/// [`GradleReader2`]: crate::application::readers::GradleReader2
pub struct GradleReader<ISF, STAT, SINK, DC> {
    mapper: InventoryMapper<ISF, STAT>,
    sink: SINK,
    deprecation_checker: DC,
}

impl<ISF, STAT, SINK, DC> GradleReader<ISF, STAT, SINK, DC>
where
    ISF: InputStreamFactory,
    STAT: StatisticsReporter,
    SINK: ComponentSink,
    DC: DeprecationChecker,
{
    pub fn new(
        input_stream_factory: ISF,
        statistics_reporter: STAT,
        sink: SINK,
        deprecation_checker: DC,
    ) -> Self {
        Self {
            mapper: InventoryMapper::new(
                CoordinateConvention::Legacy,
                input_stream_factory,
                statistics_reporter,
            ),
            sink,
            deprecation_checker,
        }
    }

    pub fn sink(&self) -> &SINK {
        &self.sink
    }

    pub fn into_sink(self) -> SINK {
        self.sink
    }
}

impl<ISF, STAT, SINK, DC> InventoryReader for GradleReader<ISF, STAT, SINK, DC>
where
    ISF: InputStreamFactory,
    STAT: StatisticsReporter,
    SINK: ComponentSink,
    DC: DeprecationChecker,
{
    fn supported_types(&self) -> HashSet<&'static str> {
        HashSet::from([GRADLE_READER_TYPE])
    }

    fn read_inventory(
        &mut self,
        source_url: &str,
        application: &Application,
        usage_pattern: UsagePattern,
        repo_type: &str,
    ) -> Result<()> {
        // advisory: the checker decides whether and how often to warn
        self.deprecation_checker.check(false, DEPRECATION_MESSAGE);

        let request =
            InventoryRequest::new(source_url, application.clone(), usage_pattern, repo_type);
        let mapped = self.mapper.execute(&request)?;
        self.sink.commit(mapped.components)
    }
}
