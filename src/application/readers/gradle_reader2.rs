use crate::application::dto::InventoryRequest;
use crate::application::use_cases::InventoryMapper;
use crate::inventory_mapping::domain::{Application, UsagePattern};
use crate::inventory_mapping::policies::CoordinateConvention;
use crate::ports::inbound::InventoryReader;
use crate::ports::outbound::{ComponentSink, InputStreamFactory, StatisticsReporter};
use crate::shared::Result;
use std::collections::HashSet;

/// Type tag of the current reader
pub const GRADLE2_READER_TYPE: &str = "gradle2";

/// GradleReader2 - reader for Gradle License Plugin reports
///
/// Takes groupId, artifactId and version from the `group:artifact:version`
/// string in the `dependency` field.
pub struct GradleReader2<ISF, STAT, SINK> {
    mapper: InventoryMapper<ISF, STAT>,
    sink: SINK,
}

impl<ISF, STAT, SINK> GradleReader2<ISF, STAT, SINK>
where
    ISF: InputStreamFactory,
    STAT: StatisticsReporter,
    SINK: ComponentSink,
{
    pub fn new(input_stream_factory: ISF, statistics_reporter: STAT, sink: SINK) -> Self {
        Self {
            mapper: InventoryMapper::new(
                CoordinateConvention::Current,
                input_stream_factory,
                statistics_reporter,
            ),
            sink,
        }
    }

    pub fn sink(&self) -> &SINK {
        &self.sink
    }

    pub fn into_sink(self) -> SINK {
        self.sink
    }
}

impl<ISF, STAT, SINK> InventoryReader for GradleReader2<ISF, STAT, SINK>
where
    ISF: InputStreamFactory,
    STAT: StatisticsReporter,
    SINK: ComponentSink,
{
    fn supported_types(&self) -> HashSet<&'static str> {
        HashSet::from([GRADLE2_READER_TYPE])
    }

    fn read_inventory(
        &mut self,
        source_url: &str,
        application: &Application,
        usage_pattern: UsagePattern,
        repo_type: &str,
    ) -> Result<()> {
        let request =
            InventoryRequest::new(source_url, application.clone(), usage_pattern, repo_type);
        let mapped = self.mapper.execute(&request)?;
        self.sink.commit(mapped.components)
    }
}
