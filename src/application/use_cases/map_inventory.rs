use crate::application::dto::{InventoryRequest, MappedInventory};
use crate::inventory_mapping::domain::{ApplicationComponent, DependencyEntry};
use crate::inventory_mapping::policies::CoordinateConvention;
use crate::inventory_mapping::services::{LicenseNormalizer, SchemaDecoder};
use crate::ports::outbound::{InputStreamFactory, StatisticsReporter};
use crate::shared::error::InventoryError;
use crate::shared::Result;

/// InventoryMapper - Core use case turning one plugin report into components
///
/// Decodes the report, resolves each entry's coordinate under the bound
/// [`CoordinateConvention`] and attaches its licenses. The first error
/// aborts the whole mapping, so a caller either gets every component of the
/// source or none.
///
/// # Type Parameters
/// * `ISF` - InputStreamFactory implementation
/// * `STAT` - StatisticsReporter implementation
pub struct InventoryMapper<ISF, STAT> {
    convention: CoordinateConvention,
    input_stream_factory: ISF,
    statistics_reporter: STAT,
}

impl<ISF, STAT> InventoryMapper<ISF, STAT>
where
    ISF: InputStreamFactory,
    STAT: StatisticsReporter,
{
    /// Creates a new InventoryMapper with injected dependencies
    pub fn new(
        convention: CoordinateConvention,
        input_stream_factory: ISF,
        statistics_reporter: STAT,
    ) -> Self {
        Self {
            convention,
            input_stream_factory,
            statistics_reporter,
        }
    }

    /// Executes the mapping for one inventory source
    ///
    /// Statistics are reported once, after every entry has been mapped.
    ///
    /// # Errors
    /// - [`InventoryError::Ingestion`] if the source cannot be opened or decoded
    /// - [`InventoryError::MalformedCoordinate`] if a coordinate cannot be resolved
    pub fn execute(&self, request: &InventoryRequest) -> Result<MappedInventory> {
        let entries = self.decode(&request.source_url)?;

        let mut normalizer = LicenseNormalizer::new();
        let components = entries
            .iter()
            .map(|entry| self.map_entry(entry, request, &mut normalizer))
            .collect::<Result<Vec<_>>>()?;

        let component_count = components.len();
        let license_count = normalizer.license_count();
        self.statistics_reporter.report_read(
            &request.source_url,
            &request.application,
            component_count,
            license_count,
        );

        Ok(MappedInventory::new(
            components,
            component_count,
            license_count,
        ))
    }

    fn decode(&self, source_url: &str) -> Result<Vec<DependencyEntry>> {
        let stream = self
            .input_stream_factory
            .create_input_stream_for(source_url)
            .map_err(|e| InventoryError::ingestion(source_url, e))?;

        SchemaDecoder::decode(stream, source_url)
    }

    fn map_entry(
        &self,
        entry: &DependencyEntry,
        request: &InventoryRequest,
        normalizer: &mut LicenseNormalizer,
    ) -> Result<ApplicationComponent> {
        let (group_id, artifact_id, version) = self.convention.resolve(entry)?.into_parts();

        let mut component = ApplicationComponent {
            application: request.application.name().to_string(),
            group_id,
            artifact_id,
            version,
            oss_homepage: entry.url().map(String::from),
            usage_pattern: request.usage_pattern,
            repo_type: request.repo_type.clone(),
            raw_licenses: Vec::new(),
        };

        for license in normalizer.normalize(entry.licenses(), &request.source_url) {
            component.add_raw_license(license);
        }

        Ok(component)
    }
}
