/// Readers registered per type tag
///
/// Both readers read the Gradle License Plugin report; they differ only in
/// how coordinates are derived. See [`CoordinateConvention`].
///
/// [`CoordinateConvention`]: crate::inventory_mapping::policies::CoordinateConvention
mod gradle_reader;
mod gradle_reader2;

pub use gradle_reader::{GradleReader, DEPRECATION_MESSAGE, GRADLE_READER_TYPE};
pub use gradle_reader2::{GradleReader2, GRADLE2_READER_TYPE};
