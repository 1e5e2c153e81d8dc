//! gradle-inventory - normalized component records from Gradle license reports
//!
//! This library reads the JSON report written by the
//! [Gradle License Plugin](https://github.com/jaredsburrows/gradle-license-plugin)
//! and turns it into application components with their raw licenses,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory_mapping`): Report decoding, coordinate conventions, license normalization
//! - **Application Layer** (`application`): The mapping use case and the `gradle`/`gradle2` readers
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gradle_inventory::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let sink = InMemoryComponentSink::new();
//! let mut reader = GradleReader2::new(
//!     FileSystemInputStreamFactory::new(),
//!     StderrStatisticsReporter::new(),
//!     sink.clone(),
//! );
//!
//! reader.read_inventory(
//!     "file:build/reports/licenses/licenseReleaseReport.json",
//!     &Application::new("shop-backend"),
//!     UsagePattern::DynamicLinking,
//!     "maven",
//! )?;
//!
//! for component in sink.components() {
//!     println!("{} ({} license(s))", component.coordinate(), component.raw_licenses.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory_mapping;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        StderrDeprecationChecker, StderrProgressReporter, StderrStatisticsReporter,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemInputStreamFactory, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::memory::InMemoryComponentSink;
    pub use crate::application::dto::{InventoryReport, InventoryRequest, MappedInventory, ReaderType};
    pub use crate::application::factories::ReaderFactory;
    pub use crate::application::readers::{GradleReader, GradleReader2, DEPRECATION_MESSAGE};
    pub use crate::application::use_cases::InventoryMapper;
    pub use crate::inventory_mapping::domain::{
        Application, ApplicationComponent, DependencyEntry, LicenseEntry, RawLicense,
        ResolvedCoordinate, UsagePattern,
    };
    pub use crate::inventory_mapping::policies::CoordinateConvention;
    pub use crate::inventory_mapping::services::{LicenseNormalizer, SchemaDecoder};
    pub use crate::ports::inbound::InventoryReader;
    pub use crate::ports::outbound::{
        ComponentSink, DeprecationChecker, InputStreamFactory, OutputPresenter, ProgressReporter,
        StatisticsReporter,
    };
    pub use crate::shared::error::InventoryError;
    pub use crate::shared::Result;
}
