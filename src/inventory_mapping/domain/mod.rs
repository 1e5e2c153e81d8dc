pub mod application_component;
pub mod coordinate;
pub mod dependency_entry;

pub use application_component::{Application, ApplicationComponent, RawLicense, UsagePattern};
pub use coordinate::ResolvedCoordinate;
pub use dependency_entry::{DependencyEntry, LicenseEntry};
