use crate::inventory_mapping::domain::ApplicationComponent;
use crate::shared::Result;

/// ComponentSink port for the downstream compliance model
///
/// Readers hand over all components of one source in a single call, only
/// after the whole source has been mapped. A failed read never reaches
/// the sink.
pub trait ComponentSink {
    /// Adds the components of one inventory source to the model
    fn commit(&mut self, components: Vec<ApplicationComponent>) -> Result<()>;
}

impl ComponentSink for Vec<ApplicationComponent> {
    fn commit(&mut self, components: Vec<ApplicationComponent>) -> Result<()> {
        self.extend(components);
        Ok(())
    }
}

impl<T: ComponentSink + ?Sized> ComponentSink for &mut T {
    fn commit(&mut self, components: Vec<ApplicationComponent>) -> Result<()> {
        (**self).commit(components)
    }
}
