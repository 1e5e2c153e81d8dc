use crate::inventory_mapping::domain::ApplicationComponent;
use crate::ports::outbound::ComponentSink;
use crate::shared::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// InMemoryComponentSink adapter collecting committed components
///
/// Clones share the same storage, so a caller can keep one handle while a
/// boxed reader owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryComponentSink {
    components: Rc<RefCell<Vec<ApplicationComponent>>>,
}

impl InMemoryComponentSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn components(&self) -> Vec<ApplicationComponent> {
        self.components.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.components.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.borrow().is_empty()
    }

    pub fn take(&self) -> Vec<ApplicationComponent> {
        self.components.take()
    }
}

impl ComponentSink for InMemoryComponentSink {
    fn commit(&mut self, components: Vec<ApplicationComponent>) -> Result<()> {
        self.components.borrow_mut().extend(components);
        Ok(())
    }
}
