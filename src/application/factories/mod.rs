mod presenter_factory;
mod reader_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use reader_factory::ReaderFactory;
