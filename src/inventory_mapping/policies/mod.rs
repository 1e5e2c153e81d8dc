mod coordinate_convention;

pub use coordinate_convention::CoordinateConvention;
