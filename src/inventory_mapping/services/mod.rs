mod license_normalizer;
mod schema_decoder;

pub use license_normalizer::LicenseNormalizer;
pub use schema_decoder::SchemaDecoder;
