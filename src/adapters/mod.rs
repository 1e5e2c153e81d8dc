/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with the file system, the console
/// and the in-memory compliance model.
pub mod outbound;
