/// Domain layer - decoding and normalization of Gradle license inventories
///
/// Pure transformation logic with no I/O of its own: readers hand in a
/// byte stream and get typed, normalized records back.
pub mod domain;
pub mod policies;
pub mod services;
