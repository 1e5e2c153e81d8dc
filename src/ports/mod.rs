/// Ports layer - Interface definitions
///
/// This layer defines the contracts between the application core
/// and the outside world: inbound ports (driving ports - reader API)
/// and outbound ports (driven ports - infrastructure interfaces).
pub mod inbound;
pub mod outbound;
