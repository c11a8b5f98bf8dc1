//! Network service
pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use responses::NetworkRegistrationStatus;

/// Network registration status +CREG
///
/// The read command answers `+CREG: <n>,<stat>`, where `<stat>` tells whether
/// the module is registered on its home network, roaming, searching or denied.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CREG?", NetworkRegistrationStatus, termination = "\r")]
pub struct GetNetworkRegistrationStatus;
