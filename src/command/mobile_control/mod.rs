//! Mobile equipment control and status
pub mod responses;

use atat::atat_derive::AtatCmd;
use responses::NetworkTime;

/// Clock +CCLK
///
/// Reads the real time clock, which the module sets from the network time
/// once registered.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CCLK?", NetworkTime, termination = "\r")]
pub struct GetClock;
