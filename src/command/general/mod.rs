//! General commands
pub mod types;

use atat::atat_derive::AtatCmd;
use types::ResetMode;

use super::NoResponse;

/// Module reset +RST
///
/// Reboots the module. After reboot the module prints a `READY` banner once
/// it accepts commands again, which takes several seconds.
#[derive(Clone, AtatCmd)]
#[at_cmd("+RST", NoResponse, termination = "\r")]
pub struct ResetModule {
    #[at_arg(position = 0)]
    pub mode: ResetMode,
}
