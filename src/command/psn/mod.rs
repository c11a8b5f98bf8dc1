//! Packet switched data services
//!
//! The module has to be attached to the packet service, have a PDP context
//! defined with the operator's APN and that context activated before any
//! HTTP command can reach the network.
pub mod types;

use atat::atat_derive::AtatCmd;
use types::{ContextId, GPRSAttachedState, PDPContextStatus};

use super::NoResponse;

/// PDP context definition +CGDCONT
///
/// Defines the connection parameters for the PDP context identified by
/// `<cid>`. The A9 only supports `"IP"` as PDP type.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGDCONT", NoResponse, termination = "\r")]
pub struct SetPDPContextDefinition<'a> {
    #[at_arg(position = 0)]
    pub cid: ContextId,
    #[at_arg(position = 1, len = 6)]
    pub pdp_type: &'a str,
    #[at_arg(position = 2, len = 32)]
    pub apn: &'a str,
}

/// GPRS attach or detach +CGATT
///
/// Attaches the module to (or detaches it from) the packet service. The A9
/// confirms a completed attach with `+CGATT:1`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGATT", NoResponse, termination = "\r")]
pub struct SetGPRSAttached {
    #[at_arg(position = 0)]
    pub state: GPRSAttachedState,
}

/// PDP context activate or deactivate +CGACT
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGACT", NoResponse, termination = "\r")]
pub struct SetPDPContextState {
    #[at_arg(position = 0)]
    pub status: PDPContextStatus,
    #[at_arg(position = 1)]
    pub cid: Option<ContextId>,
}
