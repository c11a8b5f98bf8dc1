use embassy_time::Duration;

use crate::{
    command::{
        general::{types::ResetMode, ResetModule},
        network_service::GetNetworkRegistrationStatus,
        psn::{
            types::{ContextId, GPRSAttachedState, PDPContextStatus},
            SetGPRSAttached, SetPDPContextDefinition, SetPDPContextState,
        },
    },
    config::Timing,
    error::StartError,
};

/// PDP context used for HTTP traffic
pub const CONTEXT_ID: ContextId = ContextId(1);

/// Progress of the start-up sequence. States are only ever entered in this
/// order; going back means starting over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    PoweredOff,
    Reset,
    RegistrationChecked,
    Attached,
    ApnConfigured,
    PdpActive,
}

#[derive(Clone)]
pub(crate) enum StartCommand<'a> {
    Reset(ResetModule),
    Registration(GetNetworkRegistrationStatus),
    Attach(SetGPRSAttached),
    Apn(SetPDPContextDefinition<'a>),
    Activate(SetPDPContextState),
}

/// One command/response exchange of the start-up sequence.
pub(crate) struct Step<'a> {
    /// State entered when the exchange succeeds
    pub target: SessionState,
    /// Pause before the command is sent
    pub settle: Duration,
    pub command: StartCommand<'a>,
    pub pattern: &'static [u8],
    pub timeout: Duration,
    pub on_timeout: StartError,
}

pub(crate) fn start_sequence<'a>(apn: &'a str, timing: &Timing) -> [Step<'a>; 5] {
    [
        Step {
            target: SessionState::Reset,
            settle: Duration::from_ticks(0),
            command: StartCommand::Reset(ResetModule {
                mode: ResetMode::Reboot,
            }),
            pattern: b"READY",
            timeout: timing.reset_timeout,
            on_timeout: StartError::ResetTimeout,
        },
        Step {
            target: SessionState::RegistrationChecked,
            settle: timing.boot_settle,
            command: StartCommand::Registration(GetNetworkRegistrationStatus),
            pattern: b"+CREG:",
            timeout: timing.registration_timeout,
            on_timeout: StartError::RegistrationTimeout,
        },
        Step {
            target: SessionState::Attached,
            settle: timing.command_settle,
            command: StartCommand::Attach(SetGPRSAttached {
                state: GPRSAttachedState::Attached,
            }),
            pattern: b"+CGATT:1",
            timeout: timing.attach_timeout,
            on_timeout: StartError::AttachTimeout,
        },
        Step {
            target: SessionState::ApnConfigured,
            settle: timing.command_settle,
            command: StartCommand::Apn(SetPDPContextDefinition {
                cid: CONTEXT_ID,
                pdp_type: "IP",
                apn,
            }),
            pattern: b"OK",
            timeout: timing.apn_timeout,
            on_timeout: StartError::ApnTimeout,
        },
        Step {
            target: SessionState::PdpActive,
            settle: timing.command_settle,
            command: StartCommand::Activate(SetPDPContextState {
                status: PDPContextStatus::Activated,
                cid: Some(CONTEXT_ID),
            }),
            pattern: b"OK",
            timeout: timing.pdp_activation_timeout,
            on_timeout: StartError::PdpActivationTimeout,
        },
    ]
}
