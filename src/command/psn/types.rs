//! Argument and parameter types used by Packet switched data services
use atat::atat_derive::{AtatEnum, AtatLen};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, AtatLen)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ContextId(pub u8);

#[derive(Debug, Clone, PartialEq, AtatEnum)]
pub enum GPRSAttachedState {
    Detached = 0,
    Attached = 1,
}

#[derive(Debug, Clone, PartialEq, AtatEnum)]
pub enum PDPContextStatus {
    Deactivated = 0,
    Activated = 1,
}
