//! AT commands for the Ai-Thinker A9/A9G module family
//!
//! The module terminates command lines with a bare carriage return, so every
//! command here overrides the default `\r\n` termination.
pub mod general;
pub mod http;
pub mod mobile_control;
pub mod network_service;
pub mod psn;

use atat::atat_derive::AtatResp;

#[derive(Clone, AtatResp)]
pub struct NoResponse;
