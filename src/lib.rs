#![cfg_attr(not(test), no_std)]

//! Blocking AT command driver for Ai-Thinker A9/A9G GSM/GPRS modules.
//!
//! A [`Modem`] owns the serial link (and optionally the module's power
//! enable pin). It brings up a packet data session with [`Modem::start`],
//! performs plain HTTP requests through the module's built-in HTTP client
//! and keeps network time locally after a single `+CCLK` query.

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod client;
pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod http;
mod line;
mod module_timing;
pub mod port;
mod power;
pub mod registration;
pub mod state;
pub mod transport;

#[cfg(test)]
mod test_helpers;

pub use atat;
pub use client::Modem;
pub use clock::TimeSyncAnchor;
pub use config::{Config, NoPin, RegistrationPolicy, Timing, APN_MAX_LEN};
pub use error::{Error, HttpError, StartError, TimeError};
pub use http::BodySlice;
pub use port::Wait;
pub use state::SessionState;
