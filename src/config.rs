use embassy_time::Duration;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use heapless::String;

use crate::{error::Error, module_timing};

/// Maximum APN length accepted by the module's `+CGDCONT`
pub const APN_MAX_LEN: usize = 32;

pub struct NoPin;

impl ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Which `+CREG` status values count as "registered".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationPolicy {
    /// Registered on the home network only
    #[default]
    HomeOnly,
    /// Registered on the home network or roaming
    HomeOrRoaming,
}

/// Delays and deadlines used by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub poll_interval: Duration,
    pub power_off_hold: Duration,
    pub boot_settle: Duration,
    pub command_settle: Duration,
    pub reset_timeout: Duration,
    pub registration_timeout: Duration,
    pub attach_timeout: Duration,
    pub apn_timeout: Duration,
    pub pdp_activation_timeout: Duration,
    pub http_timeout: Duration,
    pub http_settle: Duration,
    pub http_burst_window: Duration,
    pub clock_timeout: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            poll_interval: module_timing::poll_interval(),
            power_off_hold: module_timing::power_off_hold(),
            boot_settle: module_timing::boot_settle(),
            command_settle: module_timing::command_settle(),
            reset_timeout: module_timing::reset_timeout(),
            registration_timeout: module_timing::registration_timeout(),
            attach_timeout: module_timing::attach_timeout(),
            apn_timeout: module_timing::apn_timeout(),
            pdp_activation_timeout: module_timing::pdp_activation_timeout(),
            http_timeout: module_timing::http_timeout(),
            http_settle: module_timing::http_settle(),
            http_burst_window: module_timing::http_burst_window(),
            clock_timeout: module_timing::clock_timeout(),
        }
    }
}

/// Session configuration.
///
/// The serial link itself (115200 baud, 8N1, no flow control, pin routing) is
/// set up by the caller before it is handed to [`Modem::new`].
///
/// [`Modem::new`]: crate::Modem::new
#[derive(Debug)]
pub struct Config<PWR> {
    pub(crate) pwr_pin: Option<PWR>,
    pub(crate) pwr_active: PinState,
    pub(crate) apn: String<APN_MAX_LEN>,
    pub(crate) registration: RegistrationPolicy,
    pub(crate) timing: Timing,
}

impl Config<NoPin> {
    pub fn new(apn: &str) -> Result<Self, Error> {
        let apn = String::try_from(apn).map_err(|_| Error::ApnTooLong)?;

        Ok(Self {
            pwr_pin: None,
            pwr_active: PinState::High,
            apn,
            registration: RegistrationPolicy::default(),
            timing: Timing::default(),
        })
    }
}

impl<PWR> Config<PWR>
where
    PWR: OutputPin,
{
    /// Power enable pin, driven high to power the module
    pub fn with_pwr<P: OutputPin>(self, pwr_pin: P) -> Config<P> {
        Config {
            pwr_pin: Some(pwr_pin),
            pwr_active: PinState::High,
            apn: self.apn,
            registration: self.registration,
            timing: self.timing,
        }
    }

    /// Power enable pin, driven low to power the module
    pub fn with_inverted_pwr<P: OutputPin>(self, pwr_pin: P) -> Config<P> {
        Config {
            pwr_active: PinState::Low,
            ..self.with_pwr(pwr_pin)
        }
    }

    /// Accept roaming registrations as well as home network ones
    pub fn with_roaming(self) -> Self {
        Self {
            registration: RegistrationPolicy::HomeOrRoaming,
            ..self
        }
    }

    pub fn with_timing(self, timing: Timing) -> Self {
        Self { timing, ..self }
    }

    pub fn apn(&self) -> &str {
        &self.apn
    }

    pub fn registration_policy(&self) -> RegistrationPolicy {
        self.registration
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }
}
