use embedded_hal::digital::OutputPin;
use embedded_io::{Read, ReadReady, Write};

use crate::{client::Modem, error::Error, state::SessionState};

impl<T, PWR, const LINE_LEN: usize, const RESP_LEN: usize> Modem<T, PWR, LINE_LEN, RESP_LEN>
where
    T: Read + Write + ReadReady,
    PWR: OutputPin,
{
    /// Drive the power enable pin to its active level.
    pub(crate) fn power_on(&mut self) -> Result<(), Error> {
        if let Some(pin) = self.config.pwr_pin.as_mut() {
            debug!("Powering module on");
            pin.set_state(self.config.pwr_active)
                .map_err(|_| Error::IoPin)?;
        } else {
            info!("No power pin configured");
        }
        Ok(())
    }

    /// Drive the power enable pin to its inactive level.
    pub(crate) fn power_off(&mut self) -> Result<(), Error> {
        if let Some(pin) = self.config.pwr_pin.as_mut() {
            debug!("Powering module off");
            pin.set_state(!self.config.pwr_active)
                .map_err(|_| Error::IoPin)?;
        } else {
            info!("No power pin configured");
        }
        self.state = SessionState::PoweredOff;
        Ok(())
    }
}
