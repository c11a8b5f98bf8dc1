use std::{collections::VecDeque, string::String, vec::Vec};

use embassy_time::Duration;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_io::{ErrorType, Read, ReadReady, Write};

use crate::config::Timing;

/// Scripted serial link.
///
/// Every command written (anything up to and including `\r`) is recorded and
/// releases the next queued reply onto the receive side.
#[derive(Debug, Default)]
pub struct MockSerial {
    rx: VecDeque<u8>,
    replies: VecDeque<Vec<u8>>,
    partial: Vec<u8>,
    commands: Vec<Vec<u8>>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes already waiting on the receive side
    pub fn with_pending(mut self, bytes: &[u8]) -> Self {
        self.rx.extend(bytes);
        self
    }

    /// Reply to the next command that has no reply yet. An empty reply means
    /// the module stays silent.
    pub fn reply(mut self, bytes: &[u8]) -> Self {
        self.replies.push_back(bytes.to_vec());
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }
}

impl ErrorType for MockSerial {
    type Error = core::convert::Infallible;
}

impl Read for MockSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.rx.len());
        for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl ReadReady for MockSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.rx.is_empty())
    }
}

impl Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            self.partial.push(byte);
            if byte == b'\r' {
                self.commands.push(core::mem::take(&mut self.partial));
                if let Some(reply) = self.replies.pop_front() {
                    self.rx.extend(reply);
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Output pin remembering every level it was driven to, `true` for high.
#[derive(Debug, Default)]
pub struct MockPin {
    pub levels: Vec<bool>,
}

impl PinErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

/// Output pin whose every write fails.
#[derive(Debug, Default)]
pub struct FailingPin;

impl PinErrorType for FailingPin {
    type Error = embedded_hal::digital::ErrorKind;
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(embedded_hal::digital::ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(embedded_hal::digital::ErrorKind::Other)
    }
}

/// Module timing scaled down so scripted sessions finish quickly.
pub fn fast_timing() -> Timing {
    let short = Duration::from_millis(1);
    let deadline = Duration::from_millis(50);

    Timing {
        poll_interval: short,
        power_off_hold: short,
        boot_settle: short,
        command_settle: short,
        reset_timeout: deadline,
        registration_timeout: deadline,
        attach_timeout: deadline,
        apn_timeout: deadline,
        pdp_activation_timeout: deadline,
        http_timeout: deadline,
        http_settle: short,
        http_burst_window: Duration::from_millis(20),
        clock_timeout: deadline,
    }
}
