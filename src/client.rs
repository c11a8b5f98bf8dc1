use atat::AtatCmd;
use embassy_time::{block_for, Duration, Instant};
use embedded_hal::digital::OutputPin;
use embedded_io::{Read, ReadReady, Write};

use crate::{
    clock::{parse_clock_line, TimeSyncAnchor},
    command::{
        http::{HttpGet, HttpPost, BODY_MAX_LEN, POST_CONTENT_TYPE, URL_MAX_LEN},
        mobile_control::GetClock,
    },
    config::{Config, NoPin},
    error::{Error, HttpError, StartError, TimeError},
    http::{parse_response, BodySlice},
    port::{AtPort, Wait},
    registration::registration_status,
    state::{start_sequence, SessionState, StartCommand},
};

/// Blocking session with an A9/A9G module.
///
/// `LINE_LEN` bounds a single received line, `RESP_LEN` bounds both an
/// encoded command and a raw HTTP response.
pub struct Modem<T, PWR = NoPin, const LINE_LEN: usize = 2048, const RESP_LEN: usize = 2048> {
    port: AtPort<T, LINE_LEN>,
    pub(crate) config: Config<PWR>,
    response: [u8; RESP_LEN],
    body: Option<BodySlice>,
    anchor: Option<TimeSyncAnchor>,
    pub(crate) state: SessionState,
}

impl<T, PWR, const LINE_LEN: usize, const RESP_LEN: usize> Modem<T, PWR, LINE_LEN, RESP_LEN>
where
    T: Read + Write + ReadReady,
    PWR: OutputPin,
{
    /// Wrap an already configured serial link. The module is powered off if a
    /// power pin is configured.
    pub fn new(serial: T, config: Config<PWR>) -> Self {
        let mut modem = Self {
            port: AtPort::new(serial, config.timing.poll_interval),
            config,
            response: [0; RESP_LEN],
            body: None,
            anchor: None,
            state: SessionState::PoweredOff,
        };

        if modem.config.pwr_pin.is_some() {
            if let Err(e) = modem.power_off() {
                warn!("Failed to power module off: {:?}", e);
            }
        }
        modem
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &Config<PWR> {
        &self.config
    }

    /// Power cycle the module and bring up a packet data session.
    ///
    /// On failure the session stays at the last state reached; calling
    /// `start` again begins from a fresh power cycle.
    pub fn start(&mut self) -> Result<(), Error> {
        info!("Starting modem session");
        let timing = self.config.timing;

        self.power_off()?;
        block_for(timing.power_off_hold);
        self.port.flush_input()?;
        self.power_on()?;

        let apn = self.config.apn.clone();
        for step in start_sequence(&apn, &timing) {
            if step.settle > Duration::from_ticks(0) {
                block_for(step.settle);
            }
            self.port.flush_input()?;

            self.send_start_command(&step.command)?;

            if self.port.wait_for_pattern(step.pattern, step.timeout)? == Wait::TimedOut {
                error!(
                    "Start failed in {:?}: {:?}",
                    self.state, step.on_timeout
                );
                return Err(step.on_timeout.into());
            }

            if step.target == SessionState::RegistrationChecked {
                let stat = registration_status(self.port.last_line());
                match stat {
                    Some(stat) if self.config.registration.accepts(stat) => {}
                    _ => {
                        warn!("Registration rejected: {:?}", stat);
                        return Err(StartError::NotRegistered.into());
                    }
                }
            }

            debug!("{:?} -> {:?}", self.state, step.target);
            self.state = step.target;
        }

        info!("Modem session active");
        Ok(())
    }

    fn send_start_command(&mut self, command: &StartCommand<'_>) -> Result<(), Error> {
        match command {
            StartCommand::Reset(cmd) => self.send(cmd),
            StartCommand::Registration(cmd) => self.send(cmd),
            StartCommand::Attach(cmd) => self.send(cmd),
            StartCommand::Apn(cmd) => self.send(cmd),
            StartCommand::Activate(cmd) => self.send(cmd),
        }
    }

    /// `GET` `url`, returning the HTTP status code. The body of a `200`
    /// response is then available from [`Self::last_http_response`].
    pub fn http_get(&mut self, url: &str) -> Result<u16, Error> {
        if url.len() > URL_MAX_LEN {
            return Err(Error::CommandTooLong);
        }
        self.http_exchange(&HttpGet { url })
    }

    /// `POST` `body` as `text/plain` to `url`, returning the HTTP status code.
    pub fn http_post(&mut self, url: &str, body: &str) -> Result<u16, Error> {
        if url.len() > URL_MAX_LEN || body.len() > BODY_MAX_LEN {
            return Err(Error::CommandTooLong);
        }
        self.http_exchange(&HttpPost {
            url,
            content_type: POST_CONTENT_TYPE,
            body,
        })
    }

    fn http_exchange<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<u16, Error> {
        let timing = self.config.timing;

        self.port.flush_input()?;
        self.send(cmd)?;
        if self.port.wait_for_pattern(b"OK", timing.http_timeout)? == Wait::TimedOut {
            return Err(HttpError::Timeout.into());
        }

        block_for(timing.http_settle);
        let count = self
            .port
            .read_burst(&mut self.response, timing.http_burst_window)?;
        if count == RESP_LEN {
            warn!("HTTP response filled the {} byte buffer", RESP_LEN);
            return Err(HttpError::BufferFull.into());
        }
        if count == 0 {
            return Err(HttpError::NoResponse.into());
        }

        let resp = parse_response(&self.response[..count]).map_err(|e| {
            warn!("Unparsable HTTP response: {:?}", e);
            e
        })?;
        debug!("HTTP {} with {} raw bytes", resp.status, count);
        self.body = resp.body;
        Ok(resp.status)
    }

    /// Body of the last successful `200` exchange. Any command sent since
    /// invalidates it.
    pub fn last_http_response(&self) -> Option<&[u8]> {
        self.body.map(|body| &self.response[body.range()])
    }

    /// Current network time in Unix seconds.
    ///
    /// The module clock is queried once; later calls extrapolate from the
    /// local clock without talking to the module.
    pub fn gsm_time(&mut self) -> Result<u64, Error> {
        if let Some(anchor) = self.anchor {
            return Ok(anchor.now());
        }

        let timeout = self.config.timing.clock_timeout;
        self.port.flush_input()?;
        self.send(&GetClock)?;
        if self.port.wait_for_pattern(b"+CCLK:", timeout)? == Wait::TimedOut {
            return Err(TimeError::Timeout.into());
        }
        let local = Instant::now();

        let unix = parse_clock_line(self.port.last_line())?;
        let anchor = TimeSyncAnchor::new(local, unix);
        debug!("Network time synced: {}", unix);
        self.anchor = Some(anchor);
        Ok(anchor.now())
    }

    /// [`Self::gsm_time`], or `0` if the time could not be obtained.
    pub fn get_gsm_time(&mut self) -> u64 {
        self.gsm_time().unwrap_or_else(|e| {
            info!("Network time unavailable: {:?}", e);
            0
        })
    }

    pub fn time_anchor(&self) -> Option<TimeSyncAnchor> {
        self.anchor
    }

    /// Power the module off and drop anything left on the receive side.
    pub fn stop(&mut self) -> Result<(), Error> {
        info!("Stopping modem session");
        self.power_off()?;
        self.port.flush_input()
    }

    /// Most recently completed line, terminator included.
    pub fn last_line(&self) -> &[u8] {
        self.port.last_line()
    }

    /// Whether the last line was longer than `LINE_LEN` and lost its tail.
    pub fn last_line_truncated(&self) -> bool {
        self.port.last_line_truncated()
    }

    /// Encode and send a command without waiting for anything.
    pub fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<(), Error> {
        if Cmd::MAX_LEN > RESP_LEN {
            return Err(Error::CommandTooLong);
        }
        self.body = None;
        let len = cmd.write(&mut self.response);
        self.port.write(&self.response[..len])
    }

    /// Send raw bytes, terminator included.
    pub fn send_raw(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.body = None;
        self.port.write(bytes)
    }

    pub fn wait_for(&mut self, pattern: &[u8], timeout: Duration) -> Result<Wait, Error> {
        self.port.wait_for_pattern(pattern, timeout)
    }

    /// Tear the session down, handing back the serial link and power pin.
    pub fn release(self) -> (T, Option<PWR>) {
        (self.port.release(), self.config.pwr_pin)
    }
}
