use core::cmp::min;

use embassy_time::{block_for, Duration, Instant};
use embedded_io::{Read, ReadReady, Write};

use crate::{
    error::Error,
    fmt::ascii,
    line::{find, LineBuffer},
    transport::Transport,
};

/// Outcome of [`AtPort::wait_for_pattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wait {
    Matched,
    TimedOut,
}

/// Serial link plus the line assembler reading from it.
pub struct AtPort<T, const LINE_LEN: usize> {
    transport: Transport<T>,
    line: LineBuffer<LINE_LEN>,
    poll_interval: Duration,
}

impl<T, const LINE_LEN: usize> AtPort<T, LINE_LEN>
where
    T: Read + Write + ReadReady,
{
    pub fn new(serial: T, poll_interval: Duration) -> Self {
        Self {
            transport: Transport::new(serial),
            line: LineBuffer::new(),
            poll_interval,
        }
    }

    pub fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        trace!("> {}", ascii(bytes));
        self.transport.write(bytes)
    }

    pub fn flush_input(&mut self) -> Result<(), Error> {
        self.transport.flush_input().map(|_| ())
    }

    /// Consume received lines until one contains `pattern` or `timeout`
    /// expires.
    ///
    /// Matching is per line: the first completed line containing `pattern`
    /// anywhere wins, and a pattern split over two lines never matches.
    pub fn wait_for_pattern(&mut self, pattern: &[u8], timeout: Duration) -> Result<Wait, Error> {
        self.line.clear();
        let start = Instant::now();

        loop {
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                return Ok(Wait::TimedOut);
            }

            if self.transport.available()? {
                let Some(byte) = self.transport.read_one()? else {
                    continue;
                };
                if let Some(line) = self.line.push(byte) {
                    trace!("< {}", ascii(line));
                    if find(line, pattern).is_some() {
                        return Ok(Wait::Matched);
                    }
                }
                continue;
            }

            block_for(min(self.poll_interval, timeout - elapsed));
        }
    }

    /// Read raw bytes straight into `buf`, bypassing the line assembler,
    /// until it is full or `window` has passed.
    pub fn read_burst(&mut self, buf: &mut [u8], window: Duration) -> Result<usize, Error> {
        let start = Instant::now();
        let mut count = 0;

        while count < buf.len() {
            let elapsed = start.elapsed();
            if elapsed >= window {
                break;
            }
            if self.transport.available()? {
                count += self.transport.read(&mut buf[count..])?;
                continue;
            }
            block_for(min(self.poll_interval, window - elapsed));
        }

        trace!("< {} raw bytes", count);
        Ok(count)
    }

    pub fn last_line(&self) -> &[u8] {
        self.line.last()
    }

    pub fn last_line_truncated(&self) -> bool {
        self.line.last_truncated()
    }

    pub fn release(self) -> T {
        self.transport.release()
    }
}
