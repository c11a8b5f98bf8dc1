use embedded_io::{Read, ReadReady, Write};

use crate::error::Error;

/// Most bytes a single [`Transport::flush_input`] discards
pub const FLUSH_LIMIT: usize = 4096;

/// Owner of the serial link to the module.
///
/// Bytes go out verbatim; nothing here frames or interprets them.
pub struct Transport<T> {
    inner: T,
}

fn io<E: embedded_io::Error>(e: E) -> Error {
    Error::Io(e.kind())
}

impl<T> Transport<T>
where
    T: Read + Write + ReadReady,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.inner.write_all(bytes).map_err(io)?;
        self.inner.flush().map_err(io)
    }

    /// Whether at least one byte can be read without blocking
    pub fn available(&mut self) -> Result<bool, Error> {
        self.inner.read_ready().map_err(io)
    }

    pub fn read_one(&mut self) -> Result<Option<u8>, Error> {
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte).map_err(io)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        self.inner.read(buf).map_err(io)
    }

    /// Discard what is buffered on the receive side, at most [`FLUSH_LIMIT`]
    /// bytes per call.
    pub fn flush_input(&mut self) -> Result<usize, Error> {
        let mut scratch = [0u8; 32];
        let mut dropped = 0;
        while dropped < FLUSH_LIMIT && self.available()? {
            match self.read(&mut scratch)? {
                0 => break,
                n => dropped += n,
            }
        }
        if dropped >= FLUSH_LIMIT {
            warn!("Receive side still busy after flushing {} bytes", dropped);
        } else if dropped > 0 {
            debug!("Flushed {} stale bytes", dropped);
        }
        Ok(dropped)
    }

    pub fn release(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::MockSerial;

    #[test]
    fn flush_input_drops_pending_bytes() {
        let mut transport = Transport::new(MockSerial::new().with_pending(b"+CREG: 0,1\r\nOK\r\n"));

        assert!(transport.available().unwrap());
        assert_eq!(transport.flush_input().unwrap(), 16);
        assert!(!transport.available().unwrap());
        assert_eq!(transport.read_one().unwrap(), None);
    }

    #[test]
    fn flush_input_stops_at_limit() {
        let chatter = std::vec![b'x'; FLUSH_LIMIT + 100];
        let mut transport = Transport::new(MockSerial::new().with_pending(&chatter));

        let dropped = transport.flush_input().unwrap();

        assert!(dropped >= FLUSH_LIMIT && dropped < FLUSH_LIMIT + 32);
        assert!(transport.available().unwrap());
    }

    #[test]
    fn write_is_forwarded_verbatim() {
        let mut transport = Transport::new(MockSerial::new());
        transport.write(b"AT+CCLK?\r").unwrap();

        assert_eq!(transport.release().commands(), ["AT+CCLK?\r"]);
    }
}
