/// Line feed, ends every line the module sends
pub(crate) const LINE_TERMINATOR: u8 = b'\n';

/// Position of the first occurrence of `needle` in `haystack`
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Fixed capacity buffer assembling one received line at a time.
///
/// Bytes past the capacity are dropped, but the line still completes on the
/// next terminator with whatever prefix fit.
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    cursor: usize,
    /// Length of the last completed line, 0 once a new line has started
    len: usize,
    truncated: bool,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            cursor: 0,
            len: 0,
            truncated: false,
        }
    }

    pub fn clear(&mut self) {
        self.cursor = 0;
        self.len = 0;
        self.truncated = false;
    }

    /// Feed one byte, returning the completed line when `byte` terminates it.
    pub fn push(&mut self, byte: u8) -> Option<&[u8]> {
        if self.cursor == 0 {
            // Starting a new line overwrites the previous one
            self.len = 0;
            self.truncated = false;
        }

        if self.cursor < N {
            self.buf[self.cursor] = byte;
            self.cursor += 1;
        } else if !self.truncated {
            self.truncated = true;
            warn!(
                "Line buffer is full ({} bytes), dropping the rest of the line",
                N
            );
        }

        if byte == LINE_TERMINATOR {
            self.len = self.cursor;
            self.cursor = 0;
            return Some(&self.buf[..self.len]);
        }
        None
    }

    /// The most recently completed line, terminator included
    pub fn last(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Whether the most recently completed line lost bytes to overflow
    pub fn last_truncated(&self) -> bool {
        self.len > 0 && self.truncated
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
