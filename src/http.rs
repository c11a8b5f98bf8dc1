//! Parsing of the raw HTTP response the module dumps after `+HTTPGET` and
//! `+HTTPPOST`.
use core::ops::Range;

use crate::{error::HttpError, line::find};

pub const HTTP_OK: u16 = 200;

const HTTP_MARKER: &[u8] = b"HTTP/";
const CONTENT_LENGTH: &[u8] = b"Content-Length";
const CRLF: &[u8] = b"\r\n";

/// Location of the last HTTP body inside the response buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BodySlice {
    pub offset: usize,
    pub len: usize,
}

impl BodySlice {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Status code and, for `200`, the body of a raw HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<BodySlice>,
}

pub(crate) fn parse_response(blob: &[u8]) -> Result<HttpResponse, HttpError> {
    let status = status_code(blob)?;
    if status != HTTP_OK {
        return Ok(HttpResponse { status, body: None });
    }

    let len = content_length(blob)?;
    Ok(HttpResponse {
        status,
        body: Some(body_slice(blob, len)?),
    })
}

/// Leading decimal digits of `bytes`, after skipping spaces
fn leading_number<N: core::str::FromStr>(bytes: &[u8]) -> Option<N> {
    let start = bytes.iter().position(|&b| b != b' ')?;
    let digits = &bytes[start..];
    let end = digits
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    core::str::from_utf8(&digits[..end]).ok()?.parse().ok()
}

/// Status code following the `HTTP/x.y` version token
pub(crate) fn status_code(blob: &[u8]) -> Result<u16, HttpError> {
    let start = find(blob, HTTP_MARKER).ok_or(HttpError::UnparsableStatus)?;
    let status_line = &blob[start..];
    let version_end = status_line
        .iter()
        .position(|&b| b == b' ')
        .ok_or(HttpError::UnparsableStatus)?;

    leading_number(&status_line[version_end..]).ok_or(HttpError::UnparsableStatus)
}

pub(crate) fn content_length(blob: &[u8]) -> Result<usize, HttpError> {
    let start = find(blob, CONTENT_LENGTH).ok_or(HttpError::UnparsableLength)?;
    let value = blob[start + CONTENT_LENGTH.len()..]
        .strip_prefix(b":")
        .ok_or(HttpError::UnparsableLength)?;

    leading_number(value).ok_or(HttpError::UnparsableLength)
}

/// The body is the last `len` bytes of the blob, ignoring the CRLF the
/// module appends after it.
pub(crate) fn body_slice(blob: &[u8], len: usize) -> Result<BodySlice, HttpError> {
    let end = if blob.ends_with(CRLF) {
        blob.len() - CRLF.len()
    } else {
        blob.len()
    };
    let offset = end.checked_sub(len).ok_or(HttpError::UnparsableLength)?;

    Ok(BodySlice { offset, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body<'a>(blob: &'a [u8], resp: &HttpResponse) -> &'a [u8] {
        &blob[resp.body.unwrap().range()]
    }

    #[test]
    fn ok_response_with_body() {
        let blob = b"\r\n+HTTPGET: 1\r\nHTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello";
        let resp = parse_response(blob).unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(body(blob, &resp), b"hello");
    }

    #[test]
    fn trailing_crlf_is_not_body() {
        let blob = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 11\r\n\r\n{\"a\": true}\r\n";
        let resp = parse_response(blob).unwrap();

        assert_eq!(body(blob, &resp), b"{\"a\": true}");
    }

    #[test]
    fn empty_body() {
        let blob = b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n";
        let resp = parse_response(blob).unwrap();

        assert_eq!(body(blob, &resp), b"");
    }

    #[test]
    fn non_ok_status_skips_content_length() {
        let blob = b"HTTP/1.1 404 Not Found\r\nConnection: close\r\n\r\n";
        assert_eq!(
            parse_response(blob),
            Ok(HttpResponse {
                status: 404,
                body: None
            })
        );
    }

    #[test]
    fn missing_marker_or_status() {
        assert_eq!(status_code(b"+CME ERROR: 3\r\n"), Err(HttpError::UnparsableStatus));
        assert_eq!(status_code(b"HTTP/1.1 OK\r\n"), Err(HttpError::UnparsableStatus));
        assert_eq!(status_code(b"HTTP/1.0"), Err(HttpError::UnparsableStatus));
        assert_eq!(status_code(b"HTTP/1.0 301 Moved\r\n"), Ok(301));
    }

    #[test]
    fn missing_or_bad_content_length() {
        assert_eq!(
            parse_response(b"HTTP/1.1 200 OK\r\n\r\nhello"),
            Err(HttpError::UnparsableLength)
        );
        assert_eq!(
            content_length(b"Content-Length: abc\r\n"),
            Err(HttpError::UnparsableLength)
        );
        assert_eq!(content_length(b"Content-Length:42\r\n"), Ok(42));
    }

    #[test]
    fn content_length_beyond_blob() {
        assert_eq!(
            parse_response(b"HTTP/1.1 200 OK\r\nContent-Length: 500\r\n\r\nhello"),
            Err(HttpError::UnparsableLength)
        );
    }
}
