//! HTTP client commands
//!
//! The module performs the whole request over the active PDP context and,
//! after `OK`, dumps the raw HTTP response (status line, headers and body)
//! onto the serial link.
use atat::atat_derive::AtatCmd;

use super::NoResponse;

/// Longest URL accepted by the HTTP commands
pub const URL_MAX_LEN: usize = 512;

/// Longest body accepted by [`HttpPost`]
pub const BODY_MAX_LEN: usize = 1024;

/// Content type sent with every POST
pub const POST_CONTENT_TYPE: &str = "text/plain";

/// HTTP GET request +HTTPGET
#[derive(Clone, AtatCmd)]
#[at_cmd("+HTTPGET", NoResponse, termination = "\r")]
pub struct HttpGet<'a> {
    #[at_arg(position = 0, len = 512)]
    pub url: &'a str,
}

/// HTTP POST request +HTTPPOST
#[derive(Clone, AtatCmd)]
#[at_cmd("+HTTPPOST", NoResponse, termination = "\r")]
pub struct HttpPost<'a> {
    #[at_arg(position = 0, len = 512)]
    pub url: &'a str,
    #[at_arg(position = 1, len = 16)]
    pub content_type: &'a str,
    #[at_arg(position = 2, len = 1024)]
    pub body: &'a str,
}
