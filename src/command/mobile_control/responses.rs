//! Responses for Mobile equipment control and status Commands
use atat::atat_derive::AtatResp;
use heapless::String;

/// Clock +CCLK
///
/// `<time>` has the format `"yy/MM/dd,hh:mm:ss±zz"`, where `zz` is the
/// offset from UTC in quarters of an hour.
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct NetworkTime {
    #[at_arg(position = 0)]
    pub time: String<32>,
}
