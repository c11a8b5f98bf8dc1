//! Responses for Network service commands
use super::types::NetworkRegistrationStat;
use atat::atat_derive::AtatResp;
use heapless::String;

/// Network registration status +CREG
///
/// `<n>` is whatever URC mode the module is in; only `<stat>` is interpreted.
/// `<lac>` and `<ci>` are present in the verbose mode (`<n>` = 2).
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct NetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1)]
    pub stat: NetworkRegistrationStat,
    #[at_arg(position = 2)]
    pub lac: Option<String<8>>,
    #[at_arg(position = 3)]
    pub ci: Option<String<16>>,
    #[at_arg(position = 4)]
    pub act_status: Option<u8>,
}
