use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, PartialEq, AtatEnum)]
pub enum ResetMode {
    /// Reboot the module
    Reboot = 1,
}
