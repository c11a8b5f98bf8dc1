use embassy_time::Duration;

/// Sleep between polls of the serial port while waiting for a pattern
pub fn poll_interval() -> Duration {
    Duration::from_millis(20)
}

/// Time the power enable pin is held inactive before powering back on
pub fn power_off_hold() -> Duration {
    Duration::from_secs(1)
}

/// Settle time after the `READY` banner before the first query
pub fn boot_settle() -> Duration {
    Duration::from_millis(500)
}

/// Pause between consecutive commands of the start-up sequence
pub fn command_settle() -> Duration {
    Duration::from_millis(250)
}

/// Boot time after `AT+RST=1` until `READY`
pub fn reset_timeout() -> Duration {
    Duration::from_secs(30)
}

pub fn registration_timeout() -> Duration {
    Duration::from_secs(1)
}

pub fn attach_timeout() -> Duration {
    Duration::from_secs(30)
}

pub fn apn_timeout() -> Duration {
    Duration::from_secs(30)
}

/// PDP context activation is the slowest step of the sequence
pub fn pdp_activation_timeout() -> Duration {
    Duration::from_secs(45)
}

/// The HTTP exchange happens over the cellular bearer before `OK`
pub fn http_timeout() -> Duration {
    Duration::from_secs(45)
}

/// Pause between `OK` and reading the HTTP payload
pub fn http_settle() -> Duration {
    Duration::from_millis(250)
}

/// Window during which the raw HTTP payload is collected
pub fn http_burst_window() -> Duration {
    Duration::from_millis(500)
}

pub fn clock_timeout() -> Duration {
    Duration::from_secs(5)
}
