//! Network time, synchronised once from `+CCLK` and then kept locally.
use chrono::NaiveDate;
use embassy_time::Instant;

use crate::{
    command::mobile_control::responses::NetworkTime, error::TimeError, line::find,
};

const CCLK_PREFIX: &[u8] = b"+CCLK:";

/// Two digit years reported by the module count from this year
const CENTURY: i32 = 2000;

/// Pairs a local monotonic instant with the network time it corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSyncAnchor {
    local: Instant,
    unix: u64,
}

impl TimeSyncAnchor {
    pub fn new(local: Instant, unix: u64) -> Self {
        Self { local, unix }
    }

    /// Current Unix time, extrapolated from the local clock
    pub fn now(&self) -> u64 {
        self.at(Instant::now())
    }

    pub fn at(&self, local: Instant) -> u64 {
        local.saturating_duration_since(self.local).as_secs() + self.unix
    }
}

/// Parse the `+CCLK: "yy/MM/dd,hh:mm:ss±zz"` line into Unix seconds.
pub(crate) fn parse_clock_line(line: &[u8]) -> Result<u64, TimeError> {
    let start = find(line, CCLK_PREFIX).ok_or(TimeError::Unparsable)?;
    let resp: NetworkTime = atat::serde_at::from_slice(line[start..].trim_ascii())
        .map_err(|_| TimeError::Unparsable)?;
    unix_time(&resp.time)
}

/// Convert `yy/MM/dd,hh:mm:ss[±zz]` to Unix seconds. The time is taken as
/// UTC; the zone field is not applied.
pub(crate) fn unix_time(time: &str) -> Result<u64, TimeError> {
    let [year, month, day, hour, minute, second] = fields(time).ok_or(TimeError::Unparsable)?;

    let timestamp = NaiveDate::from_ymd_opt(CENTURY + year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or(TimeError::Unparsable)?
        .and_utc()
        .timestamp();

    u64::try_from(timestamp).map_err(|_| TimeError::Unparsable)
}

/// Exactly six numeric fields, or nothing.
fn fields(time: &str) -> Option<[u32; 6]> {
    let (date, time) = time.split_once(',')?;
    let mut out = [0u32; 6];

    let mut date = date.split('/');
    for field in out[..3].iter_mut() {
        *field = date.next()?.parse().ok()?;
    }
    if date.next().is_some() {
        return None;
    }

    // Seconds run up to the zone sign, if any
    let time = time
        .split_once(|c: char| c == '+' || c == '-')
        .map_or(time, |(clock, _zone)| clock);
    let mut time = time.split(':');
    for field in out[3..].iter_mut() {
        *field = time.next()?.parse().ok()?;
    }
    if time.next().is_some() {
        return None;
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use embassy_time::Duration;

    use super::*;

    #[test]
    fn converts_network_time() {
        // 2024-10-17T12:34:56Z
        assert_eq!(unix_time("24/10/17,12:34:56+08"), Ok(1_729_168_496));
        assert_eq!(unix_time("24/10/17,12:34:56"), Ok(1_729_168_496));
        assert_eq!(unix_time("00/01/01,00:00:00-04"), Ok(946_684_800));
    }

    #[test]
    fn parses_cclk_line() {
        assert_eq!(
            parse_clock_line(b"+CCLK: \"24/10/17,12:34:56+08\"\r\n"),
            Ok(1_729_168_496)
        );
    }

    #[test]
    fn fewer_than_six_fields_is_unparsable() {
        assert_eq!(unix_time("24/10/17,12:34"), Err(TimeError::Unparsable));
        assert_eq!(unix_time("24/10,12:34:56"), Err(TimeError::Unparsable));
        assert_eq!(unix_time("24/10/17"), Err(TimeError::Unparsable));
        assert_eq!(
            parse_clock_line(b"+CCLK: \"24/10/17,12:34\"\r\n"),
            Err(TimeError::Unparsable)
        );
    }

    #[test]
    fn non_numeric_or_impossible_date_is_unparsable() {
        assert_eq!(unix_time("24/xx/17,12:34:56"), Err(TimeError::Unparsable));
        assert_eq!(unix_time("24/13/17,12:34:56"), Err(TimeError::Unparsable));
        assert_eq!(unix_time("24/02/30,12:34:56"), Err(TimeError::Unparsable));
    }

    #[test]
    fn anchor_extrapolates_from_local_clock() {
        let local = Instant::from_secs(100);
        let anchor = TimeSyncAnchor::new(local, 1_729_168_496);

        assert_eq!(anchor.at(local), 1_729_168_496);
        assert_eq!(anchor.at(local + Duration::from_millis(2_999)), 1_729_168_498);
        // Local clock readings before the anchor never go back in time
        assert_eq!(anchor.at(Instant::from_secs(50)), 1_729_168_496);
    }
}
