use crate::{
    command::network_service::{
        responses::NetworkRegistrationStatus, types::NetworkRegistrationStat,
    },
    config::RegistrationPolicy,
    line::find,
};

const CREG_PREFIX: &[u8] = b"+CREG:";

impl NetworkRegistrationStat {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered | Self::RegisteredRoaming)
    }

    pub fn is_roaming(&self) -> bool {
        matches!(self, Self::RegisteredRoaming)
    }
}

impl RegistrationPolicy {
    pub fn accepts(&self, stat: NetworkRegistrationStat) -> bool {
        match self {
            Self::HomeOnly => stat == NetworkRegistrationStat::Registered,
            Self::HomeOrRoaming => stat.is_registered(),
        }
    }
}

/// Extract `<stat>` from a received `+CREG: <n>,<stat>` line.
pub(crate) fn registration_status(line: &[u8]) -> Option<NetworkRegistrationStat> {
    let start = find(line, CREG_PREFIX)?;
    atat::serde_at::from_slice::<NetworkRegistrationStatus>(line[start..].trim_ascii())
        .ok()
        .map(|resp| resp.stat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_home_registration() {
        assert_eq!(
            registration_status(b"+CREG: 0,1\r\n"),
            Some(NetworkRegistrationStat::Registered)
        );
    }

    #[test]
    fn parses_after_echo() {
        assert_eq!(
            registration_status(b"AT+CREG?\r+CREG: 1,5\r\n"),
            Some(NetworkRegistrationStat::RegisteredRoaming)
        );
    }

    #[test]
    fn parses_verbose_registration() {
        assert_eq!(
            registration_status(b"+CREG: 2,1,\"2A3B\",\"0C4D\"\r\n"),
            Some(NetworkRegistrationStat::Registered)
        );
        assert_eq!(
            registration_status(b"+CREG: 2,5,\"2A3B\",\"0C4D\",0\r\n"),
            Some(NetworkRegistrationStat::RegisteredRoaming)
        );
    }

    #[test]
    fn urc_mode_is_not_interpreted() {
        assert_eq!(
            registration_status(b"+CREG: 3,1\r\n"),
            Some(NetworkRegistrationStat::Registered)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(registration_status(b"+CREG: x\r\n"), None);
        assert_eq!(registration_status(b"OK\r\n"), None);
    }

    #[test]
    fn home_only_policy_rejects_roaming() {
        let policy = RegistrationPolicy::HomeOnly;
        assert!(policy.accepts(NetworkRegistrationStat::Registered));
        assert!(!policy.accepts(NetworkRegistrationStat::RegisteredRoaming));
        assert!(!policy.accepts(NetworkRegistrationStat::Unknown));
    }

    #[test]
    fn roaming_policy_accepts_roaming() {
        let policy = RegistrationPolicy::HomeOrRoaming;
        assert!(policy.accepts(NetworkRegistrationStat::Registered));
        assert!(policy.accepts(NetworkRegistrationStat::RegisteredRoaming));
        assert!(!policy.accepts(NetworkRegistrationStat::NotRegisteredSearching));
        assert!(!policy.accepts(NetworkRegistrationStat::RegistrationDenied));
    }
}
