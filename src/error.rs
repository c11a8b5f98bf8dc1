use embedded_io::ErrorKind;

/// Failure of one step of the start-up sequence.
///
/// Every variant maps to a distinct negative code telling which step failed,
/// see [`StartError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartError {
    /// No `READY` banner after `AT+RST=1`
    ResetTimeout,
    /// No `+CREG:` answer to the registration query
    RegistrationTimeout,
    /// `+CREG:` answered with a status the registration policy rejects
    NotRegistered,
    /// No `+CGATT:1` after requesting packet service attach
    AttachTimeout,
    /// No acknowledgement of the PDP context definition
    ApnTimeout,
    /// No acknowledgement of the PDP context activation
    PdpActivationTimeout,
}

impl StartError {
    pub const fn code(&self) -> i8 {
        match self {
            Self::ResetTimeout => -1,
            Self::RegistrationTimeout => -2,
            Self::NotRegistered => -3,
            Self::AttachTimeout => -4,
            Self::ApnTimeout => -5,
            Self::PdpActivationTimeout => -6,
        }
    }
}

/// Failure of an HTTP exchange. A non-200 status code is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HttpError {
    Timeout,
    /// The response filled the whole response buffer and may be truncated
    BufferFull,
    NoResponse,
    UnparsableStatus,
    UnparsableLength,
}

impl HttpError {
    pub const fn code(&self) -> i8 {
        match self {
            Self::Timeout => -1,
            Self::BufferFull => -2,
            Self::NoResponse => -3,
            Self::UnparsableStatus => -4,
            Self::UnparsableLength => -5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    Timeout,
    Unparsable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    Start(StartError),
    Http(HttpError),
    Time(TimeError),

    /// The encoded command does not fit in the response buffer
    CommandTooLong,
    ApnTooLong,

    Io(ErrorKind),
    IoPin,
}

impl Error {
    /// Small integer code for callers that branch on numbers rather than
    /// variants.
    pub const fn code(&self) -> i8 {
        match self {
            Self::Start(e) => e.code(),
            Self::Http(e) => e.code(),
            Self::Time(_) => 0,
            Self::CommandTooLong => -20,
            Self::ApnTooLong => -21,
            Self::Io(_) => -30,
            Self::IoPin => -31,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::Start(e) => defmt::write!(f, "Start({:?})", e),
            Self::Http(e) => defmt::write!(f, "Http({:?})", e),
            Self::Time(e) => defmt::write!(f, "Time({:?})", e),
            Self::CommandTooLong => defmt::write!(f, "CommandTooLong"),
            Self::ApnTooLong => defmt::write!(f, "ApnTooLong"),
            Self::Io(e) => defmt::write!(f, "Io({:?})", e),
            Self::IoPin => defmt::write!(f, "IoPin"),
        }
    }
}

impl From<StartError> for Error {
    fn from(e: StartError) -> Self {
        Self::Start(e)
    }
}

impl From<HttpError> for Error {
    fn from(e: HttpError) -> Self {
        Self::Http(e)
    }
}

impl From<TimeError> for Error {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
