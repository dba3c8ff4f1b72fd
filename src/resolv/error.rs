//! Resolver errors.

use crate::base::iana::Rcode;
use crate::base::message::Message;
use crate::base::wire::{ParseError, PushError};
use crate::sig0::SignError;
use crate::tsig::ValidationError;
use core::fmt;
use std::io;

//------------ Error ---------------------------------------------------------

/// An error happened while resolving.
///
/// The error combines a kind, a human-readable message, and, where a
/// response was received but rejected, the offending response.
#[derive(Clone, Debug)]
pub struct Error {
    /// What kind of error happened.
    kind: ErrorKind,

    /// A description of this particular occurrence.
    message: String,

    /// The response that caused the error, if there is one.
    response: Option<Box<Message>>,
}

impl Error {
    /// Creates a new error from a kind and message.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
            response: None,
        }
    }

    /// Attaches the response that caused the error.
    #[must_use]
    pub fn with_response(mut self, response: Message) -> Self {
        self.response = Some(Box::new(response));
        self
    }

    /// Returns the kind of the error.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the rejected response, if there is one.
    #[must_use]
    pub fn response(&self) -> Option<&Message> {
        self.response.as_deref()
    }

    /// Creates an error for a response RCODE other than NOERROR.
    ///
    /// The message is the standard mnemonic of the code.
    #[must_use]
    pub fn for_rcode(rcode: Rcode) -> Self {
        Error::new(ErrorKind::Rcode(rcode), rcode.to_string())
    }
}

//--- From

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::new(ErrorKind::Parse(err), err.to_string())
    }
}

impl From<super::conf::ConfError> for Error {
    fn from(err: super::conf::ConfError) -> Self {
        let kind = match err {
            super::conf::ConfError::ParseError => {
                ErrorKind::NsInvalidEntry
            }
            super::conf::ConfError::Io(_) => ErrorKind::NsInvalidFile,
        };
        Error::new(kind, err.to_string())
    }
}

impl From<PushError> for Error {
    fn from(err: PushError) -> Self {
        Error::new(ErrorKind::PacketInvalid, err.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
                ErrorKind::SocketTimeout
            }
            _ => ErrorKind::NsSocketFailed,
        };
        Error::new(kind, err.to_string())
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::new(ErrorKind::HeaderInvalid, err.to_string())
    }
}

impl From<SignError> for Error {
    fn from(err: SignError) -> Self {
        let kind = match err {
            SignError::Unavailable => ErrorKind::CryptoUnavailable,
            SignError::InvalidAlgorithm(_) => {
                ErrorKind::InvalidAlgorithm
            }
            _ => ErrorKind::PacketInvalid,
        };
        Error::new(kind, err.to_string())
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

//------------ ErrorKind -----------------------------------------------------

/// The kinds of resolver errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed wire data.
    Parse(ParseError),

    /// A response header failed validation.
    HeaderInvalid,

    /// A response carried an RCODE other than NOERROR.
    Rcode(Rcode),

    /// A name server entry is unusable.
    NsInvalidEntry,

    /// A name server configuration file is unusable.
    NsInvalidFile,

    /// A socket could not be created or bound.
    NsInvalidSocket,

    /// Socket I/O towards a name server failed.
    NsSocketFailed,

    /// All name servers failed.
    NsFailed,

    /// An I/O deadline was exceeded.
    SocketTimeout,

    /// The shared-memory cache backend is unavailable.
    CacheShmUnavail,

    /// The selected cache configuration is not supported.
    CacheUnsupported,

    /// The cryptographic backend is unavailable.
    CryptoUnavailable,

    /// A signing algorithm is not usable.
    InvalidAlgorithm,

    /// A record could not be constructed or is of an unusable type.
    RrInvalid,

    /// A request is too short or otherwise unfit to send.
    PacketInvalid,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::Parse(_) => f.write_str("parse error"),
            ErrorKind::HeaderInvalid => f.write_str("invalid header"),
            ErrorKind::Rcode(rcode) => {
                write!(f, "response code {}", rcode)
            }
            ErrorKind::NsInvalidEntry => {
                f.write_str("invalid name server entry")
            }
            ErrorKind::NsInvalidFile => {
                f.write_str("invalid name server file")
            }
            ErrorKind::NsInvalidSocket => f.write_str("invalid socket"),
            ErrorKind::NsSocketFailed => f.write_str("socket failed"),
            ErrorKind::NsFailed => f.write_str("name servers failed"),
            ErrorKind::SocketTimeout => f.write_str("socket timeout"),
            ErrorKind::CacheShmUnavail => {
                f.write_str("shared memory cache unavailable")
            }
            ErrorKind::CacheUnsupported => {
                f.write_str("unsupported cache configuration")
            }
            ErrorKind::CryptoUnavailable => {
                f.write_str("crypto backend unavailable")
            }
            ErrorKind::InvalidAlgorithm => {
                f.write_str("invalid algorithm")
            }
            ErrorKind::RrInvalid => f.write_str("invalid record"),
            ErrorKind::PacketInvalid => f.write_str("invalid packet"),
        }
    }
}

//------------ Result --------------------------------------------------------

/// The result type for resolver operations.
pub type Result<T> = core::result::Result<T, Error>;
