//! Record data from [RFC 2845]: the TSIG record type.
//!
//! [RFC 2845]: https://tools.ietf.org/html/rfc2845

use crate::base::iana::TsigRcode;
use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::base64;
use core::fmt;
use std::time::SystemTime;

//------------ Tsig ----------------------------------------------------------

/// Tsig record data.
///
/// Tsig records are appended to a message to authenticate a
/// transaction with a secret shared between the two parties. The
/// record is never cached and never appears in zones; it lives and
/// dies with the message it signs.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tsig {
    /// The name of the MAC algorithm in domain name form.
    algorithm: Name,

    /// The time the message was signed.
    time_signed: Time48,

    /// The number of seconds `time_signed` may be off.
    fudge: u16,

    /// The message authentication code.
    mac: Vec<u8>,

    /// The message ID of the original, unsigned message.
    original_id: u16,

    /// The TSIG error field of a response.
    error: TsigRcode,

    /// Additional data; carries the server time on a BADTIME error.
    other: Vec<u8>,
}

impl Tsig {
    /// Creates new Tsig record data from its components.
    ///
    /// Fails if the MAC or the other data are longer than 65,535
    /// octets, since their lengths are carried in 16 bit fields.
    pub fn new(
        algorithm: Name,
        time_signed: Time48,
        fudge: u16,
        mac: Vec<u8>,
        original_id: u16,
        error: TsigRcode,
        other: Vec<u8>,
    ) -> Result<Self, ParseError> {
        if mac.len() > usize::from(u16::MAX)
            || other.len() > usize::from(u16::MAX)
        {
            return Err(ParseError::form_error("long TSIG field"));
        }
        Ok(Tsig {
            algorithm,
            time_signed,
            fudge,
            mac,
            original_id,
            error,
            other,
        })
    }

    /// The name of the algorithm used.
    #[must_use]
    pub fn algorithm(&self) -> &Name {
        &self.algorithm
    }

    /// The time the message was signed.
    #[must_use]
    pub fn time_signed(&self) -> Time48 {
        self.time_signed
    }

    /// The allowed clock skew in seconds.
    #[must_use]
    pub fn fudge(&self) -> u16 {
        self.fudge
    }

    /// The message authentication code.
    #[must_use]
    pub fn mac(&self) -> &[u8] {
        &self.mac
    }

    /// The message ID of the original message.
    #[must_use]
    pub fn original_id(&self) -> u16 {
        self.original_id
    }

    /// The TSIG error of a signed response.
    #[must_use]
    pub fn error(&self) -> TsigRcode {
        self.error
    }

    /// The other data field.
    #[must_use]
    pub fn other(&self) -> &[u8] {
        &self.other
    }

    /// Returns whether a given time is within the fudge window.
    #[must_use]
    pub fn is_valid_at(&self, now: Time48) -> bool {
        now.eq_with_fudge(self.time_signed, u64::from(self.fudge))
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let algorithm = Name::parse(parser)?;
        let time_signed = Time48::parse(parser)?;
        let fudge = parser.parse_u16()?;
        let mac_len = usize::from(parser.parse_u16()?);
        let mac = parser.parse_slice(mac_len)?.to_vec();
        let original_id = parser.parse_u16()?;
        let error = TsigRcode::parse(parser)?;
        let other_len = usize::from(parser.parse_u16()?);
        let other = parser.parse_slice(other_len)?.to_vec();
        Self::new(
            algorithm,
            time_signed,
            fudge,
            mac,
            original_id,
            error,
            other,
        )
    }

    pub fn compose(&self, target: &mut Composer) {
        // TSIG is a meta record; its names are never compressed.
        self.algorithm.compose_uncompressed(target);
        self.time_signed.compose(target);
        target.append_u16(self.fudge);
        target.append_u16(self.mac.len() as u16);
        target.append_slice(&self.mac);
        target.append_u16(self.original_id);
        self.error.compose(target);
        target.append_u16(self.other.len() as u16);
        target.append_slice(&self.other);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let algorithm = scanner.scan_name()?;
        let time_signed = scanner
            .scan_token()?
            .parse()
            .map(Time48::from_u64)
            .map_err(|_| ScanError::custom("expected a timestamp"))?;
        let fudge = scanner.scan_u16()?;
        let mac = base64::decode(scanner.scan_token()?)?;
        let original_id = scanner.scan_u16()?;
        let error = TsigRcode::from_int(scanner.scan_u16()?);
        let other = if scanner.is_exhausted() {
            Vec::new()
        } else {
            base64::decode(scanner.scan_token()?)?
        };
        Self::new(
            algorithm,
            time_signed,
            fudge,
            mac,
            original_id,
            error,
            other,
        )
        .map_err(Into::into)
    }
}

//--- Display

impl fmt::Display for Tsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.algorithm,
            self.time_signed,
            self.fudge,
            base64::encode_string(&self.mac),
            self.original_id,
            self.error
        )?;
        if !self.other.is_empty() {
            write!(f, " {}", base64::encode_string(&self.other))?;
        }
        Ok(())
    }
}

//------------ Time48 --------------------------------------------------------

/// A 48-bit Unix timestamp as used by the TSIG time signed field.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time48(u64);

impl Time48 {
    /// Returns the current time as a 48-bit timestamp.
    #[must_use]
    pub fn now() -> Time48 {
        Time48::from_u64(
            SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .expect("system time before Unix epoch")
                .as_secs(),
        )
    }

    /// Creates a timestamp from a 64-bit integer, truncated to 48 bits.
    #[must_use]
    pub fn from_u64(value: u64) -> Time48 {
        Time48(value & 0x0000_FFFF_FFFF_FFFF)
    }

    /// Returns the raw second count.
    #[must_use]
    pub fn to_u64(self) -> u64 {
        self.0
    }

    /// Returns whether two times are within `fudge` seconds.
    #[must_use]
    pub fn eq_with_fudge(self, other: Time48, fudge: u64) -> bool {
        self.0.abs_diff(other.0) <= fudge
    }

    /// Takes a timestamp from the beginning of a parser.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let slice = parser.parse_slice(6)?;
        Ok(Time48(
            u64::from(slice[0]) << 40
                | u64::from(slice[1]) << 32
                | u64::from(slice[2]) << 24
                | u64::from(slice[3]) << 16
                | u64::from(slice[4]) << 8
                | u64::from(slice[5]),
        ))
    }

    /// Appends the six octet wire format to a composer.
    pub fn compose(&self, target: &mut Composer) {
        target.append_slice(&self.0.to_be_bytes()[2..])
    }
}

impl From<Time48> for u64 {
    fn from(value: Time48) -> u64 {
        value.to_u64()
    }
}

impl fmt::Display for Time48 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

//============ Test ==========================================================
