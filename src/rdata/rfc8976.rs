//! Record data from [RFC 8976]: the ZONEMD record type.
//!
//! [RFC 8976]: https://tools.ietf.org/html/rfc8976

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::base16;
use core::fmt;

//------------ Zonemd --------------------------------------------------------

/// Zonemd record data.
///
/// Zonemd records carry a message digest over the content of an entire
/// zone, keyed by the zone's SOA serial, so a transferred copy can be
/// verified.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Zonemd {
    serial: u32,
    scheme: u8,
    hash_algorithm: u8,
    digest: Vec<u8>,
}

impl Zonemd {
    /// Creates new Zonemd record data from the components.
    #[must_use]
    pub fn new(
        serial: u32,
        scheme: u8,
        hash_algorithm: u8,
        digest: Vec<u8>,
    ) -> Self {
        Zonemd {
            serial,
            scheme,
            hash_algorithm,
            digest,
        }
    }

    /// The SOA serial of the digested zone version.
    #[must_use]
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// The digest scheme; 1 means SIMPLE.
    #[must_use]
    pub fn scheme(&self) -> u8 {
        self.scheme
    }

    /// The hash algorithm; 1 means SHA-384, 2 means SHA-512.
    #[must_use]
    pub fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    /// The digest value.
    #[must_use]
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u32()?,
            parser.parse_u8()?,
            parser.parse_u8()?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u32(self.serial);
        target.append_u8(self.scheme);
        target.append_u8(self.hash_algorithm);
        target.append_slice(&self.digest);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u32()?,
            scanner.scan_u8()?,
            scanner.scan_u8()?,
            scanner.scan_base16_rest()?,
        ))
    }
}

//--- Display

impl fmt::Display for Zonemd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.serial, self.scheme, self.hash_algorithm
        )?;
        base16::display(&self.digest, f)
    }
}
