//! Record data from [RFC 2230]: the KX record type.
//!
//! [RFC 2230]: https://tools.ietf.org/html/rfc2230

use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Kx -----------------------------------------------------------

/// Kx record data.
///
/// Kx records name a key exchanger willing to act for the owner name,
/// with a preference value ordering multiple exchangers. The exchanger
/// name is not subject to name compression.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Kx {
    preference: u16,
    exchanger: Name,
}

impl Kx {
    /// Creates new Kx record data from the components.
    #[must_use]
    pub fn new(preference: u16, exchanger: Name) -> Self {
        Kx {
            preference,
            exchanger,
        }
    }

    /// The preference of this exchanger. Lower values are preferred.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The domain name of the key exchanger.
    #[must_use]
    pub fn exchanger(&self) -> &Name {
        &self.exchanger
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(parser.parse_u16()?, Name::parse(parser)?))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.preference);
        self.exchanger.compose_uncompressed(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(scanner.scan_u16()?, scanner.scan_name()?))
    }
}

//--- Display

impl fmt::Display for Kx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchanger)
    }
}
