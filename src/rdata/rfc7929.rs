//! Record data from [RFC 7929]: the OPENPGPKEY record type.
//!
//! [RFC 7929]: https://tools.ietf.org/html/rfc7929

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::base64;
use core::fmt;

//------------ Openpgpkey ----------------------------------------------------

/// Openpgpkey record data.
///
/// Openpgpkey records publish an OpenPGP transferable public key for
/// the email address encoded in the owner name. The key is opaque to
/// DNS and presented in base64.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Openpgpkey {
    key: Vec<u8>,
}

impl Openpgpkey {
    /// Creates new Openpgpkey record data from the raw key.
    #[must_use]
    pub fn new(key: Vec<u8>) -> Self {
        Openpgpkey { key }
    }

    /// Returns the raw key octets.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(parser.parse_remaining()?.to_vec()))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_slice(&self.key)
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        scanner.scan_base64_rest().map(Self::new)
    }
}

//--- Display

impl fmt::Display for Openpgpkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&base64::encode_string(&self.key))
    }
}
