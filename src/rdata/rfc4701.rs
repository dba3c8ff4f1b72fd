//! Record data from [RFC 4701]: the DHCID record type.
//!
//! [RFC 4701]: https://tools.ietf.org/html/rfc4701

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::base64;
use core::fmt;

//------------ Dhcid ---------------------------------------------------------

/// Dhcid record data.
///
/// Dhcid records let DHCP servers mark the names they maintain through
/// dynamic updates. The content is opaque to DNS and presented in
/// base64.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Dhcid {
    data: Vec<u8>,
}

impl Dhcid {
    /// Creates new Dhcid record data from the raw octets.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Dhcid { data }
    }

    /// Returns the raw content.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(parser.parse_remaining()?.to_vec()))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_slice(&self.data)
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        scanner.scan_base64_rest().map(Self::new)
    }
}

//--- Display

impl fmt::Display for Dhcid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&base64::encode_string(&self.data))
    }
}
