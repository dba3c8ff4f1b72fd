//! Record data from [RFC 7208]: the SPF record type.
//!
//! The SPF record type was deprecated in favor of plain TXT records
//! but still appears in the wild. Its format is identical to TXT.
//!
//! [RFC 7208]: https://tools.ietf.org/html/rfc7208

use super::rfc1035::Txt;
use crate::base::charstr::CharStr;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Spf -----------------------------------------------------------

/// Spf record data.
///
/// A sender policy published under the deprecated dedicated record
/// type. Content-wise this is a TXT record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Spf(Txt);

impl Spf {
    /// Creates new Spf record data from text content.
    pub fn new(text: Vec<CharStr>) -> Result<Self, ParseError> {
        Txt::new(text).map(Spf)
    }

    /// Returns the concatenated policy text.
    #[must_use]
    pub fn text(&self) -> Vec<u8> {
        self.0.text()
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Txt::parse(parser).map(Spf)
    }

    pub fn compose(&self, target: &mut Composer) {
        self.0.compose(target)
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Txt::scan(scanner).map(Spf)
    }
}

//--- From

impl From<Txt> for Spf {
    fn from(txt: Txt) -> Self {
        Spf(txt)
    }
}

//--- Display

impl fmt::Display for Spf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
