//! Record data from [RFC 7553]: the URI record type.
//!
//! [RFC 7553]: https://tools.ietf.org/html/rfc7553

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Uri ----------------------------------------------------------

/// Uri record data.
///
/// Uri records map an owner name directly to a URI. Unlike the target
/// of most record types, the target here is not a domain name but the
/// raw octets of the URI, filling the entire remainder of the record
/// data without a length prefix.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Uri {
    priority: u16,
    weight: u16,
    target: Vec<u8>,
}

impl Uri {
    /// Creates new Uri record data from the components.
    #[must_use]
    pub fn new(priority: u16, weight: u16, target: Vec<u8>) -> Self {
        Uri {
            priority,
            weight,
            target,
        }
    }

    /// The priority of this target. Lower values are tried first.
    #[must_use]
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// The selection weight among targets of equal priority.
    #[must_use]
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// The URI octets.
    #[must_use]
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let priority = parser.parse_u16()?;
        let weight = parser.parse_u16()?;
        let target = parser.parse_remaining()?.to_vec();
        if target.is_empty() {
            return Err(ParseError::form_error("empty URI target"));
        }
        Ok(Self::new(priority, weight, target))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.priority);
        target.append_u16(self.weight);
        target.append_slice(&self.target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let priority = scanner.scan_u16()?;
        let weight = scanner.scan_u16()?;
        let target = scanner.scan_token()?.as_bytes().to_vec();
        if target.is_empty() {
            return Err(ScanError::custom("empty URI target"));
        }
        Ok(Self::new(priority, weight, target))
    }
}

//--- Display

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} \"", self.priority, self.weight)?;
        for &ch in &self.target {
            match ch {
                b'"' | b'\\' => write!(f, "\\{}", ch as char)?,
                0x20..=0x7E => write!(f, "{}", ch as char)?,
                _ => write!(f, "\\{:03}", ch)?,
            }
        }
        f.write_str("\"")
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips() {
        let rdata = Uri::scan(&mut Scanner::new(
            "10 1 \"https://www.example.com/path\"",
        ))
        .unwrap();
        assert_eq!(rdata.target(), b"https://www.example.com/path");
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Uri::parse(&mut parser).unwrap(), rdata);
        assert_eq!(
            format!("{}", rdata),
            "10 1 \"https://www.example.com/path\""
        );
    }
}
