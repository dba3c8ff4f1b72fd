//! Record data from [RFC 8659]: the CAA record type.
//!
//! [RFC 8659]: https://tools.ietf.org/html/rfc8659

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Caa ----------------------------------------------------------

/// Caa record data.
///
/// Caa records state which certification authorities are allowed to
/// issue certificates for the owner name. Each record carries a flags
/// octet, a case-insensitive ASCII tag such as `issue` or `iodef`, and
/// an opaque value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Caa {
    flags: u8,
    tag: Vec<u8>,
    value: Vec<u8>,
}

impl Caa {
    /// The flag bit marking a property as critical.
    pub const FLAG_ISSUER_CRITICAL: u8 = 0x80;

    /// Creates new Caa record data from the components.
    pub fn new(
        flags: u8,
        tag: Vec<u8>,
        value: Vec<u8>,
    ) -> Result<Self, ParseError> {
        if tag.is_empty()
            || tag.len() > 255
            || !tag.iter().all(u8::is_ascii_alphanumeric)
        {
            return Err(ParseError::form_error("illegal CAA tag"));
        }
        Ok(Caa { flags, tag, value })
    }

    /// The flags octet of the property.
    #[must_use]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns whether the issuer-critical flag is set.
    #[must_use]
    pub fn issuer_critical(&self) -> bool {
        self.flags & Self::FLAG_ISSUER_CRITICAL != 0
    }

    /// The property tag.
    #[must_use]
    pub fn tag(&self) -> &[u8] {
        &self.tag
    }

    /// The property value.
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let flags = parser.parse_u8()?;
        let tag_len = usize::from(parser.parse_u8()?);
        let tag = parser.parse_slice(tag_len)?.to_vec();
        let value = parser.parse_remaining()?.to_vec();
        Self::new(flags, tag, value)
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u8(self.flags);
        target.append_u8(self.tag.len() as u8);
        target.append_slice(&self.tag);
        target.append_slice(&self.value);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let flags = scanner.scan_u8()?;
        let tag = scanner.scan_token()?.as_bytes().to_vec();
        let value = scanner.scan_charstr()?.as_slice().to_vec();
        Self::new(flags, tag, value).map_err(Into::into)
    }
}

//--- Display

impl fmt::Display for Caa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.flags)?;
        for &ch in &self.tag {
            write!(f, "{}", ch as char)?;
        }
        f.write_str(" \"")?;
        for &ch in &self.value {
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
        let rdata =
            Caa::scan(&mut Scanner::new("0 issue \"ca.example.net\""))
                .unwrap();
        assert!(!rdata.issuer_critical());
        assert_eq!(rdata.tag(), b"issue");
        assert_eq!(rdata.value(), b"ca.example.net");
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Caa::parse(&mut parser).unwrap(), rdata);
        assert_eq!(
            Caa::scan(&mut Scanner::new(&format!("{}", rdata))).unwrap(),
            rdata
        );
    }

    #[test]
    fn bad_tag() {
        assert!(Caa::new(0, b"".to_vec(), b"x".to_vec()).is_err());
        assert!(Caa::new(0, b"is sue".to_vec(), b"x".to_vec()).is_err());
    }
}
