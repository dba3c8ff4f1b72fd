//! Record data from [RFC 3403]: the NAPTR record type.
//!
//! [RFC 3403]: https://tools.ietf.org/html/rfc3403

use crate::base::charstr::CharStr;
use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Naptr --------------------------------------------------------

/// Naptr record data.
///
/// Naptr records describe a rule in the dynamic delegation discovery
/// system: an order and preference, a set of flags, the service
/// parameters, a regular expression to rewrite with, and a replacement
/// name. The replacement name is not subject to name compression.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Naptr {
    order: u16,
    preference: u16,
    flags: CharStr,
    services: CharStr,
    regexp: CharStr,
    replacement: Name,
}

impl Naptr {
    /// Creates new Naptr record data from the components.
    #[must_use]
    pub fn new(
        order: u16,
        preference: u16,
        flags: CharStr,
        services: CharStr,
        regexp: CharStr,
        replacement: Name,
    ) -> Self {
        Naptr {
            order,
            preference,
            flags,
            services,
            regexp,
            replacement,
        }
    }

    /// The order in which the rules must be processed.
    #[must_use]
    pub fn order(&self) -> u16 {
        self.order
    }

    /// The priority among rules of equal order.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The flags controlling rewriting and interpretation.
    #[must_use]
    pub fn flags(&self) -> &CharStr {
        &self.flags
    }

    /// The service parameters available down this rewrite path.
    #[must_use]
    pub fn services(&self) -> &CharStr {
        &self.services
    }

    /// The substitution expression applied to the original string.
    #[must_use]
    pub fn regexp(&self) -> &CharStr {
        &self.regexp
    }

    /// The replacement name for a terminal lookup.
    #[must_use]
    pub fn replacement(&self) -> &Name {
        &self.replacement
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u16()?,
            parser.parse_u16()?,
            CharStr::parse(parser)?,
            CharStr::parse(parser)?,
            CharStr::parse(parser)?,
            Name::parse(parser)?,
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.order);
        target.append_u16(self.preference);
        self.flags.compose(target);
        self.services.compose(target);
        self.regexp.compose(target);
        self.replacement.compose_uncompressed(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u16()?,
            scanner.scan_u16()?,
            scanner.scan_charstr()?,
            scanner.scan_charstr()?,
            scanner.scan_charstr()?,
            scanner.scan_name()?,
        ))
    }
}

//--- Display

impl fmt::Display for Naptr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.order,
            self.preference,
            self.flags,
            self.services,
            self.regexp,
            self.replacement
        )
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn text_round_trip() {
        let text = r#"100 50 "s" "SIP+D2U" "" _sip._udp.example.com."#;
        let rdata = Naptr::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(rdata.order(), 100);
        assert_eq!(rdata.services().as_slice(), b"SIP+D2U");
        assert!(rdata.regexp().is_empty());
        assert_eq!(
            Naptr::scan(&mut Scanner::new(&format!("{}", rdata)))
                .unwrap(),
            rdata
        );
    }

    #[test]
    fn wire_round_trip() {
        let rdata = Naptr::new(
            10,
            20,
            CharStr::from_octets(b"u").unwrap(),
            CharStr::from_octets(b"E2U+sip").unwrap(),
            CharStr::from_octets(b"!^.*$!sip:info@example.com!")
                .unwrap(),
            "example.com".parse().unwrap(),
        );
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Naptr::parse(&mut parser).unwrap(), rdata);
    }
}
