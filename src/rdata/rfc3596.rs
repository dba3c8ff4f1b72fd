//! Record data from [RFC 3596]: the AAAA record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;
use core::str::FromStr;
use std::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

/// Aaaa record data.
///
/// Aaaa records convey the IPv6 address of a host in its sixteen octet
/// wire form. The representation format is the textual IPv6 address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    /// Creates new Aaaa record data from an IPv6 address.
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    /// Returns the address of the record.
    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut octets = [0u8; 16];
        octets.copy_from_slice(parser.parse_slice(16)?);
        Ok(Aaaa::new(octets.into()))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_slice(&self.addr.octets())
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ipv6Addr::from_str(scanner.scan_token()?)
            .map(Aaaa::new)
            .map_err(|_| ScanError::custom("expected IPv6 address"))
    }
}

//--- From and FromStr

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

impl FromStr for Aaaa {
    type Err = <Ipv6Addr as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Addr::from_str(s).map(Aaaa::new)
    }
}

//--- Display

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips() {
        let rdata: Aaaa = "2001:db8::1".parse().unwrap();
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        assert_eq!(composer.as_slice().len(), 16);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Aaaa::parse(&mut parser).unwrap(), rdata);
        assert_eq!(format!("{}", rdata), "2001:db8::1");
        assert_eq!(
            Aaaa::scan(&mut Scanner::new("2001:db8::1")).unwrap(),
            rdata
        );
    }
}
