//! Record data from [RFC 2782]: the SRV record type.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Srv ----------------------------------------------------------

/// Srv record data.
///
/// Srv records identify the location of a server for a specific
/// protocol and service under the owner name. Within an RRset, lower
/// priority values are tried first and targets of equal priority are
/// picked in proportion to their weight.
///
/// Per RFC 2782, the target name is not subject to name compression.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: Name,
}

impl Srv {
    /// Creates new Srv record data from the components.
    #[must_use]
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    /// The priority of this target host.
    #[must_use]
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// The server selection weight among entries of equal priority.
    #[must_use]
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// The port of the service on the target host.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The domain name of the target host.
    #[must_use]
    pub fn target(&self) -> &Name {
        &self.target
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u16()?,
            parser.parse_u16()?,
            parser.parse_u16()?,
            Name::parse(parser)?,
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.priority);
        target.append_u16(self.weight);
        target.append_u16(self.port);
        self.target.compose_uncompressed(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u16()?,
            scanner.scan_u16()?,
            scanner.scan_u16()?,
            scanner.scan_name()?,
        ))
    }
}

//--- Display

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips() {
        let rdata = Srv::new(
            0,
            5,
            5060,
            "sip.example.com".parse().unwrap(),
        );
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Srv::parse(&mut parser).unwrap(), rdata);
        assert_eq!(format!("{}", rdata), "0 5 5060 sip.example.com.");
        assert_eq!(
            Srv::scan(&mut Scanner::new("0 5 5060 sip.example.com."))
                .unwrap(),
            rdata
        );
    }
}
