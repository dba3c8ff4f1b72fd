//! Record data from [RFC 7477]: the CSYNC record type.
//!
//! [RFC 7477]: https://tools.ietf.org/html/rfc7477

use super::rfc4034::RtypeBitmap;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Csync ---------------------------------------------------------

/// Csync record data.
///
/// Csync records let a child zone publish which of its records the
/// parental agent should copy into the parent zone, guarded by the
/// child's SOA serial.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Csync {
    serial: u32,
    flags: u16,
    types: RtypeBitmap,
}

impl Csync {
    /// The flag requiring a minimum serial ("immediate" disabled).
    pub const FLAG_SOAMINIMUM: u16 = 0x0001;

    /// The flag allowing immediate processing.
    pub const FLAG_IMMEDIATE: u16 = 0x0002;

    /// Creates new Csync record data from the components.
    #[must_use]
    pub fn new(serial: u32, flags: u16, types: RtypeBitmap) -> Self {
        Csync {
            serial,
            flags,
            types,
        }
    }

    /// The SOA serial the record applies from.
    #[must_use]
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// The flags field.
    #[must_use]
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// The types to be synchronized.
    #[must_use]
    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u32()?,
            parser.parse_u16()?,
            RtypeBitmap::parse(parser)?,
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u32(self.serial);
        target.append_u16(self.flags);
        self.types.compose(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u32()?,
            scanner.scan_u16()?,
            RtypeBitmap::scan_rest(scanner)?,
        ))
    }
}

//--- Display

impl fmt::Display for Csync {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.serial, self.flags)?;
        if !self.types.is_empty() {
            write!(f, " {}", self.types)?;
        }
        Ok(())
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;

    #[test]
    fn round_trips() {
        // The example from RFC 7477, section 2.3.
        let rdata =
            Csync::scan(&mut Scanner::new("66 3 A NS AAAA")).unwrap();
        assert_eq!(rdata.serial(), 66);
        assert_eq!(rdata.flags(), 3);
        assert!(rdata.types().contains(Rtype::NS));
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Csync::parse(&mut parser).unwrap(), rdata);
        assert_eq!(format!("{}", rdata), "66 3 A NS AAAA");
    }
}
