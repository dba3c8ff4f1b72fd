//! Record data from [RFC 5155]: NSEC3 and NSEC3PARAM.
//!
//! [RFC 5155]: https://tools.ietf.org/html/rfc5155

use super::rfc4034::RtypeBitmap;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::{base16, base32};
use core::fmt;

//------------ Nsec3 ---------------------------------------------------------

/// Nsec3 record data.
///
/// Nsec3 records provide hashed authenticated denial of existence:
/// they chain the hashed owner names of a zone and carry the type
/// bitmap of the matching original owner.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Nsec3 {
    hash_algorithm: u8,
    flags: u8,
    iterations: u16,
    salt: Vec<u8>,
    next_owner: Vec<u8>,
    types: RtypeBitmap,
}

impl Nsec3 {
    /// The flag signalling opt-out.
    pub const FLAG_OPT_OUT: u8 = 0x01;

    /// Creates new Nsec3 record data from the components.
    #[must_use]
    pub fn new(
        hash_algorithm: u8,
        flags: u8,
        iterations: u16,
        salt: Vec<u8>,
        next_owner: Vec<u8>,
        types: RtypeBitmap,
    ) -> Self {
        Nsec3 {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        }
    }

    /// The hash algorithm; 1 means SHA-1.
    #[must_use]
    pub fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    /// The flags octet.
    #[must_use]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns whether the opt-out flag is set.
    #[must_use]
    pub fn opt_out(&self) -> bool {
        self.flags & Self::FLAG_OPT_OUT != 0
    }

    /// The number of additional hash iterations.
    #[must_use]
    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    /// The salt mixed into the hash.
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// The hash of the next owner name in hash order.
    #[must_use]
    pub fn next_owner(&self) -> &[u8] {
        &self.next_owner
    }

    /// The bitmap of types present at the original owner name.
    #[must_use]
    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let hash_algorithm = parser.parse_u8()?;
        let flags = parser.parse_u8()?;
        let iterations = parser.parse_u16()?;
        let salt_len = usize::from(parser.parse_u8()?);
        let salt = parser.parse_slice(salt_len)?.to_vec();
        let hash_len = usize::from(parser.parse_u8()?);
        let next_owner = parser.parse_slice(hash_len)?.to_vec();
        let types = RtypeBitmap::parse(parser)?;
        Ok(Self::new(
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u8(self.hash_algorithm);
        target.append_u8(self.flags);
        target.append_u16(self.iterations);
        target.append_u8(self.salt.len() as u8);
        target.append_slice(&self.salt);
        target.append_u8(self.next_owner.len() as u8);
        target.append_slice(&self.next_owner);
        self.types.compose(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u8()?,
            scanner.scan_u8()?,
            scanner.scan_u16()?,
            scan_salt(scanner)?,
            scanner.scan_base32hex()?,
            RtypeBitmap::scan_rest(scanner)?,
        ))
    }
}

//--- Display

impl fmt::Display for Nsec3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.hash_algorithm, self.flags, self.iterations
        )?;
        display_salt(&self.salt, f)?;
        f.write_str(" ")?;
        base32::display_hex(&self.next_owner, f)?;
        if !self.types.is_empty() {
            write!(f, " {}", self.types)?;
        }
        Ok(())
    }
}

//------------ Nsec3param ----------------------------------------------------

/// Nsec3param record data.
///
/// Nsec3param records at a zone apex publish the hashing parameters
/// used by the zone's Nsec3 chain.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Nsec3param {
    hash_algorithm: u8,
    flags: u8,
    iterations: u16,
    salt: Vec<u8>,
}

impl Nsec3param {
    /// Creates new Nsec3param record data from the components.
    #[must_use]
    pub fn new(
        hash_algorithm: u8,
        flags: u8,
        iterations: u16,
        salt: Vec<u8>,
    ) -> Self {
        Nsec3param {
            hash_algorithm,
            flags,
            iterations,
            salt,
        }
    }

    /// The hash algorithm; 1 means SHA-1.
    #[must_use]
    pub fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    /// The flags octet.
    #[must_use]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// The number of additional hash iterations.
    #[must_use]
    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    /// The salt mixed into the hash.
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let hash_algorithm = parser.parse_u8()?;
        let flags = parser.parse_u8()?;
        let iterations = parser.parse_u16()?;
        let salt_len = usize::from(parser.parse_u8()?);
        let salt = parser.parse_slice(salt_len)?.to_vec();
        Ok(Self::new(hash_algorithm, flags, iterations, salt))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u8(self.hash_algorithm);
        target.append_u8(self.flags);
        target.append_u16(self.iterations);
        target.append_u8(self.salt.len() as u8);
        target.append_slice(&self.salt);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u8()?,
            scanner.scan_u8()?,
            scanner.scan_u16()?,
            scan_salt(scanner)?,
        ))
    }
}

//--- Display

impl fmt::Display for Nsec3param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.hash_algorithm, self.flags, self.iterations
        )?;
        display_salt(&self.salt, f)
    }
}

//------------ Helpers -------------------------------------------------------

/// Scans a salt: either `-` for an empty salt or hex octets.
fn scan_salt(scanner: &mut Scanner) -> Result<Vec<u8>, ScanError> {
    let token = scanner.scan_token()?;
    if token == "-" {
        Ok(Vec::new())
    } else {
        base16::decode(token).map_err(Into::into)
    }
}

/// Displays a salt, using `-` if it is empty.
fn display_salt(salt: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    if salt.is_empty() {
        f.write_str("-")
    } else {
        base16::display(salt, f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;

    #[test]
    fn nsec3_round_trips() {
        let text = "1 1 12 AABBCCDD \
                    2T7B4G4VSA5SMI47K61MV5BV1A22BOJR A RRSIG";
        let rdata = Nsec3::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(rdata.iterations(), 12);
        assert!(rdata.opt_out());
        assert_eq!(rdata.salt(), b"\xaa\xbb\xcc\xdd");
        assert_eq!(rdata.next_owner().len(), 20);
        assert!(rdata.types().contains(Rtype::RRSIG));
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Nsec3::parse(&mut parser).unwrap(), rdata);
        assert_eq!(
            Nsec3::scan(&mut Scanner::new(&format!("{}", rdata)))
                .unwrap(),
            rdata
        );
    }

    #[test]
    fn nsec3param_empty_salt() {
        let rdata =
            Nsec3param::scan(&mut Scanner::new("1 0 0 -")).unwrap();
        assert!(rdata.salt().is_empty());
        assert_eq!(format!("{}", rdata), "1 0 0 -");
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        assert_eq!(composer.as_slice(), b"\x01\x00\x00\x00\x00");
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Nsec3param::parse(&mut parser).unwrap(), rdata);
    }
}
