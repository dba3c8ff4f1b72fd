//! Record data from [RFC 4255]: the SSHFP record type.
//!
//! [RFC 4255]: https://tools.ietf.org/html/rfc4255

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::base16;
use core::fmt;

//------------ Sshfp --------------------------------------------------------

/// Sshfp record data.
///
/// Sshfp records carry the fingerprint of an SSH host key so that the
/// key offered by a host can be cross-checked through DNS. The
/// fingerprint is presented in hex.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sshfp {
    algorithm: u8,
    fingerprint_type: u8,
    fingerprint: Vec<u8>,
}

impl Sshfp {
    /// Creates new Sshfp record data from the components.
    #[must_use]
    pub fn new(
        algorithm: u8,
        fingerprint_type: u8,
        fingerprint: Vec<u8>,
    ) -> Self {
        Sshfp {
            algorithm,
            fingerprint_type,
            fingerprint,
        }
    }

    /// The public key algorithm of the fingerprinted key.
    #[must_use]
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The algorithm the fingerprint was created with.
    #[must_use]
    pub fn fingerprint_type(&self) -> u8 {
        self.fingerprint_type
    }

    /// The fingerprint of the host key.
    #[must_use]
    pub fn fingerprint(&self) -> &[u8] {
        &self.fingerprint
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u8()?,
            parser.parse_u8()?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u8(self.algorithm);
        target.append_u8(self.fingerprint_type);
        target.append_slice(&self.fingerprint);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u8()?,
            scanner.scan_u8()?,
            scanner.scan_base16_rest()?,
        ))
    }
}

//--- Display

impl fmt::Display for Sshfp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} ", self.algorithm, self.fingerprint_type)?;
        base16::display(&self.fingerprint, f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips() {
        let text = "4 2 \
            b218f884c1bf4d12f7e1c7f7f5a4bd1d8d9a3b0f5f2c2e1a0d9c8b7a6f5e4d3c";
        let rdata = Sshfp::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(rdata.algorithm(), 4);
        assert_eq!(rdata.fingerprint().len(), 32);
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Sshfp::parse(&mut parser).unwrap(), rdata);
        assert_eq!(
            Sshfp::scan(&mut Scanner::new(&format!("{}", rdata)))
                .unwrap(),
            rdata
        );
    }
}
