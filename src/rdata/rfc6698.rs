//! Record data from [RFC 6698]: the TLSA record type.
//!
//! The SMIMEA record type from [RFC 8162] shares the exact same wire
//! and representation format and is defined here as well.
//!
//! [RFC 6698]: https://tools.ietf.org/html/rfc6698
//! [RFC 8162]: https://tools.ietf.org/html/rfc8162

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::base16;
use core::fmt;

macro_rules! dane_type {
    ( $(#[$attr:meta])* $target:ident ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct $target {
            cert_usage: u8,
            selector: u8,
            matching_type: u8,
            certificate_association_data: Vec<u8>,
        }

        impl $target {
            /// Creates new record data from the components.
            #[must_use]
            pub fn new(
                cert_usage: u8,
                selector: u8,
                matching_type: u8,
                certificate_association_data: Vec<u8>,
            ) -> Self {
                $target {
                    cert_usage,
                    selector,
                    matching_type,
                    certificate_association_data,
                }
            }

            /// The certificate usage of the association.
            #[must_use]
            pub fn cert_usage(&self) -> u8 {
                self.cert_usage
            }

            /// Which part of the certificate is matched.
            #[must_use]
            pub fn selector(&self) -> u8 {
                self.selector
            }

            /// How the association data is derived from the selection.
            #[must_use]
            pub fn matching_type(&self) -> u8 {
                self.matching_type
            }

            /// The certificate association data.
            #[must_use]
            pub fn certificate_association_data(&self) -> &[u8] {
                &self.certificate_association_data
            }

            pub fn parse(
                parser: &mut Parser,
            ) -> Result<Self, ParseError> {
                Ok(Self::new(
                    parser.parse_u8()?,
                    parser.parse_u8()?,
                    parser.parse_u8()?,
                    parser.parse_remaining()?.to_vec(),
                ))
            }

            pub fn compose(&self, target: &mut Composer) {
                target.append_u8(self.cert_usage);
                target.append_u8(self.selector);
                target.append_u8(self.matching_type);
                target.append_slice(&self.certificate_association_data);
            }

            pub fn scan(
                scanner: &mut Scanner,
            ) -> Result<Self, ScanError> {
                Ok(Self::new(
                    scanner.scan_u8()?,
                    scanner.scan_u8()?,
                    scanner.scan_u8()?,
                    scanner.scan_base16_rest()?,
                ))
            }
        }

        //--- Display

        impl fmt::Display for $target {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    f,
                    "{} {} {} ",
                    self.cert_usage, self.selector, self.matching_type
                )?;
                base16::display(&self.certificate_association_data, f)
            }
        }
    };
}

dane_type! {
    /// Tlsa record data.
    ///
    /// Tlsa records associate a TLS server certificate or public key
    /// with the owner name, constraining which certificates a client
    /// should accept for the service.
    Tlsa
}

dane_type! {
    /// Smimea record data.
    ///
    /// Smimea records are the S/MIME counterpart of TLSA: they
    /// associate an end-entity certificate with an email address's
    /// hashed local part.
    Smimea
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips() {
        let text = "3 1 1 \
            efddf0d915c7bdc5782c0881e1b2f067f6adc7e6e3b6b4c69c7b7a9e1d2c3b4a";
        let rdata = Tlsa::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(rdata.cert_usage(), 3);
        assert_eq!(rdata.certificate_association_data().len(), 32);
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Tlsa::parse(&mut parser).unwrap(), rdata);
        assert_eq!(
            Tlsa::scan(&mut Scanner::new(&format!("{}", rdata)))
                .unwrap(),
            rdata
        );
    }
}
