//! Record data from [RFC 7043]: the EUI48 and EUI64 record types.
//!
//! [RFC 7043]: https://tools.ietf.org/html/rfc7043

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

macro_rules! eui_type {
    ( $(#[$attr:meta])* $target:ident, $len:expr ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub struct $target {
            address: [u8; $len],
        }

        impl $target {
            /// Creates new record data from the address octets.
            #[must_use]
            pub fn new(address: [u8; $len]) -> Self {
                $target { address }
            }

            /// Returns the address octets.
            #[must_use]
            pub fn address(&self) -> &[u8; $len] {
                &self.address
            }

            pub fn parse(
                parser: &mut Parser,
            ) -> Result<Self, ParseError> {
                let mut address = [0u8; $len];
                address.copy_from_slice(parser.parse_slice($len)?);
                Ok(Self::new(address))
            }

            pub fn compose(&self, target: &mut Composer) {
                target.append_slice(&self.address)
            }

            pub fn scan(
                scanner: &mut Scanner,
            ) -> Result<Self, ScanError> {
                let token = scanner.scan_token()?;
                let mut address = [0u8; $len];
                let mut parts = token.split('-');
                for octet in address.iter_mut() {
                    *octet = parts
                        .next()
                        .and_then(|part| {
                            u8::from_str_radix(part, 16).ok()
                        })
                        .ok_or_else(|| {
                            ScanError::custom("bad EUI address")
                        })?;
                }
                if parts.next().is_some() {
                    return Err(ScanError::custom("bad EUI address"));
                }
                Ok(Self::new(address))
            }
        }

        //--- Display

        impl fmt::Display for $target {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let mut first = true;
                for octet in &self.address {
                    if first {
                        first = false;
                    } else {
                        f.write_str("-")?;
                    }
                    write!(f, "{:02x}", octet)?;
                }
                Ok(())
            }
        }
    };
}

eui_type! {
    /// Eui48 record data.
    ///
    /// Eui48 records store a 48 bit extended unique identifier, i.e.,
    /// an Ethernet-style MAC address, presented as six hyphen-separated
    /// hex octets.
    Eui48, 6
}

eui_type! {
    /// Eui64 record data.
    ///
    /// Eui64 records store a 64 bit extended unique identifier,
    /// presented as eight hyphen-separated hex octets.
    Eui64, 8
}

//============ Test ==========================================================
