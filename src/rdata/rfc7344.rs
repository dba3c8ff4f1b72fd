//! Record data from [RFC 7344]: CDS and CDNSKEY.
//!
//! These record types let a child zone signal its desired delegation
//! signer records to the parent. They are plain copies of the DS and
//! DNSKEY formats.
//!
//! [RFC 7344]: https://tools.ietf.org/html/rfc7344

use super::rfc4034::{Dnskey, Ds};
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

macro_rules! child_type {
    ( $(#[$attr:meta])* $target:ident, $base:ident ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct $target($base);

        impl $target {
            /// Creates the record data from its base form.
            #[must_use]
            pub fn new(base: $base) -> Self {
                $target(base)
            }

            /// Returns a reference to the base record data.
            #[must_use]
            pub fn as_base(&self) -> &$base {
                &self.0
            }

            pub fn parse(
                parser: &mut Parser,
            ) -> Result<Self, ParseError> {
                $base::parse(parser).map(Self::new)
            }

            pub fn compose(&self, target: &mut Composer) {
                self.0.compose(target)
            }

            pub fn scan(
                scanner: &mut Scanner,
            ) -> Result<Self, ScanError> {
                $base::scan(scanner).map(Self::new)
            }
        }

        //--- From

        impl From<$base> for $target {
            fn from(base: $base) -> Self {
                Self::new(base)
            }
        }

        //--- Display

        impl fmt::Display for $target {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

child_type! {
    /// Cds record data.
    ///
    /// A Cds record published by a child zone asks the parent to
    /// update the delegation's DS RRset to match.
    Cds, Ds
}

child_type! {
    /// Cdnskey record data.
    ///
    /// A Cdnskey record publishes the DNSKEY the child wants the
    /// parent to derive a DS record from.
    Cdnskey, Dnskey
}
