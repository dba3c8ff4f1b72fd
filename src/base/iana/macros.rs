//! Macros making implementing IANA types easier.

/// Creates a standard IANA type wrapping an integer.
///
/// This adds impls for `From`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, and
/// `Hash` as well as `parse` and `compose` methods for the wire format.
///
/// For `FromStr` and `Display`, see one of the other macros in this module.
macro_rules! int_enum {
    ( $(#[$attr:meta])* =>
      $ianatype:ident, $inttype:ident;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $mnemonic:expr) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug)]
        pub enum $ianatype {
            $( $(#[$variant_attr])* $variant ),*,

            /// A raw value given through its integer.
            Int($inttype)
        }

        impl $ianatype {
            /// Returns a value from its raw integer value.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Self {
                match value {
                    $( $value => $ianatype::$variant ),*,
                    _ => $ianatype::Int(value)
                }
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                match self {
                    $( $ianatype::$variant => $value ),*,
                    $ianatype::Int(value) => value
                }
            }

            /// Returns a value from a well-defined mnemonic.
            #[must_use]
            pub fn from_mnemonic(m: &[u8]) -> Option<Self> {
                $(
                    if m.eq_ignore_ascii_case($mnemonic) {
                        return Some($ianatype::$variant)
                    }
                )*
                None
            }

            /// Returns the mnemonic for this value if there is one.
            ///
            /// This will also return a mnemonic if a well-defined variant
            /// is hidden in a `Int` variant.
            #[must_use]
            pub const fn to_mnemonic(self) -> Option<&'static [u8]> {
                match self {
                    $( $ianatype::$variant => Some($mnemonic) ),*,
                    $ianatype::Int(value) => {
                        match $ianatype::from_int(value) {
                            $ianatype::Int(_) => None,
                            value => value.to_mnemonic()
                        }
                    }
                }
            }

            /// Takes a value from the beginning of a parser.
            pub fn parse(
                parser: &mut $crate::base::wire::Parser,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                <$inttype as $crate::base::wire::ParseInt>::parse_int(
                    parser
                ).map(Self::from_int)
            }

            /// The length of the wire representation of a value.
            pub const COMPOSE_LEN: u16 =
                ($inttype::BITS >> 3) as u16;

            /// Appends the wire representation of a value to a composer.
            pub fn compose(
                self,
                target: &mut $crate::base::wire::Composer,
            ) {
                target.append_slice(&self.to_int().to_be_bytes())
            }
        }

        //--- From

        impl From<$inttype> for $ianatype {
            fn from(value: $inttype) -> Self {
                $ianatype::from_int(value)
            }
        }

        impl From<$ianatype> for $inttype {
            fn from(value: $ianatype) -> Self {
                value.to_int()
            }
        }

        //--- PartialEq and Eq

        impl PartialEq for $ianatype {
            fn eq(&self, other: &Self) -> bool {
                self.to_int() == other.to_int()
            }
        }

        impl PartialEq<$inttype> for $ianatype {
            fn eq(&self, other: &$inttype) -> bool {
                self.to_int() == *other
            }
        }

        impl PartialEq<$ianatype> for $inttype {
            fn eq(&self, other: &$ianatype) -> bool {
                *self == other.to_int()
            }
        }

        impl Eq for $ianatype { }

        //--- PartialOrd and Ord

        impl PartialOrd for $ianatype {
            fn partial_cmp(
                &self, other: &Self
            ) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ianatype {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.to_int().cmp(&other.to_int())
            }
        }

        //--- Hash

        impl core::hash::Hash for $ianatype {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                self.to_int().hash(state)
            }
        }
    }
}

/// Adds `FromStr` and `Display` impls to the type given as first argument.
///
/// For `FromStr`, the impl matches the known mnemonics ignoring case as
/// well as the given prefix followed by the decimal integer value, as
/// described in RFC 3597. `Display` prints the mnemonic if there is one or
/// else the prefixed decimal value.
macro_rules! int_enum_str_with_prefix {
    ($ianatype:ident, $str_prefix:expr, $inttype:ident) => {
        impl core::str::FromStr for $ianatype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // We assume all mnemonics are always ASCII, so using the
                // bytes representation of `s` is safe.
                match $ianatype::from_mnemonic(s.as_bytes()) {
                    Some(res) => Ok(res),
                    None => match s
                        .get(..$str_prefix.len())
                        .filter(|p| p.eq_ignore_ascii_case($str_prefix))
                    {
                        Some(_) => s[$str_prefix.len()..]
                            .parse::<$inttype>()
                            .map($ianatype::from_int)
                            .map_err(|_| FromStrError),
                        None => Err(FromStrError),
                    },
                }
            }
        }

        impl core::fmt::Display for $ianatype {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                use core::fmt::Write;

                match self.to_mnemonic() {
                    Some(m) => {
                        for ch in m {
                            f.write_char(*ch as char)?
                        }
                        Ok(())
                    }
                    None => {
                        write!(f, "{}{}", $str_prefix, self.to_int())
                    }
                }
            }
        }
    };
}

/// Adds `FromStr` and `Display` impls to the type given as first argument.
///
/// For `FromStr`, recognizes the known mnemonics ignoring case or the
/// plain decimal value. `Display` prints the mnemonic if there is one or
/// else the plain decimal value.
macro_rules! int_enum_str_with_decimal {
    ($ianatype:ident, $inttype:ident) => {
        impl core::str::FromStr for $ianatype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ianatype::from_mnemonic(s.as_bytes())
                    .or_else(|| {
                        s.parse::<$inttype>().ok().map($ianatype::from_int)
                    })
                    .ok_or(FromStrError)
            }
        }

        impl core::fmt::Display for $ianatype {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                use core::fmt::Write;

                match self.to_mnemonic() {
                    Some(m) => {
                        for ch in m {
                            f.write_char(*ch as char)?
                        }
                        Ok(())
                    }
                    None => {
                        write!(f, "{}", self.to_int())
                    }
                }
            }
        }
    };
}

/// Creates the error type for the `FromStr` impls of the IANA type in the
/// enclosing module.
macro_rules! from_str_error {
    ($description:expr) => {
        /// An error returned when converting a value from a string.
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct FromStrError;

        impl core::fmt::Display for FromStrError {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str($description)
            }
        }

        impl std::error::Error for FromStrError {}
    };
}
