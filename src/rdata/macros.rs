//! Macros for use in rdata definitions.
//!
//! These macros are not public but are used by the record data modules,
//! which is why they live in their own module declared first.

/// Creates a record data type wrapping a single domain name.
macro_rules! dname_type_base {
    ( $(#[$attr:meta])* ($target:ident, $field:ident), $compose:ident ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct $target {
            $field: $crate::base::name::Name,
        }

        impl $target {
            /// Creates new record data from the name.
            #[must_use]
            pub fn new($field: $crate::base::name::Name) -> Self {
                $target { $field }
            }

            /// Returns the name carried by the record data.
            #[must_use]
            pub fn $field(&self) -> &$crate::base::name::Name {
                &self.$field
            }

            pub fn parse(
                parser: &mut $crate::base::wire::Parser,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                $crate::base::name::Name::parse(parser).map(Self::new)
            }

            pub fn compose(
                &self,
                target: &mut $crate::base::wire::Composer,
            ) {
                self.$field.$compose(target)
            }

            pub fn scan(
                scanner: &mut $crate::base::scan::Scanner,
            ) -> Result<Self, $crate::base::scan::ScanError> {
                scanner.scan_name().map(Self::new)
            }
        }

        //--- From

        impl From<$crate::base::name::Name> for $target {
            fn from(name: $crate::base::name::Name) -> Self {
                Self::new(name)
            }
        }

        impl From<$target> for $crate::base::name::Name {
            fn from(data: $target) -> Self {
                data.$field
            }
        }

        //--- Display

        impl core::fmt::Display for $target {
            fn fmt(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                self.$field.fmt(f)
            }
        }
    };
}

/// Creates a domain name record data type that compresses its name.
///
/// Only the record types from RFC 1035 itself are subject to name
/// compression in their record data; everything younger uses
/// `dname_type_canonical!` instead.
macro_rules! dname_type_well_known {
    ( $(#[$attr:meta])* ($target:ident, $field:ident) ) => {
        dname_type_base! {
            $(#[$attr])*
            ($target, $field), compose
        }
    };
}

/// Creates a domain name record data type without name compression.
macro_rules! dname_type_canonical {
    ( $(#[$attr:meta])* ($target:ident, $field:ident) ) => {
        dname_type_base! {
            $(#[$attr])*
            ($target, $field), compose_uncompressed
        }
    };
}
