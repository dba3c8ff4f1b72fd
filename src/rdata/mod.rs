//! Resource record data.
//!
//! Each record type defines its own record data: the fields after the
//! shared NAME, TYPE, CLASS, TTL, and RDLENGTH header. This module
//! collects the types for all implemented record types, organized into
//! submodules by the RFC defining them, and combines them into the
//! [`RecordData`] enum.
//!
//! The enum is the record type registry: a numeric TYPE code maps to
//! the variant that knows how to decode, encode, scan, and display the
//! data, and [`RecordData::supported`] enumerates the implemented
//! codes. Data of types without a variant is preserved unparsed in
//! [`UnknownRecordData`], which uses the generic format of RFC 3597
//! for its representation format.

use crate::base::iana::Rtype;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::base16;
use core::fmt;

#[macro_use]
mod macros;

pub mod rfc1035;
pub mod rfc1876;
pub mod rfc2230;
pub mod rfc2782;
pub mod rfc2845;
pub mod rfc3403;
pub mod rfc3596;
pub mod rfc4034;
pub mod rfc4255;
pub mod rfc4701;
pub mod rfc5155;
pub mod rfc6672;
pub mod rfc6698;
pub mod rfc6742;
pub mod rfc6891;
pub mod rfc7043;
pub mod rfc7208;
pub mod rfc7344;
pub mod rfc7477;
pub mod rfc7553;
pub mod rfc7929;
pub mod rfc8005;
pub mod rfc8659;
pub mod rfc8976;

//--- Re-exports of the helper types that are not record data.

pub use self::rfc2845::Time48;
pub use self::rfc4034::{RtypeBitmap, Timestamp};
pub use self::rfc6891::{OptOption, OptRecord};

macro_rules! rdata_types {
    ( $( $module:ident::{ $( $rtype:ident => $type:ident, )* } )* ) => {
        $(
            pub use self::$module::{ $( $type, )* };
        )*

        //------------ RecordData --------------------------------------------

        /// The record data of any implemented record type.
        ///
        /// Values pair the numeric TYPE code with the typed fields: the
        /// variant determines the type, so a record can never carry
        /// data that disagrees with its TYPE.
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub enum RecordData {
            $( $(
                #[doc = concat!(
                    "Data of a ", stringify!($rtype), " record."
                )]
                $type($type),
            )* )*

            /// Data of an unimplemented record type, kept as raw octets.
            Unknown(UnknownRecordData),
        }

        impl RecordData {
            /// Returns the record type of the data.
            #[must_use]
            pub fn rtype(&self) -> Rtype {
                match self {
                    $( $(
                        RecordData::$type(_) => Rtype::$rtype,
                    )* )*
                    RecordData::Unknown(data) => data.rtype(),
                }
            }

            /// Takes record data of the given type from a parser.
            ///
            /// The parser must be limited to the RDATA of the record;
            /// data of unimplemented types is preserved unparsed.
            pub fn parse(
                rtype: Rtype,
                parser: &mut Parser,
            ) -> Result<Self, ParseError> {
                match rtype {
                    $( $(
                        Rtype::$rtype => {
                            $type::parse(parser).map(RecordData::$type)
                        }
                    )* )*
                    _ => UnknownRecordData::parse(rtype, parser)
                        .map(RecordData::Unknown),
                }
            }

            /// Appends the wire format of the data to a composer.
            pub fn compose(&self, target: &mut Composer) {
                match self {
                    $( $(
                        RecordData::$type(data) => data.compose(target),
                    )* )*
                    RecordData::Unknown(data) => data.compose(target),
                }
            }

            /// Scans record data of the given type from its
            /// representation format.
            ///
            /// Data of unimplemented types is accepted in the generic
            /// format of RFC 3597.
            pub fn scan(
                rtype: Rtype,
                scanner: &mut Scanner,
            ) -> Result<Self, ScanError> {
                match rtype {
                    $( $(
                        Rtype::$rtype => {
                            $type::scan(scanner).map(RecordData::$type)
                        }
                    )* )*
                    _ => UnknownRecordData::scan(rtype, scanner)
                        .map(RecordData::Unknown),
                }
            }

            /// Returns the list of record types with typed variants.
            #[must_use]
            pub fn supported() -> &'static [Rtype] {
                &[ $( $( Rtype::$rtype, )* )* ]
            }
        }

        //--- From

        $( $(
            impl From<$type> for RecordData {
                fn from(data: $type) -> Self {
                    RecordData::$type(data)
                }
            }
        )* )*

        //--- Display

        impl fmt::Display for RecordData {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self {
                    $( $(
                        RecordData::$type(data) => data.fmt(f),
                    )* )*
                    RecordData::Unknown(data) => data.fmt(f),
                }
            }
        }
    };
}

rdata_types! {
    rfc1035::{
        A => A,
        CNAME => Cname,
        HINFO => Hinfo,
        MINFO => Minfo,
        MX => Mx,
        NS => Ns,
        PTR => Ptr,
        SOA => Soa,
        TXT => Txt,
        WKS => Wks,
    }
    rfc1876::{
        LOC => Loc,
    }
    rfc2230::{
        KX => Kx,
    }
    rfc2782::{
        SRV => Srv,
    }
    rfc2845::{
        TSIG => Tsig,
    }
    rfc3403::{
        NAPTR => Naptr,
    }
    rfc3596::{
        AAAA => Aaaa,
    }
    rfc4034::{
        DNSKEY => Dnskey,
        DS => Ds,
        NSEC => Nsec,
        RRSIG => Rrsig,
        SIG => Sig,
    }
    rfc4255::{
        SSHFP => Sshfp,
    }
    rfc4701::{
        DHCID => Dhcid,
    }
    rfc5155::{
        NSEC3 => Nsec3,
        NSEC3PARAM => Nsec3param,
    }
    rfc6672::{
        DNAME => Dname,
    }
    rfc6698::{
        SMIMEA => Smimea,
        TLSA => Tlsa,
    }
    rfc6742::{
        L32 => L32,
        L64 => L64,
        LP => Lp,
        NID => Nid,
    }
    rfc6891::{
        OPT => Opt,
    }
    rfc7043::{
        EUI48 => Eui48,
        EUI64 => Eui64,
    }
    rfc7208::{
        SPF => Spf,
    }
    rfc7344::{
        CDNSKEY => Cdnskey,
        CDS => Cds,
    }
    rfc7477::{
        CSYNC => Csync,
    }
    rfc7553::{
        URI => Uri,
    }
    rfc7929::{
        OPENPGPKEY => Openpgpkey,
    }
    rfc8005::{
        HIP => Hip,
    }
    rfc8659::{
        CAA => Caa,
    }
    rfc8976::{
        ZONEMD => Zonemd,
    }
}

//------------ UnknownRecordData ---------------------------------------------

/// Record data of an unimplemented record type.
///
/// The data is kept as the raw RDATA octets. For the representation
/// format, the generic encoding of RFC 3597 is used: the token `\#`,
/// the length of the data, and the data itself in hex.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UnknownRecordData {
    /// The record type of the data.
    rtype: Rtype,

    /// The raw RDATA octets.
    data: Vec<u8>,
}

impl UnknownRecordData {
    /// Creates unknown record data from the raw octets.
    ///
    /// Fails if the data is longer than 65,535 octets.
    pub fn from_octets(
        rtype: Rtype,
        data: Vec<u8>,
    ) -> Result<Self, ParseError> {
        if data.len() > usize::from(u16::MAX) {
            return Err(ParseError::form_error("long record data"));
        }
        Ok(UnknownRecordData { rtype, data })
    }

    /// Returns the record type of the data.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the raw data octets.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Takes the remaining record data from a parser.
    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser,
    ) -> Result<Self, ParseError> {
        Self::from_octets(rtype, parser.parse_remaining()?.to_vec())
    }

    /// Appends the raw data to a composer.
    pub fn compose(&self, target: &mut Composer) {
        target.append_slice(&self.data)
    }

    /// Scans the generic representation format of RFC 3597.
    pub fn scan(
        rtype: Rtype,
        scanner: &mut Scanner,
    ) -> Result<Self, ScanError> {
        if scanner.scan_token()? != r"\#" {
            return Err(ScanError::custom(
                "expected generic record data",
            ));
        }
        let len = usize::from(scanner.scan_u16()?);
        let data = if len == 0 {
            Vec::new()
        } else {
            scanner.scan_base16_rest()?
        };
        if data.len() != len {
            return Err(ScanError::custom(
                "generic record data length mismatch",
            ));
        }
        Self::from_octets(rtype, data).map_err(Into::into)
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        if !self.data.is_empty() {
            f.write_str(" ")?;
            base16::display(&self.data, f)?;
        }
        Ok(())
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registry_dispatch() {
        let mut parser = Parser::from_octets(b"\xc0\x00\x02\x01");
        let data = RecordData::parse(Rtype::A, &mut parser).unwrap();
        assert_eq!(data.rtype(), Rtype::A);
        assert!(matches!(data, RecordData::A(_)));
    }

    #[test]
    fn registry_is_enumerable() {
        let supported = RecordData::supported();
        assert!(supported.contains(&Rtype::A));
        assert!(supported.contains(&Rtype::TSIG));
        assert!(supported.contains(&Rtype::NSEC3PARAM));
        assert!(!supported.contains(&Rtype::ANY));
        // Every supported type round-trips through the dispatch table.
        for &rtype in supported {
            assert_ne!(rtype, Rtype::Int(0));
        }
    }

    #[test]
    fn unknown_data_preserved() {
        let mut parser = Parser::from_octets(b"\x01\x02\x03");
        let data =
            RecordData::parse(Rtype::Int(4711), &mut parser).unwrap();
        assert_eq!(data.rtype(), Rtype::Int(4711));
        let mut composer = Composer::uncompressed();
        data.compose(&mut composer);
        assert_eq!(composer.as_slice(), b"\x01\x02\x03");
        assert_eq!(format!("{}", data), "\\# 3 010203");
    }

    #[test]
    fn unknown_data_scan() {
        let mut scanner = Scanner::new(r"\# 3 0102 03");
        let data =
            RecordData::scan(Rtype::Int(4711), &mut scanner).unwrap();
        assert_eq!(
            data,
            RecordData::Unknown(
                UnknownRecordData::from_octets(
                    Rtype::Int(4711),
                    b"\x01\x02\x03".to_vec()
                )
                .unwrap()
            )
        );
        let mut scanner = Scanner::new(r"\# 4 010203");
        assert!(
            RecordData::scan(Rtype::Int(4711), &mut scanner).is_err()
        );
    }
}
