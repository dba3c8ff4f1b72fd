//! Record data from [RFC 4034]: DS, DNSKEY, RRSIG, and NSEC.
//!
//! The SIG record type, which RFC 2931 reuses for transaction
//! signatures, shares the RRSIG wire format and is defined here too.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::{DigestAlg, Rtype, SecAlg};
use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::{base16, base64};
use core::fmt;
use core::str::FromStr;

//------------ Dnskey --------------------------------------------------------

/// Dnskey record data.
///
/// Dnskey records store public keys used in the DNSSEC authentication
/// process. The key itself is opaque to this crate: signatures are
/// transported, not validated.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Dnskey {
    flags: u16,
    protocol: u8,
    algorithm: SecAlg,
    public_key: Vec<u8>,
}

impl Dnskey {
    /// The flag signalling a zone key.
    pub const FLAG_ZONE_KEY: u16 = 0x0100;

    /// The flag signalling a secure entry point.
    pub const FLAG_SEP: u16 = 0x0001;

    /// Creates new Dnskey record data from the components.
    #[must_use]
    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: SecAlg,
        public_key: Vec<u8>,
    ) -> Self {
        Dnskey {
            flags,
            protocol,
            algorithm,
            public_key,
        }
    }

    /// The key flags.
    #[must_use]
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// Returns whether the key is a zone key.
    #[must_use]
    pub fn is_zone_key(&self) -> bool {
        self.flags & Self::FLAG_ZONE_KEY != 0
    }

    /// Returns whether the key is a secure entry point.
    #[must_use]
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & Self::FLAG_SEP != 0
    }

    /// The protocol field. Must be 3 for DNSSEC.
    #[must_use]
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// The public key algorithm.
    #[must_use]
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// The public key in its raw octets.
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Computes the key tag of the key.
    ///
    /// The key tag is the checksum over the record data defined in
    /// appendix B of RFC 4034. It appears in DS and RRSIG records to
    /// hint which key was used.
    #[must_use]
    pub fn key_tag(&self) -> u16 {
        let mut composer = Composer::uncompressed();
        self.compose(&mut composer);
        let mut res = 0u32;
        for (i, &ch) in composer.as_slice().iter().enumerate() {
            if i & 1 == 0 {
                res += u32::from(ch) << 8;
            } else {
                res += u32::from(ch);
            }
        }
        res += (res >> 16) & 0xFFFF;
        (res & 0xFFFF) as u16
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u16()?,
            parser.parse_u8()?,
            SecAlg::parse(parser)?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.flags);
        target.append_u8(self.protocol);
        self.algorithm.compose(target);
        target.append_slice(&self.public_key);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u16()?,
            scanner.scan_u8()?,
            scan_secalg(scanner)?,
            scanner.scan_base64_rest()?,
        ))
    }
}

//--- Display

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.flags,
            self.protocol,
            self.algorithm.to_int(),
            base64::encode_string(&self.public_key)
        )
    }
}

//------------ Rrsig and Sig -------------------------------------------------

macro_rules! sig_type {
    ( $(#[$attr:meta])* $target:ident ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct $target {
            type_covered: Rtype,
            algorithm: SecAlg,
            labels: u8,
            original_ttl: u32,
            expiration: Timestamp,
            inception: Timestamp,
            key_tag: u16,
            signer_name: Name,
            signature: Vec<u8>,
        }

        impl $target {
            /// Creates new record data from the components.
            #[allow(clippy::too_many_arguments)]
            #[must_use]
            pub fn new(
                type_covered: Rtype,
                algorithm: SecAlg,
                labels: u8,
                original_ttl: u32,
                expiration: Timestamp,
                inception: Timestamp,
                key_tag: u16,
                signer_name: Name,
                signature: Vec<u8>,
            ) -> Self {
                $target {
                    type_covered,
                    algorithm,
                    labels,
                    original_ttl,
                    expiration,
                    inception,
                    key_tag,
                    signer_name,
                    signature,
                }
            }

            /// The type of the RRset covered by this signature.
            #[must_use]
            pub fn type_covered(&self) -> Rtype {
                self.type_covered
            }

            /// The algorithm of the signing key.
            #[must_use]
            pub fn algorithm(&self) -> SecAlg {
                self.algorithm
            }

            /// The number of labels of the covered RRset's owner name.
            #[must_use]
            pub fn labels(&self) -> u8 {
                self.labels
            }

            /// The TTL of the covered RRset as it appears in the zone.
            #[must_use]
            pub fn original_ttl(&self) -> u32 {
                self.original_ttl
            }

            /// The end of this signature's validity period.
            #[must_use]
            pub fn expiration(&self) -> Timestamp {
                self.expiration
            }

            /// The start of this signature's validity period.
            #[must_use]
            pub fn inception(&self) -> Timestamp {
                self.inception
            }

            /// The key tag of the signing key.
            #[must_use]
            pub fn key_tag(&self) -> u16 {
                self.key_tag
            }

            /// The owner name of the signing key.
            #[must_use]
            pub fn signer_name(&self) -> &Name {
                &self.signer_name
            }

            /// The cryptographic signature.
            #[must_use]
            pub fn signature(&self) -> &[u8] {
                &self.signature
            }

            /// Replaces the signature.
            pub fn set_signature(&mut self, signature: Vec<u8>) {
                self.signature = signature
            }

            pub fn parse(
                parser: &mut Parser,
            ) -> Result<Self, ParseError> {
                Ok(Self::new(
                    Rtype::parse(parser)?,
                    SecAlg::parse(parser)?,
                    parser.parse_u8()?,
                    parser.parse_u32()?,
                    Timestamp(parser.parse_u32()?),
                    Timestamp(parser.parse_u32()?),
                    parser.parse_u16()?,
                    Name::parse(parser)?,
                    parser.parse_remaining()?.to_vec(),
                ))
            }

            pub fn compose(&self, target: &mut Composer) {
                self.compose_without_signature(target);
                target.append_slice(&self.signature);
            }

            /// Appends everything up to the signature field.
            ///
            /// This is the form the signature itself is computed over.
            pub fn compose_without_signature(
                &self,
                target: &mut Composer,
            ) {
                self.type_covered.compose(target);
                self.algorithm.compose(target);
                target.append_u8(self.labels);
                target.append_u32(self.original_ttl);
                target.append_u32(self.expiration.0);
                target.append_u32(self.inception.0);
                target.append_u16(self.key_tag);
                // The signer name is never compressed (RFC 4034, 3.1.7).
                self.signer_name.compose_uncompressed(target);
            }

            pub fn scan(
                scanner: &mut Scanner,
            ) -> Result<Self, ScanError> {
                Ok(Self::new(
                    scanner.scan_token()?.parse().map_err(|_| {
                        ScanError::custom("expected record type")
                    })?,
                    scan_secalg(scanner)?,
                    scanner.scan_u8()?,
                    scanner.scan_u32()?,
                    scanner.scan_token()?.parse()?,
                    scanner.scan_token()?.parse()?,
                    scanner.scan_u16()?,
                    scanner.scan_name()?,
                    scanner.scan_base64_rest()?,
                ))
            }
        }

        //--- Display

        impl fmt::Display for $target {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    f,
                    "{} {} {} {} {} {} {} {} {}",
                    self.type_covered,
                    self.algorithm.to_int(),
                    self.labels,
                    self.original_ttl,
                    self.expiration,
                    self.inception,
                    self.key_tag,
                    self.signer_name,
                    base64::encode_string(&self.signature)
                )
            }
        }
    };
}

sig_type! {
    /// Rrsig record data.
    ///
    /// An Rrsig record holds the DNSSEC signature over one RRset
    /// together with the parameters needed to validate it.
    Rrsig
}

sig_type! {
    /// Sig record data.
    ///
    /// The Sig record is the predecessor of Rrsig with the identical
    /// wire format. It survives in SIG(0) transaction signatures per
    /// RFC 2931, where the type covered is zero and the validity
    /// window brackets the moment the message was signed.
    Sig
}

//------------ Ds ------------------------------------------------------------

/// Ds record data.
///
/// The delegation signer record appears in a parent zone and carries a
/// digest of a DNSKEY at the apex of the delegated child zone.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ds {
    key_tag: u16,
    algorithm: SecAlg,
    digest_type: DigestAlg,
    digest: Vec<u8>,
}

impl Ds {
    /// Creates new Ds record data from the components.
    #[must_use]
    pub fn new(
        key_tag: u16,
        algorithm: SecAlg,
        digest_type: DigestAlg,
        digest: Vec<u8>,
    ) -> Self {
        Ds {
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    /// The key tag of the referenced key.
    #[must_use]
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// The algorithm of the referenced key.
    #[must_use]
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// The algorithm that produced the digest.
    #[must_use]
    pub fn digest_type(&self) -> DigestAlg {
        self.digest_type
    }

    /// The digest of the referenced key.
    #[must_use]
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            parser.parse_u16()?,
            SecAlg::parse(parser)?,
            DigestAlg::parse(parser)?,
            parser.parse_remaining()?.to_vec(),
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.key_tag);
        self.algorithm.compose(target);
        self.digest_type.compose(target);
        target.append_slice(&self.digest);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u16()?,
            scan_secalg(scanner)?,
            DigestAlg::from_int(scanner.scan_u8()?),
            scanner.scan_base16_rest()?,
        ))
    }
}

//--- Display

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.key_tag,
            self.algorithm.to_int(),
            self.digest_type.to_int()
        )?;
        base16::display(&self.digest, f)
    }
}

//------------ Nsec ----------------------------------------------------------

/// Nsec record data.
///
/// Nsec records chain the names of a signed zone in canonical order
/// for authenticated denial of existence: each carries the next owner
/// name and the bitmap of types present at its own owner.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Nsec {
    next_name: Name,
    types: RtypeBitmap,
}

impl Nsec {
    /// Creates new Nsec record data from the components.
    #[must_use]
    pub fn new(next_name: Name, types: RtypeBitmap) -> Self {
        Nsec { next_name, types }
    }

    /// The next owner name in canonical zone order.
    #[must_use]
    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    /// The bitmap of types present at the owner name.
    #[must_use]
    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            Name::parse(parser)?,
            RtypeBitmap::parse(parser)?,
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        // The next name is not compressed (RFC 4034, section 4.1.1).
        self.next_name.compose_uncompressed(target);
        self.types.compose(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_name()?,
            RtypeBitmap::scan_rest(scanner)?,
        ))
    }
}

//--- Display

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.next_name, self.types)
    }
}

//------------ RtypeBitmap ---------------------------------------------------

/// The type bitmap of NSEC-style records.
///
/// On the wire the bitmap is a sequence of windows, each covering 256
/// record types. In memory the bitmap is a sorted list of the types
/// that are present.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RtypeBitmap {
    /// The included types, sorted, without duplicates.
    types: Vec<Rtype>,
}

impl RtypeBitmap {
    /// Creates a bitmap from a list of types.
    #[must_use]
    pub fn from_types(mut types: Vec<Rtype>) -> Self {
        types.sort();
        types.dedup();
        RtypeBitmap { types }
    }

    /// Returns whether the bitmap contains the given type.
    #[must_use]
    pub fn contains(&self, rtype: Rtype) -> bool {
        self.types.binary_search(&rtype).is_ok()
    }

    /// Returns an iterator over the included types.
    pub fn iter(&self) -> impl Iterator<Item = Rtype> + '_ {
        self.types.iter().copied()
    }

    /// Returns whether the bitmap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Takes a bitmap from the remainder of a parser.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut types = Vec::new();
        let mut last_window = None;
        while parser.remaining() > 0 {
            let window = parser.parse_u8()?;
            if let Some(last) = last_window {
                if window <= last {
                    return Err(ParseError::form_error(
                        "type bitmap windows out of order",
                    ));
                }
            }
            last_window = Some(window);
            let len = usize::from(parser.parse_u8()?);
            if len == 0 || len > 32 {
                return Err(ParseError::form_error(
                    "illegal type bitmap window length",
                ));
            }
            let octets = parser.parse_slice(len)?;
            for (idx, &octet) in octets.iter().enumerate() {
                for bit in 0..8 {
                    if octet & (0x80 >> bit) != 0 {
                        types.push(Rtype::from_int(
                            u16::from(window) << 8
                                | (idx << 3 | bit) as u16,
                        ));
                    }
                }
            }
        }
        Ok(RtypeBitmap { types })
    }

    /// Appends the wire format of the bitmap to a composer.
    pub fn compose(&self, target: &mut Composer) {
        let mut iter = self.types.iter().copied().peekable();
        while let Some(&first) = iter.peek() {
            let window = (first.to_int() >> 8) as u8;
            let mut octets = [0u8; 32];
            let mut len = 0;
            while let Some(&rtype) = iter.peek() {
                if (rtype.to_int() >> 8) as u8 != window {
                    break;
                }
                let low = rtype.to_int() as u8;
                octets[usize::from(low >> 3)] |= 0x80 >> (low & 7);
                len = len.max(usize::from(low >> 3) + 1);
                iter.next();
            }
            target.append_u8(window);
            target.append_u8(len as u8);
            target.append_slice(&octets[..len]);
        }
    }

    /// Scans all remaining tokens as type mnemonics.
    pub fn scan_rest(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let mut types = Vec::new();
        while !scanner.is_exhausted() {
            types.push(scanner.scan_token()?.parse().map_err(|_| {
                ScanError::custom("expected record type")
            })?);
        }
        Ok(Self::from_types(types))
    }
}

//--- Display

impl fmt::Display for RtypeBitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for rtype in &self.types {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            rtype.fmt(f)?;
        }
        Ok(())
    }
}

//------------ Timestamp -----------------------------------------------------

/// A point in time in RRSIG records.
///
/// The wire format is seconds since the Unix epoch modulo 2**32. The
/// representation format is `YYYYMMDDHHmmSS` in UTC; a plain decimal
/// second count is accepted as well.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(pub u32);

impl Timestamp {
    /// Returns the raw number of seconds.
    #[must_use]
    pub fn to_secs(self) -> u32 {
        self.0
    }
}

impl From<u32> for Timestamp {
    fn from(value: u32) -> Self {
        Timestamp(value)
    }
}

//--- FromStr

impl FromStr for Timestamp {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 14 && s.bytes().all(|ch| ch.is_ascii_digit()) {
            let num = |range: core::ops::Range<usize>| -> u32 {
                s[range].parse().expect("checked digits")
            };
            let year = i64::from(num(0..4));
            let month = num(4..6);
            let day = num(6..8);
            let hour = num(8..10);
            let minute = num(10..12);
            let second = num(12..14);
            if !(1..=12).contains(&month)
                || !(1..=31).contains(&day)
                || hour > 23
                || minute > 59
                || second > 59
            {
                return Err(ScanError::custom("illegal timestamp"));
            }
            let days = days_from_civil(year, month, day);
            let secs =
                days * 86_400 + i64::from(hour) * 3_600
                    + i64::from(minute) * 60
                    + i64::from(second);
            Ok(Timestamp(secs as u32))
        } else {
            s.parse()
                .map(Timestamp)
                .map_err(|_| ScanError::custom("illegal timestamp"))
        }
    }
}

//--- Display

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let secs = i64::from(self.0);
        let days = secs.div_euclid(86_400);
        let rem = secs.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);
        write!(
            f,
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            year,
            month,
            day,
            rem / 3_600,
            rem / 60 % 60,
            rem % 60
        )
    }
}

/// Returns the number of days since the Unix epoch for a civil date.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year - era * 400;
    let mp = i64::from(if month > 2 { month - 3 } else { month + 9 });
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Returns the civil date for a number of days since the Unix epoch.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

//------------ Helpers -------------------------------------------------------

/// Scans a security algorithm given as its decimal number.
fn scan_secalg(scanner: &mut Scanner) -> Result<SecAlg, ScanError> {
    Ok(SecAlg::from_int(scanner.scan_u8()?))
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dnskey_key_tag() {
        // The example key from RFC 4034, section 5.4.
        let key = base64::decode(
            "AQOeiiR0GOMYkDshWoSKz9Xz\
             fwJr1AYtsmx3TGkJaNXVbfi/\
             2pHm822aJ5iI9BMzNXxeYCmZ\
             DRD99WYwYqUSdjMmmAphXdvx\
             egXd/M5+X7OrzKBaMbCVdFLU\
             Uh6DhweJBjEVv5f2wwjM9Xzc\
             nOf+EPbtG9DMBmADjFDc2w/r\
             ljwvFw==",
        )
        .unwrap();
        let dnskey =
            Dnskey::new(256, 3, SecAlg::RSASHA1, key);
        assert_eq!(dnskey.key_tag(), 60485);
    }

    #[test]
    fn ds_round_trips() {
        let text = "60485 5 1 2BB183AF5F22588179A53B0A98631FAD1A292118";
        let rdata = Ds::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(rdata.key_tag(), 60485);
        assert_eq!(rdata.algorithm(), SecAlg::RSASHA1);
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Ds::parse(&mut parser).unwrap(), rdata);
        assert_eq!(format!("{}", rdata), text);
    }

    #[test]
    fn timestamp_text() {
        // From RFC 4034, section 3.2: the example RRSIG uses this
        // expiration time.
        let ts: Timestamp = "20030322173103".parse().unwrap();
        assert_eq!(ts.to_secs(), 1048354263);
        assert_eq!(format!("{}", ts), "20030322173103");
        let plain: Timestamp = "1048354263".parse().unwrap();
        assert_eq!(plain, ts);
        assert!("2003032217310".parse::<Timestamp>().is_err());
    }

    #[test]
    fn rrsig_text_round_trip() {
        let text = "A 5 3 86400 20030322173103 20030220173103 2642 \
                    example.com. oJB1W6WNGv+ldvQ3WDG0MQkg5IEhjRip8WTr\
                    PYGv07h108dUKGMeDPKijVCHX3DDKdfb+v6o\
                    B9wfuh3DTJXUAfI/M0zmO/zz8bW0Rznl8O3t\
                    GNazPwQKkRN20XPXV6nwwfoXmJQbsLNrLfkG\
                    J5D6fwFm8nN+6pBzeDQfsS3Ap3o=";
        let rdata = Rrsig::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(rdata.type_covered(), Rtype::A);
        assert_eq!(rdata.labels(), 3);
        assert_eq!(rdata.key_tag(), 2642);
        let shown = format!("{}", rdata);
        let reparsed = Rrsig::scan(&mut Scanner::new(&shown)).unwrap();
        assert_eq!(reparsed, rdata);
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Rrsig::parse(&mut parser).unwrap(), rdata);
    }

    #[test]
    fn rtype_bitmap_round_trip() {
        let bitmap = RtypeBitmap::from_types(vec![
            Rtype::A,
            Rtype::MX,
            Rtype::RRSIG,
            Rtype::NSEC,
            Rtype::Int(0x4a02),
        ]);
        let mut composer = Composer::uncompressed();
        bitmap.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        let parsed = RtypeBitmap::parse(&mut parser).unwrap();
        assert_eq!(parsed, bitmap);
        assert!(bitmap.contains(Rtype::MX));
        assert!(!bitmap.contains(Rtype::SOA));
    }

    #[test]
    fn nsec_round_trips() {
        let rdata = Nsec::new(
            "host.example.com".parse().unwrap(),
            RtypeBitmap::from_types(vec![
                Rtype::A,
                Rtype::MX,
                Rtype::RRSIG,
                Rtype::NSEC,
            ]),
        );
        assert_eq!(
            format!("{}", rdata),
            "host.example.com. A MX RRSIG NSEC"
        );
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Nsec::parse(&mut parser).unwrap(), rdata);
        assert_eq!(
            Nsec::scan(&mut Scanner::new(
                "host.example.com. A MX RRSIG NSEC"
            ))
            .unwrap(),
            rdata
        );
    }
}
