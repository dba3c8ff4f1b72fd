//! Record data from [RFC 1035]: the initial record types.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use crate::base::charstr::CharStr;
use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;
use core::str::FromStr;
use std::net::Ipv4Addr;

//------------ A ------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host. The wire format is the
/// 32 bit IPv4 address in network byte order. The representation format
/// is the usual dotted notation.
///
/// The A record type is defined in RFC 1035, section 3.4.1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// Creates a new A record data from an IPv4 address.
    #[must_use]
    pub fn new(addr: Ipv4Addr) -> A {
        A { addr }
    }

    /// Creates a new A record from the IPv4 address components.
    #[must_use]
    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> A {
        A::new(Ipv4Addr::new(a, b, c, d))
    }

    /// Returns the address of the record.
    #[must_use]
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let octets = parser.parse_slice(4)?;
        Ok(A::from_octets(octets[0], octets[1], octets[2], octets[3]))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_slice(&self.addr.octets())
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ipv4Addr::from_str(scanner.scan_token()?)
            .map(A::new)
            .map_err(|_| ScanError::custom("expected IPv4 address"))
    }
}

//--- From and FromStr

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

impl FromStr for A {
    type Err = <Ipv4Addr as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Addr::from_str(s).map(A::new)
    }
}

//--- Display

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//------------ Cname --------------------------------------------------------

dname_type_well_known! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for a
    /// domain name alias.
    ///
    /// The CNAME type is defined in RFC 1035, section 3.3.1.
    (Cname, cname)
}

//------------ Hinfo --------------------------------------------------------

/// Hinfo record data.
///
/// Hinfo records are used to acquire general information about a host,
/// specifically the CPU type and operating system type.
///
/// The Hinfo type is defined in RFC 1035, section 3.3.2.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Hinfo {
    cpu: CharStr,
    os: CharStr,
}

impl Hinfo {
    /// Creates a new Hinfo record data from the components.
    #[must_use]
    pub fn new(cpu: CharStr, os: CharStr) -> Self {
        Hinfo { cpu, os }
    }

    /// The CPU type of the host.
    #[must_use]
    pub fn cpu(&self) -> &CharStr {
        &self.cpu
    }

    /// The operating system type of the host.
    #[must_use]
    pub fn os(&self) -> &CharStr {
        &self.os
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(CharStr::parse(parser)?, CharStr::parse(parser)?))
    }

    pub fn compose(&self, target: &mut Composer) {
        self.cpu.compose(target);
        self.os.compose(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_charstr()?,
            scanner.scan_charstr()?,
        ))
    }
}

//--- Display

impl fmt::Display for Hinfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.cpu, self.os)
    }
}

//------------ Minfo --------------------------------------------------------

/// Minfo record data.
///
/// The Minfo record specifies a mailbox which is responsible for the
/// mailing list or mailbox and a mailbox that receives error messages
/// related to the list or box.
///
/// The Minfo type is defined in RFC 1035, section 3.3.7.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Minfo {
    rmailbx: Name,
    emailbx: Name,
}

impl Minfo {
    /// Creates a new Minfo record data from the components.
    #[must_use]
    pub fn new(rmailbx: Name, emailbx: Name) -> Self {
        Minfo { rmailbx, emailbx }
    }

    /// The responsible mailbox.
    #[must_use]
    pub fn rmailbx(&self) -> &Name {
        &self.rmailbx
    }

    /// The error mailbox.
    #[must_use]
    pub fn emailbx(&self) -> &Name {
        &self.emailbx
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(Name::parse(parser)?, Name::parse(parser)?))
    }

    pub fn compose(&self, target: &mut Composer) {
        self.rmailbx.compose(target);
        self.emailbx.compose(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(scanner.scan_name()?, scanner.scan_name()?))
    }
}

//--- Display

impl fmt::Display for Minfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.rmailbx, self.emailbx)
    }
}

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange
/// for the owner name, together with a preference value: lower values
/// are tried first.
///
/// The Mx type is defined in RFC 1035, section 3.3.9.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Mx {
    preference: u16,
    exchange: Name,
}

impl Mx {
    /// Creates a new Mx record data from the components.
    #[must_use]
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same
    /// owner. Lower values are preferred.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    #[must_use]
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(parser.parse_u16()?, Name::parse(parser)?))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.preference);
        self.exchange.compose(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(scanner.scan_u16()?, scanner.scan_name()?))
    }
}

//--- Display

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//------------ Ns -----------------------------------------------------------

dname_type_well_known! {
    /// NS record data.
    ///
    /// NS records specify hosts that are authoritative for a class and
    /// domain.
    ///
    /// The NS record type is defined in RFC 1035, section 3.3.11.
    (Ns, nsdname)
}

//------------ Ptr ----------------------------------------------------------

dname_type_well_known! {
    /// PTR record data.
    ///
    /// PTR records are used in special domains to point to some other
    /// location in the domain space.
    ///
    /// The PTR record type is defined in RFC 1035, section 3.3.12.
    (Ptr, ptrdname)
}

//------------ Soa ----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent
/// to name server maintenance operations.
///
/// The Soa record type is defined in RFC 1035, section 3.3.13.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Soa {
    mname: Name,
    rname: Name,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    /// Creates new Soa record data from content.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server for the zone.
    #[must_use]
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// The mailbox for the person responsible for the zone.
    #[must_use]
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// The serial number of the original copy of the zone.
    #[must_use]
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// The time interval before the zone should be refreshed.
    #[must_use]
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// The time before a failed refresh is retried.
    #[must_use]
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// The upper limit of time the zone is authoritative.
    #[must_use]
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// The minimum TTL to be exported with any RR from this zone.
    #[must_use]
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(
            Name::parse(parser)?,
            Name::parse(parser)?,
            parser.parse_u32()?,
            parser.parse_u32()?,
            parser.parse_u32()?,
            parser.parse_u32()?,
            parser.parse_u32()?,
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        self.mname.compose(target);
        self.rname.compose(target);
        target.append_u32(self.serial);
        target.append_u32(self.refresh);
        target.append_u32(self.retry);
        target.append_u32(self.expire);
        target.append_u32(self.minimum);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_name()?,
            scanner.scan_name()?,
            scanner.scan_u32()?,
            scanner.scan_u32()?,
            scanner.scan_u32()?,
            scanner.scan_u32()?,
            scanner.scan_u32()?,
        ))
    }
}

//--- Display

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//------------ Txt ----------------------------------------------------------

/// Txt record data.
///
/// Txt records hold descriptive text: one or more character strings of
/// up to 255 octets each.
///
/// The Txt record type is defined in RFC 1035, section 3.3.14.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Txt {
    /// The character strings of the record, in order.
    text: Vec<CharStr>,
}

impl Txt {
    /// Creates new record data from the given strings.
    ///
    /// There has to be at least one string.
    pub fn new(text: Vec<CharStr>) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Err(ParseError::form_error("empty TXT record"));
        }
        Ok(Txt { text })
    }

    /// Creates record data by splitting the given octets into strings.
    pub fn from_slice(mut slice: &[u8]) -> Result<Self, ParseError> {
        let mut text = Vec::new();
        loop {
            let chunk_len = slice.len().min(255);
            let (chunk, rest) = slice.split_at(chunk_len);
            text.push(
                CharStr::from_octets(chunk)
                    .expect("chunk no longer than 255 octets"),
            );
            slice = rest;
            if slice.is_empty() {
                break;
            }
        }
        Self::new(text)
    }

    /// Returns an iterator over the character strings of the record.
    pub fn iter(&self) -> impl Iterator<Item = &CharStr> {
        self.text.iter()
    }

    /// Returns the concatenated content of all strings.
    #[must_use]
    pub fn text(&self) -> Vec<u8> {
        let mut res = Vec::new();
        for item in &self.text {
            res.extend_from_slice(item.as_slice());
        }
        res
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut text = vec![CharStr::parse(parser)?];
        while parser.remaining() > 0 {
            text.push(CharStr::parse(parser)?);
        }
        Ok(Txt { text })
    }

    pub fn compose(&self, target: &mut Composer) {
        for item in &self.text {
            item.compose(target)
        }
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Txt {
            text: scanner.scan_charstrs()?,
        })
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for item in &self.text {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            item.fmt(f)?;
        }
        Ok(())
    }
}

//------------ Wks ----------------------------------------------------------

/// Wks record data.
///
/// Wks records describe the well-known services supported by a
/// particular protocol on a particular internet address: a bitmap with
/// one bit per port number.
///
/// The Wks record type is defined in RFC 1035, section 3.4.2.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Wks {
    address: Ipv4Addr,
    protocol: u8,
    /// The service bitmap; bit `n` set means port `n` is served.
    bitmap: Vec<u8>,
}

impl Wks {
    /// Creates new record data from an address, protocol, and ports.
    #[must_use]
    pub fn new(address: Ipv4Addr, protocol: u8, ports: &[u16]) -> Self {
        let mut bitmap = Vec::new();
        for &port in ports {
            let octet = usize::from(port / 8);
            if bitmap.len() <= octet {
                bitmap.resize(octet + 1, 0);
            }
            bitmap[octet] |= 0x80 >> (port % 8);
        }
        Wks {
            address,
            protocol,
            bitmap,
        }
    }

    /// The internet address of the host the record is for.
    #[must_use]
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// The protocol number the bitmap applies to.
    #[must_use]
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Returns whether a given port is served.
    #[must_use]
    pub fn serves(&self, port: u16) -> bool {
        let octet = usize::from(port / 8);
        match self.bitmap.get(octet) {
            Some(&bits) => bits & (0x80 >> (port % 8)) != 0,
            None => false,
        }
    }

    /// Returns an iterator over the served ports.
    pub fn iter_ports(&self) -> impl Iterator<Item = u16> + '_ {
        (0..(self.bitmap.len() * 8).min(1 << 16)).filter_map(
            move |port| {
                let port = port as u16;
                self.serves(port).then_some(port)
            },
        )
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let octets = parser.parse_slice(4)?;
        let address =
            Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);
        let protocol = parser.parse_u8()?;
        let bitmap = parser.parse_remaining()?.to_vec();
        Ok(Wks {
            address,
            protocol,
            bitmap,
        })
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_slice(&self.address.octets());
        target.append_u8(self.protocol);
        target.append_slice(&self.bitmap);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let address = Ipv4Addr::from_str(scanner.scan_token()?)
            .map_err(|_| ScanError::custom("expected IPv4 address"))?;
        let protocol = scanner.scan_u8()?;
        let mut ports = Vec::new();
        while !scanner.is_exhausted() {
            ports.push(scanner.scan_u16()?);
        }
        Ok(Self::new(address, protocol, &ports))
    }
}

//--- Display

impl fmt::Display for Wks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.address, self.protocol)?;
        for port in self.iter_ports() {
            write!(f, " {}", port)?;
        }
        Ok(())
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_round_trips() {
        let rdata = A::from_octets(192, 0, 2, 33);
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        assert_eq!(composer.as_slice(), b"\xc0\x00\x02\x21");
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(A::parse(&mut parser).unwrap(), rdata);
        assert_eq!(
            A::scan(&mut Scanner::new("192.0.2.33")).unwrap(),
            rdata
        );
        assert_eq!(format!("{}", rdata), "192.0.2.33");
    }

    #[test]
    fn soa_text_round_trip() {
        let text = "ns.example.com. hostmaster.example.com. \
                    2024010101 7200 3600 1209600 300";
        let rdata = Soa::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(rdata.serial(), 2024010101);
        assert_eq!(
            Soa::scan(&mut Scanner::new(&format!("{}", rdata))).unwrap(),
            rdata
        );
    }

    #[test]
    fn mx_wire_round_trip() {
        let rdata = Mx::new(10, "mail.example.com".parse().unwrap());
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Mx::parse(&mut parser).unwrap(), rdata);
    }

    #[test]
    fn txt_parse_multiple_strings() {
        let mut parser = Parser::from_octets(b"\x03foo\x03bar");
        let rdata = Txt::parse(&mut parser).unwrap();
        assert_eq!(rdata.text(), b"foobar");
        assert_eq!(format!("{}", rdata), "\"foo\" \"bar\"");
        let scanned =
            Txt::scan(&mut Scanner::new("\"foo\" \"bar\"")).unwrap();
        assert_eq!(scanned, rdata);
    }

    #[test]
    fn txt_from_long_slice() {
        let long = b"x".repeat(300);
        let rdata = Txt::from_slice(&long).unwrap();
        assert_eq!(rdata.iter().count(), 2);
        assert_eq!(rdata.text(), long);
    }

    #[test]
    fn wks_ports() {
        let rdata = Wks::new(
            Ipv4Addr::new(192, 0, 2, 1),
            6,
            &[21, 25, 80],
        );
        assert!(rdata.serves(25));
        assert!(!rdata.serves(22));
        assert_eq!(
            rdata.iter_ports().collect::<Vec<_>>(),
            vec![21, 25, 80]
        );
        assert_eq!(format!("{}", rdata), "192.0.2.1 6 21 25 80");
        let scanned =
            Wks::scan(&mut Scanner::new("192.0.2.1 6 21 25 80")).unwrap();
        assert_eq!(scanned, rdata);
    }
}
