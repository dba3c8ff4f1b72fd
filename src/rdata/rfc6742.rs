//! Record data from [RFC 6742]: the ILNP record types.
//!
//! This RFC defines the NID, L32, L64, and LP record types used by the
//! Identifier-Locator Network Protocol.
//!
//! [RFC 6742]: https://tools.ietf.org/html/rfc6742

use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;
use core::str::FromStr;
use std::net::Ipv4Addr;

//------------ Nid ----------------------------------------------------------

/// Nid record data.
///
/// Nid records hold a node identifier: a preference and a 64 bit value
/// presented in the same grouped-hex format as an IPv6 interface
/// identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Nid {
    preference: u16,
    node_id: u64,
}

impl Nid {
    /// Creates new Nid record data from the components.
    #[must_use]
    pub fn new(preference: u16, node_id: u64) -> Self {
        Nid {
            preference,
            node_id,
        }
    }

    /// The preference of the record. Lower values are preferred.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The node identifier value.
    #[must_use]
    pub fn node_id(&self) -> u64 {
        self.node_id
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let preference = parser.parse_u16()?;
        let hi = parser.parse_u32()?;
        let lo = parser.parse_u32()?;
        Ok(Self::new(preference, u64::from(hi) << 32 | u64::from(lo)))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.preference);
        target.append_slice(&self.node_id.to_be_bytes());
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let preference = scanner.scan_u16()?;
        Ok(Self::new(preference, scan_group_hex(scanner)?))
    }
}

//--- Display

impl fmt::Display for Nid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.preference)?;
        display_group_hex(self.node_id, f)
    }
}

//------------ L32 ----------------------------------------------------------

/// L32 record data.
///
/// L32 records hold a 32 bit locator presented like an IPv4 address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct L32 {
    preference: u16,
    locator: Ipv4Addr,
}

impl L32 {
    /// Creates new L32 record data from the components.
    #[must_use]
    pub fn new(preference: u16, locator: Ipv4Addr) -> Self {
        L32 {
            preference,
            locator,
        }
    }

    /// The preference of the record. Lower values are preferred.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The locator value.
    #[must_use]
    pub fn locator(&self) -> Ipv4Addr {
        self.locator
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let preference = parser.parse_u16()?;
        let octets = parser.parse_slice(4)?;
        Ok(Self::new(
            preference,
            Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]),
        ))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.preference);
        target.append_slice(&self.locator.octets());
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let preference = scanner.scan_u16()?;
        let locator = Ipv4Addr::from_str(scanner.scan_token()?)
            .map_err(|_| ScanError::custom("expected 32 bit locator"))?;
        Ok(Self::new(preference, locator))
    }
}

//--- Display

impl fmt::Display for L32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.locator)
    }
}

//------------ L64 ----------------------------------------------------------

/// L64 record data.
///
/// L64 records hold a 64 bit locator in grouped-hex presentation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct L64 {
    preference: u16,
    locator: u64,
}

impl L64 {
    /// Creates new L64 record data from the components.
    #[must_use]
    pub fn new(preference: u16, locator: u64) -> Self {
        L64 {
            preference,
            locator,
        }
    }

    /// The preference of the record. Lower values are preferred.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The locator value.
    #[must_use]
    pub fn locator(&self) -> u64 {
        self.locator
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let preference = parser.parse_u16()?;
        let hi = parser.parse_u32()?;
        let lo = parser.parse_u32()?;
        Ok(Self::new(preference, u64::from(hi) << 32 | u64::from(lo)))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.preference);
        target.append_slice(&self.locator.to_be_bytes());
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let preference = scanner.scan_u16()?;
        Ok(Self::new(preference, scan_group_hex(scanner)?))
    }
}

//--- Display

impl fmt::Display for L64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.preference)?;
        display_group_hex(self.locator, f)
    }
}

//------------ Lp -----------------------------------------------------------

/// Lp record data.
///
/// Lp records point from a node name to the name under which locator
/// records can be found. The name is not subject to compression.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Lp {
    preference: u16,
    fqdn: Name,
}

impl Lp {
    /// Creates new Lp record data from the components.
    #[must_use]
    pub fn new(preference: u16, fqdn: Name) -> Self {
        Lp { preference, fqdn }
    }

    /// The preference of the record. Lower values are preferred.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name holding the locators.
    #[must_use]
    pub fn fqdn(&self) -> &Name {
        &self.fqdn
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Self::new(parser.parse_u16()?, Name::parse(parser)?))
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u16(self.preference);
        self.fqdn.compose_uncompressed(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(scanner.scan_u16()?, scanner.scan_name()?))
    }
}

//--- Display

impl fmt::Display for Lp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.fqdn)
    }
}

//------------ Helpers -------------------------------------------------------

/// Scans a 64 bit value in `xxxx:xxxx:xxxx:xxxx` presentation.
fn scan_group_hex(scanner: &mut Scanner) -> Result<u64, ScanError> {
    let token = scanner.scan_token()?;
    let mut groups = token.split(':');
    let mut res = 0u64;
    for _ in 0..4 {
        let group = groups
            .next()
            .and_then(|group| u16::from_str_radix(group, 16).ok())
            .ok_or_else(|| ScanError::custom("expected 64 bit value"))?;
        res = res << 16 | u64::from(group);
    }
    if groups.next().is_some() {
        return Err(ScanError::custom("expected 64 bit value"));
    }
    Ok(res)
}

/// Displays a 64 bit value in `xxxx:xxxx:xxxx:xxxx` presentation.
fn display_group_hex(value: u64, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
        f,
        "{:x}:{:x}:{:x}:{:x}",
        value >> 48 & 0xFFFF,
        value >> 32 & 0xFFFF,
        value >> 16 & 0xFFFF,
        value & 0xFFFF
    )
}

//============ Test ==========================================================
