//! Record data from [RFC 1876]: the LOC record type.
//!
//! [RFC 1876]: https://tools.ietf.org/html/rfc1876

use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use core::fmt;

/// The latitude and longitude of the equator and prime meridian.
const COORD_BASE: u32 = 0x8000_0000;

/// The altitude offset: 100,000 meters below sea level, in centimeters.
const ALT_BASE: i64 = 10_000_000;

//------------ Loc -----------------------------------------------------------

/// Loc record data.
///
/// Loc records express the geographic location of the owner name:
/// latitude, longitude, and altitude together with the precision of
/// the measurement. Sizes and precisions are stored in a packed
/// base-and-exponent form with centimeter resolution.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Loc {
    version: u8,
    size: u8,
    horiz_pre: u8,
    vert_pre: u8,
    latitude: u32,
    longitude: u32,
    altitude: u32,
}

impl Loc {
    /// Creates new Loc record data from the raw fields.
    ///
    /// The version must be zero; no other version is defined.
    pub fn new(
        version: u8,
        size: u8,
        horiz_pre: u8,
        vert_pre: u8,
        latitude: u32,
        longitude: u32,
        altitude: u32,
    ) -> Result<Self, ParseError> {
        if version != 0 {
            return Err(ParseError::form_error(
                "unknown LOC version",
            ));
        }
        Ok(Loc {
            version,
            size,
            horiz_pre,
            vert_pre,
            latitude,
            longitude,
            altitude,
        })
    }

    /// The version of the record format. Always zero.
    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The diameter of the described sphere in packed form.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The horizontal precision in packed form.
    #[must_use]
    pub fn horiz_pre(&self) -> u8 {
        self.horiz_pre
    }

    /// The vertical precision in packed form.
    #[must_use]
    pub fn vert_pre(&self) -> u8 {
        self.vert_pre
    }

    /// The latitude in thousandths of a second of arc from 2^31.
    #[must_use]
    pub fn latitude(&self) -> u32 {
        self.latitude
    }

    /// The longitude in thousandths of a second of arc from 2^31.
    #[must_use]
    pub fn longitude(&self) -> u32 {
        self.longitude
    }

    /// The altitude in centimeters from 100,000 m below sea level.
    #[must_use]
    pub fn altitude(&self) -> u32 {
        self.altitude
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Self::new(
            parser.parse_u8()?,
            parser.parse_u8()?,
            parser.parse_u8()?,
            parser.parse_u8()?,
            parser.parse_u32()?,
            parser.parse_u32()?,
            parser.parse_u32()?,
        )
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u8(self.version);
        target.append_u8(self.size);
        target.append_u8(self.horiz_pre);
        target.append_u8(self.vert_pre);
        target.append_u32(self.latitude);
        target.append_u32(self.longitude);
        target.append_u32(self.altitude);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let latitude = scan_coord(scanner, "N", "S")?;
        let longitude = scan_coord(scanner, "E", "W")?;
        let altitude = scan_meters(scanner)? + ALT_BASE;
        if !(0..=i64::from(u32::MAX)).contains(&altitude) {
            return Err(ScanError::custom("altitude out of range"));
        }
        // The trailing size and precision values are optional with
        // defaults of 1 m, 10,000 m, and 10 m.
        let size = scan_packed(scanner, 0x12)?;
        let horiz_pre = scan_packed(scanner, 0x16)?;
        let vert_pre = scan_packed(scanner, 0x13)?;
        Self::new(
            0,
            size,
            horiz_pre,
            vert_pre,
            latitude,
            longitude,
            altitude as u32,
        )
        .map_err(Into::into)
    }
}

//--- Display

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        display_coord(self.latitude, "N", "S", f)?;
        f.write_str(" ")?;
        display_coord(self.longitude, "E", "W", f)?;
        let alt = i64::from(self.altitude) - ALT_BASE;
        let (sign, alt) = if alt < 0 { ("-", -alt) } else { ("", alt) };
        write!(f, " {}{}.{:02}m", sign, alt / 100, alt % 100)?;
        for packed in [self.size, self.horiz_pre, self.vert_pre] {
            f.write_str(" ")?;
            display_packed(packed, f)?;
        }
        Ok(())
    }
}

//------------ Helpers -------------------------------------------------------

/// Scans one coordinate: `deg [min [sec]] hemisphere`.
fn scan_coord(
    scanner: &mut Scanner,
    pos: &str,
    neg: &str,
) -> Result<u32, ScanError> {
    let deg = scanner.scan_u32()?;
    let mut min = 0u32;
    let mut msec = 0u64;
    let mut sign = None;
    for step in 0..3 {
        let token = scanner.scan_token()?;
        if token.eq_ignore_ascii_case(pos) {
            sign = Some(1i64);
            break;
        }
        if token.eq_ignore_ascii_case(neg) {
            sign = Some(-1i64);
            break;
        }
        match step {
            0 => {
                min = token.parse().map_err(|_| {
                    ScanError::custom("expected minutes")
                })?
            }
            1 => {
                let secs: f64 = token.parse().map_err(|_| {
                    ScanError::custom("expected seconds")
                })?;
                msec = (secs * 1000.0).round() as u64;
            }
            _ => {
                return Err(ScanError::custom(
                    "expected hemisphere letter",
                ))
            }
        }
    }
    let sign = sign.ok_or_else(|| {
        ScanError::custom("expected hemisphere letter")
    })?;
    if deg > 180 || min > 59 {
        return Err(ScanError::custom("coordinate out of range"));
    }
    let total = i64::from(deg) * 3_600_000
        + i64::from(min) * 60_000
        + msec as i64;
    let value = i64::from(COORD_BASE) + sign * total;
    if !(0..=i64::from(u32::MAX)).contains(&value) {
        return Err(ScanError::custom("coordinate out of range"));
    }
    Ok(value as u32)
}

/// Displays one coordinate as `deg min sec.msec hemisphere`.
fn display_coord(
    value: u32,
    pos: &str,
    neg: &str,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    let rel = i64::from(value) - i64::from(COORD_BASE);
    let (hemi, abs) = if rel < 0 { (neg, -rel) } else { (pos, rel) };
    write!(
        f,
        "{} {} {}.{:03} {}",
        abs / 3_600_000,
        abs / 60_000 % 60,
        abs / 1_000 % 60,
        abs % 1_000,
        hemi
    )
}

/// Scans an altitude or distance in meters with an optional `m` suffix.
///
/// Returns the value in centimeters.
fn scan_meters(scanner: &mut Scanner) -> Result<i64, ScanError> {
    let token = scanner.scan_token()?;
    let token = token.strip_suffix(['m', 'M']).unwrap_or(token);
    let meters: f64 = token
        .parse()
        .map_err(|_| ScanError::custom("expected a distance"))?;
    Ok((meters * 100.0).round() as i64)
}

/// Scans an optional packed size value, using the given default.
fn scan_packed(
    scanner: &mut Scanner,
    default: u8,
) -> Result<u8, ScanError> {
    if scanner.is_exhausted() {
        return Ok(default);
    }
    let cm = scan_meters(scanner)?;
    if cm < 0 {
        return Err(ScanError::custom("negative size"));
    }
    let mut value = cm as u64;
    let mut exponent = 0u8;
    while value > 9 {
        value /= 10;
        exponent += 1;
        if exponent > 9 {
            return Err(ScanError::custom("size out of range"));
        }
    }
    Ok((value as u8) << 4 | exponent)
}

/// Displays a packed size value in meters.
fn display_packed(packed: u8, f: &mut fmt::Formatter) -> fmt::Result {
    let base = u64::from(packed >> 4);
    let exponent = u32::from(packed & 0x0F);
    let cm = base * 10u64.pow(exponent.min(9));
    if cm % 100 == 0 {
        write!(f, "{}m", cm / 100)
    } else {
        write!(f, "{}.{:02}m", cm / 100, cm % 100)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scan_and_display() {
        // A location from RFC 1876, section 4.
        let text = "52 22 23.000 N 4 53 32.000 E -2.00m 0m 10000m 10m";
        let rdata = Loc::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(format!("{}", rdata), text);
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        assert_eq!(composer.as_slice().len(), 16);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Loc::parse(&mut parser).unwrap(), rdata);
    }

    #[test]
    fn short_forms_get_defaults() {
        let rdata =
            Loc::scan(&mut Scanner::new("42 N 71 W 0m")).unwrap();
        assert_eq!(rdata.size(), 0x12);
        assert_eq!(rdata.horiz_pre(), 0x16);
        assert_eq!(rdata.vert_pre(), 0x13);
        assert_eq!(rdata.latitude(), COORD_BASE + 42 * 3_600_000);
    }

    #[test]
    fn rejects_nonzero_version() {
        let mut parser = Parser::from_octets(&[1u8; 16]);
        assert!(Loc::parse(&mut parser).is_err());
    }
}
