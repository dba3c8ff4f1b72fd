//! Record data from [RFC 6891]: the OPT pseudo record type.
//!
//! The OPT record is not really a resource record: it lives only in
//! the additional section of a message and reinterprets the CLASS and
//! TTL fields of the record header. [`Opt`] covers the record data, a
//! list of EDNS options; [`OptRecord`] wraps the whole record and
//! gives the reinterpreted header fields their proper names.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

use crate::base::iana::{Class, Rtype};
use crate::base::name::Name;
use crate::base::record::Record;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::base16;
use core::fmt;

//------------ Opt -----------------------------------------------------------

/// Opt record data: a sequence of EDNS options.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Opt {
    options: Vec<OptOption>,
}

impl Opt {
    /// Creates empty record data without any options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an option.
    ///
    /// Fails if the option data is longer than 65,535 octets.
    pub fn push(
        &mut self,
        code: u16,
        data: Vec<u8>,
    ) -> Result<(), ParseError> {
        if data.len() > usize::from(u16::MAX) {
            return Err(ParseError::form_error("long EDNS option"));
        }
        self.options.push(OptOption { code, data });
        Ok(())
    }

    /// Returns an iterator over the options.
    pub fn iter(&self) -> impl Iterator<Item = &OptOption> {
        self.options.iter()
    }

    /// Returns the first option with the given code.
    #[must_use]
    pub fn find(&self, code: u16) -> Option<&OptOption> {
        self.options.iter().find(|option| option.code == code)
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut options = Vec::new();
        while parser.remaining() > 0 {
            let code = parser.parse_u16()?;
            let len = usize::from(parser.parse_u16()?);
            let data = parser.parse_slice(len)?.to_vec();
            options.push(OptOption { code, data });
        }
        Ok(Opt { options })
    }

    pub fn compose(&self, target: &mut Composer) {
        for option in &self.options {
            target.append_u16(option.code);
            target.append_u16(option.data.len() as u16);
            target.append_slice(&option.data);
        }
    }

    /// OPT has no representation format; scanning always fails.
    pub fn scan(_scanner: &mut Scanner) -> Result<Self, ScanError> {
        Err(ScanError::custom(
            "OPT records have no representation format",
        ))
    }
}

//--- Display

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for option in &self.options {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{}:", option.code)?;
            base16::display(&option.data, f)?;
        }
        Ok(())
    }
}

//------------ OptOption -----------------------------------------------------

/// A single EDNS option: a code and opaque data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OptOption {
    code: u16,
    data: Vec<u8>,
}

impl OptOption {
    /// The option code.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The option data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

//------------ OptRecord -----------------------------------------------------

/// An entire OPT record.
///
/// For an OPT record, the record header fields are reinterpreted: the
/// CLASS carries the requester's maximum UDP payload size and the TTL
/// packs the extended RCODE bits, the EDNS version, and the DO flag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptRecord {
    udp_payload_size: u16,
    ext_rcode: u8,
    version: u8,
    flags: u16,
    opt: Opt,
}

impl OptRecord {
    /// The flags bit signalling DNSSEC support.
    const FLAG_DNSSEC_OK: u16 = 0x8000;

    /// Creates a new OPT record with the given payload size.
    ///
    /// The extended RCODE and version are zero and no flags are set.
    #[must_use]
    pub fn new(udp_payload_size: u16) -> Self {
        OptRecord {
            udp_payload_size,
            ext_rcode: 0,
            version: 0,
            flags: 0,
            opt: Opt::new(),
        }
    }

    /// The maximum UDP payload size the requester can handle.
    #[must_use]
    pub fn udp_payload_size(&self) -> u16 {
        self.udp_payload_size
    }

    /// The upper eight bits of the extended response code.
    #[must_use]
    pub fn ext_rcode(&self) -> u8 {
        self.ext_rcode
    }

    /// The EDNS version. Only version zero is defined.
    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns whether the DO flag is set.
    ///
    /// The DO flag asks the server to include DNSSEC records in its
    /// response.
    #[must_use]
    pub fn dnssec_ok(&self) -> bool {
        self.flags & Self::FLAG_DNSSEC_OK != 0
    }

    /// Sets or clears the DO flag.
    pub fn set_dnssec_ok(&mut self, set: bool) {
        if set {
            self.flags |= Self::FLAG_DNSSEC_OK
        } else {
            self.flags &= !Self::FLAG_DNSSEC_OK
        }
    }

    /// Returns a reference to the carried options.
    #[must_use]
    pub fn opt(&self) -> &Opt {
        &self.opt
    }

    /// Returns a mutable reference to the carried options.
    pub fn opt_mut(&mut self) -> &mut Opt {
        &mut self.opt
    }

    /// Re-interprets a generic record as an OPT record.
    ///
    /// Returns `None` if the record is of some other type.
    #[must_use]
    pub fn from_record(record: &Record) -> Option<Self> {
        let opt = match record.data() {
            crate::rdata::RecordData::Opt(opt) => opt.clone(),
            _ => return None,
        };
        let ttl = record.ttl();
        Some(OptRecord {
            udp_payload_size: record.class().to_int(),
            ext_rcode: (ttl >> 24) as u8,
            version: (ttl >> 16) as u8,
            flags: ttl as u16,
            opt,
        })
    }

    /// Converts the OPT record into a generic record.
    ///
    /// The owner is the root name, the class carries the payload size,
    /// and the TTL is assembled from the extended RCODE, version, and
    /// flags.
    #[must_use]
    pub fn as_record(&self) -> Record {
        Record::new(
            Name::root(),
            Class::from_int(self.udp_payload_size),
            u32::from(self.ext_rcode) << 24
                | u32::from(self.version) << 16
                | u32::from(self.flags),
            crate::rdata::RecordData::Opt(self.opt.clone()),
        )
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opt_record_round_trip() {
        let mut opt = OptRecord::new(4000);
        opt.set_dnssec_ok(true);
        opt.opt_mut().push(10, b"\x01\x02\x03\x04".to_vec()).unwrap();
        let record = opt.as_record();
        assert_eq!(record.rtype(), Rtype::OPT);
        assert_eq!(record.class(), Class::Int(4000));
        assert_eq!(record.ttl(), 0x0000_8000);
        let back = OptRecord::from_record(&record).unwrap();
        assert_eq!(back, opt);
        assert!(back.dnssec_ok());
        assert_eq!(back.udp_payload_size(), 4000);
        assert_eq!(back.opt().find(10).unwrap().data(), b"\x01\x02\x03\x04");
        assert!(back.opt().find(11).is_none());
    }

    #[test]
    fn opt_wire_round_trip() {
        let mut opt = Opt::new();
        opt.push(3, b"\x00\x01".to_vec()).unwrap();
        let mut composer = Composer::uncompressed();
        opt.compose(&mut composer);
        assert_eq!(composer.as_slice(), b"\x00\x03\x00\x02\x00\x01");
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Opt::parse(&mut parser).unwrap(), opt);
    }
}
