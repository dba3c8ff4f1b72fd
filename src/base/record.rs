//! Resource records.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{Composer, ParseError, Parser, PushError};
use crate::rdata::RecordData;
use core::fmt;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// A record combines an owner name, class, and time-to-live with its
/// typed record data. The record type is part of the data: every
/// [`RecordData`] variant knows the type it belongs to, so type and data
/// can never disagree.
///
/// On the wire, the record data is preceded by its length in octets
/// (RDLENGTH). When composing, the length field is placed first and
/// patched once the data has been written; when parsing, the data
/// decoder operates on a parser that refuses to read past the declared
/// length.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The owner name of the record.
    owner: Name,

    /// The class of the record.
    class: Class,

    /// The number of seconds the record may be cached.
    ttl: u32,

    /// The typed record data.
    data: RecordData,
}

impl Record {
    /// Creates a new record from its components.
    #[must_use]
    pub fn new(
        owner: Name,
        class: Class,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Record {
            owner,
            class,
            ttl,
            data,
        }
    }

    /// Returns a reference to the owner name.
    #[must_use]
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the class of the record.
    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the TTL of the record.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Sets the TTL of the record.
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl
    }

    /// Returns a reference to the record data.
    #[must_use]
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Trades the record in for its record data.
    #[must_use]
    pub fn into_data(self) -> RecordData {
        self.data
    }

    /// Takes a record from the beginning of a parser.
    ///
    /// The data decoder receives a parser limited to the record's
    /// RDLENGTH and must consume it completely.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let owner = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = parser.parse_u32()?;
        let rdlen = usize::from(parser.parse_u16()?);
        let mut rdata = parser.parse_block(rdlen)?;
        let data = RecordData::parse(rtype, &mut rdata)?;
        if rdata.remaining() != 0 {
            return Err(ParseError::form_error(
                "trailing data in record data",
            ));
        }
        Ok(Record {
            owner,
            class,
            ttl,
            data,
        })
    }

    /// Appends the wire format of the record to a composer.
    pub fn compose(&self, target: &mut Composer) -> Result<(), PushError> {
        self.owner.compose(target);
        self.rtype().compose(target);
        self.class.compose(target);
        target.append_u32(self.ttl);
        let pos = target.place_u16();
        self.data.compose(target);
        let rdlen = target.len() - pos - 2;
        if rdlen > usize::from(u16::MAX) {
            return Err(PushError::LongRecordData);
        }
        target.patch_u16(pos, rdlen as u16);
        Ok(())
    }
}

//--- Display

impl fmt::Display for Record {
    /// Formats the record in representation (zone file) format.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.owner,
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::rfc1035::A;

    #[test]
    fn wire_round_trip() {
        let record = Record::new(
            "example.com".parse().unwrap(),
            Class::IN,
            3600,
            A::from_octets(192, 0, 2, 1).into(),
        );
        let mut composer = Composer::new();
        record.compose(&mut composer).unwrap();
        assert_eq!(
            composer.as_slice(),
            b"\x07example\x03com\0\
              \0\x01\0\x01\0\0\x0e\x10\0\x04\xc0\x00\x02\x01"
        );
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Record::parse(&mut parser).unwrap(), record);
    }

    #[test]
    fn parse_rejects_short_rdata() {
        // An A record with RDLENGTH 3.
        let data = b"\x07example\x03com\0\0\x01\0\x01\0\0\x0e\x10\0\x03\xc0\x00\x02";
        let mut parser = Parser::from_octets(data);
        assert!(Record::parse(&mut parser).is_err());
    }

    #[test]
    fn parse_rejects_trailing_rdata() {
        // An A record with RDLENGTH 5.
        let data =
            b"\x07example\x03com\0\0\x01\0\x01\0\0\x0e\x10\0\x05\xc0\x00\x02\x01\x00";
        let mut parser = Parser::from_octets(data);
        assert!(Record::parse(&mut parser).is_err());
    }

    #[test]
    fn display() {
        let record = Record::new(
            "example.com".parse().unwrap(),
            Class::IN,
            3600,
            A::from_octets(192, 0, 2, 1).into(),
        );
        assert_eq!(
            format!("{}", record),
            "example.com. 3600 IN A 192.0.2.1"
        );
    }
}
