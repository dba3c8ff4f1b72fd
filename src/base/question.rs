//! A single question of a DNS message.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Question ------------------------------------------------------

/// A question of a DNS message.
///
/// A question carries the triple of domain name, record type, and class
/// that a query asks for. In a dynamic update message, the lone entry of
/// the question section instead names the zone to be updated, with the
/// type fixed to SOA.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the question.
    qclass: Class,
}

impl Question {
    /// Creates a new question from its three components.
    #[must_use]
    pub fn new(qname: Name, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question in the IN class.
    #[must_use]
    pub fn new_in(qname: Name, qtype: Rtype) -> Self {
        Question::new(qname, qtype, Class::IN)
    }

    /// Returns a reference to the domain name of the question.
    #[must_use]
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    #[must_use]
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    #[must_use]
    pub fn qclass(&self) -> Class {
        self.qclass
    }

    /// Takes a question from the beginning of a parser.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        Ok(Question {
            qname: Name::parse(parser)?,
            qtype: Rtype::parse(parser)?,
            qclass: Class::parse(parser)?,
        })
    }

    /// Appends the wire format of the question to a composer.
    pub fn compose(&self, target: &mut Composer) {
        self.qname.compose(target);
        self.qtype.compose(target);
        self.qclass.compose(target);
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.qname, self.qclass, self.qtype)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wire_round_trip() {
        let question = Question::new_in(
            "example.com".parse().unwrap(),
            Rtype::MX,
        );
        let mut composer = Composer::new();
        question.compose(&mut composer);
        assert_eq!(
            composer.as_slice(),
            b"\x07example\x03com\0\0\x0f\0\x01"
        );
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Question::parse(&mut parser).unwrap(), question);
    }
}
