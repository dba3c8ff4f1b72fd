//! DNS messages.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::Rtype;
use super::question::Question;
use super::record::Record;
use super::wire::{Composer, ParseError, Parser, PushError};
use crate::rdata::rfc6891::OptRecord;
use bytes::Bytes;
use core::fmt;

//------------ Message -------------------------------------------------------

/// A parsed DNS message.
///
/// A message consists of the twelve octet header and four sections:
/// question, answer, authority, and additional. [`Message::from_octets`]
/// parses the complete wire format of a message into this tree; the
/// section counts of the header must exactly match the records present
/// or parsing fails. Messages are one-shot values: the engine builds,
/// sends, and discards them on the request side and parses and returns
/// them on the response side.
#[derive(Clone, Debug)]
pub struct Message {
    /// The first four octets of the header.
    ///
    /// The counts are not kept: they are derived from the sections when
    /// needed so they can never disagree with the actual content.
    header: Header,

    /// The question section.
    questions: Vec<Question>,

    /// The answer section.
    answer: Vec<Record>,

    /// The authority section.
    authority: Vec<Record>,

    /// The additional section.
    additional: Vec<Record>,
}

impl Message {
    /// Parses a message from its complete wire format.
    pub fn from_octets(octets: &[u8]) -> Result<Self, ParseError> {
        let mut parser = Parser::from_octets(octets);
        let header = HeaderSection::parse(&mut parser)?;
        let counts = header.counts();
        let mut questions = Vec::with_capacity(counts.qdcount().into());
        for _ in 0..counts.qdcount() {
            questions.push(Question::parse(&mut parser)?);
        }
        let mut answer = Vec::with_capacity(counts.ancount().into());
        for _ in 0..counts.ancount() {
            answer.push(Record::parse(&mut parser)?);
        }
        let mut authority = Vec::with_capacity(counts.nscount().into());
        for _ in 0..counts.nscount() {
            authority.push(Record::parse(&mut parser)?);
        }
        let mut additional = Vec::with_capacity(counts.arcount().into());
        for _ in 0..counts.arcount() {
            additional.push(Record::parse(&mut parser)?);
        }
        if parser.remaining() != 0 {
            return Err(ParseError::form_error(
                "trailing data in message",
            ));
        }
        Ok(Message {
            header: *header.header(),
            questions,
            answer,
            authority,
            additional,
        })
    }

    /// Returns the message header.
    #[must_use]
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the section counts the message would have on the wire.
    #[must_use]
    pub fn counts(&self) -> HeaderCounts {
        let mut res = HeaderCounts::new();
        res.set_qdcount(self.questions.len() as u16);
        res.set_ancount(self.answer.len() as u16);
        res.set_nscount(self.authority.len() as u16);
        res.set_arcount(self.additional.len() as u16);
        res
    }

    /// Returns the question section.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the first question, if there is one.
    #[must_use]
    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns the answer section.
    #[must_use]
    pub fn answer(&self) -> &[Record] {
        &self.answer
    }

    /// Returns a mutable reference to the answer section.
    pub fn answer_mut(&mut self) -> &mut Vec<Record> {
        &mut self.answer
    }

    /// Returns the authority section.
    #[must_use]
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional section.
    #[must_use]
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Returns whether the response code is NOERROR.
    #[must_use]
    pub fn no_error(&self) -> bool {
        self.header.rcode() == super::iana::Rcode::NOERROR
    }

    /// Returns the OPT record of the message, if there is one.
    #[must_use]
    pub fn opt(&self) -> Option<OptRecord> {
        self.additional
            .iter()
            .find(|record| record.rtype() == Rtype::OPT)
            .and_then(OptRecord::from_record)
    }

    /// Returns whether this message is an answer to the given request.
    ///
    /// The message must have the QR bit set, carry the same message ID
    /// as the request, and repeat its first question.
    #[must_use]
    pub fn is_answer(&self, request_id: u16, question: &Question) -> bool {
        self.header.qr()
            && self.header.id() == request_id
            && self.first_question() == Some(question)
    }

    /// Returns the number of SOA records in the answer section.
    ///
    /// A zone transfer stream is complete once two SOA records have been
    /// seen across the accumulated answer sections.
    #[must_use]
    pub fn count_answer_soas(&self) -> usize {
        self.answer
            .iter()
            .filter(|record| record.rtype() == Rtype::SOA)
            .count()
    }

    /// Re-assembles the wire format of the message.
    ///
    /// The result is a freshly composed message: name compression
    /// offsets may differ from the octets the message was parsed from,
    /// but the content is the same.
    pub fn to_wire(&self) -> Result<Bytes, PushError> {
        if self.questions.len() > usize::from(u16::MAX)
            || self.answer.len() > usize::from(u16::MAX)
            || self.authority.len() > usize::from(u16::MAX)
            || self.additional.len() > usize::from(u16::MAX)
        {
            return Err(PushError::CountOverflow);
        }
        let mut target = Composer::new();
        self.header.compose(&mut target);
        self.counts().compose(&mut target);
        for question in &self.questions {
            question.compose(&mut target);
        }
        for record in self
            .answer
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
        {
            record.compose(&mut target)?;
        }
        if target.len() > usize::from(u16::MAX) {
            return Err(PushError::LongMessage);
        }
        Ok(target.freeze())
    }
}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, ";; {}", self.header)?;
        writeln!(f, ";; QUESTION SECTION:")?;
        for question in &self.questions {
            writeln!(f, ";{}", question)?;
        }
        for (title, section) in [
            ("ANSWER", &self.answer),
            ("AUTHORITY", &self.authority),
            ("ADDITIONAL", &self.additional),
        ] {
            writeln!(f, ";; {} SECTION:", title)?;
            for record in section {
                writeln!(f, "{}", record)?;
            }
        }
        Ok(())
    }
}

//============ Test ==========================================================
