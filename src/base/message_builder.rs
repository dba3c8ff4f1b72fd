//! Building a new DNS message.
//!
//! The [`MessageBuilder`] assembles the wire format of a message
//! directly, so that the finished octets can be handed to a transport
//! without another copy. Since the four sections of a message must be
//! written in order, the builder progresses through a chain of section
//! builders: [`MessageBuilder`] itself starts the message, the question
//! section is filled in through [`QuestionBuilder`], and the three
//! record sections through [`AnswerBuilder`], [`AuthorityBuilder`], and
//! [`AdditionalBuilder`]. Each stage converts into the next and any
//! stage can finish the message.
//!
//! The header of the message under construction can be manipulated at
//! any stage; the section counts are maintained by the builders
//! themselves.

use super::header::{Header, HeaderCounts};
use super::question::Question;
use super::record::Record;
use super::wire::{Composer, PushError};
use crate::rdata::rfc6891::OptRecord;
use bytes::Bytes;

/// The largest possible DNS message.
///
/// Messages are length-prefixed with a 16 bit value on stream
/// transports, so this is a hard limit.
const MAX_MESSAGE_LEN: usize = 65_535;

//------------ MessageBuilder ------------------------------------------------

/// Starts building a DNS message.
#[derive(Clone, Debug)]
pub struct MessageBuilder {
    /// The message assembled so far, starting with the header.
    target: Composer,
}

impl MessageBuilder {
    /// Creates a new message builder.
    ///
    /// The message starts out with all header fields zero and empty
    /// sections.
    #[must_use]
    pub fn new() -> Self {
        let mut target = Composer::new();
        target.append_slice(&[0; 12]);
        MessageBuilder { target }
    }

    /// Creates a builder for a request with a random message ID.
    ///
    /// The builder is advanced to the question section already since a
    /// request's header is complete apart from its flags.
    #[must_use]
    pub fn request() -> QuestionBuilder {
        let mut res = Self::new();
        res.header_mut().set_random_id();
        res.question()
    }

    /// Proceeds to building the question section.
    #[must_use]
    pub fn question(self) -> QuestionBuilder {
        QuestionBuilder { builder: self }
    }

    //--- Access to the message under construction.

    /// Returns the header of the message.
    #[must_use]
    pub fn header(&self) -> Header {
        *Header::for_message_slice(self.target.as_slice())
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        Header::for_message_slice_mut(self.target.as_slice_mut())
    }

    /// Returns the current section counts of the message.
    #[must_use]
    pub fn counts(&self) -> HeaderCounts {
        *HeaderCounts::for_message_slice(self.target.as_slice())
    }

    /// Returns a mutable reference to the section counts.
    fn counts_mut(&mut self) -> &mut HeaderCounts {
        HeaderCounts::for_message_slice_mut(self.target.as_slice_mut())
    }

    /// Returns the octets of the message assembled so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.target.as_slice()
    }

    /// Finishes the message and returns its octets.
    #[must_use]
    pub fn finish(self) -> Bytes {
        self.target.freeze()
    }

    //--- Internal helpers for the section builders.

    /// Appends a record and bumps a count via `inc`.
    fn push_record(
        &mut self,
        record: &Record,
        inc: fn(&mut HeaderCounts) -> Result<(), PushError>,
    ) -> Result<(), PushError> {
        inc(self.counts_mut())?;
        record.compose(&mut self.target)?;
        if self.target.len() > MAX_MESSAGE_LEN {
            return Err(PushError::LongMessage);
        }
        Ok(())
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//------------ QuestionBuilder -----------------------------------------------

/// Builds the question section of a DNS message.
#[derive(Clone, Debug)]
pub struct QuestionBuilder {
    builder: MessageBuilder,
}

impl QuestionBuilder {
    /// Appends a question to the question section.
    pub fn push(&mut self, question: &Question) -> Result<(), PushError> {
        self.builder.counts_mut().inc_qdcount()?;
        question.compose(&mut self.builder.target);
        if self.builder.target.len() > MAX_MESSAGE_LEN {
            return Err(PushError::LongMessage);
        }
        Ok(())
    }

    /// Proceeds to building the answer section.
    #[must_use]
    pub fn answer(self) -> AnswerBuilder {
        AnswerBuilder {
            builder: self.builder,
        }
    }

    /// Proceeds straight to building the additional section.
    #[must_use]
    pub fn additional(self) -> AdditionalBuilder {
        self.answer().authority().additional()
    }

    /// Returns the header of the message.
    #[must_use]
    pub fn header(&self) -> Header {
        self.builder.header()
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        self.builder.header_mut()
    }

    /// Returns the octets of the message assembled so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.builder.as_slice()
    }

    /// Finishes the message and returns its octets.
    #[must_use]
    pub fn finish(self) -> Bytes {
        self.builder.finish()
    }
}

//------------ AnswerBuilder -------------------------------------------------

/// Builds the answer section of a DNS message.
///
/// In a dynamic update message, this is the prerequisite section.
#[derive(Clone, Debug)]
pub struct AnswerBuilder {
    builder: MessageBuilder,
}

impl AnswerBuilder {
    /// Appends a record to the answer section.
    pub fn push(&mut self, record: &Record) -> Result<(), PushError> {
        self.builder.push_record(record, HeaderCounts::inc_ancount)
    }

    /// Proceeds to building the authority section.
    #[must_use]
    pub fn authority(self) -> AuthorityBuilder {
        AuthorityBuilder {
            builder: self.builder,
        }
    }

    /// Proceeds straight to building the additional section.
    #[must_use]
    pub fn additional(self) -> AdditionalBuilder {
        self.authority().additional()
    }

    /// Returns the header of the message.
    #[must_use]
    pub fn header(&self) -> Header {
        self.builder.header()
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        self.builder.header_mut()
    }

    /// Returns the octets of the message assembled so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.builder.as_slice()
    }

    /// Finishes the message and returns its octets.
    #[must_use]
    pub fn finish(self) -> Bytes {
        self.builder.finish()
    }
}

//------------ AuthorityBuilder ----------------------------------------------

/// Builds the authority section of a DNS message.
///
/// In a dynamic update message, this is the update section.
#[derive(Clone, Debug)]
pub struct AuthorityBuilder {
    builder: MessageBuilder,
}

impl AuthorityBuilder {
    /// Appends a record to the authority section.
    pub fn push(&mut self, record: &Record) -> Result<(), PushError> {
        self.builder.push_record(record, HeaderCounts::inc_nscount)
    }

    /// Proceeds to building the additional section.
    #[must_use]
    pub fn additional(self) -> AdditionalBuilder {
        AdditionalBuilder {
            builder: self.builder,
        }
    }

    /// Returns the header of the message.
    #[must_use]
    pub fn header(&self) -> Header {
        self.builder.header()
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        self.builder.header_mut()
    }

    /// Returns the octets of the message assembled so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.builder.as_slice()
    }

    /// Finishes the message and returns its octets.
    #[must_use]
    pub fn finish(self) -> Bytes {
        self.builder.finish()
    }
}

//------------ AdditionalBuilder ---------------------------------------------

/// Builds the additional section of a DNS message.
///
/// This is also the stage at which an OPT record is injected and at
/// which a transaction signature is applied, since both go last into
/// the additional section.
#[derive(Clone, Debug)]
pub struct AdditionalBuilder {
    builder: MessageBuilder,
}

impl AdditionalBuilder {
    /// Appends a record to the additional section.
    pub fn push(&mut self, record: &Record) -> Result<(), PushError> {
        self.builder.push_record(record, HeaderCounts::inc_arcount)
    }

    /// Appends an OPT record for the given EDNS parameters.
    pub fn opt(&mut self, opt: &OptRecord) -> Result<(), PushError> {
        self.push(&opt.as_record())
    }

    /// Returns the header of the message.
    #[must_use]
    pub fn header(&self) -> Header {
        self.builder.header()
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        self.builder.header_mut()
    }

    /// Returns the current section counts of the message.
    #[must_use]
    pub fn counts(&self) -> HeaderCounts {
        self.builder.counts()
    }

    /// Returns the octets of the message assembled so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.builder.as_slice()
    }

    /// Finishes the message and returns its octets.
    #[must_use]
    pub fn finish(self) -> Bytes {
        self.builder.finish()
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Opcode, Rtype};
    use crate::base::message::Message;
    use crate::base::name::Name;
    use crate::rdata::rfc1035::{Ns, A};

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    #[test]
    fn build_query() {
        let mut builder = MessageBuilder::new().question();
        builder.header_mut().set_id(0x2b01);
        builder.header_mut().set_rd(true);
        builder
            .push(&Question::new_in(name("example.com"), Rtype::A))
            .unwrap();
        let wire = builder.finish();
        let message = Message::from_octets(&wire).unwrap();
        assert_eq!(message.header().id(), 0x2b01);
        assert!(message.header().rd());
        assert!(!message.header().qr());
        assert_eq!(message.counts().qdcount(), 1);
        assert_eq!(
            message.first_question().unwrap().qname(),
            &name("example.com")
        );
    }

    #[test]
    fn build_all_sections() {
        let mut builder = MessageBuilder::new().question();
        builder.header_mut().set_opcode(Opcode::QUERY);
        builder
            .push(&Question::new_in(name("example.com"), Rtype::A))
            .unwrap();
        let mut builder = builder.answer();
        builder
            .push(&Record::new(
                name("example.com"),
                Class::IN,
                300,
                A::from_octets(192, 0, 2, 1).into(),
            ))
            .unwrap();
        let mut builder = builder.authority();
        builder
            .push(&Record::new(
                name("example.com"),
                Class::IN,
                86400,
                Ns::new(name("ns1.example.com")).into(),
            ))
            .unwrap();
        let wire = builder.finish();
        let message = Message::from_octets(&wire).unwrap();
        assert_eq!(message.counts().qdcount(), 1);
        assert_eq!(message.counts().ancount(), 1);
        assert_eq!(message.counts().nscount(), 1);
        assert_eq!(message.counts().arcount(), 0);
    }

    #[test]
    fn question_compression() {
        // Two questions sharing a suffix: the second name must be a
        // pointer to (part of) the first.
        let mut builder = MessageBuilder::new().question();
        builder
            .push(&Question::new_in(name("www.example.com"), Rtype::A))
            .unwrap();
        let len_one = builder.as_slice().len();
        builder
            .push(&Question::new_in(name("example.com"), Rtype::A))
            .unwrap();
        // Name (2 octets pointer) + type + class.
        assert_eq!(builder.as_slice().len(), len_one + 6);
        let wire = builder.finish();
        let message = Message::from_octets(&wire).unwrap();
        assert_eq!(
            message.questions()[1].qname(),
            &name("example.com")
        );
    }
}
