//! Assembling dynamic update messages.
//!
//! Dynamic updates, defined in [RFC 2136], reuse the four message
//! sections under different names: the question section names the zone
//! to change, the answer section carries prerequisites, and the
//! authority section the update operations themselves.
//!
//! [`UpdateBuilder`] collects prerequisites and updates and builds the
//! final message. The encodings for the different kinds of
//! prerequisites and deletions, which use the CLASS field and empty
//! record data in inventive ways, are handled here so callers can
//! state their intent directly.
//!
//! [RFC 2136]: https://tools.ietf.org/html/rfc2136

use crate::base::iana::{Class, Opcode, Rtype};
use crate::base::message_builder::{AdditionalBuilder, MessageBuilder};
use crate::base::name::Name;
use crate::base::question::Question;
use crate::base::record::Record;
use crate::base::wire::PushError;
use crate::rdata::{RecordData, UnknownRecordData};

//------------ UpdateBuilder -------------------------------------------------

/// A builder for a dynamic update message.
#[derive(Clone, Debug)]
pub struct UpdateBuilder {
    /// The zone all updated names must fall under.
    zone: Name,

    /// The class of the zone.
    class: Class,

    /// The collected prerequisite records.
    prerequisites: Vec<Record>,

    /// The collected update records.
    updates: Vec<Record>,
}

impl UpdateBuilder {
    /// Creates an update builder for the given zone in class IN.
    #[must_use]
    pub fn new(zone: Name) -> Self {
        UpdateBuilder {
            zone,
            class: Class::IN,
            prerequisites: Vec::new(),
            updates: Vec::new(),
        }
    }

    /// Returns the zone the update applies to.
    #[must_use]
    pub fn zone(&self) -> &Name {
        &self.zone
    }

    //--- Prerequisites (RFC 2136, section 2.4)

    /// Requires that an RRset of the given name and type exists.
    pub fn prereq_rrset_exists(&mut self, name: Name, rtype: Rtype) {
        self.prerequisites.push(empty_record(
            name,
            Class::ANY,
            rtype,
        ));
    }

    /// Requires that an RRset exists with exactly the given records.
    ///
    /// All records of one RRset must be passed through this method;
    /// the TTL is ignored in comparison and set to zero here.
    pub fn prereq_rrset_exists_exact(&mut self, mut record: Record) {
        record.set_ttl(0);
        self.prerequisites.push(record);
    }

    /// Requires that no RRset of the given name and type exists.
    pub fn prereq_rrset_missing(&mut self, name: Name, rtype: Rtype) {
        self.prerequisites.push(empty_record(
            name,
            Class::NONE,
            rtype,
        ));
    }

    /// Requires that the given name owns at least one record.
    pub fn prereq_name_in_use(&mut self, name: Name) {
        self.prerequisites.push(empty_record(
            name,
            Class::ANY,
            Rtype::ANY,
        ));
    }

    /// Requires that the given name owns no records at all.
    pub fn prereq_name_not_in_use(&mut self, name: Name) {
        self.prerequisites.push(empty_record(
            name,
            Class::NONE,
            Rtype::ANY,
        ));
    }

    //--- Updates (RFC 2136, section 2.5)

    /// Adds the given record to the zone.
    pub fn add(&mut self, record: Record) {
        self.updates.push(record);
    }

    /// Deletes all records of the given name and type.
    pub fn delete_rrset(&mut self, name: Name, rtype: Rtype) {
        self.updates.push(empty_record(name, Class::ANY, rtype));
    }

    /// Deletes all records owned by the given name.
    pub fn delete_name(&mut self, name: Name) {
        self.updates.push(empty_record(
            name,
            Class::ANY,
            Rtype::ANY,
        ));
    }

    /// Deletes the one record matching the given record's data.
    pub fn delete_record(&mut self, record: Record) {
        // A delete carries the data but class NONE and TTL zero; the
        // class lives in the record header, so rebuild the record.
        self.updates.push(Record::new(
            record.owner().clone(),
            Class::NONE,
            0,
            record.into_data(),
        ));
    }

    //--- Building

    /// Assembles the update message.
    ///
    /// The returned builder is at the additional stage so a
    /// transaction signature can still be applied; its header has a
    /// random message ID and the UPDATE opcode.
    pub fn build(self) -> Result<AdditionalBuilder, PushError> {
        let mut builder = MessageBuilder::new().question();
        builder.header_mut().set_random_id();
        builder.header_mut().set_opcode(Opcode::UPDATE);
        builder.push(&Question::new(
            self.zone.clone(),
            Rtype::SOA,
            self.class,
        ))?;
        let mut builder = builder.answer();
        for record in &self.prerequisites {
            builder.push(record)?;
        }
        let mut builder = builder.authority();
        for record in &self.updates {
            builder.push(record)?;
        }
        Ok(builder.additional())
    }
}

/// Creates a record with empty record data of the given type.
fn empty_record(name: Name, class: Class, rtype: Rtype) -> Record {
    Record::new(
        name,
        class,
        0,
        RecordData::Unknown(
            UnknownRecordData::from_octets(rtype, Vec::new())
                .expect("empty data is never too long"),
        ),
    )
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::message::Message;
    use crate::rdata::rfc1035::A;

    #[test]
    fn build_update_message() {
        let zone: Name = "example.com".parse().unwrap();
        let host: Name = "www.example.com".parse().unwrap();
        let mut update = UpdateBuilder::new(zone.clone());
        update.prereq_name_not_in_use(host.clone());
        update.add(Record::new(
            host.clone(),
            Class::IN,
            3600,
            A::from_octets(192, 0, 2, 7).into(),
        ));
        let wire = update.build().unwrap().finish();
        let message = Message::from_octets(&wire).unwrap();

        assert_eq!(message.header().opcode(), Opcode::UPDATE);
        assert_eq!(message.counts().zocount(), 1);
        assert_eq!(message.counts().prcount(), 1);
        assert_eq!(message.counts().upcount(), 1);
        assert_eq!(message.counts().adcount(), 0);

        let question = message.first_question().unwrap();
        assert_eq!(question.qname(), &zone);
        assert_eq!(question.qtype(), Rtype::SOA);

        let prereq = &message.answer()[0];
        assert_eq!(prereq.class(), Class::NONE);
        assert_eq!(prereq.rtype(), Rtype::ANY);
        assert_eq!(prereq.ttl(), 0);

        let add = &message.authority()[0];
        assert_eq!(add.class(), Class::IN);
        assert_eq!(add.rtype(), Rtype::A);
    }

    #[test]
    fn delete_operations() {
        let mut update =
            UpdateBuilder::new("example.com".parse().unwrap());
        update.delete_rrset(
            "old.example.com".parse().unwrap(),
            Rtype::MX,
        );
        update.delete_record(Record::new(
            "www.example.com".parse().unwrap(),
            Class::IN,
            3600,
            A::from_octets(192, 0, 2, 7).into(),
        ));
        let wire = update.build().unwrap().finish();
        let message = Message::from_octets(&wire).unwrap();
        let rrset_del = &message.authority()[0];
        assert_eq!(rrset_del.class(), Class::ANY);
        assert_eq!(rrset_del.rtype(), Rtype::MX);
        let record_del = &message.authority()[1];
        assert_eq!(record_del.class(), Class::NONE);
        assert_eq!(record_del.rtype(), Rtype::A);
        assert_eq!(record_del.ttl(), 0);
    }
}
