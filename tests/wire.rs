//! Tests for composing and parsing complete messages.

use netdns::base::iana::{Class, Opcode, Rcode, Rtype};
use netdns::base::message_builder::MessageBuilder;
use netdns::base::name::Name;
use netdns::base::question::Question;
use netdns::base::record::Record;
use netdns::base::scan::Scanner;
use netdns::base::Message;
use netdns::rdata::RecordData;

fn name(s: &str) -> Name {
    s.parse().unwrap()
}

fn rdata(rtype: Rtype, text: &str) -> RecordData {
    let mut scanner = Scanner::new(text);
    let data = RecordData::scan(rtype, &mut scanner).unwrap();
    assert!(scanner.is_exhausted(), "{} left tokens behind", rtype);
    data
}

#[test]
fn mixed_sections_round_trip() {
    let mut builder = MessageBuilder::new().question();
    builder.header_mut().set_id(0x1bad);
    builder.header_mut().set_qr(true);
    builder.header_mut().set_opcode(Opcode::QUERY);
    builder.header_mut().set_rd(true);
    builder.header_mut().set_ra(true);
    builder
        .push(&Question::new_in(name("example.com"), Rtype::MX))
        .unwrap();
    let mut builder = builder.answer();
    for (rtype, text) in [
        (Rtype::MX, "10 mail.example.com."),
        (Rtype::MX, "20 mail2.example.com."),
    ] {
        builder
            .push(&Record::new(
                name("example.com"),
                Class::IN,
                3600,
                rdata(rtype, text),
            ))
            .unwrap();
    }
    let mut builder = builder.authority();
    builder
        .push(&Record::new(
            name("example.com"),
            Class::IN,
            86400,
            rdata(Rtype::NS, "ns1.example.com."),
        ))
        .unwrap();
    let mut builder = builder.additional();
    builder
        .push(&Record::new(
            name("mail.example.com"),
            Class::IN,
            3600,
            rdata(Rtype::A, "192.0.2.25"),
        ))
        .unwrap();
    let wire = builder.finish();

    let message = Message::from_octets(&wire).unwrap();
    assert_eq!(message.header().id(), 0x1bad);
    assert_eq!(message.header().rcode(), Rcode::NOERROR);
    assert_eq!(message.counts().qdcount(), 1);
    assert_eq!(message.counts().ancount(), 2);
    assert_eq!(message.counts().nscount(), 1);
    assert_eq!(message.counts().arcount(), 1);
    assert_eq!(
        message.answer()[0].data(),
        &rdata(Rtype::MX, "10 mail.example.com.")
    );

    // Re-serializing and re-parsing keeps the content identical even
    // though compression offsets may differ.
    let rewire = message.to_wire().unwrap();
    let remessage = Message::from_octets(&rewire).unwrap();
    assert_eq!(remessage.questions(), message.questions());
    assert_eq!(remessage.answer(), message.answer());
    assert_eq!(remessage.authority(), message.authority());
    assert_eq!(remessage.additional(), message.additional());
}

#[test]
fn shared_suffixes_are_compressed() {
    // Two questions sharing a suffix: the second name must be encoded
    // as a pointer into the first.
    let mut builder = MessageBuilder::new().question();
    builder
        .push(&Question::new_in(name("www.example.com"), Rtype::A))
        .unwrap();
    let uncompressed_len = builder.as_slice().len();
    builder
        .push(&Question::new_in(
            name("mail.example.com"),
            Rtype::A,
        ))
        .unwrap();
    let wire = builder.finish();
    // "mail" label (5) + pointer (2) + type/class (4).
    assert_eq!(wire.len(), uncompressed_len + 11);

    let message = Message::from_octets(&wire).unwrap();
    assert_eq!(message.questions()[0].qname(), &name("www.example.com"));
    assert_eq!(
        message.questions()[1].qname(),
        &name("mail.example.com")
    );
}

#[test]
fn representative_rdata_round_trips() {
    // One representative sample per family of wire formats. Each
    // sample goes from text to fields, through a full message, back
    // to fields, and back to text.
    let samples = [
        (Rtype::A, "192.0.2.1"),
        (Rtype::AAAA, "2001:db8::35"),
        (Rtype::CNAME, "alias.example.net."),
        (Rtype::SOA,
         "ns.example.com. hostmaster.example.com. 42 7200 3600 1209600 300"),
        (Rtype::SRV, "0 5 5060 sip.example.com."),
        (Rtype::NAPTR,
         "100 50 \"s\" \"SIP+D2U\" \"\" _sip._udp.example.com."),
        (Rtype::TXT, "\"hello\" \"world\""),
        (Rtype::CAA, "0 issue \"ca.example.net\""),
        (Rtype::DS,
         "60485 5 1 2BB183AF5F22588179A53B0A98631FAD1A292118"),
        (Rtype::NSEC, "host.example.com. A MX RRSIG NSEC"),
        (Rtype::NSEC3PARAM, "1 0 12 AABBCCDD"),
        (Rtype::TLSA,
         "3 1 1 \
          D2ABDE240D7CD3EE6B4B28C54DF034B97983A1D16E8A410E4561CB106618E971"),
        (Rtype::SSHFP,
         "2 1 123456789ABCDEF67890123456789ABCDEF67890"),
        (Rtype::URI, "10 1 \"ftp://ftp1.example.com/public\""),
        (Rtype::LOC,
         "52 22 23.000 N 4 53 32.000 E -2.00m 0m 10000m 10m"),
        (Rtype::EUI48, "00-00-5e-00-53-2a"),
        (Rtype::NID, "10 14:4fff:ff20:ee64"),
        (Rtype::CSYNC, "66 3 A NS AAAA"),
        (Rtype::Int(4711), "\\# 4 C0000201"),
    ];

    let mut builder = MessageBuilder::new().question().answer();
    let mut expected = Vec::new();
    for (rtype, text) in samples {
        let record = Record::new(
            name("sample.example.com"),
            Class::IN,
            300,
            rdata(rtype, text),
        );
        builder.push(&record).unwrap();
        expected.push(record);
    }
    let wire = builder.finish();
    let message = Message::from_octets(&wire).unwrap();
    assert_eq!(message.answer(), expected);

    // The representation format round-trips, too.
    for record in message.answer() {
        let shown = record.data().to_string();
        assert_eq!(
            &rdata(record.rtype(), &shown),
            record.data(),
            "text round trip failed for {}",
            record.rtype()
        );
    }
}

#[test]
fn registry_covers_common_types() {
    for rtype in [
        Rtype::A,
        Rtype::AAAA,
        Rtype::CNAME,
        Rtype::MX,
        Rtype::NS,
        Rtype::PTR,
        Rtype::SOA,
        Rtype::SRV,
        Rtype::TXT,
        Rtype::HINFO,
        Rtype::NAPTR,
        Rtype::CAA,
        Rtype::OPT,
        Rtype::TSIG,
        Rtype::SIG,
        Rtype::RRSIG,
        Rtype::DNSKEY,
        Rtype::DS,
        Rtype::NSEC,
        Rtype::NSEC3,
        Rtype::NSEC3PARAM,
        Rtype::DNAME,
        Rtype::SSHFP,
        Rtype::TLSA,
        Rtype::URI,
        Rtype::LOC,
        Rtype::WKS,
        Rtype::CSYNC,
        Rtype::HIP,
        Rtype::L32,
        Rtype::L64,
        Rtype::LP,
        Rtype::NID,
    ] {
        assert!(
            RecordData::supported().contains(&rtype),
            "{} is not implemented",
            rtype
        );
    }
}
