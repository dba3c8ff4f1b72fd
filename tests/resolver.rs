//! Tests for the resolver engine against mock servers.

use netdns::base::iana::{Class, Rtype};
use netdns::base::message_builder::MessageBuilder;
use netdns::base::name::Name;
use netdns::base::record::Record;
use netdns::base::Message;
use netdns::rdata::rfc1035::{Soa, A};
use netdns::resolv::{ResolvConf, Resolver, ServerConf};
use std::net::{SocketAddr, TcpListener, UdpSocket};
use std::thread;
use std::time::Duration;

fn name(s: &str) -> Name {
    s.parse().unwrap()
}

fn conf_for(server: SocketAddr) -> ResolvConf {
    let mut conf = ResolvConf::new();
    conf.servers.push(ServerConf::new(server));
    conf.options.timeout = Duration::from_secs(2);
    conf.finalize();
    conf
}

/// Builds a response to `request` with the given answer records.
fn respond(request: &[u8], answers: &[Record]) -> Vec<u8> {
    let request = Message::from_octets(request).unwrap();
    let mut builder = MessageBuilder::new().question();
    builder.header_mut().set_id(request.header().id());
    builder.header_mut().set_qr(true);
    builder
        .push(request.first_question().unwrap())
        .unwrap();
    let mut builder = builder.answer();
    for answer in answers {
        builder.push(answer).unwrap();
    }
    builder.finish().to_vec()
}

#[test]
fn truncation_escalates_to_tcp() {
    // One server speaking both transports on the same port: UDP only
    // ever answers truncated, TCP delivers the real answer.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let udp = UdpSocket::bind(addr).unwrap();

    thread::spawn(move || {
        let mut buf = [0u8; 512];
        let (len, peer) = udp.recv_from(&mut buf).unwrap();
        let mut answer = respond(&buf[..len], &[]);
        // Set the TC bit.
        answer[2] |= 0x02;
        udp.send_to(&answer, peer).unwrap();
    });
    let tcp_handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        use std::io::{Read, Write};
        let mut len = [0u8; 2];
        stream.read_exact(&mut len).unwrap();
        let mut request = vec![0u8; u16::from_be_bytes(len).into()];
        stream.read_exact(&mut request).unwrap();
        let answer = respond(
            &request,
            &[Record::new(
                name("big.example.com"),
                Class::IN,
                300,
                A::from_octets(192, 0, 2, 80).into(),
            )],
        );
        stream
            .write_all(&(answer.len() as u16).to_be_bytes())
            .unwrap();
        stream.write_all(&answer).unwrap();
    });

    let mut resolver = Resolver::new(conf_for(addr)).unwrap();
    let response = resolver
        .query("big.example.com", Rtype::A, Class::IN)
        .unwrap();
    assert_eq!(response.answer().len(), 1);
    assert_eq!(response.answer()[0].rtype(), Rtype::A);
    tcp_handle.join().unwrap();
}

#[test]
fn axfr_concatenates_chunks() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let soa = Record::new(
        name("example.com"),
        Class::IN,
        3600,
        Soa::new(
            name("ns.example.com"),
            name("hostmaster.example.com"),
            42,
            7200,
            3600,
            1209600,
            300,
        )
        .into(),
    );
    let soa_clone = soa.clone();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        use std::io::{Read, Write};
        let mut len = [0u8; 2];
        stream.read_exact(&mut len).unwrap();
        let mut request = vec![0u8; u16::from_be_bytes(len).into()];
        stream.read_exact(&mut request).unwrap();

        // First chunk: opening SOA plus a record.
        let chunk = respond(
            &request,
            &[
                soa_clone.clone(),
                Record::new(
                    name("www.example.com"),
                    Class::IN,
                    300,
                    A::from_octets(192, 0, 2, 1).into(),
                ),
            ],
        );
        stream
            .write_all(&(chunk.len() as u16).to_be_bytes())
            .unwrap();
        stream.write_all(&chunk).unwrap();

        // Second chunk: another record and the closing SOA.
        let chunk = respond(
            &request,
            &[
                Record::new(
                    name("mail.example.com"),
                    Class::IN,
                    300,
                    A::from_octets(192, 0, 2, 25).into(),
                ),
                soa_clone,
            ],
        );
        stream
            .write_all(&(chunk.len() as u16).to_be_bytes())
            .unwrap();
        stream.write_all(&chunk).unwrap();
    });

    let mut resolver = Resolver::new(conf_for(addr)).unwrap();
    let response = resolver.axfr(&name("example.com")).unwrap();
    // All answers from all chunks, delimited by the two SOAs.
    assert_eq!(response.answer().len(), 4);
    assert_eq!(response.answer()[0], soa);
    assert_eq!(response.answer()[3].rtype(), Rtype::SOA);
    assert_eq!(
        response.answer()[2].owner(),
        &name("mail.example.com")
    );
    handle.join().unwrap();
}

#[test]
fn forced_tcp_reuses_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        // Both queries must arrive on a single connection.
        let (mut stream, _) = listener.accept().unwrap();
        use std::io::{Read, Write};
        for _ in 0..2 {
            let mut len = [0u8; 2];
            stream.read_exact(&mut len).unwrap();
            let mut request =
                vec![0u8; u16::from_be_bytes(len).into()];
            stream.read_exact(&mut request).unwrap();
            let answer = respond(
                &request,
                &[Record::new(
                    name("www.example.com"),
                    Class::IN,
                    300,
                    A::from_octets(192, 0, 2, 1).into(),
                )],
            );
            stream
                .write_all(&(answer.len() as u16).to_be_bytes())
                .unwrap();
            stream.write_all(&answer).unwrap();
        }
    });

    let mut conf = conf_for(addr);
    conf.options.use_tcp = true;
    let mut resolver = Resolver::new(conf).unwrap();
    for _ in 0..2 {
        let response = resolver
            .query("www.example.com", Rtype::A, Class::IN)
            .unwrap();
        assert_eq!(response.answer().len(), 1);
    }
    handle.join().unwrap();
}
