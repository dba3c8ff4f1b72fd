//! The resolver engine.
//!
//! [`Resolver`] drives a query through the configured name servers:
//! it builds the request, walks the server list in configured or
//! random order, escalates from UDP to TCP when a response comes back
//! truncated, validates what arrives, and consults the response cache
//! before any of that. Per-server failures are recorded rather than
//! raised; only when every server has failed does the last error
//! surface to the caller.

use super::cache::{self, FileCache, ResponseCache};
use super::conf::{CacheType, ResolvConf, DEFAULT_UDP_SIZE};
use super::error::{Error, ErrorKind, Result};
use super::transport;
use crate::base::header::Header;
use crate::base::iana::{Class, Opcode, Rcode, Rtype};
use crate::base::message::Message;
use crate::base::message_builder::{AdditionalBuilder, MessageBuilder};
use crate::base::name::Name;
use crate::base::question::Question;
use crate::rdata::rfc6891::OptRecord;
use crate::sig0::{self, SignerKey};
use crate::tsig::{self, ClientTransaction};
use crate::update::UpdateBuilder;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fmt;
use std::net::{SocketAddr, TcpStream};
use tracing::{debug, warn};

//------------ Resolver ------------------------------------------------------

/// A synchronous stub resolver and update client.
///
/// A resolver instance runs one query at a time. TCP connections are
/// kept per server across queries on the same instance; any I/O error
/// evicts the connection for good.
pub struct Resolver {
    /// The configuration of the resolver.
    conf: ResolvConf,

    /// The response cache, if caching is enabled.
    cache: Option<Box<dyn ResponseCache>>,

    /// The key for TSIG-signing requests.
    tsig_key: Option<tsig::Key>,

    /// The key handle for SIG(0)-signing requests.
    sig0_signer: Option<Box<dyn SignerKey>>,

    /// Established TCP connections by server address.
    tcp_conns: HashMap<SocketAddr, TcpStream>,

    /// The errors recorded for each server during the last query.
    last_errors: Vec<(SocketAddr, Error)>,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("conf", &self.conf)
            .field("cache", &self.cache.is_some())
            .field("tsig_key", &self.tsig_key)
            .field("sig0_signer", &self.sig0_signer.is_some())
            .field("tcp_conns", &self.tcp_conns.keys().collect::<Vec<_>>())
            .field("last_errors", &self.last_errors)
            .finish()
    }
}

impl Resolver {
    /// Creates a resolver from a configuration.
    ///
    /// Fails if the configuration selects a cache backend that is not
    /// available.
    pub fn new(mut conf: ResolvConf) -> Result<Self> {
        conf.finalize();
        let cache = Self::make_cache(&conf)?;
        Ok(Resolver {
            conf,
            cache,
            tsig_key: None,
            sig0_signer: None,
            tcp_conns: HashMap::new(),
            last_errors: Vec::new(),
        })
    }

    /// Creates a resolver using the system configuration.
    pub fn system() -> Result<Self> {
        Self::new(ResolvConf::system())
    }

    /// Creates a resolver from a `resolv.conf`-style file.
    ///
    /// Unlike [`system`][Self::system], an unreadable or malformed
    /// file is an error here.
    pub fn from_conf_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self> {
        let mut conf = ResolvConf::new();
        conf.parse_file(path)?;
        Self::new(conf)
    }

    /// Creates the cache backend selected by the configuration.
    fn make_cache(
        conf: &ResolvConf,
    ) -> Result<Option<Box<dyn ResponseCache>>> {
        match conf.options.cache_type {
            CacheType::None => Ok(None),
            CacheType::File => {
                if conf.options.cache_serializer != "wire" {
                    return Err(Error::new(
                        ErrorKind::CacheUnsupported,
                        format!(
                            "unknown cache serializer '{}'",
                            conf.options.cache_serializer
                        ),
                    ));
                }
                let path = conf
                    .options
                    .cache_file
                    .clone()
                    .ok_or_else(|| {
                        Error::new(
                            ErrorKind::CacheUnsupported,
                            "file cache needs a cache file",
                        )
                    })?;
                Ok(Some(Box::new(FileCache::new(
                    path,
                    conf.options.cache_size,
                ))))
            }
            CacheType::Shared => Err(Error::new(
                ErrorKind::CacheShmUnavail,
                "no shared memory cache attached",
            )),
        }
    }

    /// Returns the configuration of the resolver.
    #[must_use]
    pub fn conf(&self) -> &ResolvConf {
        &self.conf
    }

    /// Replaces the cache backend.
    ///
    /// This is how an externally provided backend, e.g. a shared
    /// memory cache, is attached.
    pub fn set_cache(&mut self, cache: Box<dyn ResponseCache>) {
        self.cache = Some(cache);
    }

    /// Uses the given TSIG key for all following requests.
    pub fn set_tsig_key(&mut self, key: tsig::Key) {
        self.tsig_key = Some(key);
    }

    /// Uses the given SIG(0) key handle for all following requests.
    pub fn set_sig0_signer(&mut self, signer: Box<dyn SignerKey>) {
        self.sig0_signer = Some(signer);
    }

    /// Returns the per-server errors recorded during the last query.
    #[must_use]
    pub fn last_errors(&self) -> &[(SocketAddr, Error)] {
        &self.last_errors
    }

    /// Closes the resolver, releasing its cache and connections.
    pub fn close(&mut self) {
        if let Some(mut cache) = self.cache.take() {
            cache.close();
        }
        self.tcp_conns.clear();
    }

    //--- Queries

    /// Looks up records for a host name.
    ///
    /// A name without any dots is completed with the first entry of
    /// the search list, if there is one; everything else is taken as
    /// an absolute name. Zone transfers are dispatched to their own
    /// read loop via [`axfr`][Self::axfr].
    pub fn query(
        &mut self,
        name: &str,
        rtype: Rtype,
        class: Class,
    ) -> Result<Message> {
        let qname = self.expand_name(name)?;
        if rtype == Rtype::AXFR {
            return self.axfr_impl(Question::new(qname, rtype, class));
        }
        self.query_question(Question::new(qname, rtype, class))
    }

    /// Looks up records for a question.
    pub fn query_question(
        &mut self,
        question: Question,
    ) -> Result<Message> {
        let key = cache::fingerprint(&question);
        if question.qtype().is_cacheable() {
            if let Some(cache) = self.cache.as_mut() {
                if let Some(response) = cache.get(&key) {
                    debug!("cache hit for {}", key);
                    return Ok(response);
                }
            }
        }
        let (request, id, transaction) =
            self.build_request(&question)?;
        let mut response =
            self.send_loop(&request, id, &question, transaction)?;
        if self.conf.options.strict_query_mode {
            let qname = question.qname().clone();
            response
                .answer_mut()
                .retain(|record| *record.owner() == qname);
        }
        if question.qtype().is_cacheable() {
            if let Some(ttl) = cache_ttl(&response) {
                if let Some(cache) = self.cache.as_mut() {
                    cache.put(&key, &response, ttl);
                }
            }
        }
        Ok(response)
    }

    /// Transfers an entire zone from the first server that serves it.
    pub fn axfr(&mut self, zone: &Name) -> Result<Message> {
        self.axfr_impl(Question::new(
            zone.clone(),
            Rtype::AXFR,
            Class::IN,
        ))
    }

    /// Sends a dynamic update to the configured servers.
    ///
    /// The update is signed if a TSIG or SIG(0) key is attached.
    pub fn send_update(
        &mut self,
        update: UpdateBuilder,
    ) -> Result<Message> {
        let zone = update.zone().clone();
        let question = Question::new(zone, Rtype::SOA, Class::IN);
        let mut builder = update.build()?;
        let id = builder.header().id();
        let transaction = self.sign_request(&mut builder)?;
        let request = builder.finish();
        self.send_loop(&request, id, &question, transaction)
    }

    //--- Request building

    /// Completes a relative host name per the search list.
    fn expand_name(&self, name: &str) -> Result<Name> {
        let completed;
        let name = if !name.contains('.') {
            match self.conf.search.first() {
                Some(suffix) => {
                    completed = format!("{}.{}", name, suffix);
                    completed.as_str()
                }
                None => name,
            }
        } else {
            name
        };
        name.parse().map_err(|err| {
            Error::new(
                ErrorKind::RrInvalid,
                format!("invalid name '{}': {}", name, err),
            )
        })
    }

    /// Builds the wire format of a request for the given question.
    fn build_request(
        &mut self,
        question: &Question,
    ) -> Result<(bytes::Bytes, u16, Option<ClientTransaction>)> {
        let mut builder = MessageBuilder::request();
        builder.header_mut().set_opcode(Opcode::QUERY);
        builder.header_mut().set_rd(self.conf.options.recurse);
        builder.header_mut().set_ad(self.conf.options.dnssec_ad_flag);
        builder.header_mut().set_cd(self.conf.options.dnssec_cd_flag);
        builder.push(question)?;
        let mut builder = builder.additional();
        if self.conf.options.dnssec {
            let mut opt = OptRecord::new(
                self.conf.options.dnssec_payload_size,
            );
            opt.set_dnssec_ok(true);
            builder.opt(&opt)?;
        }
        let id = builder.header().id();
        let transaction = self.sign_request(&mut builder)?;
        Ok((builder.finish(), id, transaction))
    }

    /// Applies the configured transaction signature to a request.
    fn sign_request(
        &self,
        builder: &mut AdditionalBuilder,
    ) -> Result<Option<ClientTransaction>> {
        if let Some(key) = self.tsig_key.as_ref() {
            return ClientTransaction::request(key.clone(), builder)
                .map(Some)
                .map_err(Into::into);
        }
        if let Some(signer) = self.sig0_signer.as_ref() {
            sig0::sign_request(builder, signer.as_ref())?;
        }
        Ok(None)
    }

    //--- The send loop

    /// Returns the receive buffer size for UDP.
    fn max_udp_size(&self) -> usize {
        if self.conf.options.dnssec {
            usize::from(self.conf.options.dnssec_payload_size)
        } else {
            DEFAULT_UDP_SIZE
        }
    }

    /// Returns the servers to try, in order.
    fn server_order(&self) -> Result<Vec<SocketAddr>> {
        if self.conf.servers.is_empty() {
            return Err(Error::new(
                ErrorKind::NsFailed,
                "no name servers configured",
            ));
        }
        let mut servers: Vec<_> = self
            .conf
            .servers
            .iter()
            .map(|server| server.addr)
            .collect();
        if self.conf.options.ns_random {
            servers.shuffle(&mut rand::thread_rng());
        }
        Ok(servers)
    }

    /// Tries all servers in turn until one produces a valid response.
    fn send_loop(
        &mut self,
        request: &[u8],
        id: u16,
        question: &Question,
        transaction: Option<ClientTransaction>,
    ) -> Result<Message> {
        self.last_errors.clear();
        for server in self.server_order()? {
            match self.query_server(
                server,
                request,
                id,
                question,
                transaction.as_ref(),
            ) {
                Ok(response) => return Ok(response),
                Err(err) => {
                    warn!("server {} failed: {}", server, err);
                    self.last_errors.push((server, err));
                }
            }
        }
        Err(self
            .last_errors
            .last()
            .map(|(_, err)| err.clone())
            .unwrap_or_else(|| {
                Error::new(ErrorKind::NsFailed, "all servers failed")
            }))
    }

    /// Performs one exchange with one server.
    fn query_server(
        &mut self,
        server: SocketAddr,
        request: &[u8],
        id: u16,
        question: &Question,
        transaction: Option<&ClientTransaction>,
    ) -> Result<Message> {
        let force_tcp = self.conf.options.use_tcp
            || request.len() > self.max_udp_size();
        if !force_tcp {
            let wire = transport::udp_exchange(
                server,
                self.local_addr(),
                request,
                self.conf.options.timeout,
                self.max_udp_size(),
            )?;
            // A truncated response means retrying the same server
            // over TCP; anything else gets validated as is.
            if wire.len() >= 12
                && Header::for_message_slice(&wire).tc()
            {
                debug!(
                    "truncated response from {}, retrying over TCP",
                    server
                );
            } else {
                return self
                    .validate(&wire, id, question, transaction);
            }
        }
        let wire = self.tcp_query(server, request)?;
        self.validate(&wire, id, question, transaction)
    }

    /// Performs one exchange over TCP, reusing a cached connection.
    fn tcp_query(
        &mut self,
        server: SocketAddr,
        request: &[u8],
    ) -> Result<Vec<u8>> {
        if let Some(stream) = self.tcp_conns.get_mut(&server) {
            match transport::tcp_exchange(stream, request) {
                Ok(wire) => return Ok(wire),
                Err(err) => {
                    // The connection is broken; never reuse it.
                    debug!(
                        "cached connection to {} failed: {}",
                        server, err
                    );
                    self.tcp_conns.remove(&server);
                }
            }
        }
        let mut stream = transport::tcp_connect(
            server,
            self.local_addr(),
            self.conf.options.timeout,
        )?;
        let res = transport::tcp_exchange(&mut stream, request)?;
        self.tcp_conns.insert(server, stream);
        Ok(res)
    }

    /// Returns the configured local address to bind to, if any.
    fn local_addr(&self) -> Option<SocketAddr> {
        self.conf.options.local_addr.map(|addr| {
            SocketAddr::new(addr, self.conf.options.local_port)
        })
    }

    /// Validates a response against the request it answers.
    fn validate(
        &self,
        wire: &[u8],
        id: u16,
        question: &Question,
        transaction: Option<&ClientTransaction>,
    ) -> Result<Message> {
        let response = Message::from_octets(wire)?;
        if let Some(transaction) = transaction {
            transaction.answer(wire)?;
        }
        if response.header().id() != id {
            return Err(Error::new(
                ErrorKind::HeaderInvalid,
                "response ID does not match request",
            )
            .with_response(response));
        }
        if !response.header().qr() {
            return Err(Error::new(
                ErrorKind::HeaderInvalid,
                "response is not a response",
            )
            .with_response(response));
        }
        if response.header().opcode() != Opcode::QUERY
            && response.header().opcode() != Opcode::UPDATE
        {
            return Err(Error::new(
                ErrorKind::HeaderInvalid,
                "response has unexpected opcode",
            )
            .with_response(response));
        }
        if question.qtype() != Rtype::AXFR
            && response.first_question() != Some(question)
        {
            return Err(Error::new(
                ErrorKind::HeaderInvalid,
                "response question does not match request",
            )
            .with_response(response));
        }
        if response.header().rcode() != Rcode::NOERROR {
            let rcode = response.header().rcode();
            return Err(
                Error::for_rcode(rcode).with_response(response)
            );
        }
        Ok(response)
    }

    //--- Zone transfer

    /// Runs the AXFR read loop for the given question.
    ///
    /// Zone transfers are always TCP. Responses arrive as a stream of
    /// messages whose answer sections are concatenated; the stream
    /// ends once the second SOA record has been seen. A fresh
    /// connection is used so a half-read stream can never confuse a
    /// later query.
    fn axfr_impl(&mut self, question: Question) -> Result<Message> {
        let (request, id, _) = self.build_request(&question)?;
        self.last_errors.clear();
        for server in self.server_order()? {
            match self.axfr_server(server, &request, id, &question) {
                Ok(response) => return Ok(response),
                Err(err) => {
                    warn!("server {} failed: {}", server, err);
                    self.last_errors.push((server, err));
                }
            }
        }
        Err(self
            .last_errors
            .last()
            .map(|(_, err)| err.clone())
            .unwrap_or_else(|| {
                Error::new(ErrorKind::NsFailed, "all servers failed")
            }))
    }

    /// Transfers the zone from one server.
    fn axfr_server(
        &mut self,
        server: SocketAddr,
        request: &[u8],
        id: u16,
        question: &Question,
    ) -> Result<Message> {
        let mut stream = transport::tcp_connect(
            server,
            self.local_addr(),
            self.conf.options.timeout,
        )?;
        transport::tcp_send(&mut stream, request)?;

        let first = transport::tcp_recv(&mut stream)?;
        let mut response = self.validate(&first, id, question, None)?;
        let mut soa_count = response.count_answer_soas();
        while soa_count < 2 {
            let chunk = transport::tcp_recv(&mut stream)?;
            let chunk = Message::from_octets(&chunk)?;
            if chunk.header().id() != id {
                return Err(Error::new(
                    ErrorKind::HeaderInvalid,
                    "transfer chunk ID does not match request",
                ));
            }
            soa_count += chunk.count_answer_soas();
            response
                .answer_mut()
                .extend(chunk.answer().iter().cloned());
        }
        Ok(response)
    }
}

/// Returns the TTL to cache a response for.
///
/// That is the minimum TTL of its answer records; a response without
/// answers is not cached at all.
fn cache_ttl(response: &Message) -> Option<u32> {
    response.answer().iter().map(|record| record.ttl()).min()
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::record::Record;
    use crate::rdata::rfc1035::A;
    use std::net::UdpSocket;
    use std::thread;
    use std::time::Duration;

    fn test_conf(servers: &[SocketAddr]) -> ResolvConf {
        let mut conf = ResolvConf::new();
        for &addr in servers {
            conf.servers
                .push(super::super::conf::ServerConf::new(addr));
        }
        conf.options.timeout = Duration::from_millis(200);
        conf.finalize();
        conf
    }

    /// Runs a one-shot UDP server answering with `make_answer`.
    fn spawn_udp_server(
        make_answer: impl Fn(&[u8]) -> Vec<u8> + Send + 'static,
    ) -> SocketAddr {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = socket.local_addr().unwrap();
        thread::spawn(move || {
            let mut buf = [0u8; 4096];
            let (len, peer) = socket.recv_from(&mut buf).unwrap();
            let answer = make_answer(&buf[..len]);
            socket.send_to(&answer, peer).unwrap();
        });
        addr
    }

    /// Builds a NOERROR answer with one A record for a request.
    fn answer_for(request: &[u8]) -> Vec<u8> {
        let request = Message::from_octets(request).unwrap();
        let question = request.first_question().unwrap().clone();
        let mut builder = MessageBuilder::new().question();
        builder
            .header_mut()
            .set_id(request.header().id());
        builder.header_mut().set_qr(true);
        builder.push(&question).unwrap();
        let mut builder = builder.answer();
        builder
            .push(&Record::new(
                question.qname().clone(),
                Class::IN,
                300,
                A::from_octets(192, 0, 2, 1).into(),
            ))
            .unwrap();
        builder.finish().to_vec()
    }

    #[test]
    fn basic_udp_query() {
        let server = spawn_udp_server(answer_for);
        let mut resolver =
            Resolver::new(test_conf(&[server])).unwrap();
        let response = resolver
            .query("www.example.com", Rtype::A, Class::IN)
            .unwrap();
        assert_eq!(response.answer().len(), 1);
        assert_eq!(response.answer()[0].rtype(), Rtype::A);
        assert!(resolver.last_errors().is_empty());
    }

    #[test]
    fn id_mismatch_is_rejected() {
        let server = spawn_udp_server(|request| {
            let mut answer = answer_for(request);
            answer[0] ^= 0xFF;
            answer
        });
        let mut resolver =
            Resolver::new(test_conf(&[server])).unwrap();
        let err = resolver
            .query("www.example.com", Rtype::A, Class::IN)
            .unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::HeaderInvalid);
        assert_eq!(resolver.last_errors().len(), 1);
    }

    #[test]
    fn rcode_error_carries_response() {
        let server = spawn_udp_server(|request| {
            let mut answer = answer_for(request);
            // Patch the RCODE to NXDOMAIN.
            answer[3] |= Rcode::NXDOMAIN.to_int();
            answer
        });
        let mut resolver =
            Resolver::new(test_conf(&[server])).unwrap();
        let err = resolver
            .query("gone.example.com", Rtype::A, Class::IN)
            .unwrap_err();
        assert_eq!(
            *err.kind(),
            ErrorKind::Rcode(Rcode::NXDOMAIN)
        );
        assert!(err.response().is_some());
    }

    #[test]
    fn all_servers_failed() {
        // Two servers that never answer.
        let one = UdpSocket::bind("127.0.0.1:0").unwrap();
        let two = UdpSocket::bind("127.0.0.1:0").unwrap();
        let servers =
            [one.local_addr().unwrap(), two.local_addr().unwrap()];
        let mut resolver =
            Resolver::new(test_conf(&servers)).unwrap();
        let err = resolver
            .query("www.example.com", Rtype::A, Class::IN)
            .unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::SocketTimeout);
        // One exception was recorded per server.
        assert_eq!(resolver.last_errors().len(), 2);
    }

    #[test]
    fn empty_server_list_fails_immediately() {
        let mut conf = ResolvConf::new();
        conf.options.timeout = Duration::from_millis(100);
        // Skip finalize so the server list stays empty.
        let mut resolver = Resolver {
            conf,
            cache: None,
            tsig_key: None,
            sig0_signer: None,
            tcp_conns: HashMap::new(),
            last_errors: Vec::new(),
        };
        let err = resolver
            .query("www.example.com", Rtype::A, Class::IN)
            .unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::NsFailed);
    }

    #[test]
    fn cache_hit_skips_network() {
        use super::super::cache::MemoryCache;

        // The server address points nowhere near a listener, so a
        // cache miss would fail with a timeout.
        let dead = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut resolver = Resolver::new(test_conf(&[dead
            .local_addr()
            .unwrap()]))
        .unwrap();
        let mut cache = MemoryCache::new(10);
        let question = Question::new_in(
            "www.example.com".parse().unwrap(),
            Rtype::A,
        );
        let stored = {
            let mut builder = MessageBuilder::new().question();
            builder.header_mut().set_qr(true);
            builder.push(&question).unwrap();
            let mut builder = builder.answer();
            builder
                .push(&Record::new(
                    question.qname().clone(),
                    Class::IN,
                    300,
                    A::from_octets(192, 0, 2, 99).into(),
                ))
                .unwrap();
            Message::from_octets(&builder.finish()).unwrap()
        };
        cache.put(&cache::fingerprint(&question), &stored, 300);
        resolver.set_cache(Box::new(cache));
        let response = resolver
            .query("www.example.com", Rtype::A, Class::IN)
            .unwrap();
        assert_eq!(response.answer().len(), 1);
    }

    #[test]
    fn strict_mode_filters_foreign_answers() {
        let server = spawn_udp_server(|request| {
            let request = Message::from_octets(request).unwrap();
            let question =
                request.first_question().unwrap().clone();
            let mut builder = MessageBuilder::new().question();
            builder
                .header_mut()
                .set_id(request.header().id());
            builder.header_mut().set_qr(true);
            builder.push(&question).unwrap();
            let mut builder = builder.answer();
            builder
                .push(&Record::new(
                    question.qname().clone(),
                    Class::IN,
                    300,
                    A::from_octets(192, 0, 2, 1).into(),
                ))
                .unwrap();
            builder
                .push(&Record::new(
                    "sneaky.example.org".parse().unwrap(),
                    Class::IN,
                    300,
                    A::from_octets(192, 0, 2, 66).into(),
                ))
                .unwrap();
            builder.finish().to_vec()
        });
        let mut conf = test_conf(&[server]);
        conf.options.strict_query_mode = true;
        let mut resolver = Resolver::new(conf).unwrap();
        let response = resolver
            .query("www.example.com", Rtype::A, Class::IN)
            .unwrap();
        assert_eq!(response.answer().len(), 1);
        assert_eq!(
            response.answer()[0].owner(),
            &"www.example.com".parse().unwrap()
        );
    }

    #[test]
    fn shared_cache_type_is_unavailable() {
        let mut conf = ResolvConf::new();
        conf.options.cache_type = CacheType::Shared;
        let err = Resolver::new(conf).unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::CacheShmUnavail);
    }

    #[test]
    fn dnssec_query_carries_opt() {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut conf = test_conf(&[socket.local_addr().unwrap()]);
        conf.options.dnssec = true;
        let mut resolver = Resolver::new(conf).unwrap();
        let question = Question::new_in(
            "www.example.com".parse().unwrap(),
            Rtype::SOA,
        );
        let (request, _, _) =
            resolver.build_request(&question).unwrap();
        let request = Message::from_octets(&request).unwrap();
        let opt = request.opt().unwrap();
        assert!(opt.dnssec_ok());
        assert_eq!(opt.udp_payload_size(), 4000);
        assert_eq!(opt.version(), 0);
        assert_eq!(opt.ext_rcode(), 0);
    }
}
