//! A client-side DNS library.
//!
//! This crate provides the building blocks for talking to DNS servers
//! directly: constructing queries, sending them over UDP or TCP to one or
//! more name servers, parsing the binary responses into typed resource
//! records, and optionally signing transactions and caching answers. It is
//! aimed at applications that need more control than the system stub
//! resolver offers: DNSSEC-aware lookups, dynamic updates, zone transfers,
//! and explicit retry and failover policy.
//!
//! # Modules
//!
//! * [base] contains the fundamental types: domain names, the message
//!   header, questions, records, and the wire-format composer and parser.
//! * [rdata] contains the record data types for all implemented record
//!   types, organized by the RFC that defines them.
//! * [resolv] contains the resolver engine: configuration, transports,
//!   the send loop, and the response cache.
//! * [tsig] implements transaction signatures via RFC 2845.
//! * [sig0] implements asymmetric transaction signatures via RFC 2931.
//! * [update] helps assembling dynamic update messages per RFC 2136.
//! * [utils] contains the hex, base32, and base64 codecs used by the
//!   textual forms of record data.
//!
//! # Limitations
//!
//! The crate is a client library only. It does not serve zones, does not
//! recurse from the root, and while it transports DNSSEC records and
//! signals DNSSEC support via EDNS, it does not validate signatures.

#![allow(clippy::uninlined_format_args)]

pub mod base;
pub mod rdata;
pub mod resolv;
pub mod sig0;
pub mod tsig;
pub mod update;
pub mod utils;
