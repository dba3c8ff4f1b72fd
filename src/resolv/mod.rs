//! The resolver engine.
//!
//! This module drives actual DNS traffic: [`conf`] describes which
//! servers to talk to and how, [`transport`] moves messages over UDP
//! and TCP, [`resolver`] contains the send loop with failover,
//! truncation escalation, and zone transfer assembly, and [`cache`]
//! remembers responses between queries.
//!
//! The central type is [`Resolver`]; the other types are re-exported
//! here for convenience.

pub use self::cache::{FileCache, MemoryCache, ResponseCache};
pub use self::conf::{
    CacheType, ConfError, ResolvConf, ResolvOptions, ServerConf,
};
pub use self::error::{Error, ErrorKind};
pub use self::resolver::Resolver;

pub mod cache;
pub mod conf;
pub mod error;
pub mod resolver;
pub mod transport;
