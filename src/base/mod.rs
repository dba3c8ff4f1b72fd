//! Handling of DNS data.
//!
//! This module provides types and traits for working with DNS data: the
//! many parameter registries, domain names, the message header, and the
//! machinery for composing and parsing complete messages.
//!
//! The most important types are re-exported at the module level.

//--- Re-exports

pub use self::charstr::CharStr;
pub use self::header::{Header, HeaderCounts, HeaderSection};
pub use self::message::Message;
pub use self::message_builder::MessageBuilder;
pub use self::name::Name;
pub use self::question::Question;
pub use self::record::Record;

//--- Modules

pub mod charstr;
pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod question;
pub mod record;
pub mod scan;
pub mod wire;
