//! Parameter types of DNS.
//!
//! This module defines types for the parameters used by DNS: all the
//! numbers that have well-defined values and meanings maintained in IANA
//! registries. Each parameter is a simple enum over the well-defined
//! values plus a catch-all variant for the rest, generated by the
//! `int_enum!` macro.

#[macro_use]
mod macros;

pub use self::class::Class;
pub use self::digestalg::DigestAlg;
pub use self::opcode::Opcode;
pub use self::rcode::{Rcode, TsigRcode};
pub use self::rtype::Rtype;
pub use self::secalg::SecAlg;

pub mod class;
pub mod digestalg;
pub mod opcode;
pub mod rcode;
pub mod rtype;
pub mod secalg;
