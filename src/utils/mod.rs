//! Various utility modules.
//!
//! These are the binary-to-text codecs used by the representation format
//! of record data: hexadecimal for DS digests and NSEC3 salts, base32hex
//! for NSEC3 owner hashes, and base64 for keys, signatures, and MACs.

pub mod base16;
pub mod base32;
pub mod base64;

use core::fmt;

//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding encoded data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The encoded data ended in the middle of a group.
    ShortInput,

    /// There was data after the encoded data ended.
    TrailingInput,

    /// A character appeared that isn't part of the alphabet.
    IllegalChar(char),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::ShortInput => f.write_str("incomplete input"),
            DecodeError::TrailingInput => f.write_str("trailing input"),
            DecodeError::IllegalChar(ch) => {
                write!(f, "illegal character '{}'", ch)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
