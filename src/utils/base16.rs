//! Decoding and encoding of hexadecimal data.
//!
//! The representation format of several record types uses plain
//! hexadecimal encoding of binary fields, e.g., the digest of a DS record
//! or the salt of NSEC3. This module provides a decoder and a display
//! helper for this encoding.

use super::DecodeError;
use core::fmt;

/// Decodes a string with hexadecimal data.
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut res = Vec::with_capacity(s.len() / 2);
    let mut hi = None;
    for ch in s.chars() {
        let val = match ch.to_digit(16) {
            Some(val) => val as u8,
            None => return Err(DecodeError::IllegalChar(ch)),
        };
        match hi.take() {
            Some(hi) => res.push(hi << 4 | val),
            None => hi = Some(val),
        }
    }
    if hi.is_some() {
        return Err(DecodeError::ShortInput);
    }
    Ok(res)
}

/// Encodes binary data and writes it to a formatter.
pub fn display<B: AsRef<[u8]> + ?Sized>(
    bytes: &B,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    for &ch in bytes.as_ref() {
        write!(f, "{:02X}", ch)?;
    }
    Ok(())
}

/// Encodes binary data and returns the encoded string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    use core::fmt::Write;

    let mut res = String::with_capacity(bytes.as_ref().len() * 2);
    for &ch in bytes.as_ref() {
        write!(&mut res, "{:02X}", ch).expect("writing to string failed");
    }
    res
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_str() {
        assert_eq!(decode("").unwrap(), b"");
        assert_eq!(decode("De adBEef").is_err(), true);
        assert_eq!(decode("DeadBEef").unwrap(), b"\xde\xad\xbe\xef");
        assert!(matches!(decode("dea"), Err(DecodeError::ShortInput)));
        assert!(matches!(
            decode("dexd"),
            Err(DecodeError::IllegalChar('x'))
        ));
    }

    #[test]
    fn encode_str() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"\xde\xad\xbe\xef"), "DEADBEEF");
    }
}
