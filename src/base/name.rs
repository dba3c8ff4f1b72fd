//! Domain names.
//!
//! A domain name consists of a sequence of labels of up to 63 octets
//! each, stored in wire format as length-prefixed strings terminated by
//! the zero-length root label. The entire wire format of a name is at
//! most 255 octets long.
//!
//! [`Name`] keeps the uncompressed wire format of an absolute name.
//! Compression only exists inside messages: when composing, the composer
//! replaces known suffixes with pointers; when parsing, [`Name::parse`]
//! follows pointers and returns the reassembled name.

use super::wire::{Composer, ParseError, Parser};
use core::str::FromStr;
use core::{cmp, fmt, hash};
use smallvec::SmallVec;

/// The maximum length of the wire format of a name.
const MAX_NAME_LEN: usize = 255;

/// The maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

//------------ Name ----------------------------------------------------------

/// An absolute domain name.
#[derive(Clone, Debug)]
pub struct Name {
    /// The uncompressed wire format of the name.
    ///
    /// This always ends with the root label.
    octets: SmallVec<[u8; 24]>,
}

impl Name {
    /// Creates the root name.
    #[must_use]
    pub fn root() -> Self {
        Name {
            octets: SmallVec::from_slice(b"\0"),
        }
    }

    /// Returns a reference to the wire format of the name.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

    /// Returns the length of the wire format of the name.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the name is the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The final root label is not included.
    pub fn iter_labels(&self) -> impl Iterator<Item = &[u8]> {
        LabelIter(&self.octets)
    }

    /// Returns the number of labels without the root label.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.iter_labels().count()
    }

    /// Returns the name with the first label removed.
    ///
    /// Returns `None` if the name is the root name already.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let start = usize::from(self.octets[0]) + 1;
        Some(Name {
            octets: SmallVec::from_slice(&self.octets[start..]),
        })
    }

    /// Returns whether `base` is a suffix of this name.
    #[must_use]
    pub fn ends_with(&self, base: &Name) -> bool {
        let mut name = Some(self.clone());
        while let Some(cand) = name {
            if cand == *base {
                return true;
            }
            name = cand.parent();
        }
        false
    }

    /// Appends the name to the composer, compressing where possible.
    pub fn compose(&self, target: &mut Composer) {
        target.append_name_slice(&self.octets)
    }

    /// Appends the name to the composer without compression.
    ///
    /// A few record types, notably the signer name in SIG and RRSIG
    /// records, are not allowed to be compressed on the wire.
    pub fn compose_uncompressed(&self, target: &mut Composer) {
        target.append_name_slice_uncompressed(&self.octets)
    }

    /// Takes a name from the beginning of a parser.
    ///
    /// Compression pointers are followed and verified: they must refer
    /// strictly backwards into the message, and no position may be
    /// visited twice. Once a pointer has been followed, the parser's own
    /// position is fixed at the octet right after the pointer.
    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut octets = SmallVec::new();
        let mut visited = SmallVec::<[usize; 8]>::new();
        let mut return_pos = None;
        loop {
            let here = parser.pos();
            let octet = parser.parse_u8()?;
            match octet {
                0 => {
                    octets.push(0);
                    break;
                }
                1..=0x3F => {
                    let label = parser.parse_slice(usize::from(octet))?;
                    if octets.len() + usize::from(octet) + 2 > MAX_NAME_LEN
                    {
                        return Err(ParseError::form_error(
                            "long domain name",
                        ));
                    }
                    octets.push(octet);
                    octets.extend_from_slice(label);
                }
                0xC0..=0xFF => {
                    let target = usize::from(octet & 0x3F) << 8
                        | usize::from(parser.parse_u8()?);
                    if target >= here {
                        return Err(ParseError::form_error(
                            "forward compression pointer",
                        ));
                    }
                    if visited.contains(&target) {
                        return Err(ParseError::form_error(
                            "compression pointer loop",
                        ));
                    }
                    visited.push(target);
                    if return_pos.is_none() {
                        return_pos = Some(parser.pos());
                    }
                    parser.seek(target)?;
                }
                _ => {
                    return Err(ParseError::form_error(
                        "unknown label type",
                    ))
                }
            }
        }
        if let Some(pos) = return_pos {
            parser.seek(pos)?;
        }
        Ok(Name { octets })
    }
}

//--- FromStr

impl FromStr for Name {
    type Err = NameError;

    /// Parses a name from its dotted representation format.
    ///
    /// The name is taken to be absolute whether it ends in a dot or not.
    /// Escapes of the form `\.`, `\\`, and `\DDD` are understood.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NameError::EmptyLabel);
        }
        if s == "." {
            return Ok(Name::root());
        }
        let mut octets = SmallVec::new();
        let mut label = [0u8; MAX_LABEL_LEN];
        let mut label_len = 0usize;
        let mut chars = s.chars();
        let mut seen_end = false;
        loop {
            let ch = match chars.next() {
                Some(ch) => ch,
                None => break,
            };
            if seen_end {
                // A dot may only end the name.
                return Err(NameError::EmptyLabel);
            }
            let value = match ch {
                '.' => {
                    if label_len == 0 {
                        return Err(NameError::EmptyLabel);
                    }
                    octets.push(label_len as u8);
                    octets.extend_from_slice(&label[..label_len]);
                    label_len = 0;
                    if chars.as_str().is_empty() {
                        seen_end = true;
                    }
                    continue;
                }
                '\\' => match chars.next() {
                    Some(ch @ '0'..='9') => {
                        let mut value = ch.to_digit(10).unwrap();
                        for _ in 0..2 {
                            match chars.next().and_then(|ch| {
                                ch.to_digit(10)
                            }) {
                                Some(digit) => {
                                    value = value * 10 + digit
                                }
                                None => {
                                    return Err(NameError::BadEscape)
                                }
                            }
                        }
                        if value > 255 {
                            return Err(NameError::BadEscape);
                        }
                        value as u8
                    }
                    Some(ch) if ch.is_ascii() => ch as u8,
                    _ => return Err(NameError::BadEscape),
                },
                ch if ch.is_ascii() => ch as u8,
                _ => return Err(NameError::BadSymbol),
            };
            if label_len == MAX_LABEL_LEN {
                return Err(NameError::LongLabel);
            }
            label[label_len] = value;
            label_len += 1;
        }
        if label_len > 0 {
            octets.push(label_len as u8);
            octets.extend_from_slice(&label[..label_len]);
        }
        octets.push(0);
        if octets.len() > MAX_NAME_LEN {
            return Err(NameError::LongName);
        }
        Ok(Name { octets })
    }
}

//--- PartialEq, Eq, PartialOrd, Ord, and Hash

impl PartialEq for Name {
    /// Names compare ignoring ASCII case.
    fn eq(&self, other: &Self) -> bool {
        self.octets.eq_ignore_ascii_case(&other.octets)
    }
}

impl Eq for Name {}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        let this = self.octets.iter().map(u8::to_ascii_lowercase);
        let that = other.octets.iter().map(u8::to_ascii_lowercase);
        this.cmp(that)
    }
}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.octets.iter() {
            ch.to_ascii_lowercase().hash(state)
        }
    }
}

//--- Display

impl fmt::Display for Name {
    /// Formats the name in its absolute dotted form.
    ///
    /// Dots and backslashes inside labels are escaped, other non-printing
    /// octets use the `\DDD` form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.iter_labels() {
            for &ch in label {
                match ch {
                    b'.' | b'\\' => write!(f, "\\{}", ch as char)?,
                    0x20..=0x7E => write!(f, "{}", ch as char)?,
                    _ => write!(f, "\\{:03}", ch)?,
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the labels in a name.
struct LabelIter<'a>(&'a [u8]);

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let len = usize::from(*self.0.first()?);
        if len == 0 {
            return None;
        }
        let (label, rest) = self.0[1..].split_at(len);
        self.0 = rest;
        Some(label)
    }
}

//------------ NameError -----------------------------------------------------

/// An error happened while converting a name from its dotted form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// A label was empty.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The name was longer than 255 octets in wire format.
    LongName,

    /// An escape sequence was malformed.
    BadEscape,

    /// A character outside of ASCII appeared unescaped.
    BadSymbol,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NameError::EmptyLabel => f.write_str("empty label"),
            NameError::LongLabel => f.write_str("label too long"),
            NameError::LongName => f.write_str("name too long"),
            NameError::BadEscape => f.write_str("illegal escape sequence"),
            NameError::BadSymbol => f.write_str("illegal character"),
        }
    }
}

impl std::error::Error for NameError {}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn from_str_and_display() {
        assert_eq!(
            name("www.example.com").as_slice(),
            b"\x03www\x07example\x03com\0"
        );
        assert_eq!(
            name("www.example.com.").as_slice(),
            b"\x03www\x07example\x03com\0"
        );
        assert_eq!(format!("{}", name("www.example.com")),
                   "www.example.com.");
        assert_eq!(format!("{}", Name::root()), ".");
        assert_eq!(name(r"a\.b.c").label_count(), 2);
        assert_eq!(format!("{}", name(r"a\.b.c")), r"a\.b.c.");
        assert_eq!(name(r"a\032b.c").as_slice(), b"\x03a b\x01c\0");
        assert!(Name::from_str("a..b").is_err());
        assert!(Name::from_str("").is_err());
        assert!(Name::from_str(&"x".repeat(64)).is_err());
    }

    #[test]
    fn eq_ignores_case() {
        assert_eq!(name("WWW.Example.COM"), name("www.example.com"));
        assert_ne!(name("www.example.com"), name("www.example.org"));
    }

    #[test]
    fn parent_and_suffix() {
        let n = name("www.example.com");
        assert_eq!(n.parent().unwrap(), name("example.com"));
        assert!(n.ends_with(&name("example.com")));
        assert!(n.ends_with(&Name::root()));
        assert!(!n.ends_with(&name("example.org")));
    }

    #[test]
    fn parse_uncompressed() {
        let data = b"\x03www\x07example\x03com\0rest";
        let mut parser = Parser::from_octets(data);
        let n = Name::parse(&mut parser).unwrap();
        assert_eq!(n, name("www.example.com"));
        assert_eq!(parser.pos(), 17);
    }

    #[test]
    fn parse_compressed() {
        // Name at 2, pointer name at 19 referring back to offset 6.
        let mut data = Vec::new();
        data.extend_from_slice(b"\0\0");
        data.extend_from_slice(b"\x03www\x07example\x03com\0");
        data.extend_from_slice(b"\x04mail\xc0\x06");
        let mut parser = Parser::from_octets(&data);
        parser.advance(2).unwrap();
        assert_eq!(
            Name::parse(&mut parser).unwrap(),
            name("www.example.com")
        );
        let n = Name::parse(&mut parser).unwrap();
        assert_eq!(n, name("mail.example.com"));
        // The position must freeze right after the pointer.
        assert_eq!(parser.pos(), data.len());
    }

    #[test]
    fn parse_rejects_forward_pointer() {
        let data = b"\xc0\x04\0\0\x03com\0";
        let mut parser = Parser::from_octets(data);
        assert!(Name::parse(&mut parser).is_err());
    }

    #[test]
    fn parse_rejects_loop() {
        let data = b"\0\0\x03www\xc0\x02";
        let mut parser = Parser::from_octets(data);
        parser.advance(2).unwrap();
        assert!(Name::parse(&mut parser).is_err());
    }

    #[test]
    fn parse_rejects_long_name() {
        let mut data = Vec::new();
        for _ in 0..5 {
            data.push(63);
            data.extend_from_slice(&[b'x'; 63]);
        }
        data.push(0);
        let mut parser = Parser::from_octets(&data);
        assert!(Name::parse(&mut parser).is_err());
    }

    #[test]
    fn compose_compression() {
        let mut composer = Composer::new();
        name("www.example.com").compose(&mut composer);
        name("mail.example.com").compose(&mut composer);
        assert_eq!(
            composer.as_slice(),
            b"\x03www\x07example\x03com\0\x04mail\xc0\x04"
        );
        let mut composer = Composer::uncompressed();
        name("www.example.com").compose(&mut composer);
        name("www.example.com").compose(&mut composer);
        assert_eq!(
            composer.as_slice(),
            b"\x03www\x07example\x03com\0\x03www\x07example\x03com\0"
        );
    }
}
