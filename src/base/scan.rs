//! Reading record data from its representation format.
//!
//! The textual form of record data, as it appears in zone files, is a
//! sequence of whitespace-separated tokens. The [`Scanner`] splits a
//! line of text into these tokens, honoring quoted strings and
//! discarding the parentheses that zone files use for line
//! continuation: multi-line entries are expected to have been
//! concatenated into a single string before scanning.
//!
//! Each record data type consumes the tokens it needs through the typed
//! `scan_*` methods and fails with a [`ScanError`] if the data does not
//! fit.

use super::charstr::CharStr;
use super::name::Name;
use super::wire::ParseError;
use crate::utils::{base16, base32, base64};
use core::fmt;

//------------ Scanner -------------------------------------------------------

/// A token-based reader of the representation format.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    /// The tokens of the input in reverse order.
    ///
    /// Keeping them reversed makes taking the next token a pop.
    tokens: Vec<&'a str>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = input;
        loop {
            rest = rest
                .trim_start_matches(|ch: char| ch.is_ascii_whitespace());
            // Parentheses group lines; the grouping itself carries no
            // meaning once the lines have been joined.
            if let Some(stripped) =
                rest.strip_prefix('(').or_else(|| rest.strip_prefix(')'))
            {
                rest = stripped;
                continue;
            }
            if rest.is_empty() {
                break;
            }
            if let Some(inner) = rest.strip_prefix('"') {
                // A quoted token ends at the next quote not preceded by
                // a backslash.
                let mut end = None;
                let mut escaped = false;
                for (idx, ch) in inner.char_indices() {
                    match ch {
                        _ if escaped => escaped = false,
                        '\\' => escaped = true,
                        '"' => {
                            end = Some(idx);
                            break;
                        }
                        _ => {}
                    }
                }
                match end {
                    Some(end) => {
                        tokens.push(&inner[..end]);
                        rest = &inner[end + 1..];
                    }
                    None => {
                        // Unterminated quote: keep the rest as one
                        // token and let the consumer fail on content.
                        tokens.push(inner);
                        rest = "";
                    }
                }
            } else {
                let end = rest
                    .find(|ch: char| {
                        ch.is_ascii_whitespace()
                            || ch == '('
                            || ch == ')'
                    })
                    .unwrap_or(rest.len());
                tokens.push(&rest[..end]);
                rest = &rest[end..];
            }
        }
        tokens.reverse();
        Scanner { tokens }
    }

    /// Returns whether there are no more tokens.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Takes the next token.
    pub fn scan_token(&mut self) -> Result<&'a str, ScanError> {
        self.tokens
            .pop()
            .ok_or_else(|| ScanError::custom("unexpected end of data"))
    }

    /// Fails if there are tokens left.
    pub fn scan_end(&mut self) -> Result<(), ScanError> {
        if self.is_exhausted() {
            Ok(())
        } else {
            Err(ScanError::custom("trailing data"))
        }
    }

    /// Takes the next token and parses it as a decimal integer.
    pub fn scan_u8(&mut self) -> Result<u8, ScanError> {
        self.scan_int()
    }

    /// Takes the next token and parses it as a decimal integer.
    pub fn scan_u16(&mut self) -> Result<u16, ScanError> {
        self.scan_int()
    }

    /// Takes the next token and parses it as a decimal integer.
    pub fn scan_u32(&mut self) -> Result<u32, ScanError> {
        self.scan_int()
    }

    fn scan_int<T: core::str::FromStr>(&mut self) -> Result<T, ScanError> {
        self.scan_token()?
            .parse()
            .map_err(|_| ScanError::custom("expected an integer"))
    }

    /// Takes the next token and parses it as a domain name.
    pub fn scan_name(&mut self) -> Result<Name, ScanError> {
        self.scan_token()?
            .parse()
            .map_err(|_| ScanError::custom("expected a domain name"))
    }

    /// Takes the next token and converts it into a character string.
    pub fn scan_charstr(&mut self) -> Result<CharStr, ScanError> {
        self.scan_token()?
            .parse()
            .map_err(|_| ScanError::custom("bad character string"))
    }

    /// Converts all remaining tokens into character strings.
    ///
    /// Fails if there is not at least one token left.
    pub fn scan_charstrs(&mut self) -> Result<Vec<CharStr>, ScanError> {
        let mut res = vec![self.scan_charstr()?];
        while !self.is_exhausted() {
            res.push(self.scan_charstr()?);
        }
        Ok(res)
    }

    /// Takes the next token and decodes it as hex data.
    pub fn scan_base16(&mut self) -> Result<Vec<u8>, ScanError> {
        base16::decode(self.scan_token()?).map_err(Into::into)
    }

    /// Concatenates all remaining tokens and decodes them as hex data.
    pub fn scan_base16_rest(&mut self) -> Result<Vec<u8>, ScanError> {
        base16::decode(&self.rest()?).map_err(Into::into)
    }

    /// Takes the next token and decodes it as base32hex data.
    pub fn scan_base32hex(&mut self) -> Result<Vec<u8>, ScanError> {
        base32::decode_hex(self.scan_token()?).map_err(Into::into)
    }

    /// Concatenates all remaining tokens and decodes them as base64.
    ///
    /// Keys and signatures are conventionally broken into multiple
    /// tokens, so the base64 fields that end their record types are
    /// scanned greedily.
    pub fn scan_base64_rest(&mut self) -> Result<Vec<u8>, ScanError> {
        base64::decode(&self.rest()?).map_err(Into::into)
    }

    /// Concatenates all remaining tokens into one string.
    fn rest(&mut self) -> Result<String, ScanError> {
        let mut res = String::from(self.scan_token()?);
        while let Some(token) = self.tokens.pop() {
            res.push_str(token);
        }
        Ok(res)
    }
}

//------------ ScanError -----------------------------------------------------

/// An error happened while scanning the representation format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanError(String);

impl ScanError {
    /// Creates a scan error with the given message.
    #[must_use]
    pub fn custom(msg: impl Into<String>) -> Self {
        ScanError(msg.into())
    }
}

//--- From

impl From<crate::utils::DecodeError> for ScanError {
    fn from(err: crate::utils::DecodeError) -> Self {
        ScanError::custom(err.to_string())
    }
}

impl From<ParseError> for ScanError {
    fn from(err: ParseError) -> Self {
        ScanError::custom(err.to_string())
    }
}

//--- Display and Error

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ScanError {}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tokens() {
        let mut scanner = Scanner::new("  10 mail.example.com. ");
        assert_eq!(scanner.scan_u16().unwrap(), 10);
        assert_eq!(
            scanner.scan_name().unwrap(),
            "mail.example.com".parse().unwrap()
        );
        assert!(scanner.scan_end().is_ok());
        assert!(scanner.scan_token().is_err());
    }

    #[test]
    fn quoted_tokens() {
        let mut scanner =
            Scanner::new("\"hello world\" \"with \\\" quote\" plain");
        assert_eq!(
            scanner.scan_charstr().unwrap().as_slice(),
            b"hello world"
        );
        assert_eq!(
            scanner.scan_charstr().unwrap().as_slice(),
            b"with \" quote"
        );
        assert_eq!(scanner.scan_charstr().unwrap().as_slice(), b"plain");
    }

    #[test]
    fn parens_are_dropped() {
        let mut scanner = Scanner::new("( 1 2 ) 3");
        assert_eq!(scanner.scan_u8().unwrap(), 1);
        assert_eq!(scanner.scan_u8().unwrap(), 2);
        assert_eq!(scanner.scan_u8().unwrap(), 3);
        assert!(scanner.scan_end().is_ok());
    }

    #[test]
    fn base64_rest() {
        let mut scanner = Scanner::new("Zm9v YmFy");
        assert_eq!(scanner.scan_base64_rest().unwrap(), b"foobar");
    }
}
