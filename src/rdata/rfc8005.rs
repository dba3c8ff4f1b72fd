//! Record data from [RFC 8005]: the HIP record type.
//!
//! [RFC 8005]: https://tools.ietf.org/html/rfc8005

use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::utils::{base16, base64};
use core::fmt;

//------------ Hip -----------------------------------------------------------

/// Hip record data.
///
/// Hip records associate a host identity tag and public key with a
/// domain name for the host identity protocol, optionally naming
/// rendezvous servers. The server names are not compressed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Hip {
    pk_algorithm: u8,
    hit: Vec<u8>,
    public_key: Vec<u8>,
    servers: Vec<Name>,
}

impl Hip {
    /// Creates new Hip record data from the components.
    ///
    /// Fails if the host identity tag is longer than 255 octets or the
    /// public key longer than 65,535 octets, since their lengths are
    /// carried in one and two octets respectively.
    pub fn new(
        pk_algorithm: u8,
        hit: Vec<u8>,
        public_key: Vec<u8>,
        servers: Vec<Name>,
    ) -> Result<Self, ParseError> {
        if hit.len() > 255 {
            return Err(ParseError::form_error("long HIT"));
        }
        if public_key.len() > usize::from(u16::MAX) {
            return Err(ParseError::form_error("long public key"));
        }
        Ok(Hip {
            pk_algorithm,
            hit,
            public_key,
            servers,
        })
    }

    /// The public key algorithm.
    #[must_use]
    pub fn pk_algorithm(&self) -> u8 {
        self.pk_algorithm
    }

    /// The host identity tag.
    #[must_use]
    pub fn hit(&self) -> &[u8] {
        &self.hit
    }

    /// The public key.
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// The rendezvous servers.
    #[must_use]
    pub fn servers(&self) -> &[Name] {
        &self.servers
    }

    pub fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let hit_len = usize::from(parser.parse_u8()?);
        let pk_algorithm = parser.parse_u8()?;
        let pk_len = usize::from(parser.parse_u16()?);
        let hit = parser.parse_slice(hit_len)?.to_vec();
        let public_key = parser.parse_slice(pk_len)?.to_vec();
        let mut servers = Vec::new();
        while parser.remaining() > 0 {
            servers.push(Name::parse(parser)?);
        }
        Self::new(pk_algorithm, hit, public_key, servers)
    }

    pub fn compose(&self, target: &mut Composer) {
        target.append_u8(self.hit.len() as u8);
        target.append_u8(self.pk_algorithm);
        target.append_u16(self.public_key.len() as u16);
        target.append_slice(&self.hit);
        target.append_slice(&self.public_key);
        for server in &self.servers {
            server.compose_uncompressed(target);
        }
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let pk_algorithm = scanner.scan_u8()?;
        let hit = scanner.scan_base16()?;
        // The public key may be broken into several tokens; the
        // rendezvous server names that follow are told apart by the
        // dots no base64 chunk can contain.
        let mut key_text = String::new();
        let mut servers = Vec::new();
        while !scanner.is_exhausted() {
            let token = scanner.scan_token()?;
            if servers.is_empty() && !token.contains('.') {
                key_text.push_str(token);
            } else {
                servers.push(token.parse().map_err(|_| {
                    ScanError::custom("expected a server name")
                })?);
            }
        }
        if key_text.is_empty() {
            return Err(ScanError::custom("expected a public key"));
        }
        let public_key = base64::decode(&key_text)?;
        Self::new(pk_algorithm, hit, public_key, servers)
            .map_err(Into::into)
    }
}

//--- Display

impl fmt::Display for Hip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.pk_algorithm)?;
        base16::display(&self.hit, f)?;
        write!(f, " {}", base64::encode_string(&self.public_key))?;
        for server in &self.servers {
            write!(f, " {}", server)?;
        }
        Ok(())
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips() {
        // A public key broken into two tokens, followed by two
        // rendezvous servers.
        let text = "2 200100107B1A74DF365639CC39F1D578 \
                    Zm9v YmFy \
                    rvs1.example.com. rvs2.example.com.";
        let rdata = Hip::scan(&mut Scanner::new(text)).unwrap();
        assert_eq!(rdata.pk_algorithm(), 2);
        assert_eq!(rdata.hit().len(), 16);
        assert_eq!(rdata.public_key(), b"foobar");
        assert_eq!(rdata.servers().len(), 2);
        let mut composer = Composer::uncompressed();
        rdata.compose(&mut composer);
        let mut parser = Parser::from_octets(composer.as_slice());
        assert_eq!(Hip::parse(&mut parser).unwrap(), rdata);
        assert_eq!(
            Hip::scan(&mut Scanner::new(&format!("{}", rdata))).unwrap(),
            rdata
        );
    }
}
