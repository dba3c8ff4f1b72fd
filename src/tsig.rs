//! Support for TSIG.
//!
//! TSIG, defined in [RFC 2845], secures a DNS transaction with a MAC
//! keyed by a secret shared between client and server. The MAC covers
//! the entire message plus a pseudo-record of signing variables and
//! travels in a TSIG record appended to the additional section.
//!
//! [`Key`] holds a shared secret together with its name and
//! [`Algorithm`]. [`ClientTransaction`] signs an outgoing request and
//! verifies the signature on the matching answer.
//!
//! [RFC 2845]: https://tools.ietf.org/html/rfc2845

use crate::base::iana::{Class, Rtype, TsigRcode};
use crate::base::message_builder::AdditionalBuilder;
use crate::base::name::Name;
use crate::base::record::Record;
use crate::base::wire::{Composer, ParseError, Parser, PushError};
use crate::rdata::rfc2845::{Time48, Tsig};
use core::{fmt, str};
use ring::{constant_time, hmac};

/// The default fudge value for signed requests, in seconds.
const DEFAULT_FUDGE: u16 = 300;

//------------ Key -----------------------------------------------------------

/// A TSIG key.
///
/// A key is identified on the wire by its name and carries the MAC
/// algorithm and the shared secret.
#[derive(Clone, Debug)]
pub struct Key {
    /// The HMAC key derived from the secret.
    key: hmac::Key,

    /// The name of the key as agreed between the parties.
    name: Name,

    /// The MAC algorithm of the key.
    algorithm: Algorithm,
}

impl Key {
    /// Creates a new key from its components.
    #[must_use]
    pub fn new(algorithm: Algorithm, name: Name, secret: &[u8]) -> Self {
        Key {
            key: hmac::Key::new(algorithm.into_hmac_algorithm(), secret),
            name,
            algorithm,
        }
    }

    /// Returns the name of the key.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the algorithm of the key.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Computes the MAC over the given chunks of data.
    fn sign(&self, chunks: &[&[u8]]) -> Vec<u8> {
        let mut context = hmac::Context::with_key(&self.key);
        for chunk in chunks {
            context.update(chunk);
        }
        context.sign().as_ref().to_vec()
    }
}

//------------ Algorithm -----------------------------------------------------

/// The supported TSIG MAC algorithms.
///
/// HMAC-MD5 and HMAC-SHA224 exist in the registry but are not
/// provided by the cryptographic backend; their names are recognized
/// and rejected with an [`AlgorithmError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// HMAC-SHA1 (`hmac-sha1.`).
    Sha1,

    /// HMAC-SHA256 (`hmac-sha256.`).
    Sha256,

    /// HMAC-SHA384 (`hmac-sha384.`).
    Sha384,

    /// HMAC-SHA512 (`hmac-sha512.`).
    Sha512,
}

impl Algorithm {
    /// Returns the algorithm for the domain name used on the wire.
    pub fn from_name(name: &Name) -> Result<Self, AlgorithmError> {
        let mut text = name.to_string();
        text.make_ascii_lowercase();
        match text.as_str() {
            "hmac-sha1." => Ok(Algorithm::Sha1),
            "hmac-sha256." => Ok(Algorithm::Sha256),
            "hmac-sha384." => Ok(Algorithm::Sha384),
            "hmac-sha512." => Ok(Algorithm::Sha512),
            "hmac-md5.sig-alg.reg.int." | "hmac-sha224." => {
                Err(AlgorithmError::Unsupported)
            }
            _ => Err(AlgorithmError::Unknown),
        }
    }

    /// Returns the domain name identifying the algorithm.
    #[must_use]
    pub fn to_name(self) -> Name {
        match self {
            Algorithm::Sha1 => "hmac-sha1.",
            Algorithm::Sha256 => "hmac-sha256.",
            Algorithm::Sha384 => "hmac-sha384.",
            Algorithm::Sha512 => "hmac-sha512.",
        }
        .parse()
        .expect("well-formed algorithm name")
    }

    /// Returns the matching algorithm of the crypto backend.
    fn into_hmac_algorithm(self) -> hmac::Algorithm {
        match self {
            Algorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Algorithm::Sha256 => hmac::HMAC_SHA256,
            Algorithm::Sha384 => hmac::HMAC_SHA384,
            Algorithm::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

//--- FromStr and Display

impl str::FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("hmac-sha1") {
            Ok(Algorithm::Sha1)
        } else if s.eq_ignore_ascii_case("hmac-sha256") {
            Ok(Algorithm::Sha256)
        } else if s.eq_ignore_ascii_case("hmac-sha384") {
            Ok(Algorithm::Sha384)
        } else if s.eq_ignore_ascii_case("hmac-sha512") {
            Ok(Algorithm::Sha512)
        } else if s.eq_ignore_ascii_case("hmac-md5")
            || s.eq_ignore_ascii_case("hmac-sha224")
        {
            Err(AlgorithmError::Unsupported)
        } else {
            Err(AlgorithmError::Unknown)
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Sha1 => "hmac-sha1",
            Algorithm::Sha256 => "hmac-sha256",
            Algorithm::Sha384 => "hmac-sha384",
            Algorithm::Sha512 => "hmac-sha512",
        })
    }
}

//------------ ClientTransaction ---------------------------------------------

/// The client side of a signed message exchange.
#[derive(Clone, Debug)]
pub struct ClientTransaction {
    /// The key signing the exchange.
    key: Key,

    /// The MAC of the request, needed to verify the answer.
    request_mac: Vec<u8>,

    /// The message ID of the signed request.
    original_id: u16,
}

impl ClientTransaction {
    /// Signs a request with the given key.
    ///
    /// The MAC is computed over the message as assembled so far plus
    /// the signing variables; the TSIG record carrying it is appended
    /// to the additional section. Because the MAC covers everything
    /// before it, this must be the last change to the message.
    pub fn request(
        key: Key,
        builder: &mut AdditionalBuilder,
    ) -> Result<Self, PushError> {
        Self::request_at(key, builder, Time48::now())
    }

    /// Signs a request for the given point in time.
    pub fn request_at(
        key: Key,
        builder: &mut AdditionalBuilder,
        now: Time48,
    ) -> Result<Self, PushError> {
        let variables = Variables {
            key_name: key.name().clone(),
            algorithm: key.algorithm(),
            time_signed: now,
            fudge: DEFAULT_FUDGE,
            error: TsigRcode::NOERROR,
            other: Vec::new(),
        };
        let mac =
            key.sign(&[builder.as_slice(), &variables.to_wire()]);
        let original_id = builder.header().id();
        let tsig = variables
            .to_rdata(&mac, original_id)
            .expect("MAC fits the length field");
        builder.push(&Record::new(
            key.name().clone(),
            Class::ANY,
            0,
            tsig.into(),
        ))?;
        Ok(ClientTransaction {
            key,
            request_mac: mac,
            original_id,
        })
    }

    /// Returns the key the transaction was signed with.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Verifies the signature on an answer.
    ///
    /// The answer must carry a TSIG record as the last record of its
    /// additional section, signed with the transaction's key over the
    /// request MAC and the answer itself, and its signing time must be
    /// within the fudge window.
    pub fn answer(&self, message: &[u8]) -> Result<(), ValidationError> {
        self.answer_at(message, Time48::now())
    }

    /// Verifies the signature on an answer for a given point in time.
    pub fn answer_at(
        &self,
        message: &[u8],
        now: Time48,
    ) -> Result<(), ValidationError> {
        let (tsig_start, record) = extract_tsig(message)?;
        let tsig = match record.data() {
            crate::rdata::RecordData::Tsig(tsig) => tsig,
            _ => return Err(ValidationError::Missing),
        };
        if tsig.error() != TsigRcode::NOERROR {
            return Err(ValidationError::ServerError(tsig.error()));
        }
        if record.owner() != self.key.name()
            || Algorithm::from_name(tsig.algorithm())
                .map_err(|_| ValidationError::BadKey)?
                != self.key.algorithm()
        {
            return Err(ValidationError::BadKey);
        }
        if !tsig.is_valid_at(now) {
            return Err(ValidationError::BadTime);
        }
        // Reconstruct the message as it was before the TSIG record
        // was added: cut at the record start and decrement ARCOUNT.
        let mut prefix = message[..tsig_start].to_vec();
        let arcount = u16::from_be_bytes([prefix[10], prefix[11]]);
        let arcount = arcount
            .checked_sub(1)
            .ok_or(ValidationError::Missing)?;
        prefix[10..12].copy_from_slice(&arcount.to_be_bytes());
        prefix[..2]
            .copy_from_slice(&tsig.original_id().to_be_bytes());
        let variables = Variables {
            key_name: record.owner().clone(),
            algorithm: self.key.algorithm(),
            time_signed: tsig.time_signed(),
            fudge: tsig.fudge(),
            error: tsig.error(),
            other: tsig.other().to_vec(),
        };
        let expected = self.key.sign(&[
            &(self.request_mac.len() as u16).to_be_bytes(),
            &self.request_mac,
            &prefix,
            &variables.to_wire(),
        ]);
        constant_time::verify_slices_are_equal(&expected, tsig.mac())
            .map_err(|_| ValidationError::BadSig)
    }
}

//------------ Variables -----------------------------------------------------

/// The signing variables of a TSIG pseudo-record.
///
/// These fields enter the MAC computation alongside the message
/// itself. Domain names are digested in canonical form, i.e.,
/// lowercased and uncompressed.
struct Variables {
    key_name: Name,
    algorithm: Algorithm,
    time_signed: Time48,
    fudge: u16,
    error: TsigRcode,
    other: Vec<u8>,
}

impl Variables {
    /// Returns the wire form of the variables for the MAC.
    fn to_wire(&self) -> Vec<u8> {
        let mut target = Composer::uncompressed();
        append_lowercased(&self.key_name, &mut target);
        Class::ANY.compose(&mut target);
        target.append_u32(0);
        append_lowercased(&self.algorithm.to_name(), &mut target);
        self.time_signed.compose(&mut target);
        target.append_u16(self.fudge);
        self.error.compose(&mut target);
        target.append_u16(self.other.len() as u16);
        target.append_slice(&self.other);
        target.freeze().to_vec()
    }

    /// Builds the TSIG record data with the given MAC.
    fn to_rdata(
        &self,
        mac: &[u8],
        original_id: u16,
    ) -> Result<Tsig, ParseError> {
        Tsig::new(
            self.algorithm.to_name(),
            self.time_signed,
            self.fudge,
            mac.to_vec(),
            original_id,
            self.error,
            self.other.clone(),
        )
    }
}

/// Appends the canonical (lowercased) wire form of a name.
fn append_lowercased(name: &Name, target: &mut Composer) {
    let lowered: Vec<u8> = name
        .as_slice()
        .iter()
        .map(u8::to_ascii_lowercase)
        .collect();
    target.append_slice(&lowered);
}

//------------ extract_tsig --------------------------------------------------

/// Finds the TSIG record of a message in its raw octets.
///
/// Returns the offset at which the record starts and the parsed
/// record. Fails if the message has no additional records, if its last
/// record is not a TSIG record, or if the message is malformed.
fn extract_tsig(
    message: &[u8],
) -> Result<(usize, Record), ValidationError> {
    let mut parser = Parser::from_octets(message);
    parser.advance(4).map_err(|_| ValidationError::Missing)?;
    let qdcount = parser.parse_u16()?;
    let ancount = parser.parse_u16()?;
    let nscount = parser.parse_u16()?;
    let arcount = parser.parse_u16()?;
    if arcount == 0 {
        return Err(ValidationError::Missing);
    }
    for _ in 0..qdcount {
        skip_name(&mut parser)?;
        parser.advance(4)?;
    }
    // Skip everything up to the last record of the additional section.
    let total =
        u32::from(ancount) + u32::from(nscount) + u32::from(arcount);
    for _ in 0..total - 1 {
        skip_name(&mut parser)?;
        parser.advance(8)?;
        let rdlen = usize::from(parser.parse_u16()?);
        parser.advance(rdlen)?;
    }
    let record_start = parser.pos();
    let record = Record::parse(&mut parser)?;
    if record.rtype() != Rtype::TSIG {
        return Err(ValidationError::Missing);
    }
    Ok((record_start, record))
}

/// Skips over a possibly compressed domain name.
fn skip_name(parser: &mut Parser) -> Result<(), ParseError> {
    loop {
        let octet = parser.parse_u8()?;
        match octet {
            0 => return Ok(()),
            1..=0x3F => parser.advance(usize::from(octet))?,
            0xC0..=0xFF => {
                parser.advance(1)?;
                return Ok(());
            }
            _ => {
                return Err(ParseError::form_error(
                    "unknown label type",
                ))
            }
        }
    }
}

//============ Error Types ===================================================

//------------ AlgorithmError ------------------------------------------------

/// A TSIG algorithm name was not usable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AlgorithmError {
    /// The algorithm name is not in the registry.
    Unknown,

    /// The algorithm exists but the crypto backend does not provide it.
    Unsupported,
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AlgorithmError::Unknown => {
                f.write_str("unknown TSIG algorithm")
            }
            AlgorithmError::Unsupported => {
                f.write_str("unsupported TSIG algorithm")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}

//------------ ValidationError -----------------------------------------------

/// A TSIG-signed answer failed validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// The answer carries no TSIG record in the right place.
    Missing,

    /// The answer was signed with a different key.
    BadKey,

    /// The MAC did not verify.
    BadSig,

    /// The signing time was outside the fudge window.
    BadTime,

    /// The server reported a TSIG error.
    ServerError(TsigRcode),

    /// The answer could not be parsed at all.
    Parse(ParseError),
}

impl From<ParseError> for ValidationError {
    fn from(err: ParseError) -> Self {
        ValidationError::Parse(err)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValidationError::Missing => {
                f.write_str("message is not signed")
            }
            ValidationError::BadKey => f.write_str("wrong key"),
            ValidationError::BadSig => f.write_str("bad signature"),
            ValidationError::BadTime => {
                f.write_str("signing time out of window")
            }
            ValidationError::ServerError(rcode) => {
                write!(f, "server reported {}", rcode)
            }
            ValidationError::Parse(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ValidationError {}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::message::Message;
    use crate::base::message_builder::MessageBuilder;
    use crate::base::question::Question;

    fn test_key() -> Key {
        Key::new(
            Algorithm::Sha256,
            "test-key.example.com".parse().unwrap(),
            b"very secret indeed",
        )
    }

    fn signed_request() -> (ClientTransaction, Vec<u8>) {
        let mut builder = MessageBuilder::new().question();
        builder.header_mut().set_id(0x4711);
        builder
            .push(&Question::new_in(
                "example.com".parse().unwrap(),
                Rtype::SOA,
            ))
            .unwrap();
        let mut builder = builder.additional();
        let transaction = ClientTransaction::request_at(
            test_key(),
            &mut builder,
            Time48::from_u64(1_672_531_200),
        )
        .unwrap();
        (transaction, builder.finish().to_vec())
    }

    #[test]
    fn request_appends_tsig() {
        let (_, wire) = signed_request();
        let message = Message::from_octets(&wire).unwrap();
        assert_eq!(message.counts().arcount(), 1);
        let record = &message.additional()[0];
        assert_eq!(record.rtype(), Rtype::TSIG);
        assert_eq!(record.class(), Class::ANY);
        assert_eq!(
            record.owner(),
            &"test-key.example.com".parse().unwrap()
        );
        match record.data() {
            crate::rdata::RecordData::Tsig(tsig) => {
                assert_eq!(tsig.original_id(), 0x4711);
                assert_eq!(tsig.mac().len(), 32);
            }
            _ => panic!("expected TSIG data"),
        }
    }

    #[test]
    fn answer_round_trip() {
        let (transaction, request) = signed_request();
        // Fake a server: answer is the request with QR set, signed
        // with the same key over the request MAC.
        let request_msg = Message::from_octets(&request).unwrap();
        let request_tsig = match request_msg.additional()[0].data() {
            crate::rdata::RecordData::Tsig(tsig) => tsig.clone(),
            _ => unreachable!(),
        };
        let mut builder = MessageBuilder::new().question();
        builder.header_mut().set_id(0x4711);
        builder.header_mut().set_qr(true);
        builder
            .push(&Question::new_in(
                "example.com".parse().unwrap(),
                Rtype::SOA,
            ))
            .unwrap();
        let mut builder = builder.additional();
        let key = test_key();
        let variables = Variables {
            key_name: key.name().clone(),
            algorithm: key.algorithm(),
            time_signed: Time48::from_u64(1_672_531_210),
            fudge: DEFAULT_FUDGE,
            error: TsigRcode::NOERROR,
            other: Vec::new(),
        };
        let mac = key.sign(&[
            &(request_tsig.mac().len() as u16).to_be_bytes(),
            request_tsig.mac(),
            builder.as_slice(),
            &variables.to_wire(),
        ]);
        let tsig = variables.to_rdata(&mac, 0x4711).unwrap();
        builder
            .push(&Record::new(
                key.name().clone(),
                Class::ANY,
                0,
                tsig.into(),
            ))
            .unwrap();
        let answer = builder.finish();

        transaction
            .answer_at(&answer, Time48::from_u64(1_672_531_215))
            .unwrap();
        // A flipped octet must break the signature.
        let mut broken = answer.to_vec();
        broken[2] ^= 0x01;
        assert!(matches!(
            transaction
                .answer_at(&broken, Time48::from_u64(1_672_531_215)),
            Err(ValidationError::BadSig)
        ));
        // An expired clock must be rejected.
        assert!(matches!(
            transaction
                .answer_at(&answer, Time48::from_u64(1_672_532_000)),
            Err(ValidationError::BadTime)
        ));
    }

    #[test]
    fn unsigned_answer_is_missing() {
        let (transaction, _) = signed_request();
        let mut builder = MessageBuilder::new().question();
        builder.header_mut().set_id(0x4711);
        builder.header_mut().set_qr(true);
        let answer = builder.finish();
        assert!(matches!(
            transaction.answer(&answer),
            Err(ValidationError::Missing)
        ));
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(
            "hmac-sha256".parse::<Algorithm>(),
            Ok(Algorithm::Sha256)
        );
        assert_eq!(
            "HMAC-SHA1".parse::<Algorithm>(),
            Ok(Algorithm::Sha1)
        );
        assert_eq!(
            "hmac-md5".parse::<Algorithm>(),
            Err(AlgorithmError::Unsupported)
        );
        assert_eq!(
            "hmac-crc32".parse::<Algorithm>(),
            Err(AlgorithmError::Unknown)
        );
        assert_eq!(
            Algorithm::from_name(&Algorithm::Sha384.to_name()),
            Ok(Algorithm::Sha384)
        );
    }
}
