//! Support for SIG(0).
//!
//! SIG(0), defined in [RFC 2931], authenticates a DNS transaction with
//! an asymmetric signature instead of a shared secret. The signature
//! travels in a SIG record with a type covered of zero, appended as
//! the last record of the additional section.
//!
//! The private key itself is an external concern: a key store hands
//! out [`SignerKey`] implementations that know their algorithm, key
//! tag, and signer name and can sign arbitrary octets.
//! [`sign_request`] uses such a handle to sign an assembled message.
//!
//! [RFC 2931]: https://tools.ietf.org/html/rfc2931

use crate::base::iana::{Class, Rtype, SecAlg};
use crate::base::message_builder::AdditionalBuilder;
use crate::base::name::Name;
use crate::base::record::Record;
use crate::base::wire::{Composer, PushError};
use crate::rdata::rfc4034::{Sig, Timestamp};
use core::fmt;
use std::time::SystemTime;

/// How long a signature remains valid, in seconds.
///
/// RFC 2931 suggests a validity period of about five minutes; the
/// inception is "now" and the expiration "now" plus this value.
const VALIDITY: u32 = 500;

//------------ SignerKey -----------------------------------------------------

/// A handle to a private key usable for SIG(0).
///
/// Implementations are provided by a key store, typically loading the
/// key material from files created by `dnssec-keygen`. The crate never
/// sees the key itself, only the signing operation.
pub trait SignerKey {
    /// The security algorithm of the key.
    fn algorithm(&self) -> SecAlg;

    /// The key tag of the matching KEY record.
    fn key_tag(&self) -> u16;

    /// The owner name of the key.
    fn signer_name(&self) -> &Name;

    /// Signs the given data with the private key.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SignError>;
}

/// The algorithms usable for SIG(0).
const SUPPORTED_ALGORITHMS: &[SecAlg] = &[
    SecAlg::RSAMD5,
    SecAlg::DSA,
    SecAlg::RSASHA1,
    SecAlg::RSASHA256,
    SecAlg::RSASHA512,
];

//------------ sign_request --------------------------------------------------

/// Signs an assembled request with a SIG(0) signature.
///
/// The signature is computed over the SIG record data without the
/// signature field followed by the message as assembled so far, with
/// a validity window starting now. The SIG record is appended to the
/// additional section; nothing may be added to the message afterwards.
pub fn sign_request(
    builder: &mut AdditionalBuilder,
    signer: &dyn SignerKey,
) -> Result<(), SignError> {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("system time before Unix epoch")
        .as_secs() as u32;
    sign_request_at(builder, signer, now)
}

/// Signs an assembled request for the given point in time.
pub fn sign_request_at(
    builder: &mut AdditionalBuilder,
    signer: &dyn SignerKey,
    now: u32,
) -> Result<(), SignError> {
    if !SUPPORTED_ALGORITHMS.contains(&signer.algorithm()) {
        return Err(SignError::InvalidAlgorithm(signer.algorithm()));
    }
    let mut sig = Sig::new(
        Rtype::Int(0),
        signer.algorithm(),
        0,
        0,
        Timestamp(now.wrapping_add(VALIDITY)),
        Timestamp(now),
        signer.key_tag(),
        signer.signer_name().clone(),
        Vec::new(),
    );
    // The signature covers the rdata before it plus the message. The
    // signer's name inside the rdata is never compressed.
    let mut data = Composer::uncompressed();
    sig.compose_without_signature(&mut data);
    data.append_slice(builder.as_slice());
    sig.set_signature(signer.sign(data.as_slice())?);
    builder
        .push(&Record::new(Name::root(), Class::ANY, 0, sig.into()))
        .map_err(SignError::Push)
}

//------------ SignError -----------------------------------------------------

/// Signing a message failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SignError {
    /// The crypto backend for the key is not available.
    Unavailable,

    /// The key's algorithm cannot be used for SIG(0).
    InvalidAlgorithm(SecAlg),

    /// The signing operation itself failed.
    Failed(String),

    /// The signed record did not fit the message.
    Push(PushError),
}

impl From<PushError> for SignError {
    fn from(err: PushError) -> Self {
        SignError::Push(err)
    }
}

impl fmt::Display for SignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SignError::Unavailable => {
                f.write_str("crypto backend unavailable")
            }
            SignError::InvalidAlgorithm(alg) => {
                write!(f, "algorithm {} unusable for SIG(0)", alg)
            }
            SignError::Failed(ref msg) => {
                write!(f, "signing failed: {}", msg)
            }
            SignError::Push(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SignError {}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::message::Message;
    use crate::base::message_builder::MessageBuilder;
    use crate::base::question::Question;
    use crate::rdata::RecordData;

    /// A fake key that "signs" by reversing the data.
    struct MockKey {
        name: Name,
        algorithm: SecAlg,
    }

    impl SignerKey for MockKey {
        fn algorithm(&self) -> SecAlg {
            self.algorithm
        }

        fn key_tag(&self) -> u16 {
            0x2b2b
        }

        fn signer_name(&self) -> &Name {
            &self.name
        }

        fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SignError> {
            Ok(data.iter().rev().copied().collect())
        }
    }

    #[test]
    fn signs_and_appends() {
        let key = MockKey {
            name: "keys.example.com".parse().unwrap(),
            algorithm: SecAlg::RSASHA256,
        };
        let mut builder = MessageBuilder::new().question();
        builder.header_mut().set_id(0x0101);
        builder
            .push(&Question::new_in(
                "example.com".parse().unwrap(),
                Rtype::SOA,
            ))
            .unwrap();
        let mut builder = builder.additional();
        sign_request_at(&mut builder, &key, 1_700_000_000).unwrap();
        let message =
            Message::from_octets(&builder.finish()).unwrap();
        assert_eq!(message.counts().arcount(), 1);
        let record = &message.additional()[0];
        assert_eq!(record.rtype(), Rtype::SIG);
        assert!(record.owner().is_root());
        match record.data() {
            RecordData::Sig(sig) => {
                assert_eq!(sig.type_covered(), Rtype::Int(0));
                assert_eq!(sig.key_tag(), 0x2b2b);
                assert_eq!(
                    sig.expiration().to_secs()
                        - sig.inception().to_secs(),
                    500
                );
                assert!(!sig.signature().is_empty());
                assert_eq!(
                    sig.signer_name(),
                    &"keys.example.com".parse().unwrap()
                );
            }
            _ => panic!("expected SIG data"),
        }
    }

    #[test]
    fn rejects_wrong_algorithm() {
        let key = MockKey {
            name: "keys.example.com".parse().unwrap(),
            algorithm: SecAlg::ED25519,
        };
        let mut builder =
            MessageBuilder::new().question().additional();
        assert!(matches!(
            sign_request_at(&mut builder, &key, 1_700_000_000),
            Err(SignError::InvalidAlgorithm(SecAlg::ED25519))
        ));
    }
}
