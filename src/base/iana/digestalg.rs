//! Delegation signer digest algorithm numbers.

//------------ DigestAlg -----------------------------------------------------

int_enum! {
    /// Delegation signer digest algorithm numbers.
    ///
    /// These numbers identify the algorithm that produced the digest
    /// carried in a DS record.
    ///
    /// The values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: https://www.iana.org/assignments/ds-rr-types/ds-rr-types.xhtml
    =>
    DigestAlg, u8;

    /// SHA-1 (1).
    (SHA1 => 1, b"SHA-1")

    /// SHA-256 (2).
    (SHA256 => 2, b"SHA-256")

    /// GOST R 34.11-94 (3).
    (GOST => 3, b"GOST R 34.11-94")

    /// SHA-384 (4).
    (SHA384 => 4, b"SHA-384")
}

int_enum_str_with_decimal!(DigestAlg, u8);
from_str_error!("unknown digest algorithm");
