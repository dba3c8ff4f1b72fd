//! Security algorithm numbers.

//------------ SecAlg --------------------------------------------------------

int_enum! {
    /// Security algorithm numbers.
    ///
    /// These numbers are used in the DNSKEY, RRSIG, DS, and SIG record
    /// types to identify the public key cryptography algorithm in use.
    ///
    /// The values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: https://www.iana.org/assignments/dns-sec-alg-numbers/dns-sec-alg-numbers.xhtml
    =>
    SecAlg, u8;

    /// RSA/MD5 (1, deprecated).
    (RSAMD5 => 1, b"RSAMD5")

    /// Diffie-Hellman (2).
    (DH => 2, b"DH")

    /// DSA/SHA1 (3).
    (DSA => 3, b"DSA")

    /// RSA/SHA-1 (5).
    (RSASHA1 => 5, b"RSASHA1")

    /// DSA-NSEC3-SHA1 (6).
    (DSANSEC3SHA1 => 6, b"DSA-NSEC3-SHA1")

    /// RSASHA1-NSEC3-SHA1 (7).
    (RSASHA1NSEC3SHA1 => 7, b"RSASHA1-NSEC3-SHA1")

    /// RSA/SHA-256 (8).
    (RSASHA256 => 8, b"RSASHA256")

    /// RSA/SHA-512 (10).
    (RSASHA512 => 10, b"RSASHA512")

    /// GOST R 34.10-2001 (12).
    (ECCGOST => 12, b"ECC-GOST")

    /// ECDSA Curve P-256 with SHA-256 (13).
    (ECDSAP256SHA256 => 13, b"ECDSAP256SHA256")

    /// ECDSA Curve P-384 with SHA-384 (14).
    (ECDSAP384SHA384 => 14, b"ECDSAP384SHA384")

    /// Ed25519 (15).
    (ED25519 => 15, b"ED25519")

    /// Ed448 (16).
    (ED448 => 16, b"ED448")

    /// Reserved for indirect keys (252).
    (INDIRECT => 252, b"INDIRECT")

    /// A private algorithm identified by a domain name (253).
    (PRIVATEDNS => 253, b"PRIVATEDNS")

    /// A private algorithm identified by an OID (254).
    (PRIVATEOID => 254, b"PRIVATEOID")
}

int_enum_str_with_decimal!(SecAlg, u8);
from_str_error!("unknown security algorithm");
