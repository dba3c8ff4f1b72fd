//! DNS response codes.
//!
//! There are two kinds of response codes: the basic four bit RCODE that
//! lives in the message header, and the extended sixteen bit code used by
//! TSIG and TKEY records. The [`Rcode`] and [`TsigRcode`] types cover
//! them respectively. (The twelve bit extended RCODE assembled from an OPT
//! record is handled by the OPT record type itself.)

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS response codes.
    ///
    /// The response code of a message indicates what happened on the
    /// server when trying to answer the query. The code is a four bit
    /// field in the header of a DNS message.
    ///
    /// The response codes are defined in RFC 1035 and extended by RFC 2136.
    =>
    Rcode, u8;

    /// No error condition (0).
    (NOERROR => 0, b"NOERROR")

    /// Format error (1).
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, b"FORMERR")

    /// Server failure (2).
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    (SERVFAIL => 2, b"SERVFAIL")

    /// Name error (3).
    ///
    /// The domain name referenced in the query does not exist.
    (NXDOMAIN => 3, b"NXDOMAIN")

    /// Not implemented (4).
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, b"NOTIMP")

    /// Query refused (5).
    ///
    /// The name server refused to perform the operation for policy
    /// reasons.
    (REFUSED => 5, b"REFUSED")

    /// Name exists when it should not (6).
    ///
    /// Returned for failed UPDATE prerequisites. Defined in RFC 2136.
    (YXDOMAIN => 6, b"YXDOMAIN")

    /// RR set exists when it should not (7).
    ///
    /// Returned for failed UPDATE prerequisites. Defined in RFC 2136.
    (YXRRSET => 7, b"YXRRSET")

    /// RR set that should exist does not (8).
    ///
    /// Returned for failed UPDATE prerequisites. Defined in RFC 2136.
    (NXRRSET => 8, b"NXRRSET")

    /// Server not authoritative for zone (9).
    ///
    /// Defined in RFC 2136.
    (NOTAUTH => 9, b"NOTAUTH")

    /// Name not contained in zone (10).
    ///
    /// Defined in RFC 2136.
    (NOTZONE => 10, b"NOTZONE")
}

int_enum_str_with_decimal!(Rcode, u8);
from_str_error!("unknown response code");

impl Default for Rcode {
    fn default() -> Self {
        Rcode::NOERROR
    }
}

//------------ TsigRcode -----------------------------------------------------

int_enum! {
    /// Response codes for transaction authentication (TSIG).
    ///
    /// TSIG and TKEY resource records contain a 16 bit wide error field
    /// whose values are an extension of the header RCODE.
    =>
    TsigRcode, u16;

    /// No error condition (0).
    (NOERROR => 0, b"NOERROR")

    /// TSIG signature failure (16).
    (BADSIG => 16, b"BADSIG")

    /// Key not recognized (17).
    (BADKEY => 17, b"BADKEY")

    /// Signature out of time window (18).
    (BADTIME => 18, b"BADTIME")

    /// Bad TKEY mode (19).
    (BADMODE => 19, b"BADMODE")

    /// Duplicate key name (20).
    (BADNAME => 20, b"BADNAME")

    /// Algorithm not supported (21).
    (BADALG => 21, b"BADALG")

    /// Bad truncation of MAC (22).
    (BADTRUNC => 22, b"BADTRUNC")

    /// Bad or missing server cookie (23).
    (BADCOOKIE => 23, b"BADCOOKIE")
}

int_enum_str_with_decimal!(TsigRcode, u16);

impl From<Rcode> for TsigRcode {
    fn from(value: Rcode) -> TsigRcode {
        TsigRcode::from_int(u16::from(value.to_int()))
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str_and_display() {
        assert_eq!("NXDOMAIN".parse::<Rcode>(), Ok(Rcode::NXDOMAIN));
        assert_eq!(format!("{}", Rcode::SERVFAIL), "SERVFAIL");
        assert_eq!(format!("{}", TsigRcode::BADTIME), "BADTIME");
        assert_eq!(TsigRcode::from(Rcode::REFUSED), TsigRcode::Int(5));
    }
}
