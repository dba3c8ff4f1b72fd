//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It is a
    /// four bit field in the header of a DNS message.
    =>
    Opcode, u8;

    /// A standard query (0).
    ///
    /// This query requests all records matching the name, class, and
    /// record type given in the query's question section. Defined in
    /// RFC 1035.
    (QUERY => 0, b"QUERY")

    /// An inverse query (1, obsolete).
    ///
    /// Defined in RFC 1035, obsoleted by RFC 3425.
    (IQUERY => 1, b"IQUERY")

    /// A server status request (2).
    ///
    /// Defined in RFC 1035, the status request was never properly
    /// specified.
    (STATUS => 2, b"STATUS")

    /// A NOTIFY query (4).
    ///
    /// NOTIFY queries allow primary servers to inform secondaries about
    /// zone changes. Defined in RFC 1996.
    (NOTIFY => 4, b"NOTIFY")

    /// An UPDATE query (5).
    ///
    /// UPDATE queries change resource records in a zone. Defined in
    /// RFC 2136.
    (UPDATE => 5, b"UPDATE")
}

int_enum_str_with_decimal!(Opcode, u8);
from_str_error!("unknown opcode");

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str_and_display() {
        assert_eq!("UPDATE".parse::<Opcode>(), Ok(Opcode::UPDATE));
        assert_eq!("3".parse::<Opcode>(), Ok(Opcode::Int(3)));
        assert_eq!(format!("{}", Opcode::NOTIFY), "NOTIFY");
        assert_eq!(format!("{}", Opcode::Int(3)), "3");
    }
}
