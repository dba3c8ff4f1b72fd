//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. That is, each class has its own separate
    /// record tree starting at the root. However, in practice only the IN
    /// class is ever used.
    ///
    /// Additionally, there are query classes or QCLASSes that are used in
    /// questions or UPDATE queries, namely NONE and ANY (or *).
    ///
    /// Classes are represented by a 16 bit value. The enum wraps these
    /// values.
    =>
    Class, u16;

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, b"IN")

    /// CSNET (CS).
    ///
    /// This class is defined in RFC 1035 as obsolete already then.
    (CS => 2, b"CS")

    /// Chaos (CH).
    (CH => 3, b"CH")

    /// Hesiod (HS).
    (HS => 4, b"HS")

    /// Query class None.
    ///
    /// Defined in RFC 2136, this class is used in UPDATE queries to
    /// require that an RRset does not exist prior to the update.
    (NONE => 0xFE, b"NONE")

    /// Query class * (ANY).
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 0xFF, b"*")
}

int_enum_str_with_prefix!(Class, "CLASS", u16);
from_str_error!("unknown class");

impl Default for Class {
    fn default() -> Self {
        Class::IN
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str_and_display() {
        assert_eq!("IN".parse::<Class>(), Ok(Class::IN));
        assert_eq!("CLASS254".parse::<Class>(), Ok(Class::NONE));
        assert_eq!(format!("{}", Class::ANY), "*");
        assert_eq!(format!("{}", Class::Int(17)), "CLASS17");
    }
}
