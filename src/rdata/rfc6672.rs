//! Record data from [RFC 6672]: the DNAME record type.
//!
//! [RFC 6672]: https://tools.ietf.org/html/rfc6672

dname_type_canonical! {
    /// DNAME record data.
    ///
    /// The DNAME record provides redirection for a subtree of the
    /// domain name tree: every name under the owner is rewritten to the
    /// corresponding name under the target.
    (Dname, target)
}

//============ Test ==========================================================
