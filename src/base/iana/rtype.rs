//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. A normal query includes the
    /// type of record information is requested for. A few additional types,
    /// called query types, are defined as well and can only be used in
    /// questions. This type represents both these types.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    ///
    /// In order to avoid confusion over capitalization, the mnemonics are
    /// treated as single acronyms and therefore all variant names are
    /// spelled identically to them.
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, b"A")

    /// An authoritative name server.
    (NS => 2, b"NS")

    /// A mail destination.
    ///
    /// (Obsolete – use MX)
    (MD => 3, b"MD")

    /// A mail forwarder.
    ///
    /// (Obsolete – use MX)
    (MF => 4, b"MF")

    /// The canonical name for an alias.
    (CNAME => 5, b"CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, b"SOA")

    /// A mailbox domain name.
    ///
    /// (Experimental.)
    (MB => 7, b"MB")

    /// A mail group member.
    ///
    /// (Experimental.)
    (MG => 8, b"MG")

    /// A mail rename domain name.
    ///
    /// (Experimental.)
    (MR => 9, b"MR")

    /// A null resource record.
    ///
    /// (Experimental.)
    (NULL => 10, b"NULL")

    /// A well known service description.
    (WKS => 11, b"WKS")

    /// A domain name pointer.
    (PTR => 12, b"PTR")

    /// Host information.
    (HINFO => 13, b"HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, b"MINFO")

    /// Mail exchange.
    (MX => 15, b"MX")

    /// Text strings.
    (TXT => 16, b"TXT")

    /// For responsible person.
    (RP => 17, b"RP")

    /// For AFS data base location.
    (AFSDB => 18, b"AFSDB")

    /// For X.25 PSDN address.
    (X25 => 19, b"X25")

    /// For ISDN address.
    (ISDN => 20, b"ISDN")

    /// For route through.
    (RT => 21, b"RT")

    /// For NSAP address, NSAP style A record.
    (NSAP => 22, b"NSAP")

    /// For domain name pointer, NSAP style.
    (NSAPPTR => 23, b"NSAP-PTR")

    /// For security signature.
    (SIG => 24, b"SIG")

    /// For security key.
    (KEY => 25, b"KEY")

    /// X.400 mail mapping information.
    (PX => 26, b"PX")

    /// Geographical position.
    (GPOS => 27, b"GPOS")

    /// IPv6 address.
    (AAAA => 28, b"AAAA")

    /// Location information.
    (LOC => 29, b"LOC")

    /// Next domain.
    ///
    /// (Obsolete – use NSEC)
    (NXT => 30, b"NXT")

    /// Endpoint identifier.
    (EID => 31, b"EID")

    /// Nimrod locator.
    (NIMLOC => 32, b"NIMLOC")

    /// Server selection.
    (SRV => 33, b"SRV")

    /// ATM address.
    (ATMA => 34, b"ATMA")

    /// Naming authority pointer.
    (NAPTR => 35, b"NAPTR")

    /// Key exchanger.
    (KX => 36, b"KX")

    /// A certificate.
    (CERT => 37, b"CERT")

    /// A6.
    ///
    /// (Obsolete – use AAAA)
    (A6 => 38, b"A6")

    /// DNAME.
    (DNAME => 39, b"DNAME")

    /// SINK.
    (SINK => 40, b"SINK")

    /// The EDNS OPT pseudo record type.
    (OPT => 41, b"OPT")

    /// Address prefix list.
    (APL => 42, b"APL")

    /// Delegation signer.
    (DS => 43, b"DS")

    /// SSH key fingerprint.
    (SSHFP => 44, b"SSHFP")

    /// IPSECKEY.
    (IPSECKEY => 45, b"IPSECKEY")

    /// RRSIG.
    (RRSIG => 46, b"RRSIG")

    /// NSEC.
    (NSEC => 47, b"NSEC")

    /// DNSKEY.
    (DNSKEY => 48, b"DNSKEY")

    /// DHCID.
    (DHCID => 49, b"DHCID")

    /// NSEC3.
    (NSEC3 => 50, b"NSEC3")

    /// NSEC3PARAM.
    (NSEC3PARAM => 51, b"NSEC3PARAM")

    /// TLSA.
    (TLSA => 52, b"TLSA")

    /// S/MIME cert association.
    (SMIMEA => 53, b"SMIMEA")

    /// Host identity protocol.
    (HIP => 55, b"HIP")

    /// NINFO.
    (NINFO => 56, b"NINFO")

    /// RKEY.
    (RKEY => 57, b"RKEY")

    /// Trust anchor link.
    (TALINK => 58, b"TALINK")

    /// Child DS.
    (CDS => 59, b"CDS")

    /// DNSKEY(s) the child wants reflected in DS.
    (CDNSKEY => 60, b"CDNSKEY")

    /// OpenPGP key.
    (OPENPGPKEY => 61, b"OPENPGPKEY")

    /// Child-to-parent synchronization.
    (CSYNC => 62, b"CSYNC")

    /// Message digest for DNS zone.
    (ZONEMD => 63, b"ZONEMD")

    /// General purpose service endpoints.
    (SVCB => 64, b"SVCB")

    /// Service endpoints specific to HTTPS and HTTP origins.
    (HTTPS => 65, b"HTTPS")

    /// Sender policy framework.
    ///
    /// (Obsolete – use TXT)
    (SPF => 99, b"SPF")

    /// UINFO.
    (UINFO => 100, b"UINFO")

    /// UID.
    (UID => 101, b"UID")

    /// GID.
    (GID => 102, b"GID")

    /// UNSPEC.
    (UNSPEC => 103, b"UNSPEC")

    /// NID.
    (NID => 104, b"NID")

    /// L32.
    (L32 => 105, b"L32")

    /// L64.
    (L64 => 106, b"L64")

    /// LP.
    (LP => 107, b"LP")

    /// An EUI-48 address.
    (EUI48 => 108, b"EUI48")

    /// An EUI-64 address.
    (EUI64 => 109, b"EUI64")

    /// Transaction key.
    (TKEY => 249, b"TKEY")

    /// Transaction signature.
    (TSIG => 250, b"TSIG")

    /// Incremental transfer.
    (IXFR => 251, b"IXFR")

    /// Transfer of an entire zone.
    (AXFR => 252, b"AXFR")

    /// Mailbox-related RRs (MB, MG, or MR).
    (MAILB => 253, b"MAILB")

    /// Mail agent RRs.
    ///
    /// (Obsolete – see MX)
    (MAILA => 254, b"MAILA")

    /// A request for all records the server/cache has available.
    (ANY => 255, b"ANY")

    /// URI.
    (URI => 256, b"URI")

    /// Certification authority restriction.
    (CAA => 257, b"CAA")

    /// Application visibility and control.
    (AVC => 258, b"AVC")

    /// Digital object architecture.
    (DOA => 259, b"DOA")

    /// DNSSEC trust authorities.
    (TA => 32768, b"TA")

    /// DNSSEC lookaside validation.
    (DLV => 32769, b"DLV")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16);
from_str_error!("unknown record type");

impl Rtype {
    /// Returns whether the type can only appear in queries.
    ///
    /// Query types cannot appear as the type of an actual resource record;
    /// the zone transfer types in particular drive a different read loop in
    /// the resolver.
    #[must_use]
    pub fn is_query_type(self) -> bool {
        matches!(
            self,
            Rtype::AXFR
                | Rtype::IXFR
                | Rtype::MAILA
                | Rtype::MAILB
                | Rtype::ANY
        )
    }

    /// Returns whether a response for this type may be cached.
    ///
    /// Zone transfers and the OPT pseudo type are excluded from caching.
    #[must_use]
    pub fn is_cacheable(self) -> bool {
        !matches!(self, Rtype::AXFR | Rtype::IXFR | Rtype::OPT)
    }
}

impl Default for Rtype {
    fn default() -> Self {
        Rtype::A
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str_and_display() {
        assert_eq!(Rtype::from_int(28), Rtype::AAAA);
        assert_eq!("NSEC3PARAM".parse::<Rtype>(), Ok(Rtype::NSEC3PARAM));
        assert_eq!("nsec3param".parse::<Rtype>(), Ok(Rtype::NSEC3PARAM));
        assert_eq!("TYPE1".parse::<Rtype>(), Ok(Rtype::A));
        assert_eq!("TYPE4711".parse::<Rtype>(), Ok(Rtype::Int(4711)));
        assert!("TYPE".parse::<Rtype>().is_err());
        assert_eq!(format!("{}", Rtype::NSAPPTR), "NSAP-PTR");
        assert_eq!(format!("{}", Rtype::Int(4711)), "TYPE4711");
        assert_eq!(format!("{}", Rtype::Int(15)), "MX");
    }

    #[test]
    fn query_and_cache_properties() {
        assert!(Rtype::AXFR.is_query_type());
        assert!(!Rtype::A.is_query_type());
        assert!(!Rtype::AXFR.is_cacheable());
        assert!(!Rtype::OPT.is_cacheable());
        assert!(Rtype::MX.is_cacheable());
    }
}
