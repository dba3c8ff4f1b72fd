//! Resolver configuration.
//!
//! [`ResolvConf`] collects everything the resolver needs to know: the
//! servers to query, the search list, and the many knobs in
//! [`ResolvOptions`]. The type also parses the glibc-style
//! `/etc/resolv.conf` file, honoring the subset of its options that
//! this resolver implements.

use crate::base::name::Name;
use core::fmt;
use std::io::{self, BufRead, Read};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The default DNS port.
pub const DEFAULT_PORT: u16 = 53;

/// The default maximum UDP payload without EDNS.
pub const DEFAULT_UDP_SIZE: usize = 512;

/// The default advertised UDP payload size with EDNS.
pub const DEFAULT_DNSSEC_PAYLOAD_SIZE: u16 = 4000;

//------------ ResolvOptions -------------------------------------------------

/// Options for the resolver configuration.
#[derive(Clone, Debug)]
pub struct ResolvOptions {
    /// Use TCP for all queries instead of trying UDP first.
    pub use_tcp: bool,

    /// The port to contact name servers on.
    pub dns_port: u16,

    /// A local address to bind sockets to.
    pub local_addr: Option<IpAddr>,

    /// A local port to bind sockets to; zero picks an ephemeral port.
    pub local_port: u16,

    /// How long to wait for a response.
    pub timeout: Duration,

    /// Try the servers in a random order, established once per query.
    pub ns_random: bool,

    /// Set the recursion desired bit in queries.
    ///
    /// Enabled by default.
    pub recurse: bool,

    /// Drop answer records whose owner differs from the question name.
    pub strict_query_mode: bool,

    /// Request DNSSEC records via an EDNS OPT record with the DO bit.
    pub dnssec: bool,

    /// Set the AD bit in queries.
    pub dnssec_ad_flag: bool,

    /// Set the CD bit in queries.
    pub dnssec_cd_flag: bool,

    /// The UDP payload size advertised when `dnssec` is enabled.
    pub dnssec_payload_size: u16,

    /// Honor the `options` lines of parsed `resolv.conf` files.
    pub use_resolv_options: bool,

    /// Which cache backend to use.
    pub cache_type: CacheType,

    /// The path of the file cache.
    pub cache_file: Option<PathBuf>,

    /// The maximum number of cached responses.
    pub cache_size: usize,

    /// The serializer used for cached responses.
    ///
    /// Only `wire`, the DNS wire format itself, is built in.
    pub cache_serializer: String,
}

impl Default for ResolvOptions {
    fn default() -> Self {
        ResolvOptions {
            use_tcp: false,
            dns_port: DEFAULT_PORT,
            local_addr: None,
            local_port: 0,
            timeout: Duration::from_secs(5),
            ns_random: false,
            recurse: true,
            strict_query_mode: false,
            dnssec: false,
            dnssec_ad_flag: false,
            dnssec_cd_flag: false,
            dnssec_payload_size: DEFAULT_DNSSEC_PAYLOAD_SIZE,
            use_resolv_options: false,
            cache_type: CacheType::None,
            cache_file: None,
            cache_size: 1_000,
            cache_serializer: "wire".into(),
        }
    }
}

//------------ CacheType -----------------------------------------------------

/// The selectable cache backends.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CacheType {
    /// No caching at all.
    #[default]
    None,

    /// The file-backed cache.
    File,

    /// A cache shared between processes.
    ///
    /// This backend is provided externally; selecting it without
    /// attaching one is an error.
    Shared,
}

//------------ ServerConf ----------------------------------------------------

/// Configuration for one upstream DNS server.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServerConf {
    /// The address and port of the server.
    pub addr: SocketAddr,
}

impl ServerConf {
    /// Returns a new server config for the given address.
    #[must_use]
    pub fn new(addr: SocketAddr) -> Self {
        ServerConf { addr }
    }
}

//------------ ResolvConf ----------------------------------------------------

/// Resolver configuration.
///
/// After creating a value with [`ResolvConf::new`] and manipulating
/// the members, call [`finalize`][Self::finalize] to make the
/// configuration usable; it fills in a local server if none was given.
/// [`ResolvConf::system`] loads `/etc/resolv.conf` and is the easiest
/// way to resolve like the rest of the machine.
#[derive(Clone, Debug)]
pub struct ResolvConf {
    /// Addresses of the servers to query.
    pub servers: Vec<ServerConf>,

    /// The search list for relative host names.
    pub search: Vec<Name>,

    /// All the other options.
    pub options: ResolvOptions,
}

/// # Management
///
impl ResolvConf {
    /// Creates a new, empty configuration.
    #[must_use]
    pub fn new() -> Self {
        ResolvConf {
            servers: Vec::new(),
            search: Vec::new(),
            options: ResolvOptions::default(),
        }
    }

    /// Creates a configuration from a list of server addresses.
    ///
    /// The addresses get the default DNS port.
    #[must_use]
    pub fn from_addrs(addrs: &[IpAddr]) -> Self {
        let mut res = Self::new();
        for &addr in addrs {
            res.servers.push(ServerConf::new(SocketAddr::new(
                addr,
                res.options.dns_port,
            )));
        }
        res.finalize();
        res
    }

    /// Creates the system configuration.
    ///
    /// This parses `/etc/resolv.conf`, falling back to a default
    /// configuration if that fails.
    #[must_use]
    pub fn system() -> Self {
        let mut res = ResolvConf::new();
        let _ = res.parse_file("/etc/resolv.conf");
        res.finalize();
        res
    }

    /// Finalizes the configuration for actual use.
    ///
    /// If no servers were configured, `127.0.0.1:53` is added, which
    /// is what glibc does, too.
    pub fn finalize(&mut self) {
        if self.servers.is_empty() {
            self.servers.push(ServerConf::new(SocketAddr::new(
                IpAddr::V4(Ipv4Addr::LOCALHOST),
                self.options.dns_port,
            )));
        }
    }
}

/// # Parsing the Configuration File
///
impl ResolvConf {
    /// Parses the configuration from a file.
    pub fn parse_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<(), ConfError> {
        let mut file = std::fs::File::open(path)?;
        self.parse(&mut file)
    }

    /// Parses the configuration from a reader.
    ///
    /// The format is that of the `/etc/resolv.conf` file: lines
    /// starting with `#` or `;` are comments; `nameserver`, `domain`,
    /// `search`, and `options` lines are interpreted; anything else is
    /// ignored.
    pub fn parse<R: Read>(
        &mut self,
        reader: &mut R,
    ) -> Result<(), ConfError> {
        for line in io::BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with(';')
            {
                continue;
            }
            let mut words = line.split_whitespace();
            match words.next() {
                Some("nameserver") => self.parse_nameserver(words)?,
                Some("domain") => self.parse_domain(words)?,
                Some("search") => self.parse_search(words)?,
                Some("options") => self.parse_options(words),
                _ => {}
            }
        }
        Ok(())
    }

    fn parse_nameserver<'a>(
        &mut self,
        mut words: impl Iterator<Item = &'a str>,
    ) -> Result<(), ConfError> {
        let addr: IpAddr = words
            .next()
            .ok_or(ConfError::ParseError)?
            .parse()
            .map_err(|_| ConfError::ParseError)?;
        self.servers.push(ServerConf::new(SocketAddr::new(
            addr,
            self.options.dns_port,
        )));
        Ok(())
    }

    fn parse_domain<'a>(
        &mut self,
        mut words: impl Iterator<Item = &'a str>,
    ) -> Result<(), ConfError> {
        let domain = words
            .next()
            .ok_or(ConfError::ParseError)?
            .parse()
            .map_err(|_| ConfError::ParseError)?;
        self.search = vec![domain];
        Ok(())
    }

    fn parse_search<'a>(
        &mut self,
        words: impl Iterator<Item = &'a str>,
    ) -> Result<(), ConfError> {
        let mut search = Vec::new();
        for word in words {
            search.push(
                word.parse().map_err(|_| ConfError::ParseError)?,
            );
        }
        self.search = search;
        Ok(())
    }

    fn parse_options<'a>(
        &mut self,
        words: impl Iterator<Item = &'a str>,
    ) {
        if !self.options.use_resolv_options {
            return;
        }
        for word in words {
            let (name, value) = match word.split_once(':') {
                Some((name, value)) => (name, Some(value)),
                None => (word, None),
            };
            match (name, value) {
                ("timeout", Some(value)) => {
                    if let Ok(secs) = value.parse::<u64>() {
                        self.options.timeout =
                            Duration::from_secs(secs.clamp(1, 30));
                    }
                }
                ("rotate", None) => self.options.ns_random = true,
                // Everything else glibc knows is not implemented.
                _ => {}
            }
        }
    }
}

impl Default for ResolvConf {
    fn default() -> Self {
        Self::new()
    }
}

//------------ ConfError -----------------------------------------------------

/// An error happened while reading a configuration file.
#[derive(Debug)]
pub enum ConfError {
    /// The file contained an invalid entry.
    ParseError,

    /// Reading the file failed.
    Io(io::Error),
}

impl From<io::Error> for ConfError {
    fn from(err: io::Error) -> Self {
        ConfError::Io(err)
    }
}

impl fmt::Display for ConfError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfError::ParseError => {
                f.write_str("error parsing configuration file")
            }
            ConfError::Io(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ConfError {}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_resolv_conf() {
        let mut conf = ResolvConf::new();
        conf.options.use_resolv_options = true;
        let mut file = io::Cursor::new(
            "# a comment\n\
             ; another comment\n\
             nameserver 192.0.2.1\n\
             nameserver 2001:db8::53\n\
             search example.com sub.example.com\n\
             options timeout:2 rotate attempts:5\n",
        );
        conf.parse(&mut file).unwrap();
        conf.finalize();
        assert_eq!(conf.servers.len(), 2);
        assert_eq!(
            conf.servers[0].addr,
            SocketAddr::new("192.0.2.1".parse().unwrap(), 53)
        );
        assert_eq!(conf.search.len(), 2);
        assert_eq!(conf.options.timeout, Duration::from_secs(2));
        assert!(conf.options.ns_random);
    }

    #[test]
    fn options_need_opt_in() {
        let mut conf = ResolvConf::new();
        let mut file =
            io::Cursor::new("nameserver 192.0.2.1\noptions rotate\n");
        conf.parse(&mut file).unwrap();
        assert!(!conf.options.ns_random);
    }

    #[test]
    fn timeout_is_clamped() {
        let mut conf = ResolvConf::new();
        conf.options.use_resolv_options = true;
        let mut file = io::Cursor::new("options timeout:90\n");
        conf.parse(&mut file).unwrap();
        assert_eq!(conf.options.timeout, Duration::from_secs(30));
    }

    #[test]
    fn domain_replaces_search() {
        let mut conf = ResolvConf::new();
        let mut file = io::Cursor::new(
            "search a.example b.example\ndomain example.com\n",
        );
        conf.parse(&mut file).unwrap();
        assert_eq!(
            conf.search,
            vec!["example.com".parse::<Name>().unwrap()]
        );
    }

    #[test]
    fn empty_conf_gets_localhost() {
        let mut conf = ResolvConf::new();
        conf.finalize();
        assert_eq!(
            conf.servers[0].addr,
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 53)
        );
    }
}
