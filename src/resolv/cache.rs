//! Caching of responses.
//!
//! The resolver can remember successful responses and answer repeated
//! questions without network traffic. A cache implements the
//! [`ResponseCache`] trait; keys are the canonical fingerprint of the
//! question produced by [`fingerprint`], values are opaque serialized
//! responses. The only built-in serialization is the DNS wire format
//! itself.
//!
//! Two backends are provided: [`MemoryCache`] keeps responses in the
//! process, [`FileCache`] persists them to a single file shared by all
//! processes using it, guarded by advisory file locks. A
//! shared-memory backend can be supplied externally through the trait.

use crate::base::message::Message;
use crate::base::question::Question;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Seek, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};
use tracing::debug;

//------------ fingerprint ---------------------------------------------------

/// Returns the cache key for a question.
///
/// The fingerprint is the canonical text of the question: the
/// lowercased absolute name, the class, and the type, separated by
/// single spaces.
#[must_use]
pub fn fingerprint(question: &Question) -> String {
    let mut res = format!(
        "{} {} {}",
        question.qname(),
        question.qclass(),
        question.qtype()
    );
    res.make_ascii_lowercase();
    res
}

//------------ ResponseCache -------------------------------------------------

/// A backend storing responses by question fingerprint.
pub trait ResponseCache {
    /// Looks up the response stored under a key.
    ///
    /// Expired entries are treated as missing.
    fn get(&mut self, key: &str) -> Option<Message>;

    /// Stores a response under a key for `ttl` seconds.
    fn put(&mut self, key: &str, response: &Message, ttl: u32);

    /// Releases any resources held by the backend.
    fn close(&mut self) {}
}

//------------ MemoryCache ---------------------------------------------------

/// A cache keeping responses in process memory.
#[derive(Debug, Default)]
pub struct MemoryCache {
    /// The stored responses with their expiry time.
    entries: HashMap<String, (Instant, Vec<u8>)>,

    /// The maximum number of entries kept.
    max_size: usize,
}

impl MemoryCache {
    /// Creates a new cache holding up to `max_size` responses.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        MemoryCache {
            entries: HashMap::new(),
            max_size,
        }
    }

    /// Returns the number of entries, including expired ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResponseCache for MemoryCache {
    fn get(&mut self, key: &str) -> Option<Message> {
        let (deadline, wire) = self.entries.get(key)?;
        if Instant::now() >= *deadline {
            self.entries.remove(key);
            return None;
        }
        Message::from_octets(wire).ok()
    }

    fn put(&mut self, key: &str, response: &Message, ttl: u32) {
        let wire = match response.to_wire() {
            Ok(wire) => wire,
            Err(_) => return,
        };
        if self.entries.len() >= self.max_size {
            let now = Instant::now();
            self.entries.retain(|_, (deadline, _)| *deadline > now);
            if self.entries.len() >= self.max_size {
                return;
            }
        }
        self.entries.insert(
            key.into(),
            (
                Instant::now() + Duration::from_secs(ttl.into()),
                wire.to_vec(),
            ),
        );
    }
}

//------------ FileCache -----------------------------------------------------

/// A cache persisting responses to a file.
///
/// The whole cache lives in one file that is re-read on every lookup
/// and rewritten on every store, so independent processes can share
/// it. Advisory file locks serialize access: lookups take a shared
/// lock, stores an exclusive one.
#[derive(Debug)]
pub struct FileCache {
    /// The path of the cache file.
    path: PathBuf,

    /// The maximum number of entries kept.
    max_size: usize,
}

/// One entry of the file cache on disk.
struct FileEntry {
    key: String,
    expires: u64,
    wire: Vec<u8>,
}

impl FileCache {
    /// Creates a file cache at the given path.
    #[must_use]
    pub fn new(path: PathBuf, max_size: usize) -> Self {
        FileCache { path, max_size }
    }

    /// Reads all unexpired entries from the file.
    fn load(file: &mut fs::File) -> io::Result<Vec<FileEntry>> {
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        let now = unix_now();
        let mut entries = Vec::new();
        let mut pos = 0;
        while pos < data.len() {
            let (expires, key, wire) = match read_entry(&data, pos) {
                Some(res) => res,
                // A torn or corrupt file is treated as empty from
                // here on.
                None => break,
            };
            pos = wire.1;
            if expires > now {
                entries.push(FileEntry {
                    key,
                    expires,
                    wire: wire.0,
                });
            }
        }
        Ok(entries)
    }

    /// Rewrites the file with the given entries.
    fn store(
        file: &mut fs::File,
        entries: &[FileEntry],
    ) -> io::Result<()> {
        let mut data = Vec::new();
        for entry in entries {
            data.extend_from_slice(&entry.expires.to_be_bytes());
            data.extend_from_slice(
                &(entry.key.len() as u32).to_be_bytes(),
            );
            data.extend_from_slice(entry.key.as_bytes());
            data.extend_from_slice(
                &(entry.wire.len() as u32).to_be_bytes(),
            );
            data.extend_from_slice(&entry.wire);
        }
        file.rewind()?;
        file.set_len(0)?;
        file.write_all(&data)
    }
}

impl ResponseCache for FileCache {
    fn get(&mut self, key: &str) -> Option<Message> {
        let mut file = fs::File::open(&self.path).ok()?;
        file.lock_shared().ok()?;
        let entries = Self::load(&mut file);
        let _ = file.unlock();
        entries
            .ok()?
            .iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| Message::from_octets(&entry.wire).ok())
    }

    fn put(&mut self, key: &str, response: &Message, ttl: u32) {
        let wire = match response.to_wire() {
            Ok(wire) => wire,
            Err(_) => return,
        };
        let res = (|| -> io::Result<()> {
            let mut file = fs::OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(&self.path)?;
            file.lock()?;
            let mut entries = Self::load(&mut file)?;
            entries.retain(|entry| entry.key != key);
            entries.push(FileEntry {
                key: key.into(),
                expires: unix_now() + u64::from(ttl),
                wire: wire.to_vec(),
            });
            while entries.len() > self.max_size {
                entries.remove(0);
            }
            let res = Self::store(&mut file, &entries);
            let _ = file.unlock();
            res
        })();
        if let Err(err) = res {
            debug!("cache file {}: {}", self.path.display(), err);
        }
    }
}

/// Reads one entry at `pos`, returning the data and the new position.
#[allow(clippy::type_complexity)]
fn read_entry(
    data: &[u8],
    pos: usize,
) -> Option<(u64, String, (Vec<u8>, usize))> {
    let expires =
        u64::from_be_bytes(data.get(pos..pos + 8)?.try_into().ok()?);
    let pos = pos + 8;
    let key_len = u32::from_be_bytes(
        data.get(pos..pos + 4)?.try_into().ok()?,
    ) as usize;
    let pos = pos + 4;
    let key =
        String::from_utf8(data.get(pos..pos + key_len)?.to_vec())
            .ok()?;
    let pos = pos + key_len;
    let wire_len = u32::from_be_bytes(
        data.get(pos..pos + 4)?.try_into().ok()?,
    ) as usize;
    let pos = pos + 4;
    let wire = data.get(pos..pos + wire_len)?.to_vec();
    Some((expires, key, (wire, pos + wire_len)))
}

/// Returns the current Unix time in seconds.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::base::message_builder::MessageBuilder;
    use crate::base::name::Name;
    use crate::base::record::Record;
    use crate::base::Message;
    use crate::rdata::rfc1035::A;

    fn question() -> Question {
        Question::new_in("WWW.Example.Com".parse().unwrap(), Rtype::A)
    }

    fn response() -> Message {
        let mut builder = MessageBuilder::new().question();
        builder.header_mut().set_id(4711);
        builder.header_mut().set_qr(true);
        builder.push(&question()).unwrap();
        let mut builder = builder.answer();
        builder
            .push(&Record::new(
                "www.example.com".parse::<Name>().unwrap(),
                Class::IN,
                300,
                A::from_octets(192, 0, 2, 1).into(),
            ))
            .unwrap();
        Message::from_octets(&builder.finish()).unwrap()
    }

    #[test]
    fn fingerprint_is_canonical() {
        assert_eq!(
            fingerprint(&question()),
            "www.example.com. in a"
        );
    }

    #[test]
    fn memory_cache_round_trip() {
        let mut cache = MemoryCache::new(10);
        let key = fingerprint(&question());
        assert!(cache.get(&key).is_none());
        cache.put(&key, &response(), 300);
        let hit = cache.get(&key).unwrap();
        assert_eq!(hit.answer().len(), 1);
        assert!(cache.get("other key").is_none());
    }

    #[test]
    fn memory_cache_expires() {
        let mut cache = MemoryCache::new(10);
        cache.put("key", &response(), 0);
        assert!(cache.get("key").is_none());
    }

    #[test]
    fn file_cache_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "netdns-test-cache-{}",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        let mut cache = FileCache::new(path.clone(), 10);
        let key = fingerprint(&question());
        assert!(cache.get(&key).is_none());
        cache.put(&key, &response(), 300);
        let hit = cache.get(&key).unwrap();
        assert_eq!(hit.answer().len(), 1);
        // A second cache instance sees the same file.
        let mut other = FileCache::new(path.clone(), 10);
        assert!(other.get(&key).is_some());
        let _ = fs::remove_file(&path);
    }
}
