//! Hash manifests (`SHA256SUMS`): filename -> expected SHA-256 digest.
//!
//! Parsing is lossy: lines whose first token is not 64 characters long are
//! skipped with a debug log, and empty input yields an empty manifest. When a
//! name appears twice the later line wins. Digests are stored exactly as
//! written; comparison against computed digests is case-sensitive.

mod parse;

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

use parse::is_digest_token;

/// Conventional manifest file name published next to release artifacts.
pub const MANIFEST_FILE: &str = "SHA256SUMS";

/// Detached signature of the manifest (published, not checked here).
pub const SIGNATURE_FILE: &str = "SHA256SUMS.sig";

/// Immutable filename -> digest map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashManifest {
    entries: BTreeMap<String, String>,
}

impl HashManifest {
    /// Expected digest for `name`, if listed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a manifest from `(filename, digest)` pairs; pairs whose digest is
/// not 64 characters long are dropped, the rest are stored verbatim.
impl<N: Into<String>, D: AsRef<str>> FromIterator<(N, D)> for HashManifest {
    fn from_iter<I: IntoIterator<Item = (N, D)>>(iter: I) -> Self {
        let mut entries = BTreeMap::new();
        for (name, digest) in iter {
            let name = name.into();
            let digest = digest.as_ref();
            if name.is_empty() || !is_digest_token(digest) {
                tracing::debug!(name = %name, "skipping manifest entry with invalid digest");
                continue;
            }
            entries.insert(name, digest.to_string());
        }
        Self { entries }
    }
}

/// Renders `sha256sum`-compatible lines (`<digest>  <name>`).
impl fmt::Display for HashManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, digest) in &self.entries {
            writeln!(f, "{}  {}", digest, name)?;
        }
        Ok(())
    }
}

/// Parse manifest text already held in memory.
pub fn parse_manifest_str(text: &str) -> HashManifest {
    let mut entries = BTreeMap::new();
    for line in text.lines() {
        push_line(&mut entries, line);
    }
    HashManifest { entries }
}

/// Parse a manifest from a stream. Only read failures are errors; invalid
/// UTF-8 is replaced rather than rejected.
pub fn parse_manifest<R: Read>(reader: R) -> io::Result<HashManifest> {
    let mut entries = BTreeMap::new();
    for line in BufReader::new(reader).split(b'\n') {
        let line = line?;
        push_line(&mut entries, &String::from_utf8_lossy(&line));
    }
    Ok(HashManifest { entries })
}

/// Open and parse `dir/name`. Returns `Ok(None)` if the file does not exist.
pub fn load_manifest_file(dir: &Path, name: &str) -> Result<Option<HashManifest>> {
    let path = dir.join(name);
    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(&path, e)),
    };
    let manifest = parse_manifest(file).map_err(|e| Error::io(&path, e))?;
    tracing::debug!(path = %path.display(), entries = manifest.len(), "loaded hash manifest");
    Ok(Some(manifest))
}

fn push_line(entries: &mut BTreeMap<String, String>, line: &str) {
    match parse::parse_line(line) {
        Some((name, digest)) => {
            entries.insert(name, digest);
        }
        None if line.trim().is_empty() => {}
        None => tracing::debug!(line, "skipping malformed manifest line"),
    }
}
