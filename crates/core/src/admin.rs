//! Admin allow-list.
//!
//! Administrative privilege is membership in a fixed set of meta-ids,
//! read once at startup from a newline-delimited file. The set is
//! immutable afterwards and shared read-only across requests, so it
//! needs no synchronization beyond `Arc`.

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Immutable set of meta-ids granted administrative privileges.
///
/// Built explicitly at startup and injected into the application state;
/// an unreadable source yields the empty set, so a broken allow-list
/// means nobody is admin rather than everybody.
#[derive(Debug, Default, Clone)]
pub struct AdminRegistry {
    meta_ids: HashSet<String>,
}

impl AdminRegistry {
    /// Build a registry from an explicit list of meta-ids.
    pub fn new(meta_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            meta_ids: meta_ids.into_iter().collect(),
        }
    }

    /// Read a newline-delimited list of meta-ids.
    ///
    /// Lines are trimmed; blank lines are skipped.
    pub fn from_reader(reader: impl Read) -> std::io::Result<Self> {
        let mut meta_ids = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                meta_ids.insert(trimmed.to_string());
            }
        }
        Ok(Self { meta_ids })
    }

    /// Read the allow-list file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read the allow-list file, falling back to the empty set.
    ///
    /// A missing or unreadable file is logged and produces a registry
    /// with no admins.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(registry) => {
                tracing::info!(path = %path.display(), admins = registry.len(), "Admin allow-list loaded");
                registry
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to load admin allow-list, no admins will be recognized");
                Self::default()
            }
        }
    }

    /// Whether `meta_id` is an administrator.
    pub fn is_admin(&self, meta_id: &str) -> bool {
        self.meta_ids.contains(meta_id)
    }

    /// Number of admin meta-ids in the registry.
    pub fn len(&self) -> usize {
        self.meta_ids.len()
    }

    /// True when the registry holds no admins.
    pub fn is_empty(&self) -> bool {
        self.meta_ids.is_empty()
    }
}
