//! Records flowing between pipeline stages
//!
//! A [`RepositoryId`] is discovered by the search stage, turned into a
//! [`ClonedRepository`] by the clone stage, and every URL found by the scan
//! stage becomes a [`MatchRecord`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// Separator replacing `/` when a repository id is used as a directory name
pub const DIR_NAME_SEPARATOR: &str = "__";

/// Hosted repository identifier of the form `owner/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(String);

impl RepositoryId {
    /// Wrap an `owner/name` string
    pub fn new(full_name: impl Into<String>) -> Self {
        Self(full_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe directory name, `owner/name` becomes `owner__name`
    pub fn dir_name(&self) -> String {
        self.0.replace('/', DIR_NAME_SEPARATOR)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepositoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Outcome of acquiring a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneStatus {
    /// Freshly cloned during this run
    Cloned,
    /// Directory already existed and was reused without network access
    Cached,
    /// The clone command failed
    Failed,
}

impl CloneStatus {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Cloned | Self::Cached)
    }
}

/// A repository and the local directory it was acquired into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedRepository {
    pub repo: RepositoryId,
    pub path: PathBuf,
    pub status: CloneStatus,
}

impl ClonedRepository {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// A single URL occurrence found in a repository file
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Repository the file belongs to
    pub repo: RepositoryId,
    /// Path relative to the repository root, `/`-separated
    pub file: String,
    /// The extracted URL, prefix through suffix inclusive
    pub url: String,
}

impl MatchRecord {
    pub fn new(repo: RepositoryId, file: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            repo,
            file: file.into(),
            url: url.into(),
        }
    }
}

/// Drop exact `(repo, file, url)` duplicates, keeping the first occurrence
pub fn dedupe_records(records: Vec<MatchRecord>) -> Vec<MatchRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}
