//! Wire types for the code search API

use figrefs_core::RepositoryId;
use serde::Deserialize;

/// One page of search results
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Total matches reported by the API (capped server side)
    #[serde(default)]
    pub total_count: Option<u64>,

    #[serde(default)]
    pub items: Vec<SearchHit>,
}

/// A single file hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    /// Path of the matching file inside its repository
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub repository: Option<HitRepository>,
}

/// Repository object nested in a hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HitRepository {
    /// `owner/name`
    #[serde(default)]
    pub full_name: Option<String>,
}

impl SearchHit {
    /// Repository this hit belongs to, if the API reported one
    pub fn repository_id(&self) -> Option<RepositoryId> {
        self.repository
            .as_ref()
            .and_then(|repo| repo.full_name.as_deref())
            .filter(|name| !name.is_empty())
            .map(RepositoryId::from)
    }
}
