//! Reduction of search hits to unique repositories

use crate::types::SearchHit;
use figrefs_core::RepositoryId;
use std::collections::BTreeSet;
use tracing::info;

/// Collect the unique repositories referenced by `hits`, sorted
///
/// Hits without a repository name are skipped.
pub fn collect_unique_repos(hits: &[SearchHit]) -> Vec<RepositoryId> {
    let repos: BTreeSet<RepositoryId> = hits.iter().filter_map(SearchHit::repository_id).collect();
    let repos: Vec<RepositoryId> = repos.into_iter().collect();
    info!("[Collect] Unique repositories: {}", repos.len());
    repos
}
