//! Per-repository scanning and the scan worker pool

use crate::decode::read_text_file;
use crate::discovery::{find_files, relative_file};
use crate::extract::extract_urls;
use figrefs_core::config::ScanConfig;
use figrefs_core::error::{Error, Result};
use figrefs_core::{ClonedRepository, MatchRecord, RepositoryId};
use futures::stream::{self, StreamExt};
use std::path::Path;
use tracing::{debug, error, info};

/// Finds delimited URLs in the Markdown files of a repository checkout
#[derive(Debug, Clone)]
pub struct MarkdownScanner {
    prefix: String,
    suffix: String,
    extension: String,
}

impl MarkdownScanner {
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(
            config.prefix.clone(),
            config.suffix.clone(),
            config.extension.clone(),
        )
    }

    /// Records for every URL in one file's text, in scan order
    pub fn scan_text(&self, repo: &RepositoryId, file: &str, text: &str) -> Vec<MatchRecord> {
        extract_urls(text, &self.prefix, &self.suffix)
            .into_iter()
            .map(|url| MatchRecord::new(repo.clone(), file, url))
            .collect()
    }

    /// Scan every matching file under `root`, sequentially
    ///
    /// Files that cannot be read or decoded are skipped silently.
    pub fn scan_repository(&self, repo: &RepositoryId, root: &Path) -> Result<Vec<MatchRecord>> {
        let files = find_files(root, &self.extension)
            .map_err(|e| Error::scan(repo.as_str(), e.to_string()))?;
        debug!("{repo}: {} candidate files", files.len());

        let mut records = Vec::new();
        for path in files {
            let Some(file) = relative_file(root, &path) else {
                continue;
            };
            let Some(text) = read_text_file(&path) else {
                continue;
            };
            records.extend(self.scan_text(repo, &file, &text));
        }

        Ok(records)
    }

    /// Scan successfully acquired repositories through a pool of
    /// `max_workers` blocking tasks
    ///
    /// Records are concatenated in completion order. A repository whose scan
    /// fails or panics is logged and contributes nothing.
    pub async fn scan_all(
        &self,
        repos: Vec<ClonedRepository>,
        max_workers: usize,
    ) -> Vec<MatchRecord> {
        let tasks = stream::iter(repos.into_iter().filter(ClonedRepository::is_success))
            .map(|cloned| {
                let scanner = self.clone();
                async move {
                    let repo = cloned.repo.clone();
                    let outcome = tokio::task::spawn_blocking(move || {
                        scanner.scan_repository(&cloned.repo, &cloned.path)
                    })
                    .await;
                    (repo, outcome)
                }
            })
            .buffer_unordered(max_workers.max(1));
        let mut tasks = std::pin::pin!(tasks);

        let mut all_records = Vec::new();
        while let Some((repo, outcome)) = tasks.next().await {
            match outcome {
                Ok(Ok(records)) => {
                    info!("[Scan] {repo}: {} record(s) found", records.len());
                    all_records.extend(records);
                }
                Ok(Err(e)) => error!("[Scan] ERROR in {repo}: {e}"),
                Err(e) => error!("[Scan] ERROR in {repo}: scan task panicked: {e}"),
            }
        }

        all_records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_text_builds_records() {
        let scanner = MarkdownScanner::from_config(&ScanConfig::default());
        let repo = RepositoryId::from("o/n");

        let records = scanner.scan_text(
            &repo,
            "notes.md",
            "see https://figures.figpack.org/abc/index.html and more",
        );

        assert_eq!(
            records,
            vec![MatchRecord::new(
                repo,
                "notes.md",
                "https://figures.figpack.org/abc/index.html"
            )]
        );
    }

    #[test]
    fn test_scan_missing_repository_is_scan_error() {
        let scanner = MarkdownScanner::from_config(&ScanConfig::default());
        let err = scanner
            .scan_repository(&RepositoryId::from("o/n"), Path::new("/nonexistent/o__n"))
            .unwrap_err();
        assert!(matches!(err, Error::Scan { .. }));
        assert!(err.to_string().starts_with("Scan error for o/n"));
    }
}
