//! Shallow clones through the git command-line tool

use figrefs_core::config::CloneConfig;
use figrefs_core::{CloneStatus, ClonedRepository, RepositoryId};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Characters of git's stderr echoed to the log on failure
const STDERR_PREVIEW_CHARS: usize = 300;

/// Clones repositories into per-repository directories under a work directory
#[derive(Debug, Clone)]
pub struct RepoCloner {
    workdir: PathBuf,
    base_url: String,
    git_binary: String,
}

impl RepoCloner {
    /// Create a cloner rooted at `workdir`
    pub fn new(
        workdir: impl Into<PathBuf>,
        base_url: impl Into<String>,
        git_binary: impl Into<String>,
    ) -> Self {
        Self {
            workdir: workdir.into(),
            base_url: base_url.into(),
            git_binary: git_binary.into(),
        }
    }

    /// Create a cloner from configuration, with an explicit work directory
    pub fn from_config(config: &CloneConfig, workdir: impl Into<PathBuf>) -> Self {
        Self::new(workdir, config.base_url.clone(), config.git_binary.clone())
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// `{base_url}/{owner/name}.git`
    pub fn clone_url(&self, repo: &RepositoryId) -> String {
        format!("{}/{}.git", self.base_url.trim_end_matches('/'), repo.as_str())
    }

    /// Local directory a repository is cloned into
    pub fn target_dir(&self, repo: &RepositoryId) -> PathBuf {
        self.workdir.join(repo.dir_name())
    }

    /// Acquire one repository
    ///
    /// An existing target directory is reported as [`CloneStatus::Cached`]
    /// without running git; its contents are not checked.
    pub async fn clone_repository(&self, repo: RepositoryId) -> ClonedRepository {
        let target = self.target_dir(&repo);

        if target.exists() {
            info!("[Clone] Skipping (already exists): {repo}");
            return ClonedRepository {
                repo,
                path: target,
                status: CloneStatus::Cached,
            };
        }

        if let Err(e) = tokio::fs::create_dir_all(&self.workdir).await {
            warn!(
                "  ✗ Clone failed for {repo}: cannot create {}: {e}",
                self.workdir.display()
            );
            return ClonedRepository {
                repo,
                path: target,
                status: CloneStatus::Failed,
            };
        }

        let url = self.clone_url(&repo);
        info!("[Clone] Cloning {repo} …");
        debug!(%url, target = %target.display(), "Running git clone");

        let output = Command::new(&self.git_binary)
            .args(["clone", "--depth=1", "--no-tags", "--single-branch"])
            .arg(&url)
            .arg(&target)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let status = match output {
            Ok(output) if output.status.success() => {
                info!("  ✓ Cloned {repo}");
                CloneStatus::Cloned
            }
            Ok(output) => {
                let stderr: String = String::from_utf8_lossy(&output.stderr)
                    .chars()
                    .take(STDERR_PREVIEW_CHARS)
                    .collect();
                warn!("  ✗ Clone failed for {repo}: {}", stderr.trim_end());
                CloneStatus::Failed
            }
            Err(e) => {
                warn!(
                    "  ✗ Clone failed for {repo}: could not run {}: {e}",
                    self.git_binary
                );
                CloneStatus::Failed
            }
        };

        ClonedRepository {
            repo,
            path: target,
            status,
        }
    }

    /// Acquire every repository through a pool of `max_workers` concurrent clones
    ///
    /// Results come back in completion order, failures included.
    pub async fn clone_all(
        &self,
        repos: Vec<RepositoryId>,
        max_workers: usize,
    ) -> Vec<ClonedRepository> {
        stream::iter(repos)
            .map(|repo| self.clone_repository(repo))
            .buffer_unordered(max_workers.max(1))
            .collect()
            .await
    }
}
