//! git executable discovery

use figrefs_core::error::{Error, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// A git executable that answered a version query
#[derive(Debug, Clone)]
pub struct GitInstallation {
    /// Resolved path of the executable
    pub path: PathBuf,
    /// First line of `git --version`
    pub version: String,
}

/// Check that `binary` resolves on `PATH` and answers `--version`
pub fn ensure_git_available(binary: &str) -> Result<GitInstallation> {
    let path = which::which(binary).map_err(|e| Error::git_unavailable(binary, e.to_string()))?;

    let output = Command::new(&path)
        .arg("--version")
        .output()
        .map_err(|e| Error::git_unavailable(binary, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_unavailable(
            binary,
            format!("`--version` exited with {}: {}", output.status, stderr.trim()),
        ));
    }

    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    debug!(path = %path.display(), %version, "git available");
    Ok(GitInstallation { path, version })
}
