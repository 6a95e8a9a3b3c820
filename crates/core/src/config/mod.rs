//! Configuration module for figpack-refs
//!
//! Configuration is layered: built-in defaults, an optional TOML file, then
//! `FIGREFS_`-prefixed environment variables. Command-line flags are applied
//! on top by the binary.

mod defaults;
mod loading;


use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::MAX_PER_PAGE;

use defaults::*;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Code search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Repository acquisition configuration
    #[serde(default)]
    pub clone: CloneConfig,

    /// Markdown scan configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for the code search stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Code search endpoint URL
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,

    /// Fixed query string sent as `q`
    #[serde(default = "default_search_query")]
    pub query: String,

    /// `User-Agent` header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `Accept` header value
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Maximum number of pages to request
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Items per page, clamped to [`MAX_PER_PAGE`]
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Name of the environment variable holding the API token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

/// Configuration for the clone stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneConfig {
    /// Base URL clone URLs are built from: `{base_url}/{owner/name}.git`
    #[serde(default = "default_clone_base_url")]
    pub base_url: String,

    /// Directory repositories are cloned into
    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,

    /// Size of the clone worker pool
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// git executable name or path
    #[serde(default = "default_git_binary")]
    pub git_binary: String,
}

/// Configuration for the scan stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Literal every extracted URL starts with
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Literal every extracted URL ends with
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// File extension (without the dot) of files to scan
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Size of the scan worker pool
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
}

/// Configuration for the JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output JSON file path
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            query: default_search_query(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            max_pages: default_max_pages(),
            per_page: default_per_page(),
            token_env: default_token_env(),
        }
    }
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            base_url: default_clone_base_url(),
            workdir: default_workdir(),
            max_workers: default_max_workers(),
            git_binary: default_git_binary(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            suffix: default_suffix(),
            extension: default_extension(),
            max_workers: default_max_workers(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl SearchConfig {
    /// `per_page` clamped to the API limit
    pub fn effective_per_page(&self) -> usize {
        if self.per_page > MAX_PER_PAGE {
            tracing::warn!(
                "per_page {} exceeds the API limit, using {MAX_PER_PAGE}",
                self.per_page
            );
        }
        self.per_page.min(MAX_PER_PAGE)
    }

    /// Read the API token from the configured environment variable
    ///
    /// Unset and empty variables both yield `None`.
    pub fn token_from_env(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.is_empty())
    }
}

impl Config {
    /// Set both worker pool sizes at once
    pub fn set_max_workers(&mut self, workers: usize) {
        self.clone.max_workers = workers;
        self.scan.max_workers = workers;
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.search.endpoint.trim().is_empty() {
            return Err(Error::config("Search endpoint must not be empty"));
        }

        if self.search.per_page == 0 {
            return Err(Error::config(format!(
                "Invalid per_page {}. Must be between 1 and {MAX_PER_PAGE}",
                self.search.per_page
            )));
        }

        if self.clone.base_url.trim().is_empty() {
            return Err(Error::config("Clone base URL must not be empty"));
        }

        if self.clone.max_workers == 0 {
            return Err(Error::config(
                "Invalid clone max_workers: must be greater than 0",
            ));
        }

        if self.scan.max_workers == 0 {
            return Err(Error::config(
                "Invalid scan max_workers: must be greater than 0",
            ));
        }

        if self.scan.prefix.is_empty() || self.scan.suffix.is_empty() {
            return Err(Error::config("Scan prefix and suffix must not be empty"));
        }

        if self.scan.extension.is_empty() {
            return Err(Error::config("Scan extension must not be empty"));
        }

        Ok(())
    }
}
