//! Default values and functions for configuration

use std::path::PathBuf;

// Default constants
pub(crate) const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.github.com/search/code";
pub(crate) const DEFAULT_SEARCH_QUERY: &str =
    r#"in:file extension:md "https://figures.figpack.org/""#;
pub(crate) const DEFAULT_USER_AGENT: &str = "figpack-search-script";
pub(crate) const DEFAULT_ACCEPT: &str = "application/vnd.github+json";
pub(crate) const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub(crate) const DEFAULT_CLONE_BASE_URL: &str = "https://github.com";
pub(crate) const DEFAULT_WORKDIR: &str = "./_repos";
pub(crate) const DEFAULT_GIT_BINARY: &str = "git";
pub(crate) const DEFAULT_PREFIX: &str = "https://figures.figpack.org/";
pub(crate) const DEFAULT_SUFFIX: &str = "/index.html";
pub(crate) const DEFAULT_EXTENSION: &str = "md";
pub(crate) const DEFAULT_OUTPUT_PATH: &str = "figpack-url-refs.json";

/// Upper bound the code search API places on `per_page`
pub const MAX_PER_PAGE: usize = 100;

pub(crate) fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

pub(crate) fn default_search_query() -> String {
    DEFAULT_SEARCH_QUERY.to_string()
}

pub(crate) fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

pub(crate) fn default_accept() -> String {
    DEFAULT_ACCEPT.to_string()
}

pub(crate) fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

pub(crate) fn default_max_pages() -> usize {
    10
}

pub(crate) fn default_per_page() -> usize {
    MAX_PER_PAGE
}

pub(crate) fn default_clone_base_url() -> String {
    DEFAULT_CLONE_BASE_URL.to_string()
}

pub(crate) fn default_workdir() -> PathBuf {
    PathBuf::from(DEFAULT_WORKDIR)
}

pub(crate) fn default_git_binary() -> String {
    DEFAULT_GIT_BINARY.to_string()
}

pub(crate) fn default_max_workers() -> usize {
    8
}

pub(crate) fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

pub(crate) fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

pub(crate) fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

pub(crate) fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}
