//! Repository acquisition stage
//!
//! Shallow, single-branch clones of each discovered repository into a
//! per-repository directory under the work directory. Directories that already
//! exist are reused as-is, which makes repeated runs skip the network.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod cloner;
mod git;

pub use cloner::RepoCloner;
pub use git::{ensure_git_available, GitInstallation};

// Re-export error types from core
pub use figrefs_core::error::{Error, Result};
