//! Code search stage
//!
//! Pages through the hosted code search API for files mentioning the target
//! URL prefix, then reduces the hits to a sorted list of unique repositories.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod client;
mod rate_limit;
mod repos;
mod types;

pub use client::SearchClient;
pub use rate_limit::{is_rate_limit_status, rate_limit_wait};
pub use repos::collect_unique_repos;
pub use types::{HitRepository, SearchHit, SearchResponse};

// Re-export error types from core
pub use figrefs_core::error::{Error, Result};
