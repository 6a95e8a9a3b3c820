//! Core types for figpack-refs
//!
//! This crate provides the foundational pieces shared by every pipeline stage:
//!
//! - **Records**: repository identifiers, clone outcomes and URL match records
//! - **Configuration**: layered configuration loading and validation
//! - **Error handling**: unified error types
//!

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod config;
pub mod error;
pub mod records;

// Re-export main types for convenience
pub use config::{CloneConfig, Config, OutputConfig, ScanConfig, SearchConfig};
pub use error::{Error, Result, ResultExt};
pub use records::{dedupe_records, CloneStatus, ClonedRepository, MatchRecord, RepositoryId};
