//! Library interface for the figpack-refs CLI
//!
//! The binary in main.rs only parses arguments and sets up logging; the
//! pipeline itself lives here so integration tests can drive it.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod args;
pub mod output;
pub mod pipeline;

pub use args::Cli;
pub use output::write_records;
pub use pipeline::{run_pipeline, RunSummary};

// Re-export commonly needed types for tests
pub use anyhow::Result;
pub use figrefs_core::config::Config;
