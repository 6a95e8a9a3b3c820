//! Markdown scan stage
//!
//! Walks each acquired repository for Markdown files, decodes them, and
//! extracts every URL delimited by the configured prefix and suffix.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod decode;
mod discovery;
mod extract;
mod scanner;

pub use decode::{decode_text, read_text_file};
pub use discovery::{find_files, relative_file};
pub use extract::extract_urls;
pub use scanner::MarkdownScanner;

// Re-export error types from core
pub use figrefs_core::error::{Error, Result};
