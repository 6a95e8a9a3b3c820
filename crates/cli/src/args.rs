//! Command-line arguments

use clap::Parser;
use figrefs_core::config::Config;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "figpack-refs")]
#[command(about = "Find figpack figure URLs referenced from Markdown files on GitHub")]
#[command(version)]
pub struct Cli {
    /// Output JSON path [default: figpack-url-refs.json]
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Directory where repositories are cloned [default: ./_repos]
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Maximum number of search result pages [default: 10]
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// Results per search page, capped at 100 [default: 100]
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,

    /// Concurrent workers for both cloning and scanning [default: 8]
    #[arg(long, value_name = "N")]
    pub max_workers: Option<usize>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply explicitly given flags on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(out) = &self.out {
            config.output.path = out.clone();
        }
        if let Some(workdir) = &self.workdir {
            config.clone.workdir = workdir.clone();
        }
        if let Some(max_pages) = self.max_pages {
            config.search.max_pages = max_pages;
        }
        if let Some(per_page) = self.per_page {
            config.search.per_page = per_page;
        }
        if let Some(workers) = self.max_workers {
            config.set_max_workers(workers);
        }
    }
}
