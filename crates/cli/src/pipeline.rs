//! The five-stage run: search, collect, clone, scan, write

use crate::output::write_records;
use anyhow::{Context, Result};
use figrefs_clone::{ensure_git_available, RepoCloner};
use figrefs_core::config::Config;
use figrefs_core::{dedupe_records, MatchRecord};
use figrefs_scanner::MarkdownScanner;
use figrefs_search::{collect_unique_repos, SearchClient};
use std::path::PathBuf;
use tracing::info;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct repositories returned by the search
    pub repositories_found: usize,
    /// Repositories cloned now or reused from the workdir
    pub repositories_cloned: usize,
    /// Records written after deduplication
    pub records_written: usize,
    /// Absolute path of the output file
    pub output_path: PathBuf,
}

/// Run the whole pipeline with `config`
///
/// `token` is sent as a bearer token to the search endpoint. Missing git,
/// invalid configuration, and failure to write the output are errors;
/// everything else is logged and the run carries on with what it has.
pub async fn run_pipeline(config: &Config, token: Option<String>) -> Result<RunSummary> {
    config.validate().context("Invalid configuration")?;

    let git = ensure_git_available(&config.clone.git_binary)?;
    info!("Using {} ({})", git.version, git.path.display());

    let workdir = &config.clone.workdir;
    std::fs::create_dir_all(workdir)
        .with_context(|| format!("Failed to create workdir {}", workdir.display()))?;
    let workdir = std::fs::canonicalize(workdir)
        .with_context(|| format!("Failed to resolve workdir {}", workdir.display()))?;
    let output_path = &config.output.path;

    info!("=== Step 1: Searching GitHub Code Search ===");
    let client = SearchClient::new(&config.search, token)?;
    let hits = client
        .search_code(config.search.max_pages, config.search.effective_per_page())
        .await;

    info!("=== Step 2: Collecting unique repositories ===");
    let repos = collect_unique_repos(&hits);
    let repositories_found = repos.len();
    if repos.is_empty() {
        info!("No repositories found. Exiting.");
        return finish(output_path, Vec::new(), repositories_found, 0);
    }

    info!("=== Step 3: Cloning repositories (shallow) ===");
    let cloner = RepoCloner::from_config(&config.clone, workdir);
    let cloned = cloner.clone_all(repos, config.clone.max_workers).await;
    let repositories_cloned = cloned.iter().filter(|c| c.is_success()).count();
    info!("Cloned OK: {repositories_cloned} / {repositories_found}");
    if repositories_cloned == 0 {
        info!("No repositories were cloned successfully. Exiting.");
        return finish(output_path, Vec::new(), repositories_found, 0);
    }

    info!("=== Step 4: Scanning Markdown files for figpack URLs ===");
    let scanner = MarkdownScanner::from_config(&config.scan);
    let records = scanner.scan_all(cloned, config.scan.max_workers).await;
    info!("Found {} raw record(s)", records.len());

    info!("=== Step 5: Writing JSON output ===");
    finish(
        output_path,
        dedupe_records(records),
        repositories_found,
        repositories_cloned,
    )
}

fn finish(
    output_path: &std::path::Path,
    records: Vec<MatchRecord>,
    repositories_found: usize,
    repositories_cloned: usize,
) -> Result<RunSummary> {
    let written = write_records(output_path, &records)?;
    info!(
        "Done. Wrote {} record(s) to {}",
        records.len(),
        written.display()
    );

    Ok(RunSummary {
        repositories_found,
        repositories_cloned,
        records_written: records.len(),
        output_path: written,
    })
}
