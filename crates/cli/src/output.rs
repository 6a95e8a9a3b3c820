//! Writing the final record list

use figrefs_core::error::{Error, Result, ResultExt};
use figrefs_core::MatchRecord;
use std::path::{Path, PathBuf};

/// Write `records` as a pretty-printed JSON array and return the absolute
/// path of the written file
///
/// Missing parent directories are created. An existing file is replaced.
pub fn write_records(path: &Path, records: &[MatchRecord]) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(records)
        .map_err(|e| Error::output(format!("Failed to serialize records: {e}")))?;
    std::fs::write(path, json).map_err(|e| {
        Error::output(format!("Failed to write output to {}: {e}", path.display()))
    })?;

    Ok(std::path::absolute(path)?)
}
