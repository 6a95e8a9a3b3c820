//! Recursive discovery of files by extension

use figrefs_core::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// All files under `root` whose name ends in `.{extension}`
///
/// Symlinks to files are included and read through the link; symlinked
/// directories are not descended into. The match is case-sensitive and a
/// name that is only `.{extension}` counts. Entries that cannot be read
/// below the root are skipped; failing to read the root itself is an error.
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::invalid_input(format!(
            "Not a directory: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(Error::with_context(
                    format!("Failed to read {}", root.display()),
                    e,
                ));
            }
            Err(e) => {
                debug!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if entry.file_type().is_dir() || !has_extension(entry.file_name(), extension) {
            continue;
        }

        // Follows the link, so dangling links and links to directories drop out
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn has_extension(name: &OsStr, extension: &str) -> bool {
    name.as_encoded_bytes()
        .strip_suffix(extension.as_bytes())
        .is_some_and(|stem| stem.ends_with(b"."))
}

/// `path` relative to `root`, joined with `/` on every platform
pub fn relative_file(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_finds_nested_markdown_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/deep")).unwrap();
        fs::create_dir_all(root.join(".github")).unwrap();
        fs::write(root.join("README.md"), "x").unwrap();
        fs::write(root.join("docs/guide.md"), "x").unwrap();
        fs::write(root.join("docs/deep/notes.md"), "x").unwrap();
        fs::write(root.join(".github/CONTRIBUTING.md"), "x").unwrap();
        fs::write(root.join("docs/index.html"), "x").unwrap();
        fs::write(root.join("UPPER.MD"), "x").unwrap();
        fs::create_dir_all(root.join("folder.md")).unwrap();

        let found: Vec<String> = find_files(root, "md")
            .unwrap()
            .iter()
            .map(|p| relative_file(root, p).unwrap())
            .collect();

        assert_eq!(
            found,
            vec![
                ".github/CONTRIBUTING.md",
                "README.md",
                "docs/deep/notes.md",
                "docs/guide.md",
            ]
        );
    }

    #[test]
    fn test_extension_matches_whole_suffix() {
        assert!(has_extension(OsStr::new("README.md"), "md"));
        assert!(has_extension(OsStr::new(".md"), "md"));
        assert!(has_extension(OsStr::new("notes.backup.md"), "md"));
        assert!(!has_extension(OsStr::new("md"), "md"));
        assert!(!has_extension(OsStr::new("README.xmd"), "md"));
        assert!(!has_extension(OsStr::new("README.MD"), "md"));
        assert!(!has_extension(OsStr::new("README.md.bak"), "md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_found_but_directories_are_not_walked() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::create_dir_all(root.join("real")).unwrap();
        fs::write(root.join("README.txt"), "x").unwrap();
        fs::write(root.join("real/inner.md"), "x").unwrap();
        fs::write(root.join(".md"), "x").unwrap();
        symlink("../README.txt", root.join("docs/index.md")).unwrap();
        symlink("real", root.join("linked")).unwrap();
        symlink("real", root.join("linked.md")).unwrap();
        symlink("missing.md", root.join("dangling.md")).unwrap();

        let found: Vec<String> = find_files(root, "md")
            .unwrap()
            .iter()
            .map(|p| relative_file(root, p).unwrap())
            .collect();

        assert_eq!(found, vec![".md", "docs/index.md", "real/inner.md"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_files(&dir.path().join("gone"), "md").is_err());
    }

    #[test]
    fn test_relative_file_uses_forward_slashes() {
        let root = Path::new("/repos/o__n");
        let path = root.join("docs").join("a b").join("c.md");
        assert_eq!(relative_file(root, &path).as_deref(), Some("docs/a b/c.md"));
        assert_eq!(relative_file(root, root), None);
        assert_eq!(relative_file(root, Path::new("/elsewhere/x.md")), None);
    }
}
