//! Integration tests for repository acquisition

use figrefs_clone::{ensure_git_available, RepoCloner};
use figrefs_core::{CloneStatus, RepositoryId};
use git2::{Repository, Signature};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Stand-in for git that must never be executed
const MISSING_GIT: &str = "/nonexistent/figrefs/git";

fn init_fixture_repo(path: &Path, readme: &str) {
    fs::create_dir_all(path).unwrap();
    let repo = Repository::init(path).unwrap();
    fs::write(path.join("README.md"), readme).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("README.md")).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("Fixture", "fixture@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap();
}

fn dir_names(path: &Path) -> BTreeSet<String> {
    fs::read_dir(path)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_existing_directory_is_reused_without_git() {
    let workdir = TempDir::new().unwrap();
    fs::create_dir_all(workdir.path().join("o__n")).unwrap();

    let cloner = RepoCloner::new(workdir.path(), "https://github.com", MISSING_GIT);

    for _ in 0..2 {
        let result = cloner.clone_repository(RepositoryId::from("o/n")).await;
        assert_eq!(result.status, CloneStatus::Cached);
        assert_eq!(result.path, workdir.path().join("o__n"));
        assert_eq!(dir_names(workdir.path()), BTreeSet::from(["o__n".to_string()]));
    }
}

#[tokio::test]
async fn test_failed_clone_is_reported_not_raised() {
    let workdir = TempDir::new().unwrap();
    let cloner = RepoCloner::new(workdir.path().join("nested"), "https://github.com", MISSING_GIT);

    let result = cloner.clone_repository(RepositoryId::from("o/n")).await;

    assert_eq!(result.status, CloneStatus::Failed);
    assert!(!result.is_success());
    assert!(!result.path.exists());
}

#[tokio::test]
async fn test_clone_all_returns_every_repository() {
    let workdir = TempDir::new().unwrap();
    fs::create_dir_all(workdir.path().join("a__cached")).unwrap();

    let cloner = RepoCloner::new(workdir.path(), "https://github.com", MISSING_GIT);
    let repos = vec![
        RepositoryId::from("a/cached"),
        RepositoryId::from("b/missing"),
        RepositoryId::from("c/missing"),
    ];

    let results = cloner.clone_all(repos, 2).await;

    assert_eq!(results.len(), 3);
    let succeeded: Vec<_> = results
        .iter()
        .filter(|r| r.is_success())
        .map(|r| r.repo.to_string())
        .collect();
    assert_eq!(succeeded, vec!["a/cached".to_string()]);
}

#[tokio::test]
async fn test_shallow_clone_from_local_remote() {
    if ensure_git_available("git").is_err() {
        eprintln!("git not available, skipping");
        return;
    }

    let remotes = TempDir::new().unwrap();
    init_fixture_repo(
        &remotes.path().join("o").join("n.git"),
        "see https://figures.figpack.org/abc/index.html\n",
    );

    let workdir = TempDir::new().unwrap();
    let base_url = format!("file://{}", remotes.path().display());
    let cloner = RepoCloner::new(workdir.path(), base_url, "git");

    let first = cloner.clone_repository(RepositoryId::from("o/n")).await;
    assert_eq!(first.status, CloneStatus::Cloned);
    let readme = fs::read_to_string(first.path.join("README.md")).unwrap();
    assert!(readme.contains("figures.figpack.org"));

    let second = cloner.clone_repository(RepositoryId::from("o/n")).await;
    assert_eq!(second.status, CloneStatus::Cached);
    assert_eq!(dir_names(workdir.path()), BTreeSet::from(["o__n".to_string()]));
}

#[tokio::test]
async fn test_clone_of_unknown_remote_fails() {
    if ensure_git_available("git").is_err() {
        eprintln!("git not available, skipping");
        return;
    }

    let remotes = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    let base_url = format!("file://{}", remotes.path().display());
    let cloner = RepoCloner::new(workdir.path(), base_url, "git");

    let result = cloner
        .clone_repository(RepositoryId::from("nobody/nothing"))
        .await;
    assert_eq!(result.status, CloneStatus::Failed);
}
