/// Shared test utilities for building fixture repositories.
///
/// Commits are created through git2 so tests do not depend on user-level
/// git configuration; the code under test still talks to the real git CLI.
use git2::{Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A disposable on-disk repository for aggregation tests.
pub struct TestRepo {
    pub repo: Repository,
    _dir: TempDir,
}

impl TestRepo {
    /// Create a repository with no commits.
    pub fn new_empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        TestRepo { repo, _dir: dir }
    }

    /// The repository's working directory.
    pub fn path(&self) -> &Path {
        self.repo.workdir().unwrap()
    }

    /// Write `content` to `filename` and commit it as `author`.
    ///
    /// The working tree is left matching HEAD so blame attributes every
    /// line to a commit rather than to uncommitted changes.
    pub fn commit_file(&self, filename: &str, content: &str, author: &str) -> git2::Oid {
        let path = self.path().join(filename);
        fs::write(&path, content).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(filename)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let email = format!("{}@example.com", author.to_lowercase().replace(' ', "."));
        let sig = Signature::now(author, &email).unwrap();

        match self.repo.head() {
            Ok(head) => {
                let parent = self.repo.find_commit(head.target().unwrap()).unwrap();
                self.repo
                    .commit(Some("HEAD"), &sig, &sig, "commit", &tree, &[&parent])
                    .unwrap()
            }
            Err(_) => self
                .repo
                .commit(Some("HEAD"), &sig, &sig, "commit", &tree, &[])
                .unwrap(),
        }
    }
}
