use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a path was rejected as an analysis target.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("path '{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("path '{}' is not a Git repository (no .git directory)", .0.display())]
    NotARepository(PathBuf),
}

/// Check that `path` is a directory containing a `.git` metadata directory.
///
/// Read-only; returns the path back so callers can keep using it as the
/// repository root.
pub fn validate(path: &Path) -> Result<PathBuf, RepoError> {
    if !path.is_dir() {
        return Err(RepoError::NotADirectory(path.to_path_buf()));
    }
    if !path.join(".git").is_dir() {
        return Err(RepoError::NotARepository(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "repo_test.rs"]
mod tests;
