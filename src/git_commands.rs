use std::path::Path;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result, bail};
use thiserror::Error;

/// Check that a usable git binary is on PATH.
/// Returns an error with an actionable message if it is not.
pub fn check_git_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .context("could not run 'git --version'; is Git installed and on PATH?")?;

    if !output.status.success() {
        bail!("'git --version' exited with {}", output.status);
    }

    Ok(())
}

/// List all tracked files in the repository, as relative paths in listing
/// order.
///
/// A failure here is fatal for the whole run: without the file list there is
/// nothing to analyze.
pub fn ls_files(repo_root: &Path) -> Result<Vec<String>> {
    let output = Command::new("git")
        .current_dir(repo_root)
        .arg("ls-files")
        .output()
        .context("failed to run 'git ls-files'")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git ls-files failed:\n{}", stderr);
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect())
}

/// Why blaming a single file produced no usable output.
///
/// These are expected in normal operation (deleted, binary, or unreadable
/// files); the caller decides the skip policy.
#[derive(Debug, Error)]
pub enum BlameError {
    /// The subprocess could not be spawned or its output not collected.
    #[error("failed to invoke git blame: {0}")]
    Spawn(#[from] std::io::Error),
    /// git exited non-zero.
    #[error("git blame exited with {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },
    /// git succeeded but attributed nothing (empty file).
    #[error("git blame produced no output")]
    EmptyOutput,
}

/// Blame a single tracked file in porcelain mode and return the raw output.
///
/// Uses `--line-porcelain` so the commit header block (including `author `)
/// is repeated for every attributed line; plain `--porcelain` emits it only
/// the first time a commit appears, which would under-count. Output bytes
/// are decoded lossily so odd encodings never abort a run.
pub fn blame_porcelain(repo_root: &Path, file: &str) -> Result<String, BlameError> {
    let output = Command::new("git")
        .current_dir(repo_root)
        .args(["blame", "--line-porcelain", "--", file])
        .output()?;

    if !output.status.success() {
        return Err(BlameError::Exit {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if stdout.trim().is_empty() {
        return Err(BlameError::EmptyOutput);
    }

    Ok(stdout)
}

#[cfg(test)]
#[path = "git_commands_test.rs"]
mod tests;
