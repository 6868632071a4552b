use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::git_commands;

/// Line counts keyed by the raw author string as it appears in blame output.
pub type AuthorCounts = HashMap<String, u64>;

/// How often a "processing file i/N" status line is emitted.
const PROGRESS_EVERY: usize = 100;

/// Tally attributed lines for every tracked file in the repository.
///
/// Runs `git blame --line-porcelain` once per tracked file, sequentially, in
/// listing order. Files that cannot be blamed (deleted, binary, unreadable)
/// are skipped; only the initial `git ls-files` invocation is fatal.
pub fn aggregate(repo_root: &Path) -> Result<AuthorCounts> {
    let files = git_commands::ls_files(repo_root)?;
    let total = files.len();
    println!("Found {total} files to analyze.");

    let bar = ProgressBar::new(total as u64);
    bar.set_style(progress_style());

    let mut counts = AuthorCounts::new();
    for (index, file) in files.iter().enumerate() {
        if (index + 1) % PROGRESS_EVERY == 0 || index + 1 == total {
            bar.println(format!("Processing file {}/{}: {}", index + 1, total, file));
        }
        match git_commands::blame_porcelain(repo_root, file) {
            Ok(output) => tally_porcelain(&output, &mut counts),
            Err(err) => debug!(file = %file, error = %err, "skipping unblameable file"),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    println!("Processing complete.");

    Ok(counts)
}

/// Count `author ` header lines in porcelain blame output.
///
/// Porcelain output interleaves attribution headers with tab-prefixed source
/// content. Each `author ` header corresponds to exactly one attributed
/// source line, so incrementing per header counts the lines currently
/// attributed to that author. All other headers (`author-mail`,
/// `committer`, `summary`, hash lines, ...) carry no line attribution.
pub fn tally_porcelain(output: &str, counts: &mut AuthorCounts) {
    for line in output.lines() {
        if line.starts_with('\t') {
            continue;
        }
        if let Some(author) = line.strip_prefix("author ") {
            *counts.entry(author.trim().to_string()).or_insert(0) += 1;
        }
    }
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .expect("valid template")
        .progress_chars("█▓▒░  ")
}

#[cfg(test)]
#[path = "blame_test.rs"]
mod tests;
