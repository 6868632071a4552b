use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{blame, chart, grouping, repo, report};

/// Run the full analysis pipeline: validate the repository, load the alias
/// grouping, aggregate blame counts, print the table, show the charts.
pub fn run(repo_path: &Path, grouping_file: Option<&Path>) -> Result<()> {
    let repo_root = repo::validate(repo_path)?;

    let grouping_path: PathBuf = match grouping_file {
        Some(path) => path.to_path_buf(),
        None => grouping::default_path(),
    };
    println!("Looking for grouping file at: {}", grouping_path.display());
    let mapping = grouping::load(&grouping_path);
    println!("Loaded {} mappings", mapping.len());

    let counts = blame::aggregate(&repo_root)?;
    if counts.is_empty() {
        println!("No data available for statistics.");
        return Ok(());
    }

    let grouped = report::group_counts(&counts, &mapping);
    let rows = report::sorted_rows(&grouped);
    report::print_table(&rows);

    chart::show(&rows)
}

#[cfg(test)]
#[path = "tally_test.rs"]
mod tests;
