use std::collections::HashMap;

use colored::Colorize;

use crate::blame::AuthorCounts;
use crate::grouping::{self, GroupMapping};

const NAME_HEADER: &str = "Author/Group";
const LINES_HEADER: &str = "Lines";

/// Line counts keyed by resolved display name (group name or raw author).
pub type GroupedCounts = HashMap<String, u64>;

/// A single row of the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub lines: u64,
}

/// Fold raw author counts into grouped counts.
///
/// Authors whose normalized name appears in the mapping are merged under the
/// group name; everyone else reports under their own raw name. Counts are
/// only ever summed, so the grouped total always equals the raw total.
pub fn group_counts(counts: &AuthorCounts, mapping: &GroupMapping) -> GroupedCounts {
    let mut grouped = GroupedCounts::new();
    for (author, &count) in counts {
        let name = mapping
            .get(&grouping::normalize(author))
            .cloned()
            .unwrap_or_else(|| author.clone());
        *grouped.entry(name).or_insert(0) += count;
    }
    grouped
}

/// Order grouped counts by line count, highest first. The sort is stable and
/// has no secondary key, so ties keep their incoming order.
pub fn sorted_rows(grouped: &GroupedCounts) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = grouped
        .iter()
        .map(|(name, &lines)| ReportRow {
            name: name.clone(),
            lines,
        })
        .collect();
    rows.sort_by(|a, b| b.lines.cmp(&a.lines));
    rows
}

/// Print the report as an aligned two-column table.
pub fn print_table(rows: &[ReportRow]) {
    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or(0);
    let lines_width = rows
        .iter()
        .map(|row| row.lines.to_string().len())
        .chain([LINES_HEADER.len()])
        .max()
        .unwrap_or(0);

    println!();
    println!("{}", "Lines of code per author/group:".bold());
    // Pad first, colorize after: ANSI escapes would throw the widths off.
    println!(
        "{}  {}",
        format!("{NAME_HEADER:<name_width$}").bold(),
        format!("{LINES_HEADER:>lines_width$}").bold()
    );
    for row in rows {
        println!("{:<name_width$}  {:>lines_width$}", row.name, row.lines);
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
