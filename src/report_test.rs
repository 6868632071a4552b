use super::*;
use crate::grouping;

fn author_counts(pairs: &[(&str, u64)]) -> AuthorCounts {
    pairs
        .iter()
        .map(|&(name, count)| (name.to_string(), count))
        .collect()
}

#[test]
fn ungrouped_authors_report_under_their_own_raw_name() {
    let counts = author_counts(&[("Jane Doe", 3), ("Bob", 1)]);
    let grouped = group_counts(&counts, &GroupMapping::new());
    assert_eq!(grouped.get("Jane Doe"), Some(&3));
    assert_eq!(grouped.get("Bob"), Some(&1));
}

#[test]
fn grouping_merges_aliases_via_normalized_lookup() {
    let mut mapping = GroupMapping::new();
    mapping.insert(grouping::normalize("Jane Doe"), "Core".to_string());
    mapping.insert(grouping::normalize("jdoe"), "Core".to_string());

    let counts = author_counts(&[("JANE DOE", 2), ("jdoe", 3), ("Bob", 1)]);
    let grouped = group_counts(&counts, &mapping);

    assert_eq!(grouped.get("Core"), Some(&5));
    assert_eq!(grouped.get("Bob"), Some(&1));
    assert_eq!(grouped.len(), 2);
}

#[test]
fn grouping_never_drops_or_double_counts_lines() {
    let mut mapping = GroupMapping::new();
    mapping.insert(grouping::normalize("a"), "Team".to_string());
    mapping.insert(grouping::normalize("b"), "Team".to_string());

    let counts = author_counts(&[("a", 10), ("b", 20), ("c", 30), ("d", 40)]);
    let grouped = group_counts(&counts, &mapping);

    let raw_total: u64 = counts.values().sum();
    let grouped_total: u64 = grouped.values().sum();
    assert_eq!(raw_total, grouped_total);
}

#[test]
fn rows_are_sorted_by_count_descending() {
    let grouped: GroupedCounts = author_counts(&[("small", 1), ("big", 100), ("mid", 10)]);
    let rows = sorted_rows(&grouped);
    let lines: Vec<u64> = rows.iter().map(|row| row.lines).collect();
    assert_eq!(lines, vec![100, 10, 1]);
    assert_eq!(rows[0].name, "big");
}

#[test]
fn tied_rows_are_all_present() {
    let grouped: GroupedCounts = author_counts(&[("a", 5), ("b", 5), ("c", 7)]);
    let rows = sorted_rows(&grouped);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "c");
    assert!(rows.iter().skip(1).all(|row| row.lines == 5));
}
