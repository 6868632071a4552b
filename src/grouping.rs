use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

use crate::msg;

/// Filename looked up next to the executable when no --grouping-file is given.
const DEFAULT_GROUPING_FILE: &str = "grouping.txt";

/// Mapping from normalized author alias to as-written group name.
pub type GroupMapping = HashMap<String, String>;

/// Fold a name into its canonical comparison form: trimmed, lowercased,
/// NFKC-normalized.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase().nfkc().collect()
}

/// Default grouping file location: `grouping.txt` next to the executable.
pub fn default_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_GROUPING_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GROUPING_FILE))
}

/// Load the alias→group mapping from `path`.
///
/// A missing or unreadable file is non-fatal: the run continues without
/// grouping, every author reporting under their own name. Blank lines and
/// `#` comments are skipped, as are lines without a `:`. Aliases are
/// registered under their normalized form; duplicates are last-write-wins.
pub fn load(path: &Path) -> GroupMapping {
    let mut mapping = GroupMapping::new();

    if !path.is_file() {
        msg::warning(&format!("grouping file not found: {}", path.display()));
        return mapping;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            msg::error(&format!(
                "failed to read grouping file {}: {}",
                path.display(),
                e
            ));
            return mapping;
        }
    };

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((group, aliases)) = line.split_once(':') else {
            continue;
        };
        let group = group.trim();
        for alias in aliases.split(',') {
            let alias = alias.trim();
            if alias.is_empty() {
                continue;
            }
            mapping.insert(normalize(alias), group.to_string());
        }
    }

    mapping
}

#[cfg(test)]
#[path = "grouping_test.rs"]
mod tests;
