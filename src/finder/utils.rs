use std::path::{Path, PathBuf};
use glob::Pattern;
use log::{debug, trace};
use walkdir::WalkDir;

use super::types::{EntryKind, FindError, SearchScope};
use crate::utils;

/// Enumerate entries of `kind` below `root` whose file name matches `pattern`
///
/// The root itself is never a candidate. Results are ordered by file name
/// within each directory.
pub fn find_entries(
    root: &Path,
    pattern: &str,
    scope: SearchScope,
    kind: EntryKind,
) -> Result<Vec<PathBuf>, FindError> {
    debug!("Searching {} for {} '{}' ({:?})", root.display(), kind, pattern, scope);

    let matcher = Pattern::new(pattern).map_err(|source| FindError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if scope == SearchScope::TopDirectoryOnly {
        walker = walker.max_depth(1);
    }

    let mut matches = Vec::new();
    for entry in walker {
        let entry = entry?;
        let wanted = match kind {
            EntryKind::File => entry.file_type().is_file(),
            EntryKind::Directory => entry.file_type().is_dir(),
        };
        if wanted && utils::matches_pattern(entry.path(), &matcher) {
            trace!("  match: {}", entry.path().display());
            matches.push(entry.into_path());
        }
    }

    debug!("Found {} matches for '{}' in {}", matches.len(), pattern, root.display());
    Ok(matches)
}

/// Find at most one file; more than one match is an error
pub fn find_file_zero_or_one(
    root: &Path,
    pattern: &str,
    scope: SearchScope,
) -> Result<Option<PathBuf>, FindError> {
    let mut matches = find_entries(root, pattern, scope, EntryKind::File)?;
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => Err(multiple(root, pattern, EntryKind::File, matches)),
    }
}

/// Find exactly one file
pub fn find_file_exactly_one(
    root: &Path,
    pattern: &str,
    scope: SearchScope,
) -> Result<PathBuf, FindError> {
    exactly_one(root, pattern, scope, EntryKind::File)
}

/// Find exactly one directory
pub fn find_directory_exactly_one(
    root: &Path,
    pattern: &str,
    scope: SearchScope,
) -> Result<PathBuf, FindError> {
    exactly_one(root, pattern, scope, EntryKind::Directory)
}

fn exactly_one(
    root: &Path,
    pattern: &str,
    scope: SearchScope,
    kind: EntryKind,
) -> Result<PathBuf, FindError> {
    let mut matches = find_entries(root, pattern, scope, kind)?;
    match matches.len() {
        0 => Err(FindError::NoMatch {
            root: root.to_path_buf(),
            pattern: pattern.to_string(),
            kind,
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(multiple(root, pattern, kind, matches)),
    }
}

fn multiple(root: &Path, pattern: &str, kind: EntryKind, matches: Vec<PathBuf>) -> FindError {
    FindError::MultipleMatches {
        root: root.to_path_buf(),
        pattern: pattern.to_string(),
        kind,
        matches,
    }
}
