use std::fmt;
use std::path::PathBuf;

/// How deep a search descends below its root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Immediate children of the root only
    TopDirectoryOnly,
    /// The whole subtree
    AllDirectories,
}

/// Which directory entries a search considers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    fn singular(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            EntryKind::File => "files",
            EntryKind::Directory => "directories",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FindError {
    /// The root could not be enumerated (missing, not a directory, permissions)
    #[error("{0}")]
    Io(#[from] walkdir::Error),

    #[error("invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No {} found in {} for {}.", no_match_noun(.kind), .root.display(), .pattern)]
    NoMatch {
        root: PathBuf,
        pattern: String,
        kind: EntryKind,
    },

    #[error("Multiple {} found in {} for {}.", .kind.plural(), .root.display(), .pattern)]
    MultipleMatches {
        root: PathBuf,
        pattern: String,
        kind: EntryKind,
        matches: Vec<PathBuf>,
    },
}

// "No files found" but "No directory found"
fn no_match_noun(kind: &EntryKind) -> &'static str {
    match kind {
        EntryKind::File => kind.plural(),
        EntryKind::Directory => kind.singular(),
    }
}
