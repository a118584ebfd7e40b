use std::path::{Path, PathBuf};
use serde::Serialize;

/// Platform a build root was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BuildOs {
    #[default]
    None,
    Android,
    #[serde(rename = "iOS")]
    Ios,
}

/// A located artifact and its size in bytes.
///
/// Absent artifacts have no path and a size of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub path: Option<PathBuf>,
    pub size: u64,
}

impl PathEntry {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path: Some(path),
            size,
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.path.is_some()
    }

    /// Path as displayed in the text report, empty when absent
    pub fn display_path(&self) -> String {
        self.path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

/// Sizes of the artifacts found under one build root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub build_os: BuildOs,
    pub build_root: PathEntry,
    pub apk: PathEntry,
    pub ipa: PathEntry,
    pub lib_ue4: PathEntry,
    pub arm64: PathEntry,
    pub unknown: PathEntry,
    pub pak_engine: PathEntry,
    pub pak_project: PathEntry,
}

impl BuildReport {
    pub(crate) fn empty(build_root: &Path) -> Self {
        Self {
            build_os: BuildOs::None,
            build_root: PathEntry::new(build_root.to_path_buf(), 0),
            apk: PathEntry::absent(),
            ipa: PathEntry::absent(),
            lib_ue4: PathEntry::absent(),
            arm64: PathEntry::absent(),
            unknown: PathEntry::absent(),
            pak_engine: PathEntry::absent(),
            pak_project: PathEntry::absent(),
        }
    }
}
