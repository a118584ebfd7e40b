use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::finder::{self, FindError, SearchScope};
use crate::types::{BuildOs, BuildReport, PathEntry};
use crate::utils;

pub const APK_PATTERN: &str = "*.apk";
pub const IPA_PATTERN: &str = "*.ipa";
pub const ARM64_PATTERN: &str = "*.arm64";
pub const UNKNOWN_PATTERN: &str = "*.unknown";
pub const NATIVE_LIBRARY: &str = "libUE4.so";
pub const PAK_DIRECTORY: &str = "pak";
pub const ENGINE_PAK_PATTERN: &str = "*Engine*";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Find(#[from] FindError),

    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("No package found at {}.", .root.display())]
    NoPackage { root: PathBuf },
}

impl BuildReport {
    /// Locate the packaged artifacts under `build_root` and measure them
    ///
    /// An APK anywhere in the tree makes the build Android, which then also
    /// requires exactly one native library. Otherwise the build is iOS and
    /// the IPA and binary variants are each optional, but an IPA must exist.
    pub fn build(build_root: &Path, project_name: &str) -> Result<Self, ReportError> {
        let mut report = Self::empty(build_root);

        if let Some(apk) = finder::find_file_zero_or_one(build_root, APK_PATTERN, SearchScope::AllDirectories)? {
            report.build_os = BuildOs::Android;
            report.apk = file_entry(apk)?;

            let lib = finder::find_file_exactly_one(build_root, NATIVE_LIBRARY, SearchScope::AllDirectories)?;
            report.lib_ue4 = file_entry(lib)?;
        } else {
            report.build_os = BuildOs::Ios;
            report.ipa = optional_file_entry(build_root, IPA_PATTERN)?;
            report.arm64 = optional_file_entry(build_root, ARM64_PATTERN)?;
            report.unknown = optional_file_entry(build_root, UNKNOWN_PATTERN)?;
        }

        if !report.apk.is_present() && !report.ipa.is_present() {
            return Err(ReportError::NoPackage {
                root: build_root.to_path_buf(),
            });
        }
        info!("Classified {} as {:?}", build_root.display(), report.build_os);

        let pak_dir = finder::find_directory_exactly_one(build_root, PAK_DIRECTORY, SearchScope::TopDirectoryOnly)?;
        report.pak_engine = dir_entry(&pak_dir, ENGINE_PAK_PATTERN)?;
        report.pak_project = dir_entry(&pak_dir, &project_pattern(project_name))?;

        Ok(report)
    }
}

/// Pattern selecting the project's content directory inside `pak`
pub fn project_pattern(project_name: &str) -> String {
    format!("*{}*", glob::Pattern::escape(project_name))
}

fn file_entry(path: PathBuf) -> Result<PathEntry, ReportError> {
    let size = utils::file_size(&path)?;
    debug!("{} is {} bytes", path.display(), size);
    Ok(PathEntry::new(path, size))
}

fn optional_file_entry(root: &Path, pattern: &str) -> Result<PathEntry, ReportError> {
    match finder::find_file_zero_or_one(root, pattern, SearchScope::AllDirectories)? {
        Some(path) => file_entry(path),
        None => {
            debug!("No {} under {}", pattern, root.display());
            Ok(PathEntry::absent())
        }
    }
}

fn dir_entry(pak_dir: &Path, pattern: &str) -> Result<PathEntry, ReportError> {
    let dir = finder::find_directory_exactly_one(pak_dir, pattern, SearchScope::TopDirectoryOnly)?;
    let size = utils::dir_size(&dir)?;
    Ok(PathEntry::new(dir, size))
}
