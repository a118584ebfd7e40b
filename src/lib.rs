use std::path::Path;
use log::info;

pub mod finder;
pub mod report;
pub mod types;
pub mod utils;

pub use finder::{EntryKind, FindError, SearchScope};
pub use report::ReportError;
pub use types::{BuildOs, BuildReport, PathEntry};

/// Project whose content pak is reported when none is given
pub const DEFAULT_PROJECT_NAME: &str = "Rush";

/// Configuration for one size report
#[derive(Debug, Clone)]
pub struct ReportConfig<'a> {
    /// Directory produced by the build pipeline for one platform
    pub build_root: &'a Path,
    /// Name matched against the project's pak directory
    pub project_name: &'a str,
}

/// Main entry point: classify the build and measure its artifacts
pub fn collect_build_report(config: ReportConfig<'_>) -> Result<BuildReport, ReportError> {
    info!("Collecting build sizes:");
    info!("  Build root: {}", config.build_root.display());
    info!("  Project: {}", config.project_name);

    BuildReport::build(config.build_root, config.project_name)
}
